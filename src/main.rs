mod api;
mod config;
mod database;
mod middleware;
mod models;
mod services;
mod utils;

use actix_cors::Cors;
use actix_web::{
    http::header,
    middleware::{Compress, Logger},
    web, App, HttpServer,
};
use anyhow::Context;
use dotenv::dotenv;
use std::sync::Arc;

use crate::{
    config::AppConfig,
    database::{MongoDB, UserStore, WatchlistStore},
    services::TokenService,
};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = AppConfig::from_env().context("Invalid configuration")?;

    log::info!("🚀 Starting Watchlist Service...");
    log::info!("📊 Database: {}", config.database_name);

    let db = MongoDB::new(&config.mongo_uri, &config.database_name)
        .await
        .context("Failed to connect to MongoDB")?;
    log::info!("✅ MongoDB connected successfully");

    let db = Arc::new(db);
    let users: Arc<dyn UserStore> = db.clone();
    let watchlist: Arc<dyn WatchlistStore> = db;
    let users = web::Data::from(users);
    let watchlist = web::Data::from(watchlist);
    let tokens = web::Data::new(TokenService::new(&config.secret_key));

    let bind_address = config.bind_address();
    let cors_origins = config.cors_origins.clone();

    log::info!("🌐 Server starting on {}", bind_address);
    log::info!("📚 Swagger UI available at: http://{}/swagger-ui/", bind_address);

    HttpServer::new(move || {
        let cors = cors_origins
            .iter()
            .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
            .allowed_methods(vec!["GET", "POST", "PATCH", "DELETE", "OPTIONS"])
            .allowed_headers(vec![header::AUTHORIZATION, header::CONTENT_TYPE, header::ACCEPT])
            .max_age(3600);

        App::new()
            .app_data(users.clone())
            .app_data(watchlist.clone())
            .app_data(tokens.clone())
            .wrap(cors)
            .wrap(Compress::default())
            .wrap(Logger::default())
            .configure(api::configure)
    })
    .bind(&bind_address)
    .with_context(|| format!("Failed to bind {}", bind_address))?
    .run()
    .await?;

    Ok(())
}
