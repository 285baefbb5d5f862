pub mod auth;
pub mod health;
pub mod swagger;
pub mod watchlist;


use actix_web::{web, HttpRequest, HttpResponse};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{middleware::AuthMiddleware, utils::error::ApiError};

/// Registers every route. Stores and the token service are expected as
/// app data (`web::Data<dyn UserStore>`, `web::Data<dyn WatchlistStore>`,
/// `web::Data<TokenService>`).
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .service(
            SwaggerUi::new("/swagger-ui/{_:.*}")
                .url("/api-docs/openapi.json", swagger::ApiDoc::openapi()),
        )
        .route("/health", web::get().to(health::health_check))
        .service(
            web::resource("/signup")
                .route(web::post().to(auth::signup))
                .default_service(web::to(method_not_allowed)),
        )
        .service(
            web::resource("/login")
                .route(web::post().to(auth::login))
                .default_service(web::to(method_not_allowed)),
        )
        // Requires JWT
        .service(
            web::scope("/watchlist")
                .wrap(AuthMiddleware)
                .service(
                    web::resource("")
                        .route(web::post().to(watchlist::add_entry))
                        .route(web::get().to(watchlist::list_entries))
                        .default_service(web::to(method_not_allowed)),
                )
                .service(
                    web::resource("/{id}")
                        .route(web::patch().to(watchlist::update_entry))
                        .route(web::delete().to(watchlist::delete_entry))
                        .default_service(web::to(method_not_allowed)),
                ),
        );
}

/// Malformed or mistyped JSON bodies become 400s with the parser's message.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, req: &HttpRequest| {
        log::warn!("⚠️  {} {} - invalid json: {}", req.method(), req.path(), err);
        ApiError::BadRequest(format!("Invalid json: {}", err)).into()
    })
}

async fn method_not_allowed() -> Result<HttpResponse, ApiError> {
    Err(ApiError::MethodNotAllowed)
}
