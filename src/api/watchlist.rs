use actix_web::{web, HttpResponse};

use crate::{
    database::WatchlistStore,
    middleware::AuthenticatedUser,
    models::{
        AddWatchlistRequest, MessageResponse, UpdateWatchlistRequest, WatchlistEntryResponse,
    },
    services::watchlist_service,
    utils::error::ApiError,
};

/// POST /watchlist - Adiciona filme à watchlist do usuário
#[utoipa::path(
    post,
    path = "/watchlist",
    tag = "Watchlist",
    request_body = AddWatchlistRequest,
    responses(
        (status = 200, description = "Entry created", body = WatchlistEntryResponse),
        (status = 400, description = "Invalid json"),
        (status = 401, description = "Missing or invalid token"),
        (status = 409, description = "Movie already in the watchlist"),
        (status = 500, description = "Database error")
    ),
    security(("bearer_auth" = []))
)]
pub async fn add_entry(
    user: web::ReqData<AuthenticatedUser>,
    store: web::Data<dyn WatchlistStore>,
    request: web::Json<AddWatchlistRequest>,
) -> Result<HttpResponse, ApiError> {
    log::info!("🎬 POST /watchlist - '{}' for user {}", request.movie_name, user.user_id);

    let entry = watchlist_service::add_entry(store.get_ref(), &user, request.into_inner())
        .await
        .inspect_err(|e| log::warn!("❌ Add failed for user {}: {}", user.user_id, e))?;

    log::info!("✅ Entry added: {}", entry.id);
    Ok(HttpResponse::Ok().json(entry))
}

/// GET /watchlist - Lista somente as entradas do usuário autenticado
#[utoipa::path(
    get,
    path = "/watchlist",
    tag = "Watchlist",
    responses(
        (status = 200, description = "Entries owned by the caller", body = Vec<WatchlistEntryResponse>),
        (status = 401, description = "Missing or invalid token"),
        (status = 500, description = "Database error")
    ),
    security(("bearer_auth" = []))
)]
pub async fn list_entries(
    user: web::ReqData<AuthenticatedUser>,
    store: web::Data<dyn WatchlistStore>,
) -> Result<HttpResponse, ApiError> {
    log::info!("📋 GET /watchlist - user {}", user.user_id);

    let entries = watchlist_service::list_entries(store.get_ref(), &user).await?;

    log::info!("✅ Listed {} entries", entries.len());
    Ok(HttpResponse::Ok().json(entries))
}

/// PATCH /watchlist/{id} - Atualização parcial
#[utoipa::path(
    patch,
    path = "/watchlist/{id}",
    tag = "Watchlist",
    params(("id" = String, Path, description = "Watchlist entry id")),
    request_body = UpdateWatchlistRequest,
    responses(
        (status = 200, description = "Entry updated", body = MessageResponse),
        (status = 401, description = "Missing or invalid token"),
        (status = 404, description = "No entry with that id for this user"),
        (status = 409, description = "Another entry of this user already has that movie"),
        (status = 500, description = "Database error")
    ),
    security(("bearer_auth" = []))
)]
pub async fn update_entry(
    user: web::ReqData<AuthenticatedUser>,
    store: web::Data<dyn WatchlistStore>,
    entry_id: web::Path<String>,
    request: web::Json<UpdateWatchlistRequest>,
) -> Result<HttpResponse, ApiError> {
    log::info!("🔧 PATCH /watchlist/{} - user {}", entry_id, user.user_id);

    watchlist_service::update_entry(store.get_ref(), &user, &entry_id, request.into_inner())
        .await
        .inspect_err(|e| log::warn!("❌ Update of {} failed: {}", entry_id, e))?;

    Ok(HttpResponse::Ok().json(MessageResponse::new("Watchlist updated successfully")))
}

/// DELETE /watchlist/{id}
#[utoipa::path(
    delete,
    path = "/watchlist/{id}",
    tag = "Watchlist",
    params(("id" = String, Path, description = "Watchlist entry id")),
    responses(
        (status = 200, description = "Entry deleted", body = MessageResponse),
        (status = 401, description = "Missing or invalid token"),
        (status = 404, description = "No entry with that id for this user"),
        (status = 500, description = "Database error")
    ),
    security(("bearer_auth" = []))
)]
pub async fn delete_entry(
    user: web::ReqData<AuthenticatedUser>,
    store: web::Data<dyn WatchlistStore>,
    entry_id: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    log::info!("🗑️  DELETE /watchlist/{} - user {}", entry_id, user.user_id);

    watchlist_service::delete_entry(store.get_ref(), &user, &entry_id)
        .await
        .inspect_err(|e| log::warn!("❌ Delete of {} failed: {}", entry_id, e))?;

    log::info!("✅ Entry deleted");
    Ok(HttpResponse::Ok().json(MessageResponse::new("Watchlist deleted successfully")))
}
