use actix_web::{web, HttpResponse};
use serde::Serialize;

use crate::services::TokenService;

/// Liveness report. Does not touch MongoDB: connectivity is checked once at
/// startup and store failures surface as 500s on the data routes.
#[derive(Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ServiceStatus {
    /// `"ok"` when the auth gate has a signing key, `"degraded"` otherwise.
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
    /// Lifetime of tokens issued by `/login`, absent without a signing key.
    pub token_ttl_seconds: Option<i64>,
    /// RFC 3339 server time.
    pub checked_at: String,
}

#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses(
        (status = 200, description = "Service is up", body = ServiceStatus)
    )
)]
pub async fn health_check(tokens: Option<web::Data<TokenService>>) -> HttpResponse {
    let token_ttl_seconds = tokens.as_ref().map(|tokens| tokens.ttl_seconds());

    HttpResponse::Ok().json(ServiceStatus {
        status: if token_ttl_seconds.is_some() { "ok" } else { "degraded" },
        service: "watchlist-service",
        version: env!("CARGO_PKG_VERSION"),
        token_ttl_seconds,
        checked_at: chrono::Utc::now().to_rfc3339(),
    })
}
