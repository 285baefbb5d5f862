use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Watchlist Service API",
        version = "1.0.0",
        description = "Personal movie watchlists.\n\n**Authentication:** `/watchlist` routes require `Authorization: Bearer <token>` obtained from `/login`."
    ),
    paths(
        crate::api::health::health_check,
        crate::api::auth::signup,
        crate::api::auth::login,
        crate::api::watchlist::add_entry,
        crate::api::watchlist::list_entries,
        crate::api::watchlist::update_entry,
        crate::api::watchlist::delete_entry,
    ),
    components(
        schemas(
            crate::api::health::ServiceStatus,
            crate::models::SignupRequest,
            crate::models::LoginRequest,
            crate::models::LoginResponse,
            crate::models::UserInfo,
            crate::models::AddWatchlistRequest,
            crate::models::UpdateWatchlistRequest,
            crate::models::WatchlistEntryResponse,
            crate::models::MessageResponse,
        )
    ),
    tags(
        (name = "Health", description = "Liveness endpoint."),
        (name = "Auth", description = "Signup and login. Login returns a bearer token valid for 24 hours."),
        (name = "Watchlist", description = "Watchlist entries of the authenticated user."),
    ),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Token returned by POST /login"))
                        .build(),
                ),
            );
        }
    }
}
