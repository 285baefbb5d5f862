use actix_web::{web, HttpResponse};

use crate::{
    database::UserStore,
    models::{LoginRequest, LoginResponse, SignupRequest, UserInfo},
    services::{auth_service, TokenService},
    utils::error::ApiError,
};

#[utoipa::path(
    post,
    path = "/signup",
    tag = "Auth",
    request_body = SignupRequest,
    responses(
        (status = 200, description = "User created", body = UserInfo),
        (status = 400, description = "Invalid json"),
        (status = 409, description = "User already exists"),
        (status = 500, description = "Database error")
    )
)]
pub async fn signup(
    users: web::Data<dyn UserStore>,
    request: web::Json<SignupRequest>,
) -> Result<HttpResponse, ApiError> {
    let request = request.into_inner();
    let email = request.email.clone();
    log::info!("📝 POST /signup - email: {}", email);

    match auth_service::signup(users.get_ref(), request).await {
        Ok(user) => {
            log::info!("✅ User created: {} ({})", email, user.id);
            Ok(HttpResponse::Ok().json(user))
        }
        Err(e) => {
            log::warn!("❌ Signup failed: {} - {}", email, e);
            Err(e)
        }
    }
}

#[utoipa::path(
    post,
    path = "/login",
    tag = "Auth",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 401, description = "Invalid credentials")
    )
)]
pub async fn login(
    users: web::Data<dyn UserStore>,
    tokens: web::Data<TokenService>,
    request: web::Json<LoginRequest>,
) -> Result<HttpResponse, ApiError> {
    let request = request.into_inner();
    let email = request.email.clone();
    log::info!("🔐 POST /login - email: {}", email);

    match auth_service::login(users.get_ref(), &tokens, request).await {
        Ok(response) => {
            log::info!("✅ Login successful: {}", email);
            Ok(HttpResponse::Ok().json(response))
        }
        Err(e) => {
            log::warn!("❌ Login failed: {} - {}", email, e);
            Err(e)
        }
    }
}
