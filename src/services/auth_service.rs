use bcrypt::{hash, verify, DEFAULT_COST};
use mongodb::bson::oid::ObjectId;

use crate::{
    database::UserStore,
    models::{LoginRequest, LoginResponse, SignupRequest, User, UserInfo},
    services::token_service::TokenService,
    utils::{blocking::run_blocking, error::ApiError},
};

const INVALID_CREDENTIALS: &str = "Invalid credentials";

// User registration
pub async fn signup(users: &dyn UserStore, request: SignupRequest) -> Result<UserInfo, ApiError> {
    let SignupRequest {
        name,
        email,
        password,
    } = request;

    if email.trim().is_empty() || password.is_empty() {
        return Err(ApiError::BadRequest(
            "Email and password are required".to_string(),
        ));
    }

    if users.find_by_email(&email).await?.is_some() {
        return Err(ApiError::Conflict("User already exists".to_string()));
    }

    let password_hash = run_blocking(move || hash(password, DEFAULT_COST))
        .await?
        .map_err(|e| {
            log::error!("❌ Password hashing failed: {}", e);
            ApiError::Internal("Error in hashing password".to_string())
        })?;

    let user = User {
        id: ObjectId::new(),
        name,
        email,
        password_hash,
    };

    users.insert_user(&user).await?;

    Ok(UserInfo::from(&user))
}

// User login
pub async fn login(
    users: &dyn UserStore,
    tokens: &TokenService,
    request: LoginRequest,
) -> Result<LoginResponse, ApiError> {
    let user = users
        .find_by_email(&request.email)
        .await?
        .ok_or_else(|| ApiError::Unauthorized(INVALID_CREDENTIALS.to_string()))?;

    let stored_hash = user.password_hash.clone();
    let password = request.password;
    let valid = run_blocking(move || verify(password, &stored_hash))
        .await?
        .map_err(|e| {
            log::error!("❌ Password verification error: {}", e);
            ApiError::Internal("Password verification error".to_string())
        })?;

    if !valid {
        return Err(ApiError::Unauthorized(INVALID_CREDENTIALS.to_string()));
    }

    let token = tokens.issue(&user.id.to_hex()).map_err(|e| {
        log::error!("❌ {}", e);
        ApiError::Internal("Failed to generate token".to_string())
    })?;

    Ok(LoginResponse {
        token,
        token_type: "Bearer".to_string(),
        expires_in: tokens.ttl_seconds(),
    })
}
