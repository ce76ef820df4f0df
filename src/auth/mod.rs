use actix_web::HttpRequest;
use chrono::{DateTime, Utc};

use crate::errors::AppError;
use crate::models::auth::{LoginRequest, LoginResponse};
use crate::store::EmployeeStore;
use crate::utils::jwt::{self, Claims};

const INVALID_CREDENTIALS: &str = "Invalid email or password";

pub struct AuthSettings {
    pub jwt_secret: String,
    pub require_token: bool,
}

/// Checks the submitted credentials and mints a token on success.
///
/// Unknown email and wrong password produce the same 401. Passwords are
/// stored and compared in plaintext; a salted hash would replace this
/// comparison in any hardened deployment.
pub async fn login(
    store: &dyn EmployeeStore,
    secret: &str,
    request: &LoginRequest,
    now: DateTime<Utc>,
) -> Result<LoginResponse, AppError> {
    let stored = store
        .find_password(&request.email)
        .await
        .map_err(|_| AppError::DatabaseError("Database query failed".to_string()))?;

    match stored {
        Some(password) if password == request.password => {}
        _ => return Err(AppError::Unauthorized(INVALID_CREDENTIALS.to_string())),
    }

    let token = jwt::generate_token(secret, &request.email, now)
        .map_err(|_| AppError::InternalServerError("Failed to generate token".to_string()))?;

    log::info!("issued token for {}", request.email);
    Ok(LoginResponse {
        token,
        message: "Login successful".to_string(),
        success: true,
    })
}

/// Enforces the bearer token on protected routes when `require_token` is on.
pub fn authorize(req: &HttpRequest, settings: &AuthSettings) -> Result<Option<Claims>, AppError> {
    if !settings.require_token {
        return Ok(None);
    }

    let token = req
        .headers()
        .get("Authorization")
        .and_then(|auth| auth.to_str().ok())
        .and_then(jwt::bearer_token)
        .ok_or_else(|| AppError::Unauthorized("Missing token".to_string()))?;

    jwt::validate_token(&settings.jwt_secret, token)
        .map(Some)
        .map_err(|_| AppError::Unauthorized("Invalid token".to_string()))
}
