use axum::extract::State;
use axum::response::Response;
use serde::{Deserialize, Serialize};

use crate::auth::jwt::JWT_EXPIRY_HOURS;
use crate::auth::{create_token, verify_password};
use crate::state::AppState;
use crate::utils::extract::Json;
use crate::utils::response::success;
use crate::utils::{AppError, AppResult};

#[derive(Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub expires_in_hours: i64,
}

fn invalid_credentials() -> AppError {
    AppError::AuthError("Invalid username or password".to_string())
}

/// POST /api/admin/login
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> AppResult<Response> {
    let Some(hash) = state.config.admin_password_hash.clone() else {
        tracing::warn!("Admin login attempted but no password hash is configured");
        return Err(invalid_credentials());
    };

    let username_ok = req.username.trim() == state.config.admin_username;
    let password = req.password;
    let password_ok = tokio::task::spawn_blocking(move || verify_password(&password, &hash))
        .await
        .map_err(|e| AppError::InternalServerError(format!("password check panicked: {e}")))?;

    if !(username_ok && password_ok) {
        tracing::info!("Rejected admin login");
        return Err(invalid_credentials());
    }

    let token = create_token(&state.config.admin_username, &state.config.jwt_secret).map_err(
        |e| AppError::InternalServerError(format!("JWT creation failed: {e}")),
    )?;

    tracing::info!(username = %state.config.admin_username, "Admin logged in");
    Ok(success(
        LoginResponse {
            token,
            expires_in_hours: JWT_EXPIRY_HOURS,
        },
        "Welcome to the admin dashboard",
    ))
}
