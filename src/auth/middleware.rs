use axum::extract::{Request, State};
use axum::http::header::AUTHORIZATION;
use axum::middleware::Next;
use axum::response::Response;

use super::jwt::verify_token;
use crate::state::AppState;
use crate::utils::AppError;

/// Rejects requests without a valid admin bearer token and attaches the
/// `AdminIdentity` for downstream handlers.
pub async fn require_admin(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| AppError::AuthError("Missing Authorization header".to_string()))?;

    let token = header
        .strip_prefix("Bearer ")
        .ok_or_else(|| AppError::AuthError("Invalid Authorization format".to_string()))?;

    let identity = verify_token(token, &state.config.jwt_secret)
        .ok_or_else(|| AppError::AuthError("Invalid or expired token".to_string()))?;

    request.extensions_mut().insert(identity);
    Ok(next.run(request).await)
}
