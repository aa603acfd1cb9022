use axum::extract::multipart::MultipartError;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::Response;

use crate::state::AppState;
use crate::uploads::save_avatar;
use crate::utils::response::created;
use crate::utils::{AppError, AppResult};

fn multipart_error(e: MultipartError) -> AppError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge("Please select an image smaller than 5MB".to_string())
    } else {
        AppError::ValidationError(e.body_text())
    }
}

/// POST /api/uploads/avatar - multipart form with a `file` field
pub async fn upload_avatar(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<Response> {
    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        if field.name() != Some("file") {
            continue;
        }

        let file_name = field.file_name().map(str::to_string);
        let content_type = field.content_type().map(str::to_string);
        let bytes = field.bytes().await.map_err(multipart_error)?;

        let stored = save_avatar(
            &state.config.upload_dir,
            &state.config.public_upload_base,
            file_name.as_deref(),
            content_type.as_deref(),
            &bytes,
        )
        .await?;

        return Ok(created(stored, "Profile picture uploaded successfully"));
    }

    Err(AppError::ValidationError(
        "Missing 'file' field in upload".to_string(),
    ))
}
