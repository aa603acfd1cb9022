//! Member avatar storage on local disk, served back under the public upload base.

use std::path::Path;

use serde::Serialize;
use uuid::Uuid;

use crate::utils::{AppError, AppResult};

pub const MAX_AVATAR_BYTES: usize = 5 * 1024 * 1024;

#[derive(Debug, Clone, Serialize)]
pub struct StoredFile {
    pub file_name: String,
    pub url: String,
}

pub fn validate_avatar(content_type: Option<&str>, len: usize) -> AppResult<()> {
    match content_type {
        Some(ct) if ct.starts_with("image/") => {}
        _ => {
            return Err(AppError::ValidationError(
                "Please select an image file".to_string(),
            ))
        }
    }
    if len == 0 {
        return Err(AppError::ValidationError("Uploaded file is empty".to_string()));
    }
    if len > MAX_AVATAR_BYTES {
        return Err(AppError::PayloadTooLarge(
            "Please select an image smaller than 5MB".to_string(),
        ));
    }
    Ok(())
}

/// Random file name that keeps a sanitized extension from the upload.
pub fn avatar_file_name(original_name: Option<&str>, content_type: Option<&str>) -> String {
    let from_name = original_name
        .and_then(|name| Path::new(name).extension())
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
        .filter(|ext| ext.len() <= 5 && ext.chars().all(|c| c.is_ascii_alphanumeric()));

    let ext = from_name.or_else(|| {
        content_type
            .and_then(|ct| ct.strip_prefix("image/"))
            .map(|subtype| match subtype {
                "jpeg" => "jpg".to_string(),
                "svg+xml" => "svg".to_string(),
                other => other.to_string(),
            })
            .filter(|ext| ext.chars().all(|c| c.is_ascii_alphanumeric()))
    });

    match ext {
        Some(ext) => format!("{}.{}", Uuid::new_v4(), ext),
        None => Uuid::new_v4().to_string(),
    }
}

pub async fn save_avatar(
    upload_dir: &Path,
    public_base: &str,
    original_name: Option<&str>,
    content_type: Option<&str>,
    bytes: &[u8],
) -> AppResult<StoredFile> {
    validate_avatar(content_type, bytes.len())?;

    tokio::fs::create_dir_all(upload_dir).await?;
    let file_name = avatar_file_name(original_name, content_type);
    tokio::fs::write(upload_dir.join(&file_name), bytes).await?;

    tracing::info!(file = %file_name, size = bytes.len(), "Stored avatar upload");

    Ok(StoredFile {
        url: format!("{}/{}", public_base.trim_end_matches('/'), file_name),
        file_name,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_non_images() {
        assert!(validate_avatar(Some("application/pdf"), 10).is_err());
        assert!(validate_avatar(None, 10).is_err());
        assert!(validate_avatar(Some("image/png"), 10).is_ok());
    }

    #[test]
    fn test_rejects_oversize() {
        let err = validate_avatar(Some("image/png"), MAX_AVATAR_BYTES + 1).unwrap_err();
        assert!(matches!(err, AppError::PayloadTooLarge(_)));
        assert!(validate_avatar(Some("image/png"), MAX_AVATAR_BYTES).is_ok());
    }

    #[test]
    fn test_file_name_extension() {
        assert!(avatar_file_name(Some("Me.PNG"), Some("image/png")).ends_with(".png"));
        assert!(avatar_file_name(Some("noext"), Some("image/jpeg")).ends_with(".jpg"));
        let weird = avatar_file_name(Some("x.p/h"), None);
        assert!(!weird.contains('/'));
    }

    #[tokio::test]
    async fn test_save_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let stored = save_avatar(
            dir.path(),
            "/uploads/",
            Some("face.webp"),
            Some("image/webp"),
            b"RIFF....WEBP",
        )
        .await
        .unwrap();

        assert!(stored.url.starts_with("/uploads/"));
        assert!(stored.url.ends_with(".webp"));
        let written = std::fs::read(dir.path().join(&stored.file_name)).unwrap();
        assert_eq!(written, b"RIFF....WEBP");
    }
}
