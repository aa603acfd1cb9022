use std::env;
use std::fmt::Display;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;

use thiserror::Error;

pub mod cors;
pub mod security;

pub use cors::create_cors_layer;
pub use security::create_security_headers_layer;

const DEV_JWT_SECRET: &str = "donor-club-dev-secret";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be set when RUST_ENV=production")]
    MissingSecret(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    Postgres,
    Memory,
}

impl FromStr for StoreBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "postgres" | "postgresql" => Ok(StoreBackend::Postgres),
            "memory" => Ok(StoreBackend::Memory),
            other => Err(format!("unknown store backend '{}'", other)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub database_max_connections: u32,
    pub store_backend: StoreBackend,
    pub bind_addr: SocketAddr,
    pub is_production: bool,
    pub cors_allowed_origins: Option<String>,
    pub jwt_secret: String,
    pub admin_username: String,
    /// Argon2 PHC string. Admin login is refused while this is unset.
    pub admin_password_hash: Option<String>,
    pub upload_dir: PathBuf,
    pub public_upload_base: String,
    pub birthday_window_days: i64,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let is_production = env::var("RUST_ENV")
            .map(|v| v.to_lowercase() == "production")
            .unwrap_or(false);

        let jwt_secret =
            require_secret("JWT_SECRET", env::var("JWT_SECRET").ok(), is_production)?;

        let admin_password_hash = env::var("ADMIN_PASSWORD_HASH")
            .ok()
            .filter(|h| !h.trim().is_empty());
        if admin_password_hash.is_none() {
            tracing::warn!("ADMIN_PASSWORD_HASH not set, admin login is disabled");
        }

        Ok(Self {
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| "postgres://localhost/donor_club".to_string()),
            database_max_connections: parse_or("DATABASE_MAX_CONNECTIONS", 5),
            store_backend: parse_or("STORE_BACKEND", StoreBackend::Postgres),
            bind_addr: parse_or("BIND_ADDR", default_bind_addr()),
            is_production,
            cors_allowed_origins: env::var("CORS_ALLOWED_ORIGINS").ok(),
            jwt_secret,
            admin_username: env::var("ADMIN_USERNAME").unwrap_or_else(|_| "admin".to_string()),
            admin_password_hash,
            upload_dir: env::var("UPLOAD_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("./uploads")),
            public_upload_base: env::var("PUBLIC_UPLOAD_BASE")
                .unwrap_or_else(|_| "/uploads".to_string()),
            birthday_window_days: parse_or(
                "BIRTHDAY_WINDOW_DAYS",
                crate::services::birthdays::DEFAULT_WINDOW_DAYS,
            ),
        })
    }

    /// In-memory configuration for tests and local tooling.
    pub fn for_tests() -> Self {
        Self {
            database_url: String::new(),
            database_max_connections: 1,
            store_backend: StoreBackend::Memory,
            bind_addr: default_bind_addr(),
            is_production: false,
            cors_allowed_origins: None,
            jwt_secret: "test-secret".to_string(),
            admin_username: "admin".to_string(),
            admin_password_hash: None,
            upload_dir: env::temp_dir().join("donor-club-uploads"),
            public_upload_base: "/uploads".to_string(),
            birthday_window_days: crate::services::birthdays::DEFAULT_WINDOW_DAYS,
        }
    }
}

/// Production refuses to start without the secret; development falls back
/// to a fixed key.
fn require_secret(
    name: &'static str,
    value: Option<String>,
    is_production: bool,
) -> Result<String, ConfigError> {
    match value.filter(|v| !v.trim().is_empty()) {
        Some(secret) => Ok(secret),
        None if is_production => Err(ConfigError::MissingSecret(name)),
        None => {
            tracing::warn!("{} not set, using development secret", name);
            Ok(DEV_JWT_SECRET.to_string())
        }
    }
}

fn default_bind_addr() -> SocketAddr {
    SocketAddr::from(([0, 0, 0, 0], 3001))
}

fn parse_or<T>(key: &str, default: T) -> T
where
    T: FromStr,
    T::Err: Display,
{
    match env::var(key) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|e| {
            tracing::warn!("Invalid {} value '{}': {}, using default", key, raw, e);
            default
        }),
        Err(_) => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bind_addr() {
        assert_eq!(default_bind_addr().to_string(), "0.0.0.0:3001");
    }

    #[test]
    fn test_store_backend_parse() {
        assert_eq!("memory".parse::<StoreBackend>(), Ok(StoreBackend::Memory));
        assert_eq!("Postgres".parse::<StoreBackend>(), Ok(StoreBackend::Postgres));
        assert!("redis".parse::<StoreBackend>().is_err());
    }

    #[test]
    fn test_production_requires_jwt_secret() {
        assert_eq!(
            require_secret("JWT_SECRET", None, true),
            Err(ConfigError::MissingSecret("JWT_SECRET"))
        );
        assert_eq!(
            require_secret("JWT_SECRET", Some("  ".to_string()), true),
            Err(ConfigError::MissingSecret("JWT_SECRET"))
        );
        assert_eq!(
            require_secret("JWT_SECRET", Some("s3cret-value".to_string()), true),
            Ok("s3cret-value".to_string())
        );
    }

    #[test]
    fn test_development_falls_back_to_dev_secret() {
        assert_eq!(
            require_secret("JWT_SECRET", None, false),
            Ok(DEV_JWT_SECRET.to_string())
        );
        assert_eq!(
            require_secret("JWT_SECRET", Some(String::new()), false),
            Ok(DEV_JWT_SECRET.to_string())
        );
    }

    #[test]
    fn test_parse_or_falls_back_on_garbage() {
        std::env::set_var("DONOR_CLUB_TEST_WINDOW", "thirty");
        let value: i64 = parse_or("DONOR_CLUB_TEST_WINDOW", 30);
        assert_eq!(value, 30);
        std::env::remove_var("DONOR_CLUB_TEST_WINDOW");
    }
}
