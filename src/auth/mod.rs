//! Admin authentication: argon2 password check against the configured hash,
//! then a short-lived HS256 bearer token for the dashboard API.

pub mod jwt;
pub mod middleware;
pub mod password;

pub use jwt::{create_token, verify_token, AdminIdentity};
pub use middleware::require_admin;
pub use password::{hash_password, verify_password};
