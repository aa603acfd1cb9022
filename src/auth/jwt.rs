use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

pub const JWT_EXPIRY_HOURS: i64 = 12;

const ADMIN_ROLE: &str = "admin";

#[derive(Debug, Serialize, Deserialize)]
pub struct AdminClaims {
    /// Admin username
    pub sub: String,
    pub role: String,
    /// Expiration (Unix timestamp seconds)
    pub exp: usize,
    /// Issued at (Unix timestamp seconds)
    pub iat: usize,
}

/// Identity placed in request extensions once the token checks out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminIdentity {
    pub username: String,
}

pub fn create_token(username: &str, secret: &str) -> Result<String, jsonwebtoken::errors::Error> {
    let now = Utc::now();
    let claims = AdminClaims {
        sub: username.to_string(),
        role: ADMIN_ROLE.to_string(),
        exp: (now + Duration::hours(JWT_EXPIRY_HOURS)).timestamp() as usize,
        iat: now.timestamp() as usize,
    };

    jsonwebtoken::encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
}

pub fn verify_token(token: &str, secret: &str) -> Option<AdminIdentity> {
    let token_data = jsonwebtoken::decode::<AdminClaims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map_err(|e| tracing::debug!("JWT validation failed: {e}"))
    .ok()?;

    if token_data.claims.role != ADMIN_ROLE {
        tracing::debug!(role = %token_data.claims.role, "JWT carries a non-admin role");
        return None;
    }

    Some(AdminIdentity {
        username: token_data.claims.sub,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        let token = create_token("admin", "secret").unwrap();
        let identity = verify_token(&token, "secret").unwrap();
        assert_eq!(identity.username, "admin");
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let token = create_token("admin", "secret").unwrap();
        assert!(verify_token(&token, "other").is_none());
    }

    #[test]
    fn test_expired_token_rejected() {
        let past = Utc::now() - Duration::hours(JWT_EXPIRY_HOURS + 1);
        let claims = AdminClaims {
            sub: "admin".to_string(),
            role: ADMIN_ROLE.to_string(),
            exp: past.timestamp() as usize,
            iat: (past - Duration::hours(1)).timestamp() as usize,
        };
        let token = jsonwebtoken::encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(b"secret"),
        )
        .unwrap();
        assert!(verify_token(&token, "secret").is_none());
    }

    #[test]
    fn test_garbage_rejected() {
        assert!(verify_token("not.a.jwt", "secret").is_none());
    }
}
