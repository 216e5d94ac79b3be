//! JWT encoding and validation.

use chrono::Utc;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use tarjama_core::types::DbId;

/// JWT configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// HMAC signing secret.
    pub secret: String,
    /// Access token lifetime in seconds.
    pub access_ttl_secs: i64,
}

impl JwtConfig {
    /// Load JWT configuration from environment variables with defaults.
    ///
    /// | Env Var               | Default                 |
    /// |-----------------------|-------------------------|
    /// | `JWT_SECRET`          | `dev-secret-change-me`  |
    /// | `JWT_ACCESS_TTL_SECS` | `3600`                  |
    pub fn from_env() -> Self {
        let secret =
            std::env::var("JWT_SECRET").unwrap_or_else(|_| "dev-secret-change-me".into());
        let access_ttl_secs: i64 = std::env::var("JWT_ACCESS_TTL_SECS")
            .unwrap_or_else(|_| "3600".into())
            .parse()
            .expect("JWT_ACCESS_TTL_SECS must be a valid i64");
        Self {
            secret,
            access_ttl_secs,
        }
    }
}

/// Claims carried by an access token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// The user's internal database id.
    pub sub: DbId,
    /// The user's role name (e.g. `"admin"`, `"translator"`, `"reviewer"`).
    pub role: String,
    /// Expiry as a Unix timestamp.
    pub exp: i64,
}

/// Issue a signed access token for the given user id and role.
///
/// Production tokens come from the identity service; this is used by local
/// tooling and the integration tests.
pub fn generate_token(
    user_id: DbId,
    role: &str,
    config: &JwtConfig,
) -> Result<String, jsonwebtoken::errors::Error> {
    let claims = Claims {
        sub: user_id,
        role: role.to_string(),
        exp: Utc::now().timestamp() + config.access_ttl_secs,
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(config.secret.as_bytes()),
    )
}

/// Validate a token's signature and expiry, returning its claims.
pub fn validate_token(
    token: &str,
    config: &JwtConfig,
) -> Result<Claims, jsonwebtoken::errors::Error> {
    let data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.secret.as_bytes()),
        &Validation::default(),
    )?;
    Ok(data.claims)
}
