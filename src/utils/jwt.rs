use anyhow::anyhow;
use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};

use crate::config::jwt::JwtConfig;
use crate::modules::auth::model::{Claims, Role, UserDisplay};
use crate::utils::errors::AppError;

/// Signs a role-scoped access token for a resolved identity.
///
/// Expiry is `now + token_expiry` (24 hours by default). A missing
/// signing key fails every call with a 500 configuration error rather
/// than a request-level one.
pub fn create_access_token(
    subject_id: i32,
    role: Role,
    user: UserDisplay,
    jwt_config: &JwtConfig,
) -> Result<String, AppError> {
    let secret = signing_secret(jwt_config)?;

    let now = Utc::now().timestamp();
    let claims = Claims {
        sub: subject_id,
        role,
        user,
        iat: now as usize,
        exp: (now + jwt_config.token_expiry) as usize,
    };

    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| AppError::internal(anyhow!("Failed to sign token: {}", e)))
}

/// Verifies signature and expiry of a presented token.
///
/// The accepted algorithm is pinned to the one used at issuance, so a
/// token re-signed under a different algorithm is rejected outright.
pub fn verify_token(token: &str, jwt_config: &JwtConfig) -> Result<Claims, AppError> {
    let secret = signing_secret(jwt_config)?;

    let validation = Validation::new(Algorithm::HS256);

    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|_| AppError::unauthorized(anyhow!("Invalid or expired token")))
}

fn signing_secret(jwt_config: &JwtConfig) -> Result<&str, AppError> {
    jwt_config
        .secret
        .as_deref()
        .ok_or_else(|| AppError::config(anyhow!("Server configuration error")))
}
