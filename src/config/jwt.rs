use std::env;

/// Token-signing configuration, read once at startup and injected into
/// the issuance and verification paths through [`crate::state::AppState`].
///
/// `secret` stays `None` when `JWT_SECRET` is unset. That is a
/// process-wide configuration fault: startup logs a warning and every
/// login or token check answers 500 until the key is provided.
#[derive(Clone, Debug)]
pub struct JwtConfig {
    pub secret: Option<String>,
    /// Token lifetime in seconds.
    pub token_expiry: i64,
}

impl JwtConfig {
    pub fn from_env() -> Self {
        Self {
            secret: env::var("JWT_SECRET").ok(),
            token_expiry: env::var("JWT_TOKEN_EXPIRY")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(86400), // 24 hours
        }
    }
}
