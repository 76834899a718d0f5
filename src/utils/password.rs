use anyhow::anyhow;
use bcrypt::{DEFAULT_COST, hash, verify};

use crate::utils::errors::AppError;

/// A well-formed bcrypt hash that matches no password. Verifying
/// against it on identity-not-found keeps the work factor of a failed
/// login independent of whether the CPF exists.
pub const DUMMY_HASH: &str = "$2b$12$kXp9enU8m1mesUXwSGXrEuTFD9bUSal2G7Hf..cgReX1T3GkvXfqu";

pub fn hash_password(password: &str) -> Result<String, AppError> {
    hash(password, DEFAULT_COST)
        .map_err(|e| AppError::internal(anyhow!("Failed to hash password: {}", e)))
}

/// Salted adaptive comparison. A mismatch is `Ok(false)`, not an error;
/// only a malformed stored hash errors.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, AppError> {
    verify(password, hash)
        .map_err(|e| AppError::internal(anyhow!("Failed to verify password: {}", e)))
}

/// Burns one bcrypt verification against [`DUMMY_HASH`], discarding the
/// result. Called on lookup misses so the unknown-identity path costs
/// the same as a wrong password.
pub fn burn_verification(password: &str) {
    let _ = verify(password, DUMMY_HASH);
}
