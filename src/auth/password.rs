use crate::error::AppError;
use bcrypt::{hash, verify};

/// Work factor for bcrypt. Raising it invalidates no stored hashes; old
/// hashes keep verifying at the cost they were created with.
const BCRYPT_COST: u32 = 12;

/// Hashes a plaintext password for storage.
pub fn hash_password(password: &str) -> Result<String, AppError> {
    hash(password, BCRYPT_COST)
        .map_err(|e| AppError::InternalServerError(format!("Failed to hash password: {}", e)))
}

/// Checks a plaintext password against a stored bcrypt hash.
pub fn verify_password(password: &str, hashed_password: &str) -> Result<bool, AppError> {
    verify(password, hashed_password)
        .map_err(|e| AppError::InternalServerError(format!("Failed to verify password: {}", e)))
}
