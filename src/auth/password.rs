use crate::error::{AppError, ErrorKind};
use bcrypt::{hash, verify};

/// bcrypt work factor for stored password hashes. Fixed for all services.
pub const HASH_COST: u32 = bcrypt::DEFAULT_COST;

pub fn hash_password(password: &str) -> Result<String, AppError> {
    hash(password, HASH_COST)
        .map_err(|e| AppError::wrap(e, ErrorKind::Internal, "Failed to hash password"))
}

/// Compares `password` with a stored bcrypt hash.
///
/// A mismatch is `Ok(false)`; only an unreadable hash is an error.
pub fn verify_password(password: &str, hashed_password: &str) -> Result<bool, AppError> {
    verify(password, hashed_password)
        .map_err(|e| AppError::wrap(e, ErrorKind::Internal, "Failed to verify password"))
}
