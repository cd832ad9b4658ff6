use argon2::password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::{Algorithm, Argon2, Params, Version};

use crate::error::AppError;

/// Argon2id, 19 MiB memory, 2 iterations, parallelism 1.
pub fn hash(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);
    let params = Params::new(19 * 1024, 2, 1, None)
        .map_err(|e| AppError::Internal(format!("argon2 params: {e}")))?;

    Argon2::new(Algorithm::Argon2id, Version::V0x13, params)
        .hash_password(password.as_bytes(), &salt)
        .map(|hashed| hashed.to_string())
        .map_err(|e| AppError::Internal(format!("password hashing failed: {e}")))
}

/// Check a candidate password against the stored PHC string. A malformed
/// stored hash is an internal error, not a failed login.
pub fn verify(password: &str, stored: &str) -> Result<bool, AppError> {
    let parsed = PasswordHash::new(stored)
        .map_err(|e| AppError::Internal(format!("stored password hash is invalid: {e}")))?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_accepts_the_original_password_only() {
        let hashed = hash("senha-secreta").unwrap();
        assert!(verify("senha-secreta", &hashed).unwrap());
        assert!(!verify("senha-errada", &hashed).unwrap());
    }

    #[test]
    fn malformed_stored_hash_is_an_error() {
        assert!(verify("qualquer", "not-a-phc-string").is_err());
    }
}
