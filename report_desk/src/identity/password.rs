//! Argon2id password hashing

use argon2::Argon2;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use ring::rand::SecureRandom;

use crate::utils::UtilError;

/// Hash a password into a PHC string with a fresh 16 byte salt
pub(crate) fn hash_password(password: &str) -> Result<String, UtilError> {
    let rng = ring::rand::SystemRandom::new();
    let mut salt_bytes = [0u8; 16];
    rng.fill(&mut salt_bytes)
        .map_err(|_| UtilError::Crypto("Failed to generate salt".to_string()))?;

    let salt = SaltString::encode_b64(&salt_bytes)
        .map_err(|e| UtilError::Crypto(format!("Invalid salt: {e}")))?;

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| UtilError::Crypto(format!("Password hashing failed: {e}")))
}

/// Constant-time check of `password` against a stored PHC string.
/// A malformed hash never verifies.
pub(crate) fn verify_password(password: &str, password_hash: &str) -> bool {
    match PasswordHash::new(password_hash) {
        Ok(parsed) => Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok(),
        Err(e) => {
            tracing::warn!(error = %e, "Stored password hash is malformed");
            false
        }
    }
}
