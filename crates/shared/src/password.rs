//! Pass-code hashing utilities using Argon2id.
//!
//! Hotel dashboard pass-codes are never stored or compared in plaintext.
//! They are hashed with Argon2id, which is recommended by OWASP for
//! credential storage.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Algorithm, Argon2, Params, Version,
};
use thiserror::Error;

/// Error type for pass-code operations.
#[derive(Debug, Error)]
pub enum PassCodeError {
    #[error("Failed to hash pass-code: {0}")]
    HashError(String),

    #[error("Failed to verify pass-code: {0}")]
    VerifyError(String),

    #[error("Invalid pass-code hash format")]
    InvalidHashFormat,
}

/// Argon2id parameters following OWASP recommendations (2024).
/// - Memory: 19456 KiB (19 MiB)
/// - Iterations: 2
/// - Parallelism: 1
const MEMORY_COST: u32 = 19456;
const TIME_COST: u32 = 2;
const PARALLELISM: u32 = 1;
const OUTPUT_LEN: usize = 32;

fn create_argon2() -> Result<Argon2<'static>, PassCodeError> {
    let params = Params::new(MEMORY_COST, TIME_COST, PARALLELISM, Some(OUTPUT_LEN))
        .map_err(|e| PassCodeError::HashError(format!("Failed to create Argon2 params: {}", e)))?;

    Ok(Argon2::new(Algorithm::Argon2id, Version::V0x13, params))
}

/// Hashes a pass-code using Argon2id.
///
/// Returns a PHC-formatted string that includes the algorithm, parameters,
/// salt, and hash. The format is self-describing, which allows parameter
/// upgrades without invalidating stored hashes.
///
/// # Example
/// ```
/// use shared::password::hash_pass_code;
///
/// let hash = hash_pass_code("hotel-secret").unwrap();
/// assert!(hash.starts_with("$argon2id$"));
/// ```
pub fn hash_pass_code(pass_code: &str) -> Result<String, PassCodeError> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = create_argon2()?;

    argon2
        .hash_password(pass_code.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| PassCodeError::HashError(e.to_string()))
}

/// Verifies a pass-code against a stored hash.
///
/// Verification is constant-time to prevent timing attacks.
///
/// # Example
/// ```
/// use shared::password::{hash_pass_code, verify_pass_code};
///
/// let hash = hash_pass_code("hotel-secret").unwrap();
/// assert!(verify_pass_code("hotel-secret", &hash).unwrap());
/// assert!(!verify_pass_code("wrong", &hash).unwrap());
/// ```
pub fn verify_pass_code(pass_code: &str, hash: &str) -> Result<bool, PassCodeError> {
    let parsed_hash = PasswordHash::new(hash).map_err(|_| PassCodeError::InvalidHashFormat)?;

    // The stored hash carries its own parameters, so defaults suffice here
    let argon2 = Argon2::default();

    match argon2.verify_password(pass_code.as_bytes(), &parsed_hash) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(PassCodeError::VerifyError(e.to_string())),
    }
}
