//! Password hashing.
//!
//! Passwords are stored as Argon2id PHC strings, never in plaintext.
//! Verification parses the stored string, so parameter upgrades in
//! future versions keep old hashes working.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use super::errors::AccountError;

/// Hash a password with a fresh random salt.
pub fn hash_password(password: &str) -> Result<String, AccountError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|err| AccountError::PasswordHash(err.to_string()))
}

/// Check a password against a stored hash.
///
/// An unparseable hash counts as a failed check rather than an error:
/// a mangled stored hash must not let anyone in.
#[must_use]
pub fn verify_password(password: &str, hash: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(hash) else {
        return false;
    };
    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok()
}
