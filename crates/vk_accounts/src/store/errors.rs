//! Error types for the account store

use super::backend::StoreError;

/// Errors that can come out of the account store's operations.
///
/// The first five are user-correctable: the form layer turns them into
/// an alert and the user tries again. `Storage` and `Json` mean the
/// vault itself couldn't be written.
#[derive(Debug, thiserror::Error)]
pub enum AccountError {
    #[error("Passwords do not match")]
    PasswordMismatch,

    #[error("Email already registered: {0}")]
    EmailTaken(String),

    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Not a valid email address: {0}")]
    InvalidEmail(String),

    #[error("Phone number must be exactly 10 digits, got: {0}")]
    InvalidPhone(String),

    #[error("Password hashing failed: {0}")]
    PasswordHash(String),

    #[error("Storage error: {0}")]
    Storage(#[from] StoreError),

    #[error("JSON error: {0}")]
    Json(#[from] vk_core::JsonError),
}

/// Convenient type alias for Results in the account store
pub type Result<T> = std::result::Result<T, AccountError>;
