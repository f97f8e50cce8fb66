//! Core types for the account store

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Keys of the persisted slots in the vault.
///
/// These names are part of the on-disk format; renaming them orphans
/// existing vaults.
pub mod keys {
    /// The full collection of registered accounts.
    pub const USERS: &str = "users";
    /// The current session, absent while logged out.
    pub const CURRENT_USER: &str = "currentUser";
    /// Flag controlling whether the account collection survives a logout.
    pub const REMEMBER_ME: &str = "rememberMe";
}

/// A registered user.
///
/// Accounts are created by signup and never updated or deleted by any
/// store operation (logout can drop the whole collection, see
/// [`AccountStore::logout`](super::AccountStore::logout)).
///
/// The persisted field names are camelCase, matching the vaults written
/// by earlier versions of this system.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    /// Unique, monotonically increasing. Assigned by the store.
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    /// Argon2id PHC string. The plaintext password is never persisted.
    pub password_hash: String,
    /// Fixed at creation time.
    pub registered_date: DateTime<Utc>,
}

/// The currently authenticated user: a projection of an [`Account`]
/// that carries no password material.
///
/// At most one session exists at a time; absence means anonymous.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Session {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl From<&Account> for Session {
    fn from(account: &Account) -> Self {
        Self {
            id: account.id,
            name: account.name.clone(),
            email: account.email.clone(),
            phone: account.phone.clone(),
        }
    }
}

/// Field values carried by a signup submission.
#[derive(Debug, Clone)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub confirm_password: String,
}
