//! # VaultKeeper Accounts
//!
//! Registration, login, logout and session state over a local key-value
//! vault. This crate provides:
//! - A trait-based storage seam ([`StorageBackend`]) with an on-disk
//!   backend and an in-memory one for tests and embedding
//! - The [`AccountStore`] with the signup/login/logout/session operations
//! - Pure validation helpers for the form layer
//!
//! There is no server and no network: the vault on the local machine is
//! the only source of truth.

pub mod store;
pub mod validation;

pub use store::*;
