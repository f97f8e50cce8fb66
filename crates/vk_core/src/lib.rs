//! # Core utilities for VaultKeeper
//!
//! This crate carries the pieces shared by the rest of the workspace:
//! - Error types for file and JSON handling
//! - Resolution of the vault directory (where everything is persisted)
//! - Terminal logging macros ([`info!`], [`err!`])
//!
//! **Not recommended to use in your own projects!**

mod error;
pub mod file_utils;
pub mod print;

pub use error::{IntoIoError, IntoJsonError, IoError, JsonError};
pub use file_utils::get_vault_dir;

/// Name of the directory (inside the platform data dir)
/// where all vault files live.
pub const VAULT_DIR_NAME: &str = "VaultKeeper";
