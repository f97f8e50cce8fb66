//! Resolution of the vault directory.
//!
//! All persisted state lives in a single directory under the platform
//! data dir (for example `~/.local/share/VaultKeeper` on Linux).

use std::path::PathBuf;

use crate::{IntoIoError, IoError, VAULT_DIR_NAME};

/// Get the vault directory, creating it if it doesn't exist.
///
/// Respects the `VAULT_KEEPER_DIR` environment variable as an override,
/// for portable installs and scripted use.
///
/// # Errors
/// - if the platform has no user data directory
/// - if the directory can't be created (e.g. missing permission)
pub fn get_vault_dir() -> Result<PathBuf, IoError> {
    let vault_dir = if let Some(dir) = std::env::var_os("VAULT_KEEPER_DIR") {
        PathBuf::from(dir)
    } else {
        let data_dir = dirs::data_dir().ok_or(IoError::DataDirNotFound)?;
        data_dir.join(VAULT_DIR_NAME)
    };

    std::fs::create_dir_all(&vault_dir).path(&vault_dir)?;
    Ok(vault_dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creates_missing_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let target = tmp.path().join("nested").join("vault");

        // SAFETY: tests in this module are the only writers of this variable.
        unsafe { std::env::set_var("VAULT_KEEPER_DIR", &target) };
        let dir = get_vault_dir().unwrap();
        unsafe { std::env::remove_var("VAULT_KEEPER_DIR") };

        assert_eq!(dir, target);
        assert!(dir.is_dir());
    }
}
