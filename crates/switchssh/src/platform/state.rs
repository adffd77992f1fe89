//! Location of the persisted key store.
//!
//! - **Storage Location**: `~/.switchssh` (Unix) or `%USERPROFILE%\.switchssh` (Windows)
//! - **Format**: pretty printed JSON, see [`switchssh_core::KeyStore`]
//!
//! The file is not encrypted. It only holds paths to key files, never key material.

use std::path::PathBuf;

use switchssh_core::{CONFIG_FILE_NAME, error::StoreError};

/// Get the full config file path
///
/// The home directory comes from `HOME` when set and falls back to the user database otherwise.
pub(crate) fn get_config_path() -> Result<PathBuf, StoreError> {
    let home = dirs::home_dir().ok_or(StoreError::ConfigDirNotFound)?;
    Ok(home.join(CONFIG_FILE_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_path_is_dotfile_in_home() {
        let path = get_config_path().unwrap();

        assert_eq!(path.file_name().unwrap(), CONFIG_FILE_NAME);
        assert_eq!(path.parent(), dirs::home_dir().as_deref());
    }
}
