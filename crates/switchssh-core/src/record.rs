use std::path::Path;

use serde::{Deserialize, Serialize};

/// A registered SSH private key.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct KeyRecord {
    /// Filesystem path to the private key file.
    pub path: String,
    /// Unique label shown in listings.
    pub alias: String,
    /// Load the key through the elevation wrapper.
    #[serde(default, alias = "sudo_mode")]
    pub sudo_mode: bool,
}

impl KeyRecord {
    /// Build a record, defaulting an empty or missing alias to the file name of `path`.
    pub fn new(path: impl Into<String>, alias: Option<String>, sudo_mode: bool) -> Self {
        let path = path.into();
        let alias = match alias.map(|a| a.trim().to_owned()) {
            Some(alias) if !alias.is_empty() => alias,
            _ => default_alias(&path),
        };

        Self {
            path,
            alias,
            sudo_mode,
        }
    }
}

fn default_alias(path: &str) -> String {
    Path::new(path)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_owned())
}
