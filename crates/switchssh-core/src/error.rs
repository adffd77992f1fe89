use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while reading or writing the key store file.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Home directory could not be determined.
    #[error("Config directory not found (could not determine the home directory)")]
    ConfigDirNotFound,

    /// IO error while touching the config file or its directory.
    #[error("IO error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config file exists but does not hold the expected structure.
    #[error("Failed to parse config file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// User input that was rejected. The flow aborts without persisting anything.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Alias '{0}' already exists. Please choose a different alias.")]
    DuplicateAlias(String),

    #[error("SSH key file not found at {}", .0.display())]
    KeyFileNotFound(PathBuf),

    #[error("Invalid selection '{0}'. Please enter a valid number.")]
    InvalidSelection(String),
}

/// Failures of the external agent commands that abort a switch.
#[derive(Debug, Error)]
pub enum AgentError {
    #[error("Failed to run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to add SSH key '{alias}': {status}")]
    ActivationFailed { alias: String, status: String },
}
