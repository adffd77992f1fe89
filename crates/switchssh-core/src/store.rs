//! Persistent list of registered keys.
//!
//! The whole store is read into memory at the start of every command and written back in one
//! piece. Writes go to a sibling temporary file which is then renamed over the target, so a
//! failed save never leaves a truncated config behind.
//!
//! There is no locking between concurrent invocations. Two processes saving at the same time
//! race and the last rename wins.

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    error::{StoreError, ValidationError},
    record::KeyRecord,
};

/// Name of the config file inside the home directory.
pub const CONFIG_FILE_NAME: &str = ".switchssh";

#[derive(Serialize, Deserialize, Default)]
struct StoreFile {
    #[serde(default)]
    keys: Vec<KeyRecord>,
}

/// Ordered collection of [`KeyRecord`]s backed by a JSON file.
///
/// Insertion order is preserved and drives the 1-based numbering used by both listing and
/// selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyStore {
    path: PathBuf,
    keys: Vec<KeyRecord>,
}

impl KeyStore {
    /// An empty store that will be saved to `path`.
    pub fn empty(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            keys: Vec::new(),
        }
    }

    /// Load the store from `path`.
    ///
    /// A missing file yields an empty store. The parent directory is created when absent so a
    /// later [`KeyStore::save`] can succeed.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();

        if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            ensure_dir(dir)?;
        }

        let data = match fs::read_to_string(&path) {
            Ok(data) => data,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "No config file, starting empty");
                return Ok(Self::empty(path));
            }
            Err(source) => return Err(StoreError::Io { path, source }),
        };

        let file: StoreFile = match serde_json::from_str(&data) {
            Ok(file) => file,
            Err(source) => return Err(StoreError::Parse { path, source }),
        };

        debug!(path = %path.display(), keys = file.keys.len(), "Loaded config");

        Ok(Self {
            path,
            keys: file.keys,
        })
    }

    /// Write the full store to its path, replacing any previous contents.
    pub fn save(&self) -> Result<(), StoreError> {
        let file = StoreFile {
            keys: self.keys.clone(),
        };
        let mut json = serde_json::to_string_pretty(&file)?;
        json.push('\n');

        // Write through a symlinked config and keep the permissions of an existing file
        let (target, permissions) = match fs::metadata(&self.path) {
            Ok(metadata) => {
                let target = fs::canonicalize(&self.path).map_err(|source| StoreError::Io {
                    path: self.path.clone(),
                    source,
                })?;
                (target, Some(metadata.permissions()))
            }
            Err(_) => (self.path.clone(), None),
        };

        let tmp = tmp_path(&target);
        fs::write(&tmp, json).map_err(|source| StoreError::Io {
            path: tmp.clone(),
            source,
        })?;
        if let Some(permissions) = permissions {
            fs::set_permissions(&tmp, permissions).map_err(|source| {
                let _ = fs::remove_file(&tmp);
                StoreError::Io {
                    path: tmp.clone(),
                    source,
                }
            })?;
        }
        fs::rename(&tmp, &target).map_err(|source| {
            let _ = fs::remove_file(&tmp);
            StoreError::Io {
                path: target.clone(),
                source,
            }
        })?;

        debug!(path = %self.path.display(), keys = self.keys.len(), "Saved config");
        Ok(())
    }

    /// Append a record. Fails without modifying the store when the alias is taken.
    pub fn add(&mut self, record: KeyRecord) -> Result<&KeyRecord, ValidationError> {
        if self.keys.iter().any(|k| k.alias == record.alias) {
            return Err(ValidationError::DuplicateAlias(record.alias));
        }

        self.keys.push(record);
        Ok(&self.keys[self.keys.len() - 1])
    }

    /// Records paired with their 1-based ordinal.
    pub fn list(&self) -> impl Iterator<Item = (usize, &KeyRecord)> {
        self.keys.iter().enumerate().map(|(i, k)| (i + 1, k))
    }

    /// Resolve user input holding a 1-based ordinal from [`KeyStore::list`].
    pub fn select(&self, input: &str) -> Result<&KeyRecord, ValidationError> {
        let input = input.trim();
        input
            .parse::<usize>()
            .ok()
            .and_then(|index| index.checked_sub(1))
            .and_then(|index| self.keys.get(index))
            .ok_or_else(|| ValidationError::InvalidSelection(input.to_owned()))
    }

    #[allow(missing_docs)]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    #[allow(missing_docs)]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// The file this store is loaded from and saved to.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}

/// Create `dir` when it does not exist. Existing directories keep their permissions.
fn ensure_dir(dir: &Path) -> Result<(), StoreError> {
    if dir.is_dir() {
        return Ok(());
    }

    let mut builder = fs::DirBuilder::new();
    builder.recursive(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(0o755);
    }

    builder.create(dir).map_err(|source| StoreError::Io {
        path: dir.to_owned(),
        source,
    })
}
