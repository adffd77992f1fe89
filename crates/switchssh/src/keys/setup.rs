use std::path::PathBuf;

use switchssh_cli::{Prompter, parse_yes_no};
use switchssh_core::{KeyRecord, KeyStore, error::ValidationError};
use tracing::debug;

use crate::render::CommandResult;

/// Register one key file. The store is only saved once the record has been accepted.
pub(crate) fn setup(store: &mut KeyStore, prompter: &mut impl Prompter) -> CommandResult {
    let path = prompter.text("Enter the path to your SSH key file:")?;

    // Only check that something exists at the path, the key itself is never read
    if let Err(e) = std::fs::metadata(&path) {
        debug!(%path, error = %e, "Key file stat failed");
        return Ok(ValidationError::KeyFileNotFound(PathBuf::from(path)).into());
    }

    let alias = prompter.text("Enter an alias for this key (optional, press Enter to skip):")?;
    let sudo_mode = parse_yes_no(&prompter.text("Use sudo mode for this key? (y/N):")?);

    let record = match store.add(KeyRecord::new(path, Some(alias), sudo_mode)) {
        Ok(record) => record.clone(),
        Err(e) => return Ok(e.into()),
    };

    store.save()?;

    Ok(format!(
        "Successfully registered SSH key: {} ({})",
        record.alias, record.path
    )
    .into())
}
