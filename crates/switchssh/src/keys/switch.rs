use std::io::Write;

use switchssh_cli::Prompter;
use switchssh_core::{AgentSwitcher, CommandRunner, KeyStore};

use super::{NO_KEYS_MESSAGE, label};
use crate::render::CommandResult;

/// Show the registered keys, read a 1-based selection and load that key into the agent.
///
/// Nothing is cleared or added unless the selection is valid.
pub(crate) fn switch<R: CommandRunner>(
    store: &KeyStore,
    prompter: &mut impl Prompter,
    switcher: &AgentSwitcher<R>,
    out: &mut impl Write,
) -> CommandResult {
    if store.is_empty() {
        return Ok(NO_KEYS_MESSAGE.into());
    }

    writeln!(out, "Available SSH keys:")?;
    for (index, record) in store.list() {
        writeln!(out, "{index}. {} - {}", label(record), record.path)?;
    }
    writeln!(out)?;
    out.flush()?;

    let selection = prompter.text("Select a key (enter number):")?;
    let record = match store.select(&selection) {
        Ok(record) => record,
        Err(e) => return Ok(e.into()),
    };

    switcher.activate(record)?;

    Ok(format!("Successfully switched to SSH key: {}", record.alias).into())
}
