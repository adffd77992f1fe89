use switchssh_core::KeyRecord;

mod list;
mod setup;
mod switch;
#[cfg(test)]
mod testing;

pub(crate) use list::list;
pub(crate) use setup::setup;
pub(crate) use switch::switch;

pub(crate) const NO_KEYS_MESSAGE: &str =
    "No SSH keys registered. Use 'switchssh setup' to add your first key.";

/// Alias with a marker for keys loaded through the elevation wrapper.
fn label(record: &KeyRecord) -> String {
    if record.sudo_mode {
        format!("{} (sudo)", record.alias)
    } else {
        record.alias.clone()
    }
}
