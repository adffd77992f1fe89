use switchssh_core::KeyStore;

use super::{NO_KEYS_MESSAGE, label};
use crate::render::CommandOutput;

pub(crate) fn list(store: &KeyStore) -> CommandOutput {
    if store.is_empty() {
        return NO_KEYS_MESSAGE.into();
    }

    let mut text = String::from("Registered SSH keys:\n====================\n");
    for (index, record) in store.list() {
        text.push_str(&format!(
            "{index}. {}\n   Path: {}\n\n",
            label(record),
            record.path
        ));
    }

    text.trim_end().to_owned().into()
}
