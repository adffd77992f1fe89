#![doc = include_str!("../README.md")]

mod agent;
#[expect(missing_docs)]
pub mod error;
mod record;
mod store;

pub use agent::{
    AgentCommands, AgentSwitcher, CommandRunner, CommandStatus, Invocation, SystemRunner,
};
pub use record::KeyRecord;
pub use store::{CONFIG_FILE_NAME, KeyStore};
