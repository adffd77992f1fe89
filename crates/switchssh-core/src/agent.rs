//! Swapping the key held by the running SSH agent.
//!
//! Activation clears the agent and then adds the selected key by shelling out to `ssh-add`. The
//! exit status is the only thing observed from those processes. A failed clear only logs a
//! warning, while a failed add aborts the switch.

use std::{fmt, process::Stdio};

use tracing::{info, warn};

use crate::{error::AgentError, record::KeyRecord};

/// Names and arguments of the external programs used during activation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentCommands {
    /// Agent management binary.
    pub program: String,
    /// Arguments that make `program` drop every loaded identity.
    pub clear_args: Vec<String>,
    /// Privilege elevation wrapper used for sudo-mode keys.
    pub elevation: String,
}

impl Default for AgentCommands {
    fn default() -> Self {
        Self {
            program: "ssh-add".to_owned(),
            clear_args: vec!["-D".to_owned()],
            elevation: "sudo".to_owned(),
        }
    }
}

/// A single external process to run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    #[allow(missing_docs)]
    pub program: String,
    #[allow(missing_docs)]
    pub args: Vec<String>,
    /// Connect the child to this process' stdin, so it can prompt (e.g. for a sudo password).
    pub interactive: bool,
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// Exit status of a finished process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandStatus {
    /// `None` when the process was terminated by a signal.
    pub code: Option<i32>,
}

impl CommandStatus {
    #[allow(missing_docs)]
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

impl fmt::Display for CommandStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code {
            Some(code) => write!(f, "exit status {code}"),
            None => write!(f, "terminated by signal"),
        }
    }
}

/// Runs external processes and waits for them to finish.
pub trait CommandRunner {
    /// Run `invocation` to completion. Errors only when the process could not be started.
    fn run(&self, invocation: &Invocation) -> std::io::Result<CommandStatus>;
}

/// [`CommandRunner`] backed by [`std::process::Command`].
///
/// Output streams are inherited so `ssh-add` messages reach the user directly.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, invocation: &Invocation) -> std::io::Result<CommandStatus> {
        let stdin = if invocation.interactive {
            Stdio::inherit()
        } else {
            Stdio::null()
        };

        let status = std::process::Command::new(&invocation.program)
            .args(&invocation.args)
            .stdin(stdin)
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()?;

        Ok(CommandStatus {
            code: status.code(),
        })
    }
}

/// Clears the SSH agent and loads a selected key into it.
pub struct AgentSwitcher<R> {
    commands: AgentCommands,
    runner: R,
}

impl AgentSwitcher<SystemRunner> {
    /// Switcher using `ssh-add` and `sudo` from `PATH`.
    pub fn system() -> Self {
        Self::new(AgentCommands::default(), SystemRunner)
    }
}

impl<R: CommandRunner> AgentSwitcher<R> {
    #[allow(missing_docs)]
    pub fn new(commands: AgentCommands, runner: R) -> Self {
        Self { commands, runner }
    }

    /// Invocation that removes every identity from the agent.
    pub fn clear_invocation(&self) -> Invocation {
        Invocation {
            program: self.commands.program.clone(),
            args: self.commands.clear_args.clone(),
            interactive: false,
        }
    }

    /// Invocation that loads `record` into the agent, through the elevation wrapper if needed.
    pub fn add_invocation(&self, record: &KeyRecord) -> Invocation {
        if record.sudo_mode {
            Invocation {
                program: self.commands.elevation.clone(),
                args: vec![self.commands.program.clone(), record.path.clone()],
                interactive: true,
            }
        } else {
            Invocation {
                program: self.commands.program.clone(),
                args: vec![record.path.clone()],
                interactive: true,
            }
        }
    }

    /// Clear the agent, then add `record`.
    ///
    /// Clearing is best effort. Only a failure to add the key is returned.
    pub fn activate(&self, record: &KeyRecord) -> Result<(), AgentError> {
        self.clear();

        let invocation = self.add_invocation(record);
        info!(alias = %record.alias, "Adding SSH key");

        let status = self
            .runner
            .run(&invocation)
            .map_err(|source| AgentError::Spawn {
                program: invocation.program.clone(),
                source,
            })?;

        if !status.success() {
            return Err(AgentError::ActivationFailed {
                alias: record.alias.clone(),
                status: format!("`{invocation}` failed with {status}"),
            });
        }

        Ok(())
    }

    fn clear(&self) {
        let invocation = self.clear_invocation();
        info!("Clearing existing SSH keys");

        match self.runner.run(&invocation) {
            Ok(status) if status.success() => {}
            Ok(status) => warn!("Could not clear existing SSH keys: `{invocation}` {status}"),
            Err(e) => warn!("Could not clear existing SSH keys: {e}"),
        }
    }
}
