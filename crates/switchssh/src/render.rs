use color_eyre::owo_colors::OwoColorize;
use switchssh_cli::Color;
use switchssh_core::error::ValidationError;

use crate::command::Cli;

pub enum CommandOutput {
    Plain(String),
    /// Input rejected by the command. Shown as an error, but the process still exits normally.
    Rejected(String),
}
pub type CommandResult = color_eyre::eyre::Result<CommandOutput>;

impl From<&str> for CommandOutput {
    fn from(text: &str) -> Self {
        CommandOutput::Plain(text.to_owned())
    }
}
impl From<String> for CommandOutput {
    fn from(text: String) -> Self {
        CommandOutput::Plain(text)
    }
}
impl From<ValidationError> for CommandOutput {
    fn from(error: ValidationError) -> Self {
        CommandOutput::Rejected(error.to_string())
    }
}

pub struct RenderConfig {
    pub color: Color,
}

impl RenderConfig {
    pub fn new(cli: &Cli) -> Self {
        Self { color: cli.color }
    }

    pub fn render_result(&self, result: CommandResult) -> color_eyre::eyre::Result<()> {
        match result {
            // Errors will be passed through to the caller, and rendered by the main function
            Err(e) => Err(e),

            Ok(CommandOutput::Plain(text)) => {
                println!("{}", text);
                Ok(())
            }

            Ok(CommandOutput::Rejected(reason)) => {
                if self.color.is_enabled() {
                    eprintln!("{} {}", "Error:".red().bold(), reason);
                } else {
                    eprintln!("Error: {}", reason);
                }
                Ok(())
            }
        }
    }
}
