use clap::{Parser, Subcommand};
use switchssh_cli::Color;

#[derive(Parser, Clone)]
#[command(
    name = "SwitchSSH",
    version,
    about = "A CLI tool to manage and switch between SSH keys",
    long_about = "SwitchSSH is a command-line tool that allows you to easily manage and switch between different SSH keys.",
    disable_version_flag = true
)]
pub struct Cli {
    // Optional as a workaround for https://github.com/clap-rs/clap/issues/3572
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[arg(short = 'c', long, global = true, value_enum, default_value_t = Color::Auto)]
    pub color: Color,

    // Clap uses uppercase V for the short flag by default, keep the lowercase one
    #[arg(short = 'v', long, action = clap::builder::ArgAction::Version)]
    pub version: (),
}

#[derive(Subcommand, Clone)]
pub enum Commands {
    #[command(
        about = "Setup a new SSH key",
        long_about = "Register a new SSH key file with an optional alias for easy identification."
    )]
    Setup,

    #[command(
        about = "Switch to a different SSH key",
        long_about = "Select and switch to a different SSH key from your registered keys.",
        after_help = r#"Notes:
    The agent is cleared with `ssh-add -D` before the selected key is added.
    Keys registered in sudo mode are added with `sudo ssh-add <path>`."#
    )]
    Switch,

    #[command(
        about = "List all registered SSH keys",
        long_about = "Display all registered SSH keys with their aliases and paths."
    )]
    List,
}
