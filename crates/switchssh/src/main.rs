#![doc = include_str!("../README.md")]

use clap::{CommandFactory, Parser};
use color_eyre::eyre::Result;
use switchssh_cli::{TerminalPrompter, install_color_eyre};
use switchssh_core::{AgentSwitcher, KeyStore};
use tracing_subscriber::{
    EnvFilter, prelude::__tracing_subscriber_SubscriberExt as _, util::SubscriberInitExt as _,
};

use crate::{command::*, render::CommandResult};

mod command;
mod keys;
mod platform;
mod render;

fn main() -> Result<()> {
    // the log level hierarchy is determined by:
    //    - if RUST_LOG is detected at runtime
    //    - if RUST_LOG is provided at compile time
    //    - default to INFO
    let filter = EnvFilter::builder()
        .with_default_directive(
            option_env!("RUST_LOG")
                .unwrap_or("info")
                .parse()
                .expect("should provide valid log level at compile time."),
        )
        // parse directives from the RUST_LOG environment variable,
        // overriding the default directive for matching targets.
        .from_env_lossy();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let cli = Cli::parse();
    install_color_eyre(cli.color)?;
    let render_config = render::RenderConfig::new(&cli);

    let Some(command) = cli.command else {
        let mut cmd = Cli::command();
        cmd.print_help()?;
        return Ok(());
    };

    let result = process_commands(command);

    // Render the result of the command
    render_config.render_result(result)
}

fn process_commands(command: Commands) -> CommandResult {
    // Every command works on a freshly loaded store. Load failures are fatal.
    let mut store = KeyStore::load(platform::state::get_config_path()?)?;

    match command {
        Commands::Setup => keys::setup(&mut store, &mut TerminalPrompter::new()),
        Commands::Switch => keys::switch(
            &store,
            &mut TerminalPrompter::new(),
            &AgentSwitcher::system(),
            &mut std::io::stdout(),
        ),
        Commands::List => Ok(keys::list(&store)),
    }
}
