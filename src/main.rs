#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! minion — prompts, colors and ANSI checks for shell scripts.

mod cli;
mod commands;
#[cfg(test)]
mod test_support;
mod types;

use clap::Parser;
use minion_cli::Console;
use tracing_subscriber::EnvFilter;

use cli::{Cli, OutputCtx, write_error};
use types::ErrorOutput;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.debug)?;

    let ctx = OutputCtx::new(cli.output, cli.json, cli.no_header);
    let mut console = Console::new();

    match commands::dispatch(&cli.command, &mut console, &ctx) {
        Ok(()) => Ok(()),
        Err(err) => {
            tracing::debug!(error = ?err, "command failed");
            let error_output = ErrorOutput::from_console_error(&err);
            write_error(&error_output, cli.output, cli.json);
            std::process::exit(err.exit_code());
        }
    }
}

/// Log filter: `--debug` > `RUST_LOG` > `warn`. Logs go to stderr so they
/// never mix with command output.
fn init_tracing(debug: bool) -> anyhow::Result<()> {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialise logging: {e}"))
}
