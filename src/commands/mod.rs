/// Command dispatch: routes `Command` enum variants to their implementations.
pub mod ansi;
pub mod ask;
pub mod color;
pub mod palette;
pub mod wait;

use minion_cli::{Console, ConsoleError, Platform};

use crate::cli::OutputCtx;
use crate::cli::args::Command;

/// Dispatch a parsed `Command` to its handler.
///
/// # Errors
///
/// Returns `ConsoleError` on any command failure.
pub fn dispatch<P: Platform>(
    command: &Command,
    console: &mut Console<P>,
    ctx: &OutputCtx,
) -> Result<(), ConsoleError> {
    match command {
        Command::Color(args) => color::run(args, console, ctx),
        Command::Ask(args) => ask::run(args, console, ctx),
        Command::Ansi => ansi::run(console, ctx),
        Command::Palette(args) => palette::run(args, console, ctx),
        Command::Wait(args) => wait::run(args, console),
    }
}
