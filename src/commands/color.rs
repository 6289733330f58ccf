/// `color` command: wrap text in ANSI escape sequences.
use minion_cli::{Console, ConsoleError, Platform, paint};

use crate::cli::OutputCtx;
use crate::cli::args::ColorArgs;
use crate::cli::output::write_color;
use crate::types::ColorOutput;

/// Run `minion color`.
///
/// # Errors
///
/// Returns `ConsoleError::Color` if `--fg` or `--bg` is not a known color.
pub fn run<P: Platform>(
    args: &ColorArgs,
    console: &Console<P>,
    ctx: &OutputCtx,
) -> Result<(), ConsoleError> {
    let output = colorize(args, console)?;
    write_color(&output, ctx);
    Ok(())
}

fn colorize<P: Platform>(
    args: &ColorArgs,
    console: &Console<P>,
) -> Result<ColorOutput, ConsoleError> {
    let fg = args.fg.as_deref();
    let bg = args.bg.as_deref();
    let colored = if args.force {
        paint(&args.text, fg, bg, true)?
    } else {
        console.color(&args.text, fg, bg)?
    };

    Ok(ColorOutput {
        text: args.text.clone(),
        colored,
        foreground: args.fg.clone(),
        background: args.bg.clone(),
    })
}
