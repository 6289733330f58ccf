/// `palette` command: list recognized color names and their codes.
use minion_cli::style::{Background, Foreground};
use minion_cli::{Console, ConsoleError, Platform, paint};

use crate::cli::OutputCtx;
use crate::cli::args::PaletteArgs;
use crate::cli::output::write_palette;
use crate::types::PaletteEntryOutput;

/// Run `minion palette`.
///
/// # Errors
///
/// Returns `ConsoleError::Color` only if a table entry fails to paint itself.
pub fn run<P: Platform>(
    args: &PaletteArgs,
    console: &Console<P>,
    ctx: &OutputCtx,
) -> Result<(), ConsoleError> {
    let entries = entries(args, console.supports_ansi())?;
    write_palette(&entries, ctx);
    Ok(())
}

fn entries(args: &PaletteArgs, ansi: bool) -> Result<Vec<PaletteEntryOutput>, ConsoleError> {
    let mut out = Vec::new();

    if !args.background {
        for fg in Foreground::ALL {
            let sample = ansi
                .then(|| paint(fg.name(), Some(fg.name()), None, true))
                .transpose()?;
            out.push(PaletteEntryOutput {
                layer: "foreground".to_owned(),
                name: fg.name().to_owned(),
                code: fg.code().to_owned(),
                sample,
            });
        }
    }

    if !args.foreground {
        for bg in Background::ALL {
            let sample = ansi
                .then(|| paint(&format!(" {} ", bg.name()), None, Some(bg.name()), true))
                .transpose()?;
            out.push(PaletteEntryOutput {
                layer: "background".to_owned(),
                name: bg.name().to_owned(),
                code: bg.code().to_owned(),
                sample,
            });
        }
    }

    Ok(out)
}
