/// `ansi` command: report whether escape sequences will be rendered.
use minion_cli::style::ANSICON_VAR;
use minion_cli::{Console, ConsoleError, Platform};

use crate::cli::OutputCtx;
use crate::cli::output::write_ansi;
use crate::types::AnsiSupportOutput;

/// Run `minion ansi`.
///
/// # Errors
///
/// Cannot currently fail.
pub fn run<P: Platform>(console: &Console<P>, ctx: &OutputCtx) -> Result<(), ConsoleError> {
    write_ansi(&report(console), ctx);
    Ok(())
}

fn report<P: Platform>(console: &Console<P>) -> AnsiSupportOutput {
    let platform = console.platform();
    AnsiSupportOutput {
        supported: console.supports_ansi(),
        windows: platform.is_windows_like(),
        ansicon: platform.env_var(ANSICON_VAR),
    }
}
