/// `wait` command: pause, optionally with a countdown.
use minion_cli::{Console, ConsoleError, Platform, Stream};

use crate::cli::args::WaitArgs;

/// Run `minion wait`.
///
/// The countdown and the "press any key" message go to stderr.
///
/// # Errors
///
/// Returns `ConsoleError::Io` if stderr or stdin fails.
pub fn run<P: Platform>(args: &WaitArgs, console: &mut Console<P>) -> Result<(), ConsoleError> {
    console.set_stdout(&Stream::stderr());
    console.wait(args.seconds, args.countdown)
}
