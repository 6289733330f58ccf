#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! minion-cli — prompted input, stream redirection and ANSI colors for
//! command-line tools.

pub mod console;
pub mod style;

pub use console::{Console, ConsoleError, Mode, Stream};
pub use style::{ColorError, Platform, SystemPlatform, paint, supports_ansi};
