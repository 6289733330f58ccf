/// Terminal styling: ANSI capability detection and color painting.
pub mod color;
pub mod errors;
pub mod platform;

pub use color::{Background, Foreground, RESET, paint};
pub use errors::ColorError;
pub use platform::{ANSICON_VAR, Platform, SystemPlatform, supports_ansi};
