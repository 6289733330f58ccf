/// Platform capability queries used for ANSI detection.
///
/// Detection only needs two facts about the host: whether it behaves like
/// Windows, and the value of an environment variable. Both go through
/// `Platform` so tests can answer them without touching process state.
use std::env;

/// Environment variable set by the ANSICON console wrapper on Windows.
pub const ANSICON_VAR: &str = "ANSICON";

/// Source of host facts for capability detection.
pub trait Platform {
    /// Whether the host is Windows or behaves like it for console purposes.
    fn is_windows_like(&self) -> bool;

    /// Value of an environment variable, or `None` when unset or not unicode.
    fn env_var(&self, name: &str) -> Option<String>;
}

/// The real host.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemPlatform;

impl Platform for SystemPlatform {
    fn is_windows_like(&self) -> bool {
        cfg!(windows)
    }

    fn env_var(&self, name: &str) -> Option<String> {
        env::var(name).ok()
    }
}

/// Whether ANSI escape sequences will be rendered by the terminal.
///
/// Only a Windows-like host without a non-empty `ANSICON` is treated as
/// lacking support.
#[must_use]
pub fn supports_ansi<P: Platform + ?Sized>(platform: &P) -> bool {
    if !platform.is_windows_like() {
        return true;
    }
    platform
        .env_var(ANSICON_VAR)
        .is_some_and(|value| !value.is_empty())
}
