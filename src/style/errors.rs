/// Errors from the color formatting layer.
use thiserror::Error;

/// A color name that is not in the foreground or background table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// The foreground name is not recognized.
    #[error("Invalid CLI foreground color: '{0}'")]
    InvalidForeground(String),

    /// The background name is not recognized.
    #[error("Invalid CLI background color: '{0}'")]
    InvalidBackground(String),
}

impl ColorError {
    /// The offending color name.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::InvalidForeground(name) | Self::InvalidBackground(name) => name,
        }
    }
}
