/// Errors from the console session layer.
use thiserror::Error;

use crate::style::ColorError;

/// Errors that can occur while talking to the user.
#[derive(Debug, Error)]
pub enum ConsoleError {
    /// A color name was not recognized.
    #[error(transparent)]
    Color(#[from] ColorError),

    /// The input stream ended while a prompt was waiting for an answer.
    #[error("Input ended before an answer to '{prompt}' was given")]
    EndOfInput {
        /// The prompt text that was left unanswered.
        prompt: String,
    },

    /// Reading from or writing to a configured stream failed.
    #[error("Stream I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Exit code mapping for `ConsoleError` variants.
impl ConsoleError {
    /// Return the CLI exit code for this error.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Color(_) => 2,
            Self::EndOfInput { .. } => 4,
            Self::Io(_) => 1,
        }
    }

    /// Machine-readable error code (`snake_case`).
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::Color(ColorError::InvalidForeground(_)) => "invalid_foreground_color",
            Self::Color(ColorError::InvalidBackground(_)) => "invalid_background_color",
            Self::EndOfInput { .. } => "end_of_input",
            Self::Io(_) => "io_error",
        }
    }
}
