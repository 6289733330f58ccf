/// Shared serializable output types for all commands.
///
/// These types are what gets written to stdout, either as JSON or rendered
/// as a table. They are decoupled from the library's `Console` and color types.
use serde::{Deserialize, Serialize};

use minion_cli::ConsoleError;

/// One row of the color tables.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaletteEntryOutput {
    /// `foreground` or `background`.
    pub layer: String,
    /// Color name as accepted by `--fg` / `--bg`.
    pub name: String,
    /// SGR parameter emitted for this color (e.g., "0;31", "42").
    pub code: String,
    /// The color name painted in its own color, or null without ANSI support.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sample: Option<String>,
}

/// ANSI capability report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnsiSupportOutput {
    /// Whether escape sequences will be emitted.
    pub supported: bool,
    /// Whether the host is treated as Windows.
    pub windows: bool,
    /// Value of `ANSICON`, or null when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ansicon: Option<String>,
}

/// Result of a `color` invocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColorOutput {
    /// Input text.
    pub text: String,
    /// Text wrapped in escape sequences (or unchanged without ANSI support).
    pub colored: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub foreground: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
}

/// Result of an `ask` invocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerOutput {
    /// The prompt that was shown.
    pub prompt: String,
    /// The accepted answer.
    pub answer: String,
}

/// A structured error envelope for JSON error output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorOutput {
    /// Always `false`.
    pub ok: bool,
    /// Error details.
    pub error: ErrorDetail,
}

/// Error detail in the JSON error envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    /// Machine-readable error code (`snake_case`).
    pub code: String,
    /// Human-readable error message.
    pub message: String,
}

impl ErrorOutput {
    /// Construct from a `ConsoleError`.
    #[must_use]
    pub fn from_console_error(err: &ConsoleError) -> Self {
        Self {
            ok: false,
            error: ErrorDetail {
                code: err.code().to_owned(),
                message: err.to_string(),
            },
        }
    }
}
