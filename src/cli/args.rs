/// CLI argument definitions via clap derive.
use clap::{Parser, Subcommand, ValueEnum};

/// minion — prompts, colors and ANSI checks for shell scripts.
#[derive(Debug, Parser)]
#[command(
    name = "minion",
    about = "Prompt for input, color text and check ANSI support from the CLI",
    version,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Output format. Auto-detects: table when TTY, json when piped.
    #[arg(long, global = true, value_name = "FORMAT", default_value = "auto")]
    pub output: OutputFormat,

    /// Shorthand for --output json.
    #[arg(long, global = true, conflicts_with = "output")]
    pub json: bool,

    /// Omit table headers (useful for awk/cut processing).
    #[arg(long, global = true)]
    pub no_header: bool,

    /// Print debug logs to stderr (overrides RUST_LOG).
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    /// Auto-detect: table when stdout is a TTY, json when piped.
    #[default]
    Auto,
    /// JSON array or object (pretty-printed).
    Json,
    /// Compact single-line JSON.
    Compact,
    /// Newline-delimited JSON (one object per line).
    Ndjson,
    /// Aligned table with headers (human-readable).
    Table,
    /// Bare value only (for piping to other commands).
    Plain,
}

/// All subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Wrap text in ANSI color escape sequences.
    Color(ColorArgs),
    /// Prompt for a line of input, optionally restricted to a set of options.
    Ask(AskArgs),
    /// Report whether the terminal renders ANSI sequences.
    Ansi,
    /// List the recognized foreground and background colors.
    Palette(PaletteArgs),
    /// Pause for a number of seconds, or until enter is pressed.
    Wait(WaitArgs),
}

/// Arguments for `minion color`.
#[derive(Debug, Parser)]
pub struct ColorArgs {
    /// Text to color.
    pub text: String,

    /// Foreground color name (see `minion palette`).
    #[arg(long, value_name = "NAME")]
    pub fg: Option<String>,

    /// Background color name (see `minion palette`).
    #[arg(long, value_name = "NAME")]
    pub bg: Option<String>,

    /// Emit escape sequences even when ANSI support is not detected.
    #[arg(long)]
    pub force: bool,
}

/// Arguments for `minion ask`.
#[derive(Debug, Parser)]
pub struct AskArgs {
    /// Prompt text.
    pub prompt: String,

    /// An accepted answer. Repeat to allow several; the user is asked again
    /// until one of them is given.
    #[arg(long = "option", short = 'o', value_name = "VALUE")]
    pub options: Vec<String>,

    /// Answer used when the user enters an empty line.
    #[arg(long, value_name = "VALUE")]
    pub default: Option<String>,
}

/// Arguments for `minion palette`.
#[derive(Debug, Parser)]
pub struct PaletteArgs {
    /// Only list foreground colors.
    #[arg(long, conflicts_with = "background")]
    pub foreground: bool,

    /// Only list background colors.
    #[arg(long)]
    pub background: bool,
}

/// Arguments for `minion wait`.
#[derive(Debug, Parser)]
pub struct WaitArgs {
    /// Seconds to wait. 0 waits for enter.
    #[arg(default_value = "0")]
    pub seconds: u64,

    /// Show a per-second countdown.
    #[arg(long)]
    pub countdown: bool,
}
