/// Output formatting: JSON, table, plain modes. TTY detection.
use std::io::{IsTerminal, Write};

use comfy_table::{Cell, Table, presets::UTF8_BORDERS_ONLY};
use serde::Serialize;

use super::args::OutputFormat;
use crate::types::{AnsiSupportOutput, AnswerOutput, ColorOutput, ErrorOutput, PaletteEntryOutput};

/// Resolve the effective output format, handling `--json` flag and TTY auto-detection.
#[must_use]
pub fn resolve_format(fmt: OutputFormat, json_flag: bool) -> OutputFormat {
    resolve_format_for(fmt, json_flag, std::io::stdout().is_terminal())
}

fn resolve_format_for(fmt: OutputFormat, json_flag: bool, tty: bool) -> OutputFormat {
    if json_flag {
        return OutputFormat::Json;
    }
    match fmt {
        OutputFormat::Auto if tty => OutputFormat::Table,
        OutputFormat::Auto => OutputFormat::Json,
        other => other,
    }
}

/// Output context passed to all formatters.
pub struct OutputCtx {
    pub format: OutputFormat,
    pub no_header: bool,
}

impl OutputCtx {
    /// Construct from CLI args.
    #[must_use]
    pub fn new(fmt: OutputFormat, json_flag: bool, no_header: bool) -> Self {
        Self {
            format: resolve_format(fmt, json_flag),
            no_header,
        }
    }
}

// --- Color ---

/// Write a colored string to stdout.
///
/// Table and plain modes print the colored text itself so it can be piped.
pub fn write_color(result: &ColorOutput, ctx: &OutputCtx) {
    match ctx.format {
        OutputFormat::Json => print_json(result),
        OutputFormat::Compact => print_compact_json(result),
        OutputFormat::Ndjson => print_ndjson(&[result]),
        OutputFormat::Table | OutputFormat::Plain | OutputFormat::Auto => {
            println!("{}", result.colored);
        }
    }
}

// --- Ask ---

/// Write the accepted answer to stdout.
pub fn write_answer(result: &AnswerOutput, ctx: &OutputCtx) {
    match ctx.format {
        OutputFormat::Json => print_json(result),
        OutputFormat::Compact => print_compact_json(result),
        OutputFormat::Ndjson => print_ndjson(&[result]),
        OutputFormat::Table | OutputFormat::Plain | OutputFormat::Auto => {
            println!("{}", result.answer);
        }
    }
}

// --- ANSI support ---

/// Write the ANSI capability report to stdout.
pub fn write_ansi(result: &AnsiSupportOutput, ctx: &OutputCtx) {
    match ctx.format {
        OutputFormat::Json => print_json(result),
        OutputFormat::Compact => print_compact_json(result),
        OutputFormat::Ndjson => print_ndjson(&[result]),
        OutputFormat::Plain => println!("{}", if result.supported { "yes" } else { "no" }),
        OutputFormat::Table | OutputFormat::Auto => {
            let mut table = Table::new();
            table.load_preset(UTF8_BORDERS_ONLY);
            if !ctx.no_header {
                table.set_header(["SUPPORTED", "WINDOWS", "ANSICON"]);
            }
            table.add_row([
                if result.supported { "yes" } else { "no" },
                if result.windows { "yes" } else { "no" },
                result.ansicon.as_deref().unwrap_or(""),
            ]);
            println!("{table}");
        }
    }
}

// --- Palette ---

/// Write the color tables to stdout.
pub fn write_palette(entries: &[PaletteEntryOutput], ctx: &OutputCtx) {
    match ctx.format {
        OutputFormat::Json => print_json(entries),
        OutputFormat::Compact => print_compact_json(entries),
        OutputFormat::Ndjson => print_ndjson(entries),
        OutputFormat::Plain => {
            for entry in entries {
                println!("{}", entry.name);
            }
        }
        OutputFormat::Table | OutputFormat::Auto => println!("{}", palette_table(entries, ctx)),
    }
}

fn palette_table(entries: &[PaletteEntryOutput], ctx: &OutputCtx) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    if !ctx.no_header {
        table.set_header(["LAYER", "NAME", "CODE", "SAMPLE"]);
    }
    for entry in entries {
        table.add_row([
            Cell::new(&entry.layer),
            Cell::new(&entry.name),
            Cell::new(&entry.code),
            Cell::new(entry.sample.as_deref().unwrap_or("")),
        ]);
    }
    table
}

// --- Error output ---

/// Write a structured error to stderr.
pub fn write_error(err: &ErrorOutput, format: OutputFormat, json_flag: bool) {
    let fmt = resolve_format(format, json_flag);
    let stderr = std::io::stderr();
    let mut out = stderr.lock();
    match fmt {
        OutputFormat::Json | OutputFormat::Compact | OutputFormat::Ndjson => {
            let s = serde_json::to_string_pretty(err).unwrap_or_default();
            let _ = writeln!(out, "{s}");
        }
        _ => {
            let _ = writeln!(out, "Error: {}", err.error.message);
        }
    }
}

// --- Generic JSON helpers ---

fn print_json<T: Serialize + ?Sized>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{s}"),
        Err(e) => eprintln!("JSON serialization error: {e}"),
    }
}

fn print_compact_json<T: Serialize + ?Sized>(value: &T) {
    match serde_json::to_string(value) {
        Ok(s) => println!("{s}"),
        Err(e) => eprintln!("JSON serialization error: {e}"),
    }
}

fn print_ndjson<T: Serialize>(values: &[T]) {
    for v in values {
        match serde_json::to_string(v) {
            Ok(s) => println!("{s}"),
            Err(e) => eprintln!("JSON serialization error: {e}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_flag_wins() {
        assert_eq!(
            resolve_format_for(OutputFormat::Table, true, true),
            OutputFormat::Json
        );
    }

    #[test]
    fn test_auto_detects_tty() {
        assert_eq!(
            resolve_format_for(OutputFormat::Auto, false, true),
            OutputFormat::Table
        );
        assert_eq!(
            resolve_format_for(OutputFormat::Auto, false, false),
            OutputFormat::Json
        );
        assert_eq!(
            resolve_format_for(OutputFormat::Plain, false, true),
            OutputFormat::Plain
        );
    }

    #[test]
    fn test_palette_table_rows() {
        let ctx = OutputCtx {
            format: OutputFormat::Table,
            no_header: false,
        };
        let entries = vec![PaletteEntryOutput {
            layer: "background".to_owned(),
            name: "green".to_owned(),
            code: "42".to_owned(),
            sample: None,
        }];
        let rendered = palette_table(&entries, &ctx).to_string();
        assert!(rendered.contains("NAME"));
        assert!(rendered.contains("green"));
        assert!(rendered.contains("42"));
    }
}
