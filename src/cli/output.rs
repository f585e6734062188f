//! Handles all user-facing output for the CLI.
//!
//! Values go to stdout as JSON, diagnostics go to stderr through miette.

use std::io::{self, IsTerminal, Write};

use serde_json::Value;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::path::Path;

fn color_choice() -> ColorChoice {
    if io::stdout().is_terminal() {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    }
}

/// Renders a found value. With `raw`, strings are printed without quotes.
pub fn render_value(value: &Value, raw: bool) -> String {
    match value {
        Value::String(s) if raw => s.clone(),
        // Serializing a `Value` cannot fail.
        other => serde_json::to_string_pretty(other).unwrap_or_else(|_| other.to_string()),
    }
}

pub fn print_value(value: &Value, raw: bool) {
    println!("{}", render_value(value, raw));
}

/// Prints each segment of a parsed path on its own line, index first.
pub fn print_segments(path: &Path) -> io::Result<()> {
    let mut stdout = StandardStream::stdout(color_choice());
    for (i, (segment, span)) in path.spanned_segments().enumerate() {
        stdout.set_color(ColorSpec::new().set_fg(Some(Color::Yellow)).set_bold(true))?;
        write!(stdout, "{i:>3}")?;
        stdout.reset()?;
        writeln!(stdout, "  {segment:?}  ({}..{})", span.start, span.end)?;
    }
    Ok(())
}

/// Prints an error report with full miette diagnostics.
pub fn print_error(report: miette::Report) {
    eprintln!("{report:?}");
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn raw_only_affects_strings() {
        assert_eq!(render_value(&json!("foo"), true), "foo");
        assert_eq!(render_value(&json!("foo"), false), "\"foo\"");
        assert_eq!(render_value(&json!(2), true), "2");
        assert_eq!(render_value(&json!(null), true), "null");
        assert_eq!(render_value(&json!([1]), false), "[\n  1\n]");
    }
}
