//! CLI output formatting utilities.
//!
//! Colors follow one scheme everywhere: keys cyan, strings green, numbers
//! yellow, booleans and null magenta.

use std::fmt::Write;

use colored::Colorize;

use crate::options::{DesktopImageOptions, DisplayId};

const INDENT: &str = "  ";

/// Prints JSON with syntax highlighting.
pub fn print_highlighted_json(value: &serde_json::Value) {
    let mut out = String::new();
    write_value(&mut out, value, 0);
    println!("{out}");
}

/// Renders a JSON value into `out` at the given nesting depth.
fn write_value(out: &mut String, value: &serde_json::Value, depth: usize) {
    use serde_json::Value;

    match value {
        Value::Null => out.push_str(&"null".magenta().to_string()),
        Value::Bool(b) => out.push_str(&b.to_string().magenta().to_string()),
        Value::Number(n) => out.push_str(&n.to_string().yellow().to_string()),
        Value::String(s) => out.push_str(&quote(s).green().to_string()),
        Value::Array(items) => {
            write_container(out, '[', ']', depth, items.iter().map(|item| (None, item)));
        }
        Value::Object(map) => write_container(
            out,
            '{',
            '}',
            depth,
            map.iter().map(|(key, item)| (Some(key.as_str()), item)),
        ),
    }
}

fn write_container<'a>(
    out: &mut String,
    open: char,
    close: char,
    depth: usize,
    entries: impl ExactSizeIterator<Item = (Option<&'a str>, &'a serde_json::Value)>,
) {
    let len = entries.len();
    out.push_str(&open.to_string().white().bold().to_string());
    if len == 0 {
        out.push_str(&close.to_string().white().bold().to_string());
        return;
    }

    for (index, (key, item)) in entries.enumerate() {
        out.push('\n');
        out.push_str(&INDENT.repeat(depth + 1));
        if let Some(key) = key {
            let _ = write!(out, "{}{} ", quote(key).cyan(), ":".white());
        }
        write_value(out, item, depth + 1);
        if index + 1 < len {
            out.push_str(&",".white().to_string());
        }
    }

    out.push('\n');
    out.push_str(&INDENT.repeat(depth));
    out.push_str(&close.to_string().white().bold().to_string());
}

/// JSON-quotes a string.
fn quote(s: &str) -> String {
    serde_json::to_string(s).unwrap_or_else(|_| format!("\"{s}\""))
}

/// Prints display options as aligned, human-readable lines.
pub fn print_options(display: DisplayId, options: &DesktopImageOptions) {
    let color = options.desktop_fill_color;
    println!("{}", format!("Display {display}").bold());
    println!("  {:<16}{}", "Scaling:", options.image_scaling);
    println!("  {:<16}{}", "Allow clipping:", format_bool(options.allow_clipping));
    println!(
        "  {:<16}{} (rgb {}, {}, {}, alpha {:.2})",
        "Fill color:",
        color.to_hex(),
        color.red,
        color.green,
        color.blue,
        color.alpha
    );
}

/// Formats a boolean as a colored string.
#[must_use]
pub fn format_bool(value: bool) -> String {
    if value {
        "✓".green().to_string()
    } else {
        "✗".red().to_string()
    }
}
