//! Line-oriented numeric prompts
//!
//! Every function reads through a [`LineSource`] and writes to any `Write`,
//! so the same code drives a terminal and an in-memory test buffer.

use std::io::{self, Write};

use tracing::debug;

use super::input::{Input, LineSource};

/// Parse a finite number; "inf" and "NaN" count as invalid
pub fn parse_number(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Ask for a number, offering `default`
///
/// Empty input, Ctrl+C or end of input gives `default`. Anything that is not
/// a finite number prints a warning and also gives `default`, so this never
/// fails on user text.
pub fn prompt_with_default<S: LineSource, W: Write>(
    source: &mut S,
    output: &mut W,
    label: &str,
    default: f64,
) -> io::Result<f64> {
    prompt_checked(source, output, label, default, |_| true)
}

/// Like [`prompt_with_default`], but values rejected by `accept` are treated
/// as invalid input
pub fn prompt_checked<S, W, F>(
    source: &mut S,
    output: &mut W,
    label: &str,
    default: f64,
    accept: F,
) -> io::Result<f64>
where
    S: LineSource,
    W: Write,
    F: Fn(f64) -> bool,
{
    let prompt = format!("{label} (Enter to use {default}): ");
    let line = match source.read_line(&prompt, output)? {
        Input::Line(line) => line,
        Input::Interrupted => return Ok(default),
        Input::Eof => {
            writeln!(output)?;
            return Ok(default);
        }
    };

    let entry = line.trim();
    if entry.is_empty() {
        return Ok(default);
    }

    match parse_number(entry).filter(|v| accept(*v)) {
        Some(value) => Ok(value),
        None => {
            debug!(label, entry, default, "invalid numeric entry");
            writeln!(output, "Invalid value. Using {default}")?;
            Ok(default)
        }
    }
}

/// Ask for a number with no default, re-prompting until one is entered
///
/// End of input is reported as `UnexpectedEof`, since no value can be produced.
pub fn prompt_number<S: LineSource, W: Write>(
    source: &mut S,
    output: &mut W,
    label: &str,
) -> io::Result<f64> {
    let prompt = format!("{label}: ");
    loop {
        match source.read_line(&prompt, output)? {
            Input::Line(line) => match parse_number(&line) {
                Some(value) => return Ok(value),
                None => writeln!(output, "Please enter a valid number.")?,
            },
            Input::Interrupted => continue,
            Input::Eof => {
                return Err(io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    format!("input ended while waiting for {label}"),
                ))
            }
        }
    }
}
