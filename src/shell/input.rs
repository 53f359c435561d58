//! Where shell lines come from
//!
//! [`LineSource`] hides the difference between an interactive terminal
//! ([`Terminal`], backed by rustyline with line editing and history) and any
//! buffered reader ([`BufferedLines`], used for piped input and tests).

use std::io::{self, BufRead, Write};

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tracing::debug;

/// Outcome of one read
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Line(String), // without its line ending
    Interrupted,  // Ctrl+C
    Eof,          // Ctrl+D or end of the stream
}

pub trait LineSource {
    /// Show `prompt` and read one line. Text already written to `output` is
    /// flushed first so it appears before the prompt.
    fn read_line<W: Write>(&mut self, prompt: &str, output: &mut W) -> io::Result<Input>;

    /// Remember a command line, for sources that keep a history
    fn add_history(&mut self, _line: &str) {}
}

impl<T: LineSource + ?Sized> LineSource for &mut T {
    fn read_line<W: Write>(&mut self, prompt: &str, output: &mut W) -> io::Result<Input> {
        (**self).read_line(prompt, output)
    }

    fn add_history(&mut self, line: &str) {
        (**self).add_history(line)
    }
}

// =========================================================================================
// Interactive terminal
// =========================================================================================

/// Line editor on the controlling terminal
pub struct Terminal {
    editor: DefaultEditor,
}

impl Terminal {
    pub fn new() -> Result<Self, ReadlineError> {
        Ok(Self {
            editor: DefaultEditor::new()?,
        })
    }
}

impl LineSource for Terminal {
    fn read_line<W: Write>(&mut self, prompt: &str, output: &mut W) -> io::Result<Input> {
        output.flush()?;
        match self.editor.readline(prompt) {
            Ok(line) => Ok(Input::Line(line)),
            Err(ReadlineError::Interrupted) => Ok(Input::Interrupted),
            Err(ReadlineError::Eof) => Ok(Input::Eof),
            Err(ReadlineError::Io(e)) => Err(e),
            Err(e) => Err(io::Error::other(e)),
        }
    }

    fn add_history(&mut self, line: &str) {
        if let Err(e) = self.editor.add_history_entry(line) {
            debug!(error = %e, "could not record history entry");
        }
    }
}

// =========================================================================================
// Buffered input
// =========================================================================================

/// Lines from any `BufRead`; the prompt is echoed to the output
pub struct BufferedLines<R> {
    reader: R,
}

impl<R: BufRead> BufferedLines<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> LineSource for BufferedLines<R> {
    fn read_line<W: Write>(&mut self, prompt: &str, output: &mut W) -> io::Result<Input> {
        write!(output, "{prompt}")?;
        output.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(Input::Eof);
        }
        let trimmed_len = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed_len);
        Ok(Input::Line(line))
    }
}
