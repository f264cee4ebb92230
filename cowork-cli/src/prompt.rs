//! Interactive prompting over generic reader/writer pairs.
//!
//! Every interactive flow reads from a `BufRead` and writes to a
//! `Write` so that tests can script a whole session through in-memory
//! buffers. The cancel token `C` aborts the current flow at any text
//! prompt and returns the user to the menu.

use std::io::{BufRead, Write};

use crate::error::CliError;

/// The token that cancels the current interactive flow.
pub const CANCEL_TOKEN: &str = "C";

/// A prompt/response pair over arbitrary I/O.
pub struct Prompter<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    /// Creates a prompter over the given reader and writer.
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Returns a mutable reference to the output side.
    pub fn writer(&mut self) -> &mut W {
        &mut self.writer
    }

    /// Consumes the prompter and returns the output side.
    pub fn into_writer(self) -> W {
        self.writer
    }

    /// Writes a line of output.
    pub fn say(&mut self, message: &str) -> Result<(), CliError> {
        writeln!(self.writer, "{message}")?;
        Ok(())
    }

    /// Prints a prompt and reads one trimmed line.
    ///
    /// # Errors
    ///
    /// Returns an I/O error on read failure or end of input.
    pub fn line(&mut self, prompt: &str) -> Result<String, CliError> {
        write!(self.writer, "{prompt}")?;
        self.writer.flush()?;

        let mut buf = String::new();
        let read = self.reader.read_line(&mut buf)?;
        if read == 0 {
            return Err(CliError::Io(std::io::Error::new(
                std::io::ErrorKind::UnexpectedEof,
                "end of input",
            )));
        }
        Ok(buf.trim().to_string())
    }

    /// Prints a prompt and reads a line, treating the cancel token as
    /// `None`.
    ///
    /// # Errors
    ///
    /// Returns an I/O error on read failure or end of input.
    pub fn line_or_cancel(&mut self, prompt: &str) -> Result<Option<String>, CliError> {
        let input = self.line(prompt)?;
        if input.eq_ignore_ascii_case(CANCEL_TOKEN) {
            Ok(None)
        } else {
            Ok(Some(input))
        }
    }

    /// Asks a yes/no question. Only `y`/`yes` (case-insensitive) counts
    /// as yes.
    ///
    /// # Errors
    ///
    /// Returns an I/O error on read failure or end of input.
    pub fn confirm(&mut self, prompt: &str) -> Result<bool, CliError> {
        let input = self.line(prompt)?;
        Ok(matches!(input.to_lowercase().as_str(), "y" | "yes"))
    }
}
