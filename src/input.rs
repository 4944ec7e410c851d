//! Line-oriented console input with numeric parsing.
//!
//! All reads go through [`Prompter`], which writes a prompt, blocks for one line and
//! parses it. Malformed values are fatal unless retry mode is enabled.

use crate::model::{MAX_DISTANCE_KM, MIN_DISTANCE_KM};
use rust_decimal::Decimal;
use std::io::{BufRead, Write};
use std::str::FromStr;

#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("console I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("unexpected end of input while reading {field}")]
    UnexpectedEof { field: &'static str },

    #[error("invalid decimal value for {field}: '{input}'")]
    InvalidDecimal { field: &'static str, input: String },

    #[error("invalid number for {field}: '{input}'")]
    InvalidNumber { field: &'static str, input: String },

    #[error("{field} exceeds the supported decimal range")]
    TotalOverflow { field: &'static str },
}

pub type InputResult<T> = Result<T, InputError>;

pub struct Prompter<R, W> {
    reader: R,
    writer: W,
    retry_invalid: bool,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(reader: R, writer: W, retry_invalid: bool) -> Self {
        Self {
            reader,
            writer,
            retry_invalid,
        }
    }

    /// Write a full line to the prompt stream.
    pub fn say(&mut self, line: &str) -> InputResult<()> {
        writeln!(self.writer, "{line}")?;
        Ok(())
    }

    /// Write `prompt` without a newline and read one line. `None` at end of input.
    fn prompt(&mut self, prompt: &str) -> InputResult<Option<String>> {
        write!(self.writer, "{prompt}")?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }

    /// Read free-form text. End of input reads as an empty string.
    pub fn read_text(&mut self, prompt: &str) -> InputResult<String> {
        Ok(self.prompt(prompt)?.unwrap_or_default())
    }

    fn read_parsed<T>(
        &mut self,
        prompt: &str,
        field: &'static str,
        kind: &str,
        parse: impl Fn(&str) -> Option<T>,
        invalid: impl Fn(String) -> InputError,
    ) -> InputResult<T> {
        loop {
            let line = self
                .prompt(prompt)?
                .ok_or(InputError::UnexpectedEof { field })?;
            if let Some(value) = parse(line.trim()) {
                return Ok(value);
            }
            if !self.retry_invalid {
                return Err(invalid(line));
            }
            tracing::warn!(field, input = %line, "rejected malformed input");
            writeln!(
                self.writer,
                "Error: '{}' is not a valid {kind}. Please try again.\n",
                line.trim()
            )?;
        }
    }

    /// Read an exact decimal amount.
    pub fn read_decimal(&mut self, prompt: &str, field: &'static str) -> InputResult<Decimal> {
        self.read_parsed(
            prompt,
            field,
            "amount",
            |s| Decimal::from_str(s).ok(),
            |input| InputError::InvalidDecimal { field, input },
        )
    }

    /// Read a real number.
    pub fn read_number(&mut self, prompt: &str, field: &'static str) -> InputResult<f64> {
        self.read_parsed(
            prompt,
            field,
            "number",
            |s| s.parse::<f64>().ok(),
            |input| InputError::InvalidNumber { field, input },
        )
    }

    /// Read the weekly distance, re-prompting until it falls within the inclusive bounds.
    pub fn read_distance(&mut self) -> InputResult<f64> {
        let prompt = format!(
            "Enter Total Distance Traveled this week (km, {MIN_DISTANCE_KM}-{MAX_DISTANCE_KM}): "
        );
        loop {
            let distance = self.read_number(&prompt, "total distance")?;
            if (MIN_DISTANCE_KM..=MAX_DISTANCE_KM).contains(&distance) {
                return Ok(distance);
            }
            tracing::info!(distance, "distance out of range");
            writeln!(
                self.writer,
                "Error: Distance must be between {MIN_DISTANCE_KM} and {MAX_DISTANCE_KM}. Please try again.\n"
            )?;
        }
    }
}
