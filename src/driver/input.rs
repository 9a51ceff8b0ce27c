//! Prompted line input with integer validation

use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use thiserror::Error;

/// Errors raised while reading prompted input
#[derive(Debug, Error)]
pub enum InputError {
    #[error("input stream closed while waiting for a response")]
    UnexpectedEof,
}

/// Write a prompt and read one line, stripped of its trailing newline
pub fn prompt_line<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
    prompt: &str,
) -> Result<String> {
    write!(writer, "{}", prompt).context("Failed to write prompt")?;
    writer.flush().context("Failed to flush prompt")?;

    let mut line = String::new();
    let bytes_read = reader
        .read_line(&mut line)
        .context("Failed to read input line")?;
    if bytes_read == 0 {
        return Err(InputError::UnexpectedEof.into());
    }

    while line.ends_with('\n') || line.ends_with('\r') {
        line.pop();
    }
    Ok(line)
}

/// Prompt until the response parses as an integer.
///
/// A failed parse prints a validation message and re-prompts indefinitely.
/// Negative values parse successfully and are returned as-is; range
/// validation is not this function's concern.
pub fn prompt_integer<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
    prompt: &str,
) -> Result<i64> {
    loop {
        let line = prompt_line(reader, writer, prompt)?;
        match line.trim().parse::<i64>() {
            Ok(value) => return Ok(value),
            Err(_) => {
                writeln!(writer, "Invalid input. Please enter a valid integer value.")
                    .context("Failed to write validation message")?;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn output_of(bytes: Vec<u8>) -> String {
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn test_prompt_line() {
        let mut input = Cursor::new("hello\n");
        let mut output = Vec::new();
        let line = prompt_line(&mut input, &mut output, "say: ").unwrap();
        assert_eq!(line, "hello");
        assert_eq!(output_of(output), "say: ");
    }

    #[test]
    fn test_prompt_integer_valid() {
        let mut input = Cursor::new("42\n");
        let mut output = Vec::new();
        let value = prompt_integer(&mut input, &mut output, "n: ").unwrap();
        assert_eq!(value, 42);
    }

    #[test]
    fn test_prompt_integer_negative() {
        let mut input = Cursor::new("-7\n");
        let mut output = Vec::new();
        let value = prompt_integer(&mut input, &mut output, "n: ").unwrap();
        assert_eq!(value, -7);
    }

    #[test]
    fn test_prompt_integer_reprompts_on_garbage() {
        let mut input = Cursor::new("abc\n3.5\n12\n");
        let mut output = Vec::new();
        let value = prompt_integer(&mut input, &mut output, "n: ").unwrap();
        assert_eq!(value, 12);

        let written = output_of(output);
        assert_eq!(
            written
                .matches("Invalid input. Please enter a valid integer value.")
                .count(),
            2
        );
        assert_eq!(written.matches("n: ").count(), 3);
    }

    #[test]
    fn test_prompt_integer_eof_is_error() {
        let mut input = Cursor::new("");
        let mut output = Vec::new();
        let result = prompt_integer(&mut input, &mut output, "n: ");
        assert!(result.is_err());
    }

    #[test]
    fn test_whitespace_tolerated() {
        let mut input = Cursor::new("  8  \r\n");
        let mut output = Vec::new();
        let value = prompt_integer(&mut input, &mut output, "n: ").unwrap();
        assert_eq!(value, 8);
    }
}
