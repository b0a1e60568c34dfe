// src/prompt.rs
use std::io::{BufRead, Write};

use tracing::warn;

use crate::error::{DisperserError, DisperserResult};

pub const MIN_COUNT: u32 = 1;
pub const MAX_COUNT: u32 = 100;

/// Re-prompts are bounded so garbage piped on stdin cannot spin forever.
pub const MAX_PROMPT_ATTEMPTS: u32 = 10;

/// Parse an operator answer into a transfer count, if it is one.
pub fn parse_count(input: &str) -> Option<u32> {
    let n: u32 = input.trim().parse().ok()?;
    (MIN_COUNT..=MAX_COUNT).contains(&n).then_some(n)
}

/// Ask the operator how many transfers to send, re-issuing the prompt on
/// invalid input up to the attempt cap.
pub fn read_transfer_count(
    mut input: impl BufRead,
    mut output: impl Write,
) -> DisperserResult<u32> {
    for _ in 0..MAX_PROMPT_ATTEMPTS {
        write!(output, "Number of transfers to send ({MIN_COUNT}-{MAX_COUNT}): ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Err(std::io::Error::new(
                std::io::ErrorKind::UnexpectedEof,
                "input closed before a transfer count was given",
            )
            .into());
        }

        match parse_count(&line) {
            Some(count) => return Ok(count),
            None => {
                warn!(input = %line.trim(), "invalid transfer count");
                writeln!(
                    output,
                    "Invalid input. Enter a number between {MIN_COUNT} and {MAX_COUNT}."
                )?;
            }
        }
    }

    Err(DisperserError::PromptExhausted(MAX_PROMPT_ATTEMPTS))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn prompts_issued(output: &[u8]) -> usize {
        String::from_utf8_lossy(output)
            .matches("Number of transfers to send")
            .count()
    }

    #[test]
    fn parses_in_range_numbers_only() {
        assert_eq!(parse_count("5"), Some(5));
        assert_eq!(parse_count("  100 \n"), Some(100));
        assert_eq!(parse_count("1"), Some(1));
        assert_eq!(parse_count("0"), None);
        assert_eq!(parse_count("101"), None);
        assert_eq!(parse_count("abc"), None);
        assert_eq!(parse_count("-3"), None);
        assert_eq!(parse_count(""), None);
    }

    #[test]
    fn accepts_first_valid_answer() {
        let mut output = Vec::new();
        let count = read_transfer_count(Cursor::new(b"7\n"), &mut output).unwrap();
        assert_eq!(count, 7);
        assert_eq!(prompts_issued(&output), 1);
    }

    #[test]
    fn reprompts_exactly_once_on_one_bad_answer() {
        let mut output = Vec::new();
        let count = read_transfer_count(Cursor::new(b"abc\n5\n"), &mut output).unwrap();
        assert_eq!(count, 5);
        assert_eq!(prompts_issued(&output), 2);
        assert!(String::from_utf8_lossy(&output).contains("Invalid input"));
    }

    #[test]
    fn gives_up_after_the_attempt_cap() {
        let garbage = "nope\n".repeat(MAX_PROMPT_ATTEMPTS as usize + 5);
        let mut output = Vec::new();
        let err = read_transfer_count(Cursor::new(garbage.into_bytes()), &mut output).unwrap_err();
        assert!(matches!(err, DisperserError::PromptExhausted(_)));
        assert_eq!(prompts_issued(&output), MAX_PROMPT_ATTEMPTS as usize);
    }

    #[test]
    fn closed_input_is_an_error() {
        let mut output = Vec::new();
        let err = read_transfer_count(Cursor::new(b""), &mut output).unwrap_err();
        assert!(matches!(err, DisperserError::Io(_)));
    }
}
