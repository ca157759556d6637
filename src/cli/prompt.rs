//! Interactive console
//!
//! Line-oriented prompts over an async reader and a blocking writer. The
//! binary wires stdin/stdout in; tests use byte slices and `Vec<u8>`.

use std::fmt::Display;
use std::io::Write;

use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::common::{Error, Result};

/// Prompt shown again after an unrecognized yes/no answer
pub const REPROMPT: &str = "Please answer yes or no.";

pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R, W> Console<R, W>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print one line
    pub fn say(&mut self, line: impl Display) -> Result<()> {
        writeln!(self.output, "{}", line)?;
        self.output.flush()?;
        Ok(())
    }

    /// Read one line without its line terminator; `None` at end of input
    ///
    /// Invalid UTF-8 is replaced rather than rejected, so it reaches the
    /// caller as an unrecognized answer.
    pub async fn read_line(&mut self) -> Result<Option<String>> {
        let mut raw = Vec::new();
        if self.input.read_until(b'\n', &mut raw).await? == 0 {
            return Ok(None);
        }
        let mut line = String::from_utf8_lossy(&raw).into_owned();
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    /// Ask a yes/no question until the answer is recognized
    ///
    /// There is no default answer. End of input is an error since the
    /// question could never be answered.
    pub async fn confirm(&mut self, question: &str) -> Result<bool> {
        self.say(question)?;
        loop {
            let line = self.read_line().await?.ok_or(Error::InputClosed)?;
            match parse_consent(&line) {
                Some(answer) => return Ok(answer),
                None => self.say(REPROMPT)?,
            }
        }
    }

    /// Ask for an exact confirmation string; anything else is a refusal
    pub async fn require_literal(&mut self, prompt: &str, literal: &str) -> Result<bool> {
        self.say(prompt)?;
        Ok(self.read_line().await?.as_deref() == Some(literal))
    }
}

#[cfg(test)]
impl<R> Console<R, Vec<u8>> {
    pub fn output_text(&self) -> String {
        String::from_utf8_lossy(&self.output).into_owned()
    }
}

/// Interpret a yes/no answer by its first non-blank character
pub fn parse_consent(answer: &str) -> Option<bool> {
    match answer.trim_start().chars().next() {
        Some('y' | 'Y') => Some(true),
        Some('n' | 'N') => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_consent() {
        assert_eq!(parse_consent("y"), Some(true));
        assert_eq!(parse_consent("Yes"), Some(true));
        assert_eq!(parse_consent("  yep"), Some(true));
        assert_eq!(parse_consent("N"), Some(false));
        assert_eq!(parse_consent("nah"), Some(false));
        assert_eq!(parse_consent(""), None);
        assert_eq!(parse_consent("ok"), None);
        assert_eq!(parse_consent("1"), None);
    }

    #[tokio::test]
    async fn test_read_line_strips_terminators() {
        let mut console = Console::new(&b"first\r\nsecond\nlast"[..], Vec::new());
        assert_eq!(console.read_line().await.unwrap().as_deref(), Some("first"));
        assert_eq!(console.read_line().await.unwrap().as_deref(), Some("second"));
        assert_eq!(console.read_line().await.unwrap().as_deref(), Some("last"));
        assert_eq!(console.read_line().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_confirm_loops_until_recognized() {
        let mut console = Console::new(&b"what\n?\nyes\n"[..], Vec::new());
        assert!(console.confirm("Install? (y/n)").await.unwrap());
        let output = console.output_text();
        assert!(output.starts_with("Install? (y/n)\n"));
        assert_eq!(output.matches(REPROMPT).count(), 2);
    }

    #[tokio::test]
    async fn test_non_utf8_answer_reprompts() {
        let mut console = Console::new(&b"\xe9\nn\n"[..], Vec::new());
        assert!(!console.confirm("Install? (y/n)").await.unwrap());
        assert_eq!(console.output_text().matches(REPROMPT).count(), 1);
    }

    #[tokio::test]
    async fn test_non_utf8_is_not_the_literal() {
        let mut console = Console::new(&b"y\xffes\n"[..], Vec::new());
        assert!(!console.require_literal("Continue?", "yes").await.unwrap());
    }

    #[tokio::test]
    async fn test_confirm_at_end_of_input() {
        let mut console = Console::new(&b"maybe\n"[..], Vec::new());
        let err = console.confirm("Install? (y/n)").await.unwrap_err();
        assert!(matches!(err, Error::InputClosed));
    }

    #[tokio::test]
    async fn test_require_literal_is_exact() {
        for (input, expected) in [
            ("yes\n", true),
            ("yes\r\n", true),
            ("Yes\n", false),
            ("y\n", false),
            (" yes\n", false),
            ("yes please\n", false),
            ("", false),
        ] {
            let mut console = Console::new(input.as_bytes(), Vec::new());
            assert_eq!(
                console.require_literal("Continue?", "yes").await.unwrap(),
                expected,
                "input {:?}",
                input
            );
        }
    }
}
