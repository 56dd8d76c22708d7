//! Main parser pipeline.

use thiserror::Error;

use crate::command::Command;
use crate::tokenizer::InputTokenizer;

/// A parse error.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Empty or whitespace-only input
    #[error("empty input")]
    EmptyInput,
    /// A character other than a letter, digit or whitespace
    #[error("invalid character {0:?}")]
    InvalidCharacter(char),
}

/// Turns raw input lines into commands.
#[derive(Clone, Copy, Debug, Default)]
pub struct CommandParser;

impl CommandParser {
    /// Creates a new parser.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Parses one line of input.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] for empty input or input containing
    /// anything but letters, digits and whitespace.
    pub fn parse(&self, raw: &str) -> Result<Command, ParseError> {
        let mut words = InputTokenizer::tokenize(raw)?.into_iter();
        let action = words.next().ok_or(ParseError::EmptyInput)?;
        Ok(Command::new(action, words.collect()))
    }

    /// Parses one line of input, folding errors into an invalid command.
    #[must_use]
    pub fn parse_input(&self, raw: &str) -> Command {
        self.parse(raw).unwrap_or_else(|_| Command::invalid())
    }
}
