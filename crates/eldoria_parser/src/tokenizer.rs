//! Input tokenization.
//!
//! Validates raw player input and splits it into lowercase words.

use crate::parser::ParseError;

/// Tokenizes player input.
pub struct InputTokenizer;

impl InputTokenizer {
    /// Tokenizes a raw input string into lowercase words.
    ///
    /// - Accepts only ASCII letters, digits and whitespace
    /// - Rejects the whole line on the first other character
    /// - Converts words to lowercase
    ///
    /// # Errors
    ///
    /// Returns `InvalidCharacter` for the first disallowed character, or
    /// `EmptyInput` if the line holds no words.
    pub fn tokenize(input: &str) -> Result<Vec<String>, ParseError> {
        if let Some(ch) = input
            .chars()
            .find(|ch| !(ch.is_ascii_alphanumeric() || ch.is_ascii_whitespace()))
        {
            return Err(ParseError::InvalidCharacter(ch));
        }

        let words: Vec<String> = input
            .split_ascii_whitespace()
            .map(str::to_ascii_lowercase)
            .collect();

        if words.is_empty() {
            return Err(ParseError::EmptyInput);
        }
        Ok(words)
    }
}
