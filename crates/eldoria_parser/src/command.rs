//! Parsed commands.

/// An action word plus its arguments.
///
/// Produced by the parser and consumed by the dispatcher. An invalid
/// command has an empty action and no arguments.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Command {
    /// The first word, lowercased.
    pub action: String,
    /// Remaining words, lowercased, in order.
    pub arguments: Vec<String>,
    /// Whether the input passed validation.
    pub valid: bool,
}

impl Command {
    /// Creates a valid command.
    #[must_use]
    pub fn new(action: impl Into<String>, arguments: Vec<String>) -> Self {
        Self {
            action: action.into(),
            arguments,
            valid: true,
        }
    }

    /// Creates an invalid command.
    #[must_use]
    pub fn invalid() -> Self {
        Self::default()
    }

    /// All arguments joined by single spaces, for multi-word names.
    #[must_use]
    pub fn target(&self) -> String {
        self.arguments.join(" ")
    }

    /// The first argument, if any.
    #[must_use]
    pub fn first_argument(&self) -> Option<&str> {
        self.arguments.first().map(String::as_str)
    }

    /// Splits the arguments around the first occurrence of `word`.
    ///
    /// `give quest scroll to elda` split on `to` yields
    /// `("quest scroll", "elda")`. Returns `None` if `word` is absent.
    #[must_use]
    pub fn split_on(&self, word: &str) -> Option<(String, String)> {
        let index = self.arguments.iter().position(|arg| arg == word)?;
        Some((
            self.arguments[..index].join(" "),
            self.arguments[index + 1..].join(" "),
        ))
    }
}
