//! What a turn produced.
//!
//! Player mistakes are [`Feedback`], never errors: each renders as one
//! line followed by the invitation to type `help`.

use std::fmt;

use eldoria_parser::Action;

/// Appended to every feedback line.
pub const HELP_INVITATION: &str = "Type 'help' for a list of commands.";

/// A recoverable player mistake.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Feedback {
    /// Empty input or input with disallowed characters.
    InvalidCommand,
    /// A verb no handler knows.
    UnknownCommand(String),
    /// `go` without a direction.
    MissingDirection,
    /// `go` with a word that is not a direction.
    InvalidDirection(String),
    /// No exit that way.
    Blocked,
    /// A verb that needs an object got none.
    MissingTarget(Action),
    /// Nothing by that name is visible.
    NotHere,
    /// The inventory is at capacity.
    InventoryFull,
    /// Nothing by that name is carried.
    NotCarried,
    /// The item has no use capability.
    NotUsable,
    /// The item's use predicate refused; holds the item's refusal text.
    CannotUseHere(String),
    /// No NPC by that name is present.
    NoSuchPerson(String),
    /// `ask` without `about <topic>`.
    MissingTopic,
    /// `give` without `to <npc>`.
    MissingRecipient,
    /// `answer` where there is no puzzle.
    NoPuzzle,
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCommand => f.write_str("Invalid command."),
            Self::UnknownCommand(verb) => write!(f, "Unknown command '{verb}'."),
            Self::MissingDirection => {
                f.write_str("Go where? Please specify a direction (north, south, east, west).")
            }
            Self::InvalidDirection(word) => write!(
                f,
                "Invalid direction '{word}'. Please use: north, south, east, or west."
            ),
            Self::Blocked => f.write_str("You cannot go that way."),
            Self::MissingTarget(Action::Talk) => f.write_str("Who would you like to talk to?"),
            Self::MissingTarget(Action::Answer) => f.write_str("What is your answer?"),
            Self::MissingTarget(action) => write!(f, "What would you like to {action}?"),
            Self::NotHere => f.write_str("You don't see that here."),
            Self::InventoryFull => f.write_str("You can't carry any more items."),
            Self::NotCarried => f.write_str("You don't have that item."),
            Self::NotUsable => f.write_str("You can't use that item."),
            Self::CannotUseHere(refusal) => f.write_str(refusal),
            Self::NoSuchPerson(name) => write!(f, "There is no one called '{name}' here."),
            Self::MissingTopic => f.write_str("Ask whom about what? Try: ask <name> about <topic>."),
            Self::MissingRecipient => f.write_str("Give it to whom? Try: give <item> to <name>."),
            Self::NoPuzzle => f.write_str("There is no puzzle here."),
        }
    }
}

/// Whether the run loop should keep going.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Outcome {
    /// Read the next command.
    #[default]
    Continue,
    /// The player asked to stop.
    Quit,
    /// A core invariant broke; stop with a failure status.
    Fault,
}

/// The result of one turn.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Report {
    /// Narrative output, in order.
    pub lines: Vec<String>,
    /// The player mistake, if the turn was rejected.
    pub feedback: Option<Feedback>,
    /// What the loop should do next.
    pub outcome: Outcome,
}

impl Report {
    /// A report with no output.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// A report with one line of output.
    #[must_use]
    pub fn text(line: impl Into<String>) -> Self {
        Self {
            lines: vec![line.into()],
            ..Self::default()
        }
    }

    /// A report with several lines of output.
    #[must_use]
    pub fn lines(lines: Vec<String>) -> Self {
        Self {
            lines,
            ..Self::default()
        }
    }

    /// A rejected turn.
    #[must_use]
    pub fn feedback(feedback: Feedback) -> Self {
        Self {
            feedback: Some(feedback),
            ..Self::default()
        }
    }

    /// A turn that ends the run.
    #[must_use]
    pub fn quit() -> Self {
        Self {
            outcome: Outcome::Quit,
            ..Self::default()
        }
    }

    /// A turn that hit a broken invariant.
    #[must_use]
    pub fn fault(message: impl Into<String>) -> Self {
        Self {
            lines: vec![message.into()],
            outcome: Outcome::Fault,
            ..Self::default()
        }
    }

    /// Appends a line.
    pub fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    /// Whether the turn was rejected as a player mistake.
    #[must_use]
    pub fn is_rejected(&self) -> bool {
        self.feedback.is_some()
    }

    /// Whether the run loop should stop.
    #[must_use]
    pub fn should_stop(&self) -> bool {
        self.outcome != Outcome::Continue
    }

    /// The feedback line, with the help invitation.
    #[must_use]
    pub fn feedback_line(&self) -> Option<String> {
        self.feedback
            .as_ref()
            .map(|feedback| format!("{feedback} {HELP_INVITATION}"))
    }

    /// Everything to print, joined by newlines.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = self.lines.join("\n");
        if let Some(line) = self.feedback_line() {
            if !out.is_empty() {
                out.push('\n');
            }
            out.push_str(&line);
        }
        out
    }
}
