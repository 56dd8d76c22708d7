//! Vocabulary registry.
//!
//! Maps verb words to canonical [`Action`]s and direction words to
//! [`Direction`]s.

use std::collections::HashMap;
use std::fmt;

use eldoria_foundation::Direction;

/// Canonical actions the dispatcher knows how to handle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Action {
    /// Move through an exit.
    Go,
    /// Redisplay the current location.
    Look,
    /// Describe a thing.
    Examine,
    /// Pick up an item.
    Take,
    /// Put down an item.
    Drop,
    /// List carried items.
    Inventory,
    /// Invoke an item's effect.
    Use,
    /// List commands.
    Help,
    /// End the run.
    Quit,
    /// Speak with an NPC.
    Talk,
    /// Ask an NPC about a topic.
    Ask,
    /// Hand an item to an NPC.
    Give,
    /// Answer the local puzzle.
    Answer,
    /// Show player status.
    Status,
}

impl Action {
    /// Every action, in help order.
    pub const ALL: [Action; 14] = [
        Self::Go,
        Self::Look,
        Self::Examine,
        Self::Take,
        Self::Drop,
        Self::Inventory,
        Self::Use,
        Self::Talk,
        Self::Ask,
        Self::Give,
        Self::Answer,
        Self::Status,
        Self::Help,
        Self::Quit,
    ];

    /// Canonical verb.
    #[must_use]
    pub const fn verb(self) -> &'static str {
        match self {
            Self::Go => "go",
            Self::Look => "look",
            Self::Examine => "examine",
            Self::Take => "take",
            Self::Drop => "drop",
            Self::Inventory => "inventory",
            Self::Use => "use",
            Self::Help => "help",
            Self::Quit => "quit",
            Self::Talk => "talk",
            Self::Ask => "ask",
            Self::Give => "give",
            Self::Answer => "answer",
            Self::Status => "status",
        }
    }

    /// Synonyms accepted besides the canonical verb.
    #[must_use]
    pub const fn synonyms(self) -> &'static [&'static str] {
        match self {
            Self::Go => &["move"],
            Self::Take => &["pickup"],
            Self::Inventory => &["inv"],
            Self::Talk => &["speak"],
            Self::Answer => &["solve"],
            _ => &[],
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.verb())
    }
}

/// Runtime storage for verb and direction words.
#[derive(Clone, Debug, Default)]
pub struct Vocabulary {
    verbs: HashMap<String, Action>,
    directions: HashMap<String, Direction>,
}

impl Vocabulary {
    /// Creates an empty vocabulary.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the vocabulary with every action and direction registered.
    #[must_use]
    pub fn standard() -> Self {
        let mut vocabulary = Self::new();
        for action in Action::ALL {
            vocabulary.register_verb(action.verb(), action);
            for synonym in action.synonyms() {
                vocabulary.register_verb(synonym, action);
            }
        }
        for direction in Direction::ALL {
            vocabulary.register_direction(direction.name(), direction);
        }
        vocabulary
    }

    /// Registers a verb word.
    pub fn register_verb(&mut self, word: &str, action: Action) {
        self.verbs.insert(word.to_ascii_lowercase(), action);
    }

    /// Registers a direction word.
    pub fn register_direction(&mut self, word: &str, direction: Direction) {
        self.directions.insert(word.to_ascii_lowercase(), direction);
    }

    /// Looks up a verb by word (canonical or synonym).
    #[must_use]
    pub fn lookup_verb(&self, word: &str) -> Option<Action> {
        self.verbs.get(word).copied()
    }

    /// Looks up a direction by word, falling back to `n`/`e`/`s`/`w`.
    #[must_use]
    pub fn lookup_direction(&self, word: &str) -> Option<Direction> {
        self.directions
            .get(word)
            .copied()
            .or_else(|| Direction::from_word(word))
    }

    /// Every registered verb word, sorted.
    #[must_use]
    pub fn verbs(&self) -> Vec<&str> {
        let mut words: Vec<&str> = self.verbs.keys().map(String::as_str).collect();
        words.sort_unstable();
        words
    }
}
