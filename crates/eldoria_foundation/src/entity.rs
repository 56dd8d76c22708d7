//! Identity and description shared by everything the player can examine.

/// Name and description of an examinable thing.
///
/// Immutable after construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entity {
    name: String,
    description: String,
}

impl Entity {
    /// Creates a new entity.
    #[must_use]
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Compares a typed name against the display name.
    ///
    /// Player input is case-folded by the parser and cannot contain
    /// punctuation, so every lookup by display name goes through here.
    #[must_use]
    pub fn matches_name(&self, name: &str) -> bool {
        names_match(&self.name, name)
    }
}

/// Whether two names are equal ignoring case, punctuation and spacing.
///
/// `"Gorwin's Riddle"` matches `"gorwins  riddle"`.
#[must_use]
pub fn names_match(a: &str, b: &str) -> bool {
    fn words(name: &str) -> impl Iterator<Item = String> + '_ {
        name.split_whitespace()
            .map(|word| {
                word.chars()
                    .filter(char::is_ascii_alphanumeric)
                    .map(|c| c.to_ascii_lowercase())
                    .collect::<String>()
            })
            .filter(|word| !word.is_empty())
    }
    words(a).eq(words(b))
}

/// Anything with an [`Entity`] base that the player can examine.
pub trait Examine {
    /// Returns the entity base.
    fn entity(&self) -> &Entity;

    /// Returns the display name.
    fn name(&self) -> &str {
        self.entity().name()
    }

    /// Returns the description.
    fn description(&self) -> &str {
        self.entity().description()
    }

    /// Text shown when the player examines this thing.
    fn examine(&self) -> String {
        self.description().to_string()
    }

    /// Name comparison ignoring case and punctuation.
    fn matches_name(&self, name: &str) -> bool {
        self.entity().matches_name(name)
    }
}

impl Examine for Entity {
    fn entity(&self) -> &Entity {
        self
    }
}
