//! Riddles answered with `answer <words>`.

use eldoria_world::Puzzle;

/// A riddle with a set of accepted answers.
///
/// Answers are compared after trimming and lowercasing, so `An Echo` and
/// `an echo` are the same attempt.
#[derive(Debug, Clone)]
pub struct RiddlePuzzle {
    name: String,
    question: String,
    answers: Vec<String>,
    hint: String,
    attempts: u32,
    solved: bool,
}

impl RiddlePuzzle {
    /// Creates an unsolved riddle.
    pub fn new<I, S>(name: impl Into<String>, question: impl Into<String>, answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            name: name.into(),
            question: question.into(),
            answers: answers
                .into_iter()
                .map(|answer| normalize(answer.as_ref()))
                .collect(),
            hint: String::new(),
            attempts: 0,
            solved: false,
        }
    }

    /// Sets the hint shown after a wrong attempt.
    #[must_use]
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = hint.into();
        self
    }

    /// The riddle text.
    #[must_use]
    pub fn question(&self) -> &str {
        &self.question
    }

    /// Number of attempts so far.
    #[must_use]
    pub fn attempts(&self) -> u32 {
        self.attempts
    }
}

fn normalize(answer: &str) -> String {
    answer.split_whitespace().collect::<Vec<_>>().join(" ").to_lowercase()
}

impl Puzzle for RiddlePuzzle {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_solved(&self) -> bool {
        self.solved
    }

    fn attempt(&mut self, input: &str) -> bool {
        if self.solved {
            return false;
        }
        self.attempts += 1;
        let guess = normalize(input);
        self.solved = self.answers.contains(&guess);
        self.solved
    }

    fn prompt(&self) -> String {
        let mut text = format!("{}: \"{}\"", self.name, self.question);
        if self.solved {
            text.push_str("\nYou have already solved this riddle.");
        } else if self.attempts > 0 && !self.hint.is_empty() {
            text.push_str("\nHint: ");
            text.push_str(&self.hint);
        }
        text
    }
}
