//! Puzzle seam.
//!
//! Solving mechanics live with the content that defines each puzzle. The
//! core only consults a puzzle for display and forwards attempts to it.

use std::fmt;

/// A puzzle attached to a location.
pub trait Puzzle: fmt::Debug {
    /// Display name.
    fn name(&self) -> &str;

    /// Whether the puzzle has been solved.
    fn is_solved(&self) -> bool;

    /// Attempts to solve the puzzle with player input.
    ///
    /// Returns true if this attempt solved it.
    fn attempt(&mut self, input: &str) -> bool;

    /// Text shown when the player examines the puzzle.
    fn prompt(&self) -> String {
        format!("There appears to be a puzzle here: {}", self.name())
    }
}
