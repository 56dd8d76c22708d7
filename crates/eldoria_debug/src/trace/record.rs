//! Trace event and record types.
//!
//! This module defines the events recorded while a turn is processed.

use serde::Serialize;

use eldoria_foundation::Direction;

// =============================================================================
// Trace Event
// =============================================================================

/// Events that can be traced during a turn.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum TraceEvent {
    /// A turn has started.
    TurnStart {
        /// The turn number.
        turn: u64,
        /// The raw input line.
        input: String,
    },

    /// The input parsed into a command.
    CommandParsed {
        /// The action word.
        action: String,
        /// The argument words.
        arguments: Vec<String>,
    },

    /// The input or command was rejected.
    CommandRejected {
        /// Why it was rejected.
        reason: String,
    },

    /// The player moved.
    Moved {
        /// Direction of travel.
        direction: Direction,
        /// Name of the location left.
        from: String,
        /// Name of the location entered.
        to: String,
        /// Whether the move crossed grids.
        grid_changed: bool,
    },

    /// An item changed container.
    ItemTransferred {
        /// The item id.
        item: String,
        /// Where it came from.
        from: String,
        /// Where it went.
        to: String,
    },

    /// An item's use effect was attempted.
    ItemUsed {
        /// The item id.
        item: String,
        /// Whether the effect ran.
        applied: bool,
    },

    /// A puzzle answer was tried.
    PuzzleAttempt {
        /// The puzzle name.
        puzzle: String,
        /// Whether the puzzle is now solved.
        solved: bool,
    },

    /// A turn has ended.
    TurnEnd {
        /// The turn number.
        turn: u64,
        /// Whether the turn produced user feedback instead of an effect.
        rejected: bool,
    },
}

impl TraceEvent {
    /// Returns a short name for the event type.
    #[must_use]
    pub fn event_type(&self) -> &'static str {
        match self {
            Self::TurnStart { .. } => "turn-start",
            Self::CommandParsed { .. } => "command-parsed",
            Self::CommandRejected { .. } => "command-rejected",
            Self::Moved { .. } => "moved",
            Self::ItemTransferred { .. } => "item-transferred",
            Self::ItemUsed { .. } => "item-used",
            Self::PuzzleAttempt { .. } => "puzzle-attempt",
            Self::TurnEnd { .. } => "turn-end",
        }
    }

    /// Returns true if this is a turn boundary event.
    #[must_use]
    pub fn is_turn_boundary(&self) -> bool {
        matches!(self, Self::TurnStart { .. } | Self::TurnEnd { .. })
    }

    /// Returns true if this event changed world state.
    #[must_use]
    pub fn is_state_change(&self) -> bool {
        matches!(
            self,
            Self::Moved { .. } | Self::ItemTransferred { .. } | Self::ItemUsed { applied: true, .. }
        )
    }
}

// =============================================================================
// Trace Record
// =============================================================================

/// A timestamped trace record.
#[derive(Clone, Debug, Serialize)]
pub struct TraceRecord {
    /// Unique record ID within the session.
    pub id: u64,
    /// The turn when this event occurred.
    pub turn: u64,
    /// Timestamp in nanoseconds since session start.
    pub timestamp_ns: u64,
    /// The trace event.
    #[serde(flatten)]
    pub event: TraceEvent,
}

impl TraceRecord {
    /// Creates a new trace record.
    #[must_use]
    pub fn new(id: u64, turn: u64, timestamp_ns: u64, event: TraceEvent) -> Self {
        Self {
            id,
            turn,
            timestamp_ns,
            event,
        }
    }

    /// Returns the event type name.
    #[must_use]
    pub fn event_type(&self) -> &'static str {
        self.event.event_type()
    }
}

// =============================================================================
// Tests
// =============================================================================
