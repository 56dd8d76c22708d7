//! Error types for the Eldoria engine.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.
//! Player mistakes (unknown verbs, blocked exits, missing items) are not
//! errors; they are reported as turn feedback by the engine. The kinds here
//! are world-configuration failures and broken internal invariants.

use std::fmt;

use thiserror::Error;

use crate::direction::Direction;
use crate::handle::{GridId, LocationId};

/// The main error type for Eldoria operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates an out-of-bounds coordinate error.
    #[must_use]
    pub fn invalid_coordinate(x: usize, y: usize) -> Self {
        Self::new(ErrorKind::InvalidCoordinate { x, y })
    }

    /// Creates an occupied exit slot error.
    #[must_use]
    pub fn exit_occupied(location: Option<LocationId>, direction: Direction) -> Self {
        Self::new(ErrorKind::ExitOccupied {
            location,
            direction,
        })
    }

    /// Creates a dangling cross-link error.
    #[must_use]
    pub fn dangling_link(grid: GridId, x: usize, y: usize) -> Self {
        Self::new(ErrorKind::DanglingLink { grid, x, y })
    }

    /// Creates an unknown location error.
    #[must_use]
    pub fn unknown_location(id: LocationId) -> Self {
        Self::new(ErrorKind::UnknownLocation(id))
    }

    /// Creates an invariant violation error.
    #[must_use]
    pub fn invariant(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvariantViolation(message.into()))
    }

    /// Returns true if this error means the world could not be built.
    #[must_use]
    pub fn is_configuration(&self) -> bool {
        self.kind.is_configuration()
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// Grid coordinates outside `[0, GRID_SIZE)`.
    #[error("coordinate out of bounds: ({x}, {y})")]
    InvalidCoordinate {
        /// Column.
        x: usize,
        /// Row.
        y: usize,
    },

    /// An exit slot was already set.
    #[error("exit {direction} already set{}", location_suffix(.location))]
    ExitOccupied {
        /// The location whose slot was occupied, if it had been placed.
        location: Option<LocationId>,
        /// The occupied slot.
        direction: Direction,
    },

    /// The starting cell of the first grid is empty.
    #[error("starting cell ({x}, {y}) of {grid} is empty")]
    EmptyStartCell {
        /// Name of the grid.
        grid: String,
        /// Column.
        x: usize,
        /// Row.
        y: usize,
    },

    /// A cross-grid link names a cell that holds no location.
    #[error("cross-grid link points at empty cell ({x}, {y}) of {grid}")]
    DanglingLink {
        /// The grid the link targets.
        grid: GridId,
        /// Column.
        x: usize,
        /// Row.
        y: usize,
    },

    /// An exit leads to a location that no grid owns.
    #[error("exit {direction} from {location} leads to {target:?}, which no grid owns")]
    DanglingExit {
        /// Name of the location holding the exit.
        location: String,
        /// The exit slot.
        direction: Direction,
        /// The unresolved target.
        target: LocationId,
    },

    /// A content provider was asked for an environment it does not define.
    #[error("unknown environment: {0}")]
    UnknownEnvironment(String),

    /// A grid handle does not name an owned grid.
    #[error("unknown grid: {0:?}")]
    UnknownGrid(GridId),

    /// A location handle does not resolve to an owned location.
    #[error("unknown location: {0:?}")]
    UnknownLocation(LocationId),

    /// The content provider supplied no environments.
    #[error("no environments to build")]
    NoEnvironments,

    /// Movement was attempted before a current location was set.
    #[error("no current location")]
    NoCurrentLocation,

    /// The current location has no exit in that direction.
    #[error("no exit {0}")]
    NoExit(Direction),

    /// A core invariant was broken (an item in two containers, and so on).
    #[error("invariant violation: {0}")]
    InvariantViolation(String),

    /// Internal error (should not happen).
    #[error("internal error: {0}")]
    Internal(String),
}

impl ErrorKind {
    /// Returns true for failures that make the world unusable at build time.
    #[must_use]
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::EmptyStartCell { .. }
                | Self::DanglingLink { .. }
                | Self::DanglingExit { .. }
                | Self::UnknownGrid(_)
                | Self::UnknownEnvironment(_)
                | Self::NoEnvironments
                | Self::InvalidCoordinate { .. }
                | Self::ExitOccupied { .. }
        )
    }
}

#[allow(clippy::ref_option)]
fn location_suffix(location: &Option<LocationId>) -> String {
    location.map(|id| format!(" on {id}")).unwrap_or_default()
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Environment (grid) name.
    pub environment: Option<String>,
    /// Cell coordinates within the environment.
    pub cell: Option<(usize, usize)>,
    /// Build or dispatch steps leading to the error, outermost first.
    pub stack: Vec<String>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the environment name.
    #[must_use]
    pub fn with_environment(mut self, environment: impl Into<String>) -> Self {
        self.environment = Some(environment.into());
        self
    }

    /// Sets the cell coordinates.
    #[must_use]
    pub fn with_cell(mut self, x: usize, y: usize) -> Self {
        self.cell = Some((x, y));
        self
    }

    /// Adds a step.
    #[must_use]
    pub fn with_frame(mut self, frame: impl Into<String>) -> Self {
        self.stack.push(frame.into());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(environment) = &self.environment {
            write!(f, "in {environment}")?;
            if let Some((x, y)) = self.cell {
                write!(f, " at ({x}, {y})")?;
            }
        }
        if !self.stack.is_empty() {
            writeln!(f)?;
            for frame in &self.stack {
                writeln!(f, "  during {frame}")?;
            }
        }
        Ok(())
    }
}
