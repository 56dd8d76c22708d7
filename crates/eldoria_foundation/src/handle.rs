//! Stable handles into the world arena.
//!
//! Grids own their locations in a flat arena. Everything that refers to a
//! location from the outside (exits, item back-references, the world's
//! current position) holds a [`LocationId`] instead of a reference, so
//! identity comparison is handle equality.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Identifier of a grid, equal to its position in the world's grid list.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GridId(pub u32);

impl GridId {
    /// Returns the grid's position in the owning world.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for GridId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GridId({})", self.0)
    }
}

impl fmt::Display for GridId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "grid {}", self.0)
    }
}

/// Handle to a location: the owning grid plus the cell index in its arena.
///
/// # Layout
/// - `grid`: the grid that owns the location
/// - `index`: row-major cell index (`y * GRID_SIZE + x`)
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LocationId {
    /// Owning grid.
    pub grid: GridId,
    /// Cell index within the grid.
    pub index: u16,
}

impl LocationId {
    /// Creates a new location handle.
    #[must_use]
    pub const fn new(grid: GridId, index: u16) -> Self {
        Self { grid, index }
    }

    /// Returns the cell index as a `usize`.
    #[must_use]
    pub const fn cell(self) -> usize {
        self.index as usize
    }
}

impl fmt::Debug for LocationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LocationId({}:{})", self.grid.0, self.index)
    }
}

impl fmt::Display for LocationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Location({}:{})", self.grid.0, self.index)
    }
}
