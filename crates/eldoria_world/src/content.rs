//! The seam between the world model and the content that populates it.

use std::fmt;

use eldoria_foundation::{Direction, GridId, Result};

use crate::grid::Grid;

/// Name of an environment, as listed by a [`ContentProvider`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct EnvironmentId(String);

impl EnvironmentId {
    /// Creates a new environment id.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the environment name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EnvironmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EnvironmentId {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

/// A cell in a particular grid.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CellRef {
    /// Grid, in provider order.
    pub grid: GridId,
    /// Column.
    pub x: usize,
    /// Row.
    pub y: usize,
}

impl CellRef {
    /// Creates a new cell reference.
    #[must_use]
    pub const fn new(grid: GridId, x: usize, y: usize) -> Self {
        Self { grid, x, y }
    }
}

/// A bidirectional link between two grids.
///
/// `direction` leads from `from` to `to`; the return exit uses the
/// opposite direction.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CrossLink {
    /// Departure cell.
    pub from: CellRef,
    /// Arrival cell.
    pub to: CellRef,
    /// Direction of travel from `from`.
    pub direction: Direction,
}

/// Supplies the environments that make up a world.
///
/// Grid ids are assigned by the world in the order [`environments`]
/// lists them, starting from `GridId(0)`.
///
/// [`environments`]: ContentProvider::environments
pub trait ContentProvider {
    /// Environments to build, in order. The first is where play starts.
    fn environments(&self) -> Vec<EnvironmentId>;

    /// Builds the grid for one environment.
    ///
    /// # Errors
    ///
    /// Returns an error if the environment cannot be built.
    fn build_grid(&self, environment: &EnvironmentId, id: GridId) -> Result<Grid>;

    /// Links between grids, installed after every grid is built.
    fn cross_links(&self) -> Vec<CrossLink> {
        Vec::new()
    }
}
