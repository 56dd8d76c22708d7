//! Fixed 3x3 grids of locations, one per environment.

use log::debug;

use eldoria_foundation::{Direction, Error, GridId, LocationId, Result};

use crate::location::Location;

/// Width and height of every grid.
pub const GRID_SIZE: usize = 3;

/// A named 3x3 matrix of optional locations.
///
/// Cells are stored row-major: `(x, y)` lives at `y * GRID_SIZE + x`.
/// North decreases `y`, south increases it.
#[derive(Debug)]
pub struct Grid {
    id: GridId,
    name: String,
    cells: Vec<Option<Location>>,
}

impl Grid {
    /// Creates a grid with every cell empty.
    #[must_use]
    pub fn new(id: GridId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            cells: (0..GRID_SIZE * GRID_SIZE).map(|_| None).collect(),
        }
    }

    /// Returns this grid's handle.
    #[must_use]
    pub fn id(&self) -> GridId {
        self.id
    }

    /// Returns the environment name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    fn index(x: usize, y: usize) -> Option<usize> {
        (x < GRID_SIZE && y < GRID_SIZE).then_some(y * GRID_SIZE + x)
    }

    fn handle(&self, index: usize) -> LocationId {
        // index < 9, always fits
        #[allow(clippy::cast_possible_truncation)]
        LocationId::new(self.id, index as u16)
    }

    /// Places a location in a cell, replacing whatever was there.
    ///
    /// # Errors
    ///
    /// Returns `InvalidCoordinate` if `x` or `y` is outside the grid.
    pub fn set_location(&mut self, x: usize, y: usize, mut location: Location) -> Result<LocationId> {
        let index = Self::index(x, y).ok_or_else(|| Error::invalid_coordinate(x, y))?;
        let id = self.handle(index);
        location.place(id);
        self.cells[index] = Some(location);
        Ok(id)
    }

    /// Location at `(x, y)`, or `None` if empty or out of range.
    #[must_use]
    pub fn get_location(&self, x: usize, y: usize) -> Option<&Location> {
        Self::index(x, y).and_then(|i| self.cells[i].as_ref())
    }

    /// Mutable location at `(x, y)`.
    pub fn get_location_mut(&mut self, x: usize, y: usize) -> Option<&mut Location> {
        Self::index(x, y).and_then(|i| self.cells[i].as_mut())
    }

    /// Handle of the occupied cell at `(x, y)`.
    #[must_use]
    pub fn location_id(&self, x: usize, y: usize) -> Option<LocationId> {
        let index = Self::index(x, y)?;
        self.cells[index].as_ref().map(|_| self.handle(index))
    }

    /// Resolves a handle belonging to this grid.
    #[must_use]
    pub fn location(&self, id: LocationId) -> Option<&Location> {
        if id.grid != self.id {
            return None;
        }
        self.cells.get(id.cell()).and_then(Option::as_ref)
    }

    /// Resolves a handle belonging to this grid, mutably.
    pub fn location_mut(&mut self, id: LocationId) -> Option<&mut Location> {
        if id.grid != self.id {
            return None;
        }
        self.cells.get_mut(id.cell()).and_then(Option::as_mut)
    }

    /// Whether the handle names an occupied cell of this grid.
    #[must_use]
    pub fn contains(&self, id: LocationId) -> bool {
        self.location(id).is_some()
    }

    /// Coordinates of an occupied cell, by identity.
    #[must_use]
    pub fn coordinates_of(&self, id: LocationId) -> Option<(usize, usize)> {
        self.contains(id)
            .then(|| (id.cell() % GRID_SIZE, id.cell() / GRID_SIZE))
    }

    /// Iterates over occupied cells as `(x, y, location)`.
    pub fn locations(&self) -> impl Iterator<Item = (usize, usize, &Location)> + '_ {
        self.cells.iter().enumerate().filter_map(|(i, cell)| {
            cell.as_ref().map(|loc| (i % GRID_SIZE, i / GRID_SIZE, loc))
        })
    }

    /// Links orthogonally adjacent occupied cells in both directions.
    ///
    /// Exits already set are left alone, so a second call adds nothing.
    /// Returns the number of exits created.
    pub fn connect_grid_locations(&mut self) -> usize {
        let mut created = 0;
        for y in 0..GRID_SIZE {
            for x in 0..GRID_SIZE {
                let Some(here) = self.location_id(x, y) else {
                    continue;
                };
                for direction in Direction::ALL {
                    let Some((nx, ny)) = neighbour(x, y, direction) else {
                        continue;
                    };
                    let Some(there) = self.location_id(nx, ny) else {
                        continue;
                    };
                    if let Some(loc) = self.location_mut(here) {
                        if loc.get_exit(direction).is_none() && loc.add_exit(direction, there).is_ok() {
                            created += 1;
                        }
                    }
                }
            }
        }
        debug!("connected {created} exits in {}", self.name);
        created
    }
}

/// Coordinates one step away, if still inside the grid.
fn neighbour(x: usize, y: usize, direction: Direction) -> Option<(usize, usize)> {
    let (nx, ny) = match direction {
        Direction::North => (Some(x), y.checked_sub(1)),
        Direction::South => (Some(x), Some(y + 1)),
        Direction::East => (Some(x + 1), Some(y)),
        Direction::West => (x.checked_sub(1), Some(y)),
    };
    let (nx, ny) = (nx?, ny?);
    (nx < GRID_SIZE && ny < GRID_SIZE).then_some((nx, ny))
}
