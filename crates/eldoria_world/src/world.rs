//! The world: every grid, the cross-grid links, and where the player is.
//!
//! Navigation state is `(current grid, current location)`. Both change
//! together, and only through [`World::go`] or [`World::start_at`].

use log::{debug, info};

use eldoria_foundation::{
    Direction, Error, ErrorContext, ErrorKind, Examine, GridId, LocationId, Result,
};

use crate::content::{CellRef, ContentProvider, CrossLink};
use crate::grid::Grid;
use crate::item::UseContext;
use crate::location::Location;

/// The outcome of a successful [`World::go`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Movement {
    /// Where the player was.
    pub from: LocationId,
    /// Where the player is now.
    pub to: LocationId,
    /// Whether the move crossed into another grid.
    pub grid_changed: bool,
}

/// Owns every grid and tracks the current position.
#[derive(Debug, Default)]
pub struct World {
    grids: Vec<Grid>,
    current_grid: Option<GridId>,
    current_location: Option<LocationId>,
    links: Vec<CrossLink>,
}

impl World {
    /// Creates a world with no grids.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds every environment, installs the cross-grid links, and places
    /// the player at `start` in the first grid.
    ///
    /// # Errors
    ///
    /// - `NoEnvironments` if the provider lists none
    /// - any error from building a grid, with the environment as context
    /// - `DanglingLink` or `ExitOccupied` from installing a link
    /// - `DanglingExit` if any exit leads to a location no grid owns
    /// - `EmptyStartCell` if the starting cell holds no location
    pub fn initialize(provider: &dyn ContentProvider, start: (usize, usize)) -> Result<Self> {
        let environments = provider.environments();
        if environments.is_empty() {
            return Err(Error::new(ErrorKind::NoEnvironments));
        }

        let mut world = Self::new();
        for (index, environment) in environments.iter().enumerate() {
            let id = GridId(u32::try_from(index).map_err(|_| {
                Error::new(ErrorKind::Internal("too many environments".to_string()))
            })?);
            let grid = provider.build_grid(environment, id).map_err(|err| {
                err.with_context(
                    ErrorContext::new()
                        .with_environment(environment.as_str())
                        .with_frame("build grid"),
                )
            })?;
            world.add_grid(grid)?;
        }

        for link in provider.cross_links() {
            world.link(link)?;
        }
        world.check_exits()?;

        world.start_at(start.0, start.1)?;
        info!(
            "world ready: {} grids, {} cross links",
            world.grids.len(),
            world.links.len()
        );
        Ok(world)
    }

    /// Connects a freshly built grid internally and takes ownership of it.
    ///
    /// # Errors
    ///
    /// Returns an invariant violation if the grid's id does not match its
    /// position.
    pub fn add_grid(&mut self, mut grid: Grid) -> Result<GridId> {
        let expected = self.grids.len();
        if grid.id().index() != expected {
            return Err(Error::invariant(format!(
                "grid {} built as {:?}, expected slot {expected}",
                grid.name(),
                grid.id()
            )));
        }
        grid.connect_grid_locations();
        let id = grid.id();
        self.grids.push(grid);
        Ok(id)
    }

    /// Installs a cross-grid link and its reciprocal.
    ///
    /// Both exit slots are checked before either is written.
    ///
    /// # Errors
    ///
    /// - `UnknownGrid` if either grid is not owned
    /// - `DanglingLink` if either cell is empty
    /// - `ExitOccupied` if either slot is taken
    pub fn link(&mut self, link: CrossLink) -> Result<()> {
        let from = self.cell_id(link.from)?;
        let to = self.cell_id(link.to)?;
        let forward = link.direction;
        let back = forward.opposite();

        if self.require(from)?.get_exit(forward).is_some() {
            return Err(Error::exit_occupied(Some(from), forward));
        }
        if self.require(to)?.get_exit(back).is_some() {
            return Err(Error::exit_occupied(Some(to), back));
        }

        self.require_mut(from)?.add_exit(forward, to)?;
        self.require_mut(to)?.add_exit(back, from)?;
        info!(
            "linked {} {forward} to {}",
            self.require(from)?.name(),
            self.require(to)?.name()
        );
        self.links.push(link);
        Ok(())
    }

    /// Verifies that every exit of every owned location resolves.
    ///
    /// # Errors
    ///
    /// `DanglingExit` for the first exit whose target is not owned.
    pub fn check_exits(&self) -> Result<()> {
        for grid in &self.grids {
            for (x, y, location) in grid.locations() {
                for (direction, target) in location.exits() {
                    if self.location(target).is_none() {
                        return Err(Error::new(ErrorKind::DanglingExit {
                            location: location.name().to_string(),
                            direction,
                            target,
                        })
                        .with_context(
                            ErrorContext::new()
                                .with_environment(grid.name())
                                .with_cell(x, y),
                        ));
                    }
                }
            }
        }
        Ok(())
    }

    fn cell_id(&self, cell: CellRef) -> Result<LocationId> {
        let grid = self
            .grid(cell.grid)
            .ok_or_else(|| Error::new(ErrorKind::UnknownGrid(cell.grid)))?;
        grid.location_id(cell.x, cell.y)
            .ok_or_else(|| Error::dangling_link(cell.grid, cell.x, cell.y))
    }

    /// Places the player at `(x, y)` of the first grid.
    ///
    /// # Errors
    ///
    /// `NoEnvironments` if there are no grids, `EmptyStartCell` if the cell
    /// is empty or out of range.
    pub fn start_at(&mut self, x: usize, y: usize) -> Result<LocationId> {
        let grid = self
            .grids
            .first()
            .ok_or_else(|| Error::new(ErrorKind::NoEnvironments))?;
        let start = grid.location_id(x, y).ok_or_else(|| {
            Error::new(ErrorKind::EmptyStartCell {
                grid: grid.name().to_string(),
                x,
                y,
            })
        })?;
        self.current_grid = Some(grid.id());
        self.current_location = Some(start);
        Ok(start)
    }

    /// Moves one step through an exit of the current location.
    ///
    /// When the target is not in the current grid, every grid is searched in
    /// order and the first that holds it becomes current. Grid and location
    /// change together or not at all.
    ///
    /// # Errors
    ///
    /// - `NoCurrentLocation` before the world is started
    /// - `NoExit` if there is no exit that way
    /// - `UnknownLocation` if the exit target is in no owned grid
    pub fn go(&mut self, direction: Direction) -> Result<Movement> {
        let from = self
            .current_location
            .ok_or_else(|| Error::new(ErrorKind::NoCurrentLocation))?;
        let to = self
            .require(from)?
            .get_exit(direction)
            .ok_or_else(|| Error::new(ErrorKind::NoExit(direction)))?;

        let in_current = self.current_grid().is_some_and(|grid| grid.contains(to));
        let grid_changed = if in_current {
            false
        } else {
            let owner = self
                .grids
                .iter()
                .find(|grid| grid.contains(to))
                .map(Grid::id)
                .ok_or_else(|| Error::unknown_location(to))?;
            self.current_grid = Some(owner);
            true
        };
        self.current_location = Some(to);

        debug!("moved {direction} from {from} to {to}");
        Ok(Movement {
            from,
            to,
            grid_changed,
        })
    }

    // --- Lookups ---

    /// Coordinates of a location within the current grid only.
    #[must_use]
    pub fn location_coordinates(&self, id: LocationId) -> Option<(usize, usize)> {
        self.current_grid()?.coordinates_of(id)
    }

    /// Grid and coordinates of any owned location.
    #[must_use]
    pub fn locate(&self, id: LocationId) -> Option<(GridId, usize, usize)> {
        self.grids.iter().find_map(|grid| {
            grid.coordinates_of(id).map(|(x, y)| (grid.id(), x, y))
        })
    }

    /// Resolves a location handle.
    #[must_use]
    pub fn location(&self, id: LocationId) -> Option<&Location> {
        self.grid(id.grid)?.location(id)
    }

    /// Resolves a location handle, mutably.
    pub fn location_mut(&mut self, id: LocationId) -> Option<&mut Location> {
        self.grid_mut(id.grid)?.location_mut(id)
    }

    fn require(&self, id: LocationId) -> Result<&Location> {
        self.location(id).ok_or_else(|| Error::unknown_location(id))
    }

    fn require_mut(&mut self, id: LocationId) -> Result<&mut Location> {
        self.location_mut(id).ok_or_else(|| Error::unknown_location(id))
    }

    /// Grid by handle.
    #[must_use]
    pub fn grid(&self, id: GridId) -> Option<&Grid> {
        self.grids.get(id.index())
    }

    /// Grid by handle, mutably.
    pub fn grid_mut(&mut self, id: GridId) -> Option<&mut Grid> {
        self.grids.get_mut(id.index())
    }

    /// Every grid, in build order.
    #[must_use]
    pub fn grids(&self) -> &[Grid] {
        &self.grids
    }

    /// Installed cross-grid links.
    #[must_use]
    pub fn links(&self) -> &[CrossLink] {
        &self.links
    }

    /// The grid the player is in.
    #[must_use]
    pub fn current_grid(&self) -> Option<&Grid> {
        self.grid(self.current_grid?)
    }

    /// Handle of the location the player is in.
    #[must_use]
    pub fn current_location_id(&self) -> Option<LocationId> {
        self.current_location
    }

    /// The location the player is in.
    #[must_use]
    pub fn current_location(&self) -> Option<&Location> {
        self.location(self.current_location?)
    }

    /// The location the player is in, mutably.
    pub fn current_location_mut(&mut self) -> Option<&mut Location> {
        let id = self.current_location?;
        self.location_mut(id)
    }

    /// Full description of a location, with exit targets named.
    #[must_use]
    pub fn full_description(&self, id: LocationId) -> Option<String> {
        let location = self.location(id)?;
        Some(location.full_description(|target| self.location(target).map(Examine::name)))
    }

    /// Where an item is being used right now.
    #[must_use]
    pub fn use_context(&self) -> Option<UseContext<'_>> {
        let location_id = self.current_location?;
        Some(UseContext {
            environment: self.current_grid()?.name(),
            location: self.location(location_id)?.name(),
            location_id,
        })
    }
}
