//! The content provider that assembles Eldoria.

use log::debug;

use eldoria_foundation::{Direction, Error, ErrorKind, GridId, Result};
use eldoria_world::{
    CellRef, ContentProvider, CrossLink, EnvironmentId, GRID_SIZE, Grid, Location,
};

use crate::environment::Environment;
use crate::riddle::RiddlePuzzle;
use crate::{items, npcs};

/// Where a new game begins: the Elder's House.
pub const START: (usize, usize) = (1, 1);

/// One passage between environments, as data.
type Passage = ((Environment, usize, usize), Direction, (Environment, usize, usize));

/// The road from the village to Malakar's lair. The Hidden Grove has no
/// passage yet.
const PASSAGES: [Passage; 7] = [
    ((Environment::Village, 1, 0), Direction::North, (Environment::Woods, 1, 2)),
    ((Environment::Woods, 2, 2), Direction::East, (Environment::Caves, 0, 0)),
    ((Environment::Caves, 2, 2), Direction::East, (Environment::Library, 0, 2)),
    ((Environment::Library, 1, 2), Direction::South, (Environment::Mountains, 1, 0)),
    ((Environment::Mountains, 2, 2), Direction::East, (Environment::Marshes, 0, 2)),
    ((Environment::Marshes, 2, 2), Direction::East, (Environment::Sanctum, 0, 0)),
    ((Environment::Sanctum, 1, 2), Direction::South, (Environment::Lair, 0, 0)),
];

/// Builds the nine environments of Eldoria.
#[derive(Clone, Copy, Debug, Default)]
pub struct EldoriaContent;

impl EldoriaContent {
    /// Creates the provider.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

fn cell(env: Environment, x: usize, y: usize) -> CellRef {
    #[allow(clippy::cast_possible_truncation)]
    let grid = GridId(env.index() as u32);
    CellRef::new(grid, x, y)
}

/// Adds the characters, items and puzzles that live in one cell.
fn furnish(env: Environment, x: usize, y: usize, location: Location) -> Location {
    match (env, x, y) {
        (Environment::Village, 1, 1) => location
            .with_npc(npcs::elda())
            .with_item(items::quest_scroll()),
        (Environment::Woods, 1, 1) => location
            .with_npc(npcs::gorwin())
            .with_item(items::enchanted_map())
            .with_puzzle(
                RiddlePuzzle::new(
                    "Gorwin's Riddle",
                    "I speak without a mouth and hear without ears. I have nobody, but I come \
                     alive with the wind. What am I?",
                    ["echo", "an echo", "the echo"],
                )
                .with_hint("Think about what carries sound through the forest..."),
            ),
        (Environment::Caves, 1, 1) => location
            .with_npc(npcs::thorin())
            .with_item(items::crystal_lens()),
        (Environment::Library, 1, 1) => location.with_npc(npcs::lyra()),
        (Environment::Mountains, 1, 1) => location.with_item(items::echo_crystal()),
        (Environment::Sanctum, 1, 1) => location.with_npc(npcs::mira()),
        (Environment::Grove, 1, 1) => location.with_npc(npcs::elyndor()),
        _ => location,
    }
}

impl ContentProvider for EldoriaContent {
    fn environments(&self) -> Vec<EnvironmentId> {
        Environment::ALL
            .iter()
            .map(|env| EnvironmentId::new(env.name()))
            .collect()
    }

    fn build_grid(&self, environment: &EnvironmentId, id: GridId) -> Result<Grid> {
        let env = Environment::from_name(environment.as_str())
            .ok_or_else(|| Error::new(ErrorKind::UnknownEnvironment(environment.to_string())))?;

        let mut grid = Grid::new(id, env.name());
        for (y, row) in env.layout().iter().enumerate() {
            for (x, &(name, description)) in row.iter().enumerate() {
                grid.set_location(x, y, furnish(env, x, y, Location::new(name, description)))?;
            }
        }
        debug!("built {env} with {} cells", GRID_SIZE * GRID_SIZE);
        Ok(grid)
    }

    fn cross_links(&self) -> Vec<CrossLink> {
        PASSAGES
            .iter()
            .map(|&((from, fx, fy), direction, (to, tx, ty))| CrossLink {
                from: cell(from, fx, fy),
                to: cell(to, tx, ty),
                direction,
            })
            .collect()
    }
}
