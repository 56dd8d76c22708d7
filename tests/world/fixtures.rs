//! Small content providers shared by the world tests.

use eldoria_foundation::{Direction, GridId, LocationId, Result};
use eldoria_world::{
    CellRef, ContentProvider, CrossLink, EnvironmentId, GRID_SIZE, Grid, Item, Location, Npc,
    NpcRole,
};

/// Two full grids, "Meadow" and "Hills", joined Meadow (2,1) east to Hills (0,1).
pub struct TwoRegions {
    pub links: Vec<CrossLink>,
    pub empty_centre: bool,
    /// Wired north from Meadow's centre before the grid is connected.
    pub stray_exit: Option<LocationId>,
}

impl TwoRegions {
    pub fn new() -> Self {
        Self {
            links: vec![CrossLink {
                from: CellRef::new(GridId(0), 2, 1),
                to: CellRef::new(GridId(1), 0, 1),
                direction: Direction::East,
            }],
            empty_centre: false,
            stray_exit: None,
        }
    }
}

impl ContentProvider for TwoRegions {
    fn environments(&self) -> Vec<EnvironmentId> {
        vec!["Meadow".into(), "Hills".into()]
    }

    fn build_grid(&self, environment: &EnvironmentId, id: GridId) -> Result<Grid> {
        let mut grid = Grid::new(id, environment.as_str());
        for y in 0..GRID_SIZE {
            for x in 0..GRID_SIZE {
                if self.empty_centre && (x, y) == (1, 1) && id == GridId(0) {
                    continue;
                }
                // names repeat across grids on purpose
                let mut location = Location::new(format!("Field {x}{y}"), "Grass.");
                if (x, y) == (1, 1) && id == GridId(0) {
                    location = Location::new("Elder's House", "A cozy house.")
                        .with_npc(Npc::new(
                            "Elda",
                            "The wise village elder.",
                            NpcRole::QuestGiver,
                        ))
                        .with_item(Item::new(
                            "QUEST_SCROLL",
                            "Quest Scroll",
                            "An ancient scroll.",
                        ));
                    if let Some(target) = self.stray_exit {
                        location.add_exit(Direction::North, target)?;
                    }
                }
                grid.set_location(x, y, location)?;
            }
        }
        Ok(grid)
    }

    fn cross_links(&self) -> Vec<CrossLink> {
        self.links.clone()
    }
}
