//! Mutable game state owned by the engine.

use eldoria_world::{Player, World};

/// Everything a turn can change.
#[derive(Debug)]
pub struct GameState {
    /// Grids and the current position.
    pub world: World,
    /// The player and their inventory.
    pub player: Player,
    /// Number of turns started so far.
    pub turn: u64,
}

impl GameState {
    /// Bundles a started world with a player standing at its current location.
    #[must_use]
    pub fn new(world: World, mut player: Player) -> Self {
        if let Some(here) = world.current_location_id() {
            player.set_location(here);
        }
        Self {
            world,
            player,
            turn: 0,
        }
    }
}
