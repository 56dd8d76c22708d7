//! Engine configuration.

use eldoria_debug::TracerConfig;
use eldoria_world::DEFAULT_CAPACITY;

/// Name given to the player when none is configured.
pub const DEFAULT_PLAYER_NAME: &str = "Aric";

/// Description given to the player when none is configured.
pub const DEFAULT_PLAYER_DESCRIPTION: &str = "A courageous adventurer destined to save Eldoria.";

/// Settings for a new [`Engine`](crate::Engine).
#[derive(Clone, Debug)]
pub struct EngineConfig {
    /// Maximum number of carried items.
    pub capacity: usize,
    /// Player name.
    pub player_name: String,
    /// Player description.
    pub player_description: String,
    /// Starting cell `(x, y)` in the first grid.
    pub start: (usize, usize),
    /// Turn tracing.
    pub tracer: TracerConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            player_name: DEFAULT_PLAYER_NAME.to_string(),
            player_description: DEFAULT_PLAYER_DESCRIPTION.to_string(),
            start: (1, 1),
            tracer: TracerConfig::default(),
        }
    }
}

impl EngineConfig {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to set inventory capacity.
    #[must_use]
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Builder method to set the player's name and description.
    #[must_use]
    pub fn with_player(mut self, name: impl Into<String>, description: impl Into<String>) -> Self {
        self.player_name = name.into();
        self.player_description = description.into();
        self
    }

    /// Builder method to set the starting cell.
    #[must_use]
    pub fn with_start(mut self, x: usize, y: usize) -> Self {
        self.start = (x, y);
        self
    }

    /// Builder method to set tracing.
    #[must_use]
    pub fn with_tracer(mut self, tracer: TracerConfig) -> Self {
        self.tracer = tracer;
        self
    }
}
