//! Eldoria: Shadows of Malakar - a grid-based text adventure engine
//!
//! This crate re-exports all layers of the Eldoria system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: eldoria_runtime    - Game loop, line editing, CLI
//! Layer 4: eldoria_content    - The nine environments, people, items, riddles
//! Layer 3: eldoria_engine     - Dispatcher, handlers, turn engine
//!          eldoria_debug      - Turn tracing
//! Layer 2: eldoria_parser     - Tokenizer, command parser, vocabulary
//! Layer 1: eldoria_world      - Locations, grids, world, items, NPCs, player
//! Layer 0: eldoria_foundation - Handles, directions, entities, errors
//! ```

pub use eldoria_content as content;
pub use eldoria_debug as debug;
pub use eldoria_engine as engine;
pub use eldoria_foundation as foundation;
pub use eldoria_parser as parser;
pub use eldoria_runtime as runtime;
pub use eldoria_world as world;
