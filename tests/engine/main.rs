//! Integration tests for Layer 3: Engine
//!
//! Tests for dispatch, feedback, quests, puzzles, and turn tracing
//! against the full Eldoria content.

mod dispatch;
mod quests;
mod tracing;

use eldoria_content::EldoriaContent;
use eldoria_engine::{Engine, EngineConfig};

pub fn engine() -> Engine {
    Engine::new(EngineConfig::default(), &EldoriaContent).unwrap()
}

/// Runs each command, returning the rendered output of the last one.
pub fn play(engine: &mut Engine, commands: &[&str]) -> String {
    commands
        .iter()
        .map(|command| engine.step(command).render())
        .last()
        .unwrap_or_default()
}
