//! Command dispatch and the turn engine for Eldoria.
//!
//! ```text
//! raw line ──► CommandParser ──► Command ──► Dispatcher ──► Handler ──► Report
//!                                               │                      │
//!                                          GameState               Tracer
//! ```
//!
//! This crate provides:
//! - [`Engine`] - Owns the state and runs one turn per input line
//! - [`Dispatcher`] - The fixed action-to-handler table
//! - [`Report`] / [`Feedback`] - What a turn produced, and player mistakes
//! - [`EngineConfig`] - Capacity, player identity, start cell, tracing

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod dispatcher;
pub mod engine;
pub mod handlers;
pub mod report;
pub mod state;

#[cfg(test)]
mod testing;

pub use config::{DEFAULT_PLAYER_DESCRIPTION, DEFAULT_PLAYER_NAME, EngineConfig};
pub use dispatcher::{Dispatcher, Handler, TurnContext};
pub use engine::{Engine, TITLE};
pub use report::{Feedback, HELP_INVITATION, Outcome, Report};
pub use state::GameState;
