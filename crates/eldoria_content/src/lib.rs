//! The world of Eldoria: Shadows of Malakar.
//!
//! This crate provides:
//! - [`EldoriaContent`] - The [`ContentProvider`](eldoria_world::ContentProvider)
//!   that builds all nine environments and the passages between them
//! - [`Environment`] - Environment names and cell layouts
//! - [`items`] / [`npcs`] - Constructors for the story's items and people
//! - [`RiddlePuzzle`] - Riddles with several accepted answers

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod environment;
pub mod items;
pub mod npcs;
pub mod provider;
pub mod riddle;

pub use environment::Environment;
pub use provider::{EldoriaContent, START};
pub use riddle::RiddlePuzzle;
