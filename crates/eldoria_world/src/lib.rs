//! Locations, grids, world navigation, items, NPCs, and the player for Eldoria.
//!
//! This crate provides:
//! - [`Item`] - Portable entities with an optional [`Usable`] capability
//! - [`Npc`] - Characters with state-tagged dialogue and quests
//! - [`Location`] - Graph nodes with directional exits and owned contents
//! - [`Grid`] - Fixed `GRID_SIZE`×`GRID_SIZE` arenas of locations
//! - [`World`] - Owned grids, cross-grid links, and the current position
//! - [`Player`] - The bounded inventory and current location reference

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod content;
pub mod grid;
pub mod item;
pub mod location;
pub mod npc;
pub mod player;
pub mod puzzle;
pub mod transfer;
pub mod world;

pub use content::{CellRef, ContentProvider, CrossLink, EnvironmentId};
pub use grid::{GRID_SIZE, Grid};
pub use item::{Item, ItemId, UseContext, Usable};
pub use location::Location;
pub use npc::{DialogueState, Npc, NpcRole, Quest};
pub use player::{DEFAULT_CAPACITY, Player};
pub use puzzle::Puzzle;
pub use transfer::{Receipt, TransferError, drop_item, take_item};
pub use world::{Movement, World};
