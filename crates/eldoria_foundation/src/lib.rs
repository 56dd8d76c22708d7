//! Core handles, directions, entity base, and errors for Eldoria.
//!
//! This crate provides:
//! - [`GridId`] and [`LocationId`] - Stable handles into the world arena
//! - [`Direction`] - The four cardinal exit directions
//! - [`Entity`] and [`Examine`] - Identity and description of examinable things
//! - [`Error`] - Rich error types with context

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod direction;
pub mod entity;
pub mod error;
pub mod handle;

pub use direction::Direction;
pub use entity::{Entity, Examine, names_match};
pub use error::{Error, ErrorContext, ErrorKind};
pub use handle::{GridId, LocationId};

/// Result type alias using the Eldoria error type.
pub type Result<T> = std::result::Result<T, Error>;
