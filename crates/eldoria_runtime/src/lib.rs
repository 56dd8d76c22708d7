//! Game loop and command-line front end for Eldoria.
//!
//! This crate provides:
//! - [`Repl`] - Reads commands, runs turns, prints reports
//! - [`LineEditor`] - Input port, with [`RustylineEditor`] for terminals and
//!   [`ScriptedEditor`] for command files and tests

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod editor;
pub mod repl;

pub use editor::{LineEditor, ReadResult, RustylineEditor, ScriptedEditor};
pub use repl::Repl;
