//! Command parser for Eldoria.
//!
//! Turns a line of player input into a [`Command`]:
//!
//! ```text
//! "Go North"
//!     │
//!     ▼
//! ┌─────────────────┐
//! │   TOKENIZER     │  → reject non-alphanumeric input, fold case, split
//! └─────────────────┘
//!     │
//!     ▼
//! ┌─────────────────┐
//! │   COMMAND       │  → { action: "go", arguments: ["north"], valid }
//! └─────────────────┘
//!     │
//!     ▼
//! ┌─────────────────┐
//! │   VOCABULARY    │  → Action::Go, Direction::North (done by the dispatcher)
//! └─────────────────┘
//! ```
//!
//! No semantic validation happens while parsing: unknown verbs and missing
//! arguments are left for the dispatcher to report.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod command;
pub mod parser;
pub mod tokenizer;
pub mod vocabulary;

pub use command::Command;
pub use parser::{CommandParser, ParseError};
pub use tokenizer::InputTokenizer;
pub use vocabulary::{Action, Vocabulary};
