//! Turn tracing for Eldoria.
//!
//! This crate provides:
//! - [`Tracer`] - Records what each turn did, with zero cost when disabled
//! - [`TraceBuffer`] - Ring buffer of recent records, indexed by turn
//! - [`HumanFormatter`] / [`JsonFormatter`] - Output formats

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod trace;

pub use config::{TraceOutput, TracerConfig};
pub use trace::{
    HumanFormatter, JsonFormatter, TraceBuffer, TraceBufferStats, TraceEvent, TraceFormatter,
    TraceRecord, Tracer,
};
