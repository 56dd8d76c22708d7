//! Trace output formatters.
//!
//! Provides human-readable and JSON formatters for trace records.

use std::fmt::Write;

use super::record::{TraceEvent, TraceRecord};

// =============================================================================
// Trace Formatter Trait
// =============================================================================

/// Trait for formatting trace records.
pub trait TraceFormatter {
    /// Formats a single trace record to a string.
    fn format(&self, record: &TraceRecord) -> String;
}

// =============================================================================
// Human-Readable Formatter
// =============================================================================

/// Formats trace records in human-readable form.
#[derive(Clone, Debug, Default)]
pub struct HumanFormatter {
    /// Whether to include timestamps.
    pub show_timestamps: bool,
}

impl HumanFormatter {
    /// Creates a new human formatter with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to show timestamps.
    #[must_use]
    pub fn with_timestamps(mut self) -> Self {
        self.show_timestamps = true;
        self
    }

    /// Formats timestamp in microseconds.
    #[allow(clippy::cast_precision_loss)]
    fn format_timestamp(ns: u64) -> String {
        let us = ns / 1000;
        if us >= 1_000_000 {
            format!("{:.3}s", us as f64 / 1_000_000.0)
        } else if us >= 1000 {
            format!("{:.3}ms", us as f64 / 1000.0)
        } else {
            format!("{us}us")
        }
    }
}

impl TraceFormatter for HumanFormatter {
    fn format(&self, record: &TraceRecord) -> String {
        let mut prefix = format!("T{:04} ", record.turn);

        if self.show_timestamps {
            let _ = write!(prefix, "{:>10} ", Self::format_timestamp(record.timestamp_ns));
        }

        let event_str = match &record.event {
            TraceEvent::TurnStart { turn, input } => {
                format!("=== TURN {turn} START: {input:?} ===")
            }
            TraceEvent::TurnEnd { turn, rejected } => {
                let status = if *rejected { "REJECTED" } else { "OK" };
                format!("=== TURN {turn} END ({status}) ===")
            }
            TraceEvent::CommandParsed { action, arguments } => {
                if arguments.is_empty() {
                    format!("  PARSED {action}")
                } else {
                    format!("  PARSED {action} [{}]", arguments.join(", "))
                }
            }
            TraceEvent::CommandRejected { reason } => {
                format!("  REJECTED {reason}")
            }
            TraceEvent::Moved {
                direction,
                from,
                to,
                grid_changed,
            } => {
                let crossing = if *grid_changed { " (new grid)" } else { "" };
                format!("    MOVE {direction} {from} -> {to}{crossing}")
            }
            TraceEvent::ItemTransferred { item, from, to } => {
                format!("    TRANSFER {item} {from} -> {to}")
            }
            TraceEvent::ItemUsed { item, applied } => {
                let status = if *applied { "APPLIED" } else { "REFUSED" };
                format!("    USE {item} {status}")
            }
            TraceEvent::PuzzleAttempt { puzzle, solved } => {
                let status = if *solved { "SOLVED" } else { "UNSOLVED" };
                format!("    PUZZLE {puzzle} {status}")
            }
        };

        format!("{prefix}{event_str}")
    }
}

// =============================================================================
// JSON Formatter
// =============================================================================

/// Formats trace records as JSON, one object per record.
#[derive(Clone, Copy, Debug, Default)]
pub struct JsonFormatter;

impl JsonFormatter {
    /// Creates a new JSON formatter.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl TraceFormatter for JsonFormatter {
    fn format(&self, record: &TraceRecord) -> String {
        serde_json::to_string(record).unwrap_or_else(|err| {
            serde_json::json!({ "id": record.id, "error": err.to_string() }).to_string()
        })
    }
}

// =============================================================================
// Tests
// =============================================================================
