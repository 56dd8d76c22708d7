//! Turn tracing.
//!
//! Records what each turn did with zero overhead when disabled. Supports
//! both human-readable and JSON output formats.

pub mod buffer;
pub mod format;
pub mod record;

pub use buffer::{TraceBuffer, TraceBufferStats};
pub use format::{HumanFormatter, JsonFormatter, TraceFormatter};
pub use record::{TraceEvent, TraceRecord};

use std::fmt::Write as _;
use std::io::{self, Write};
use std::time::Instant;

use eldoria_foundation::Direction;

use crate::config::{TraceOutput, TracerConfig};

/// The main tracer for recording turn events.
///
/// The `record` method returns immediately if tracing is off.
pub struct Tracer {
    config: TracerConfig,
    buffer: TraceBuffer,
    current_turn: u64,
    start_time: Instant,
    human_formatter: HumanFormatter,
    json_formatter: JsonFormatter,
}

impl Tracer {
    /// Creates a new tracer with the given configuration.
    #[must_use]
    pub fn new(config: TracerConfig) -> Self {
        let buffer_size = config.buffer_size;
        Self {
            config,
            buffer: TraceBuffer::new(buffer_size),
            current_turn: 0,
            start_time: Instant::now(),
            human_formatter: HumanFormatter::new().with_timestamps(),
            json_formatter: JsonFormatter::new(),
        }
    }

    /// Creates a tracer with default configuration (disabled).
    #[must_use]
    pub fn disabled() -> Self {
        Self::new(TracerConfig::default())
    }

    /// Returns whether tracing is enabled.
    #[must_use]
    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.config.enabled
    }

    /// Returns the current turn number.
    #[must_use]
    pub fn current_turn(&self) -> u64 {
        self.current_turn
    }

    /// Records a trace event.
    #[inline]
    pub fn record(&mut self, event: TraceEvent) {
        if !self.config.enabled {
            return;
        }
        self.record_internal(event);
    }

    fn record_internal(&mut self, event: TraceEvent) {
        if !self.config.event_filter.is_empty()
            && !self
                .config
                .event_filter
                .iter()
                .any(|kind| kind == event.event_type())
        {
            return;
        }

        #[allow(clippy::cast_possible_truncation)]
        let timestamp_ns = self.start_time.elapsed().as_nanos() as u64;
        self.buffer.push(self.current_turn, timestamp_ns, event);

        if self.config.output == TraceOutput::None {
            return;
        }
        if let Some(record) = self.buffer.last() {
            let line = self.format_record(record);
            match self.config.output {
                TraceOutput::Stderr => {
                    let _ = writeln!(io::stderr(), "{line}");
                }
                TraceOutput::Log => log::trace!(target: "eldoria::trace", "{line}"),
                TraceOutput::None => {}
            }
        }
    }

    /// Formats a record using the current format settings.
    #[must_use]
    pub fn format_record(&self, record: &TraceRecord) -> String {
        if self.config.json_format {
            self.json_formatter.format(record)
        } else {
            self.human_formatter.format(record)
        }
    }

    /// Returns the trace buffer.
    #[must_use]
    pub fn buffer(&self) -> &TraceBuffer {
        &self.buffer
    }

    /// Returns buffer statistics.
    #[must_use]
    pub fn stats(&self) -> TraceBufferStats {
        self.buffer.stats()
    }

    /// One-line summary of what the buffer holds, printed when a traced
    /// session ends.
    #[must_use]
    pub fn summary(&self) -> String {
        let stats = self.stats();
        let mut text = format!(
            "trace: {} records over {} turns",
            stats.record_count, stats.turn_count
        );
        if let (Some(oldest), Some(newest)) = (stats.oldest_turn, stats.newest_turn) {
            let _ = write!(text, " ({oldest}..={newest})");
        }
        let mut counts: Vec<_> = stats.event_counts.into_iter().collect();
        counts.sort_unstable();
        for (event_type, count) in counts {
            let _ = write!(text, ", {event_type} {count}");
        }
        text
    }

    // -------------------------------------------------------------------------
    // Convenience methods for common events
    // -------------------------------------------------------------------------

    /// Records a turn start event.
    #[inline]
    pub fn turn_start(&mut self, turn: u64, input: &str) {
        self.current_turn = turn;
        self.record(TraceEvent::TurnStart {
            turn,
            input: input.to_string(),
        });
    }

    /// Records a turn end event.
    #[inline]
    pub fn turn_end(&mut self, turn: u64, rejected: bool) {
        self.record(TraceEvent::TurnEnd { turn, rejected });
    }

    /// Records a parsed command.
    #[inline]
    pub fn command_parsed(&mut self, action: &str, arguments: &[String]) {
        if self.is_enabled() {
            self.record(TraceEvent::CommandParsed {
                action: action.to_string(),
                arguments: arguments.to_vec(),
            });
        }
    }

    /// Records a rejected command.
    #[inline]
    pub fn command_rejected(&mut self, reason: impl Into<String>) {
        if self.is_enabled() {
            self.record(TraceEvent::CommandRejected {
                reason: reason.into(),
            });
        }
    }

    /// Records a move.
    #[inline]
    pub fn moved(&mut self, direction: Direction, from: &str, to: &str, grid_changed: bool) {
        if self.is_enabled() {
            self.record(TraceEvent::Moved {
                direction,
                from: from.to_string(),
                to: to.to_string(),
                grid_changed,
            });
        }
    }

    /// Records an item transfer.
    #[inline]
    pub fn item_transferred(&mut self, item: &str, from: &str, to: &str) {
        if self.is_enabled() {
            self.record(TraceEvent::ItemTransferred {
                item: item.to_string(),
                from: from.to_string(),
                to: to.to_string(),
            });
        }
    }

    /// Records an item use.
    #[inline]
    pub fn item_used(&mut self, item: &str, applied: bool) {
        if self.is_enabled() {
            self.record(TraceEvent::ItemUsed {
                item: item.to_string(),
                applied,
            });
        }
    }

    /// Records a puzzle attempt.
    #[inline]
    pub fn puzzle_attempt(&mut self, puzzle: &str, solved: bool) {
        if self.is_enabled() {
            self.record(TraceEvent::PuzzleAttempt {
                puzzle: puzzle.to_string(),
                solved,
            });
        }
    }
}

impl Default for Tracer {
    fn default() -> Self {
        Self::disabled()
    }
}

impl std::fmt::Debug for Tracer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tracer")
            .field("config", &self.config)
            .field("records", &self.buffer.len())
            .field("current_turn", &self.current_turn)
            .finish_non_exhaustive()
    }
}

// =============================================================================
// Tests
// =============================================================================
