//! Ring buffer for trace records.
//!
//! Keeps the most recent records, oldest first, with lookup by turn.

use std::collections::{HashMap, VecDeque};

use super::record::{TraceEvent, TraceRecord};

/// A ring buffer for storing trace records.
///
/// Maintains a fixed maximum size, discarding oldest records when full.
#[derive(Clone, Debug)]
pub struct TraceBuffer {
    records: VecDeque<TraceRecord>,
    max_size: usize,
    next_id: u64,
}

impl TraceBuffer {
    /// Creates a new trace buffer with the given maximum size.
    #[must_use]
    pub fn new(max_size: usize) -> Self {
        Self {
            records: VecDeque::with_capacity(max_size.min(1024)),
            max_size,
            next_id: 0,
        }
    }

    /// Pushes a new event to the buffer.
    ///
    /// Returns the assigned record ID.
    pub fn push(&mut self, turn: u64, timestamp_ns: u64, event: TraceEvent) -> u64 {
        let id = self.next_id;
        self.next_id += 1;

        self.records
            .push_back(TraceRecord::new(id, turn, timestamp_ns, event));
        while self.records.len() > self.max_size {
            self.records.pop_front();
        }
        id
    }

    /// Returns the number of records in the buffer.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the buffer is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns an iterator over all records, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &TraceRecord> {
        self.records.iter()
    }

    /// Returns the newest record.
    #[must_use]
    pub fn last(&self) -> Option<&TraceRecord> {
        self.records.back()
    }

    /// Returns records for a specific turn.
    #[must_use]
    pub fn records_for_turn(&self, turn: u64) -> Vec<&TraceRecord> {
        self.records.iter().filter(|r| r.turn == turn).collect()
    }

    fn oldest_turn(&self) -> Option<u64> {
        self.records.front().map(|r| r.turn)
    }

    fn newest_turn(&self) -> Option<u64> {
        self.records.back().map(|r| r.turn)
    }

    /// Returns statistics about the buffer.
    #[must_use]
    pub fn stats(&self) -> TraceBufferStats {
        let mut event_counts = HashMap::new();
        let mut turn_count = 0;
        let mut last_turn = None;
        for record in &self.records {
            *event_counts.entry(record.event_type()).or_insert(0) += 1;
            if last_turn != Some(record.turn) {
                turn_count += 1;
                last_turn = Some(record.turn);
            }
        }

        TraceBufferStats {
            record_count: self.records.len(),
            max_size: self.max_size,
            oldest_turn: self.oldest_turn(),
            newest_turn: self.newest_turn(),
            turn_count,
            event_counts,
        }
    }
}

impl Default for TraceBuffer {
    fn default() -> Self {
        Self::new(1000)
    }
}

/// Statistics about a trace buffer.
#[derive(Clone, Debug)]
pub struct TraceBufferStats {
    /// Number of records currently in buffer.
    pub record_count: usize,
    /// Maximum buffer size.
    pub max_size: usize,
    /// Oldest turn in buffer.
    pub oldest_turn: Option<u64>,
    /// Newest turn in buffer.
    pub newest_turn: Option<u64>,
    /// Number of distinct turns.
    pub turn_count: usize,
    /// Count of each event type.
    pub event_counts: HashMap<&'static str, usize>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn start(turn: u64) -> TraceEvent {
        TraceEvent::TurnStart {
            turn,
            input: "look".to_string(),
        }
    }

    fn end(turn: u64) -> TraceEvent {
        TraceEvent::TurnEnd {
            turn,
            rejected: false,
        }
    }

    #[test]
    fn buffer_push_and_len() {
        let mut buffer = TraceBuffer::new(100);
        assert!(buffer.is_empty());

        buffer.push(1, 1000, start(1));
        buffer.push(1, 2000, end(1));
        assert_eq!(buffer.len(), 2);
    }

    #[test]
    fn buffer_eviction() {
        let mut buffer = TraceBuffer::new(3);

        buffer.push(1, 1000, start(1));
        buffer.push(1, 2000, end(1));
        buffer.push(2, 3000, start(2));
        buffer.push(2, 4000, end(2));
        assert_eq!(buffer.len(), 3);

        let oldest = buffer.iter().next().unwrap();
        assert!(matches!(oldest.event, TraceEvent::TurnEnd { turn: 1, .. }));
        assert_eq!(oldest.id, 1);
    }

    #[test]
    fn records_for_turn() {
        let mut buffer = TraceBuffer::new(100);
        buffer.push(1, 1000, start(1));
        buffer.push(1, 2000, end(1));
        buffer.push(2, 3000, start(2));

        assert_eq!(buffer.records_for_turn(1).len(), 2);
        assert_eq!(buffer.records_for_turn(2).len(), 1);
        assert!(buffer.records_for_turn(3).is_empty());
    }

    #[test]
    fn buffer_stats() {
        let mut buffer = TraceBuffer::new(100);
        buffer.push(1, 1000, start(1));
        buffer.push(1, 2000, end(1));
        buffer.push(2, 3000, start(2));

        let stats = buffer.stats();
        assert_eq!(stats.record_count, 3);
        assert_eq!(stats.oldest_turn, Some(1));
        assert_eq!(stats.newest_turn, Some(2));
        assert_eq!(stats.turn_count, 2);
        assert_eq!(stats.event_counts.get("turn-start"), Some(&2));
        assert_eq!(stats.event_counts.get("turn-end"), Some(&1));
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn keeps_the_newest_records(max_size in 1usize..20, pushes in 0usize..60) {
            let mut buffer = TraceBuffer::new(max_size);
            for turn in 0..pushes as u64 {
                buffer.push(turn, turn, TraceEvent::TurnEnd { turn, rejected: false });
            }

            prop_assert_eq!(buffer.len(), pushes.min(max_size));
            let ids: Vec<u64> = buffer.iter().map(|r| r.id).collect();
            let first = pushes.saturating_sub(max_size) as u64;
            prop_assert_eq!(ids, (first..pushes as u64).collect::<Vec<_>>());
        }
    }
}
