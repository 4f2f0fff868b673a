//! Bounded, newest-first session history shared by every page.

use std::collections::VecDeque;

use chrono::Utc;

pub const HISTORY_CAPACITY: usize = 50;

#[derive(Clone, Debug, PartialEq)]
pub struct HistoryEntry<T> {
    pub payload: T,
    /// Milliseconds since the Unix epoch.
    pub timestamp: i64,
}

/// Most-recent-first log capped at [`HISTORY_CAPACITY`] entries unless built
/// with another cap; the oldest entries fall off the end.
#[derive(Clone, Debug)]
pub struct HistoryLog<T> {
    entries: VecDeque<HistoryEntry<T>>,
    capacity: usize,
}

impl<T> Default for HistoryLog<T> {
    fn default() -> Self {
        Self::with_capacity(HISTORY_CAPACITY)
    }
}

impl<T> HistoryLog<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// A log keeping at most `capacity` entries (at least one).
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Records `payload` at the current time.
    pub fn append(&mut self, payload: T) {
        self.append_at(payload, Utc::now().timestamp_millis());
    }

    pub fn append_at(&mut self, payload: T, timestamp: i64) {
        self.entries.push_front(HistoryEntry { payload, timestamp });
        self.entries.truncate(self.capacity);
    }

    /// Records a whole result batch; the batch keeps its order at the front.
    pub fn append_batch(&mut self, payloads: impl IntoIterator<Item = T>) {
        let timestamp = Utc::now().timestamp_millis();
        let batch: Vec<T> = payloads.into_iter().collect();
        for payload in batch.into_iter().rev() {
            self.append_at(payload, timestamp);
        }
    }

    /// Entries from newest to oldest.
    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry<T>> {
        self.entries.iter()
    }

    pub fn latest(&self) -> Option<&HistoryEntry<T>> {
        self.entries.front()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
