//! Completed calculations, newest first.

use serde::Serialize;
use std::collections::VecDeque;
use std::fmt;

/// Default number of calculations kept.
pub const DEFAULT_HISTORY_CAPACITY: usize = 50;

/// A successful evaluation: the expression as typed and its result.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct HistoryEntry {
    expression: String,
    result: f64,
}

impl HistoryEntry {
    pub fn new(expression: impl Into<String>, result: f64) -> Self {
        Self {
            expression: expression.into(),
            result,
        }
    }

    pub fn expression(&self) -> &str {
        &self.expression
    }

    pub fn result(&self) -> f64 {
        self.result
    }
}

impl fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.expression, self.result)
    }
}

/// Capacity-bounded list of [`HistoryEntry`], newest first.
///
/// Pushing onto a full list drops the oldest entry.
#[derive(Clone, Debug, PartialEq)]
pub struct HistoryList {
    entries: VecDeque<HistoryEntry>,
    capacity: usize,
}

impl Default for HistoryList {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_HISTORY_CAPACITY)
    }
}

impl HistoryList {
    /// A capacity of zero is raised to one.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Insert as the newest entry, returning the evicted oldest entry if the
    /// list was full.
    pub fn push(&mut self, entry: HistoryEntry) -> Option<HistoryEntry> {
        let evicted = if self.entries.len() >= self.capacity {
            self.entries.pop_back()
        } else {
            None
        };
        self.entries.push_front(entry);
        evicted
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Result of the newest entry.
    pub fn most_recent_result(&self) -> Option<f64> {
        self.entries.front().map(HistoryEntry::result)
    }

    /// Entries from newest to oldest.
    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    pub fn get(&self, index: usize) -> Option<&HistoryEntry> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
