//! Calculation tape: a bounded log of completed evaluations
//!
//! The tape only records. Nothing reads it back into the engine.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

use crate::core::CalcResult;

/// A single completed evaluation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TapeEntry {
    /// Rendered operands and operator, e.g. `"8 + 2"`
    pub expression: String,
    /// Rendered result, e.g. `"10"` or `"Error"`
    pub result: String,
    /// Unix epoch millis when the evaluation completed
    pub timestamp: u64,
}

impl TapeEntry {
    /// Creates a new entry stamped with the current time
    #[must_use]
    pub fn new(expression: String, result: String) -> Self {
        Self {
            expression,
            result,
            timestamp: Self::current_timestamp(),
        }
    }

    /// Creates an entry with a specific timestamp (for testing)
    #[must_use]
    pub fn with_timestamp(expression: String, result: String, timestamp: u64) -> Self {
        Self {
            expression,
            result,
            timestamp,
        }
    }

    fn current_timestamp() -> u64 {
        use std::time::{SystemTime, UNIX_EPOCH};
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    }

    /// Returns `"expression = result"`
    #[must_use]
    pub fn display(&self) -> String {
        format!("{} = {}", self.expression, self.result)
    }
}

/// Bounded tape of evaluations, oldest dropped first
///
/// Serializes as the JSON array of its entries.
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct Tape {
    entries: VecDeque<TapeEntry>,
    #[serde(skip)]
    capacity: usize,
}

impl Default for Tape {
    fn default() -> Self {
        Self::new()
    }
}

impl Tape {
    /// Default number of entries kept
    pub const DEFAULT_CAPACITY: usize = 100;

    /// Creates a tape with the default capacity
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }

    /// Creates a tape keeping at most `capacity` entries (0 records nothing)
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity.min(Self::DEFAULT_CAPACITY)),
            capacity,
        }
    }

    /// Appends an entry, evicting the oldest when full
    pub fn push(&mut self, entry: TapeEntry) {
        if self.capacity == 0 {
            return;
        }
        if self.entries.len() >= self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }

    /// Records an evaluation
    pub fn record(&mut self, expression: String, result: &str) {
        self.push(TapeEntry::new(expression, result.to_string()));
    }

    /// Number of entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing has been recorded
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Maximum number of entries kept
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Drops every entry
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Entries, oldest first
    pub fn iter(&self) -> impl Iterator<Item = &TapeEntry> {
        self.entries.iter()
    }

    /// Entries, newest first
    pub fn iter_rev(&self) -> impl Iterator<Item = &TapeEntry> {
        self.entries.iter().rev()
    }

    /// Most recent entry
    #[must_use]
    pub fn last(&self) -> Option<&TapeEntry> {
        self.entries.back()
    }

    /// Entry at `index` (0 = oldest)
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&TapeEntry> {
        self.entries.get(index)
    }

    /// Serializes the entries to a JSON array
    pub fn to_json(&self) -> CalcResult<String> {
        Ok(serde_json::to_string(&self.entries)?)
    }

    /// Rebuilds a tape from a JSON array, keeping the newest `capacity` entries
    pub fn from_json(json: &str, capacity: usize) -> CalcResult<Self> {
        let entries: Vec<TapeEntry> = serde_json::from_str(json)?;
        let mut tape = Self::with_capacity(capacity);
        for entry in entries {
            tape.push(entry);
        }
        Ok(tape)
    }

    /// One `"expression = result"` line per entry, oldest first
    #[must_use]
    pub fn export_formatted(&self) -> String {
        self.entries
            .iter()
            .map(TapeEntry::display)
            .collect::<Vec<_>>()
            .join("\n")
    }
}
