//! Repetition table keyed by position key (FEN without the two clocks).

use std::collections::HashMap;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PositionHistory {
    counts: HashMap<String, u32>,
}

impl PositionHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one more occurrence of `key` and return the new count.
    pub fn record(&mut self, key: String) -> u32 {
        let count = self.counts.entry(key).or_insert(0);
        *count += 1;
        *count
    }

    pub fn count(&self, key: &str) -> u32 {
        self.counts.get(key).copied().unwrap_or(0)
    }

    /// Number of distinct positions seen.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}
