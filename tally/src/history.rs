//! Append-only, capacity-bounded record of accepted calculations.

use chrono::Utc;
use rand::distributions::Alphanumeric;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::state::AngleMode;

/// Maximum number of entries the store keeps.
pub const HISTORY_CAPACITY: usize = 50;

/// One accepted calculation. Immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryItem {
    pub id: String,
    pub expression: String,
    pub result: String,
    pub mode: AngleMode,
    /// Epoch milliseconds.
    pub timestamp: i64,
}

impl HistoryItem {
    pub fn new(expression: String, result: String, mode: AngleMode) -> Self {
        Self {
            id: generate_id(),
            expression,
            result,
            mode,
            timestamp: Utc::now().timestamp_millis(),
        }
    }
}

fn generate_id() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(12)
        .map(char::from)
        .collect()
}

/// Newest-first history store. Items only enter through [`History::push`];
/// there is no update-in-place.
#[derive(Debug, Clone, Default)]
pub struct History {
    items: Vec<HistoryItem>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restore a persisted snapshot. Oversized snapshots are truncated to
    /// the capacity, oldest entries first.
    pub fn from_items(mut items: Vec<HistoryItem>) -> Self {
        items.truncate(HISTORY_CAPACITY);
        Self { items }
    }

    /// Insert at the front, evicting the oldest entries beyond capacity.
    pub fn push(&mut self, item: HistoryItem) {
        self.items.insert(0, item);
        self.items.truncate(HISTORY_CAPACITY);
    }

    /// Delete the entry with the given id, if present.
    pub fn remove(&mut self, id: &str) {
        self.items.retain(|item| item.id != id);
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// All entries, newest first.
    pub fn items(&self) -> &[HistoryItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
