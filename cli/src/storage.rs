//! Fire-and-forget persistence of the calculation history.
//!
//! All I/O failures are swallowed here: a missing or unreadable file loads
//! as an empty history, and a failed save is a no-op. Nothing propagates
//! into the core.

use std::fs;
use std::path::PathBuf;

use tally::HistoryItem;

const HISTORY_FILE: &str = "history.json";

fn data_dir() -> Option<PathBuf> {
    Some(dirs::data_dir()?.join("tally"))
}

pub fn load() -> Vec<HistoryItem> {
    let Some(dir) = data_dir() else {
        return Vec::new();
    };
    let Ok(text) = fs::read_to_string(dir.join(HISTORY_FILE)) else {
        return Vec::new();
    };
    serde_json::from_str(&text).unwrap_or_default()
}

pub fn save(items: &[HistoryItem]) {
    let Some(dir) = data_dir() else {
        return;
    };
    if fs::create_dir_all(&dir).is_err() {
        return;
    }
    if let Ok(text) = serde_json::to_string_pretty(items) {
        let _ = fs::write(dir.join(HISTORY_FILE), text);
    }
}
