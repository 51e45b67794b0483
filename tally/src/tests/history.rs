use crate::history::{History, HistoryItem, HISTORY_CAPACITY};
use crate::state::AngleMode;

fn item(expression: &str, result: &str) -> HistoryItem {
    HistoryItem::new(expression.to_string(), result.to_string(), AngleMode::Deg)
}

#[test]
fn test_push_is_newest_first() {
    let mut history = History::new();
    history.push(item("1+1", "2"));
    history.push(item("2+2", "4"));

    assert_eq!(history.items()[0].expression, "2+2");
    assert_eq!(history.items()[1].expression, "1+1");
}

#[test]
fn test_capacity_evicts_oldest() {
    let mut history = History::new();
    for i in 0..60 {
        history.push(item(&format!("{i}+0"), &i.to_string()));
    }

    assert_eq!(history.len(), HISTORY_CAPACITY);
    assert_eq!(history.items()[0].expression, "59+0");
    // The ten oldest entries (0..=9) are gone.
    assert_eq!(history.items()[49].expression, "10+0");
}

#[test]
fn test_remove_by_id() {
    let mut history = History::new();
    history.push(item("1+1", "2"));
    history.push(item("2+2", "4"));
    let id = history.items()[0].id.clone();

    history.remove(&id);
    assert_eq!(history.len(), 1);
    assert_eq!(history.items()[0].expression, "1+1");

    history.remove("no-such-id");
    assert_eq!(history.len(), 1);
}

#[test]
fn test_clear() {
    let mut history = History::new();
    history.push(item("1+1", "2"));
    history.clear();
    assert!(history.is_empty());
}

#[test]
fn test_restore_truncates_oversized_snapshots() {
    let items: Vec<HistoryItem> = (0..70).map(|i| item(&format!("{i}"), "0")).collect();
    let history = History::from_items(items);
    assert_eq!(history.len(), HISTORY_CAPACITY);
    assert_eq!(history.items()[0].expression, "0");
}

#[test]
fn test_ids_are_distinct() {
    let a = item("1", "1");
    let b = item("1", "1");
    assert_ne!(a.id, b.id);
    assert_eq!(a.id.len(), 12);
}
