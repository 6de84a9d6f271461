use std::sync::Arc;
use std::thread;

use super::IdeaStore;

#[test]
fn test_add_trims_and_stores() {
    let store = IdeaStore::new();
    assert_eq!(store.add("  remote retro  "), Some("remote retro".to_string()));
    assert_eq!(store.list(), vec!["remote retro"]);
}

#[test]
fn test_duplicate_add_is_a_noop() {
    let store = IdeaStore::new();
    assert!(store.add("pair rotation").is_some());
    assert!(store.add("pair rotation").is_none());
    assert!(store.add("  pair rotation  ").is_none());
    assert_eq!(store.list(), vec!["pair rotation"]);
}

#[test]
fn test_empty_and_whitespace_ideas_are_rejected() {
    let store = IdeaStore::new();
    assert!(store.add("").is_none());
    assert!(store.add("   ").is_none());
    assert!(store.is_empty());
    assert!(store.list().is_empty());
}

#[test]
fn test_list_is_sorted_and_deterministic() {
    let store = IdeaStore::new();
    store.add("zebra stripes");
    store.add("api gateway");
    store.add("mob programming");
    let first = store.list();
    assert_eq!(first, vec!["api gateway", "mob programming", "zebra stripes"]);
    assert_eq!(store.list(), first);
}

#[test]
fn test_list_returns_a_detached_copy() {
    let store = IdeaStore::new();
    store.add("alpha");
    let mut snapshot = store.list();
    snapshot.push("injected".to_string());
    assert_eq!(store.list(), vec!["alpha"]);
}

#[test]
fn test_concurrent_adds_lose_nothing() {
    let store = Arc::new(IdeaStore::new());
    let mut handles = Vec::new();
    for worker in 0..8 {
        let store = store.clone();
        handles.push(thread::spawn(move || {
            for i in 0..50 {
                store.add(&format!("idea-{worker}-{i}"));
            }
        }));
    }
    for handle in handles {
        handle.join().unwrap();
    }
    assert_eq!(store.len(), 8 * 50);
}

#[test]
fn test_concurrent_duplicate_adds_store_once() {
    let store = Arc::new(IdeaStore::new());
    let handles: Vec<_> = (0..8)
        .map(|_| {
            let store = store.clone();
            thread::spawn(move || {
                for _ in 0..100 {
                    store.add("the same idea");
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }
    assert_eq!(store.list(), vec!["the same idea"]);
}
