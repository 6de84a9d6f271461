use std::collections::BTreeSet;
use std::sync::Mutex;

/// Concurrency-safe collection of unique ideas.
///
/// The store is append-only: once an idea is in, it is never removed or
/// mutated. Uniqueness is exact string equality after trimming leading and
/// trailing whitespace. Ideas live in a `BTreeSet`, so a listing always
/// comes back in lexicographic order.
///
/// All methods take `&self`; an internal mutex serializes writers, and a
/// reader never observes a partially applied insert.
#[derive(Debug, Default)]
pub struct IdeaStore {
    ideas: Mutex<BTreeSet<String>>,
}

impl IdeaStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Trims `text` and stores it if it is new.
    ///
    /// Returns the stored form when the idea was actually inserted, `None`
    /// when the trimmed text was empty or already present.
    pub fn add(&self, text: &str) -> Option<String> {
        let idea = text.trim();
        if idea.is_empty() {
            return None;
        }
        let mut ideas = self.ideas.lock().unwrap();
        if ideas.insert(idea.to_string()) {
            Some(idea.to_string())
        } else {
            None
        }
    }

    /// Returns a point-in-time copy of all stored ideas, sorted
    /// lexicographically.
    ///
    /// The copy is detached from the store: mutating it has no effect on
    /// stored state.
    pub fn list(&self) -> Vec<String> {
        let ideas = self.ideas.lock().unwrap();
        ideas.iter().cloned().collect()
    }

    /// Number of stored ideas.
    pub fn len(&self) -> usize {
        self.ideas.lock().unwrap().len()
    }

    /// Whether the store holds no ideas yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
