//! Tracks which event detail pages have been opened.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::FestResult;
use crate::storage::{self, KeyValueStore, VISITED_KEY};

/// Distinct event ids in first-visit order. Never shrinks.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Visited {
    ids: Vec<String>,
}

impl Visited {
    /// Returns true if the id was new.
    pub fn mark(&mut self, id: &str) -> bool {
        if self.contains(id) {
            return false;
        }
        self.ids.push(id.to_string());
        true
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|v| v == id)
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

pub struct VisitedTracker {
    storage: Arc<dyn KeyValueStore>,
    visited: Visited,
}

impl VisitedTracker {
    pub fn load(storage: Arc<dyn KeyValueStore>) -> Self {
        let visited = storage::load_or_default(storage.as_ref(), VISITED_KEY);
        VisitedTracker { storage, visited }
    }

    /// Idempotent; storage is only written when the id is new.
    pub fn mark_visited(&mut self, id: &str) -> FestResult<bool> {
        if !self.visited.mark(id) {
            return Ok(false);
        }
        storage::save(self.storage.as_ref(), VISITED_KEY, &self.visited)?;
        Ok(true)
    }

    pub fn is_visited(&self, id: &str) -> bool {
        self.visited.contains(id)
    }

    pub fn count(&self) -> usize {
        self.visited.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn size_equals_distinct_ids_marked() {
        let mut visited = Visited::default();
        let marks = ["hackathon", "robo-wars", "hackathon", "masterchef", "robo-wars"];

        let mut last = 0;
        for id in marks {
            visited.mark(id);
            assert!(visited.len() >= last);
            last = visited.len();
        }

        assert_eq!(visited.len(), 3);
        assert_eq!(visited.ids(), ["hackathon", "robo-wars", "masterchef"]);
    }

    #[test]
    fn tracker_persists_new_ids() {
        let storage: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
        let mut tracker = VisitedTracker::load(storage.clone());

        assert!(tracker.mark_visited("yakshagana").unwrap());
        assert!(!tracker.mark_visited("yakshagana").unwrap());
        assert!(tracker.is_visited("yakshagana"));
        assert!(!tracker.is_visited("comedy-show"));

        let reloaded = VisitedTracker::load(storage);
        assert_eq!(reloaded.count(), 1);
        assert!(reloaded.is_visited("yakshagana"));
    }
}
