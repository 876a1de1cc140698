//! In-memory hero catalog.

use std::collections::HashMap;

use crate::domain::{HeroEntry, HeroId};
use crate::ports::HeroCatalog;

/// A catalog backed by a fixed entry list (tests, demos, cached game data).
///
/// Load order of `entries` is preserved; `replace` models a wholesale
/// catalog refresh.
pub struct StaticCatalog {
    entries: Vec<HeroEntry>,
    by_name: HashMap<String, HeroId>,
}

impl StaticCatalog {
    pub fn new(entries: Vec<HeroEntry>) -> Self {
        let by_name = entries
            .iter()
            .map(|e| (e.name.clone(), e.id))
            .collect();
        Self { entries, by_name }
    }

    /// Swap in a refreshed entry list.
    pub fn replace(&mut self, entries: Vec<HeroEntry>) {
        *self = Self::new(entries);
    }
}

impl HeroCatalog for StaticCatalog {
    fn entries(&self) -> Vec<HeroEntry> {
        self.entries.clone()
    }

    fn hero_id(&self, name: &str) -> Option<HeroId> {
        self.by_name.get(name).copied()
    }
}
