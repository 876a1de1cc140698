//! User preferences and the cached hero-name list.
//!
//! The values mirror the external configuration UI: an enable switch, the
//! role-based/manual mode flag, the manual lane pick, a primary-attribute
//! filter for the hero pool, and per-hero inclusion toggles. The engine
//! reads these on every tick and mutates them only through the
//! orchestrator's explicit setters (which know what a change invalidates).

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::domain::{Attribute, Role};
use crate::ports::HeroCatalog;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Master switch. Default off: the engine does nothing until the user
    /// opts in.
    pub enabled: bool,

    /// Resolve the lane from the declared role signal when available
    /// (ranked games); otherwise the manual pick applies.
    pub role_based: bool,

    /// Manual lane preference (also the role-based fallback).
    pub manual_lane: Role,

    /// Primary-attribute filter for [`Settings::selectable_heroes`].
    pub attribute_filter: Attribute,

    /// Heroes excluded from suggestion. Everything is included by default,
    /// so only exclusions are stored.
    disabled_heroes: HashSet<String>,

    /// Valid catalog names in load order, rebuilt on catalog refresh.
    /// Not a preference: this is derived state cached here because the
    /// selector and the UI listing both consume it.
    #[serde(skip)]
    hero_names: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            enabled: false,
            role_based: true,
            manual_lane: Role::MidLane,
            attribute_filter: Attribute::Strength,
            disabled_heroes: HashSet::new(),
            hero_names: Vec::new(),
        }
    }
}

impl Settings {
    /// Is this hero allowed as a suggestion candidate?
    pub fn hero_enabled(&self, name: &str) -> bool {
        !self.disabled_heroes.contains(name)
    }

    pub fn set_hero_enabled(&mut self, name: &str, enabled: bool) {
        if enabled {
            self.disabled_heroes.remove(name);
        } else {
            self.disabled_heroes.insert(name.to_string());
        }
    }

    /// Cached valid hero names, catalog load order preserved.
    pub fn hero_names(&self) -> &[String] {
        &self.hero_names
    }

    /// Rebuild the cached name list from a (possibly refreshed) catalog.
    /// Invalid and placeholder entries are filtered out here, once, so the
    /// per-tick selector never re-derives validity.
    pub fn refresh_hero_names(&mut self, catalog: &dyn HeroCatalog) {
        self.hero_names = catalog
            .entries()
            .iter()
            .filter(|e| e.is_valid())
            .map(|e| e.name.clone())
            .collect();
    }

    /// The attribute-filtered hero pool, alphabetically sorted (the list the
    /// configuration UI displays for per-hero toggling).
    pub fn selectable_heroes(&self, catalog: &dyn HeroCatalog) -> Vec<String> {
        let mut names: Vec<String> = catalog
            .entries()
            .iter()
            .filter(|e| e.is_valid() && e.attribute == self.attribute_filter)
            .map(|e| e.name.clone())
            .collect();
        names.sort();
        names
    }

    /// Restore documented defaults for the four main preferences.
    ///
    /// Per-hero toggles and the cached name list survive a reset, matching
    /// the configuration UI (its reset button restores only the widgets it
    /// owns).
    pub fn restore_defaults(&mut self) {
        let defaults = Settings::default();
        self.enabled = defaults.enabled;
        self.role_based = defaults.role_based;
        self.manual_lane = defaults.manual_lane;
        self.attribute_filter = defaults.attribute_filter;
    }
}
