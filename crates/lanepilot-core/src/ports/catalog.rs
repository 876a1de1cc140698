//! Hero catalog port.

use crate::domain::{HeroEntry, HeroId};

/// Read access to the static hero catalog.
///
/// The catalog is owned by an external collaborator and may be refreshed
/// wholesale (new game data); the orchestrator is told about refreshes via
/// `on_catalog_updated` and rebuilds its cached name list. This trait is the
/// seam for swapping the real game-data source for an in-memory one.
pub trait HeroCatalog {
    /// All entries in catalog load order. Later entries are preferred by the
    /// candidate selector, so the order is part of the contract.
    fn entries(&self) -> Vec<HeroEntry>;

    /// Look up the numeric id for a catalog name.
    fn hero_id(&self, name: &str) -> Option<HeroId>;
}
