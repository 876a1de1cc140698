//! Hero catalog entries: identity, primary attribute, validity rules.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Catalog names follow this prefix convention; the suggestion command wants
/// the bare name with the prefix stripped.
pub const HERO_NAME_PREFIX: &str = "npc_dota_hero_";

/// Placeholder entries that exist in the catalog but are never suggestible.
const RESERVED_NAMES: [&str; 2] = ["npc_dota_hero_base", "npc_dota_hero_target_dummy"];

/// Unique numeric hero identity from the catalog.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct HeroId(pub u32);

impl HeroId {
    pub fn is_valid(self) -> bool {
        self.0 != 0
    }
}

impl fmt::Display for HeroId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hero-{}", self.0)
    }
}

/// Primary attribute category, used as the manual candidate filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Attribute {
    Strength = 0,
    Agility = 1,
    Intellect = 2,
    Universal = 3,
}

/// One immutable catalog entry. The catalog itself may be refreshed, which
/// invalidates any name list cached from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeroEntry {
    pub id: HeroId,
    pub name: String,
    pub attribute: Attribute,
}

impl HeroEntry {
    pub fn new(id: u32, name: impl Into<String>, attribute: Attribute) -> Self {
        Self {
            id: HeroId(id),
            name: name.into(),
            attribute,
        }
    }

    /// Derived validity: non-zero id, prefix convention, not a placeholder.
    pub fn is_valid(&self) -> bool {
        self.id.is_valid()
            && self.name.starts_with(HERO_NAME_PREFIX)
            && !RESERVED_NAMES.contains(&self.name.as_str())
    }
}

/// Strip the catalog prefix: `npc_dota_hero_axe` -> `axe`.
///
/// Names without the prefix pass through unchanged (they cannot come from a
/// valid entry, but the command stays well-formed).
pub fn bare_name(name: &str) -> &str {
    name.strip_prefix(HERO_NAME_PREFIX).unwrap_or(name)
}
