//! Hero-candidate selection.

use std::collections::HashSet;

use crate::domain::HeroId;
use crate::ports::HeroCatalog;
use crate::settings::Settings;

/// Find the next hero to suggest.
///
/// Walks the cached name list from its end toward its start
/// (most-recently-loaded catalog entries first — a deliberate tie-break
/// that must stay stable for reproducibility) and returns the first name
/// that:
/// - has not been suggested this match,
/// - is enabled in the per-hero toggles, and
/// - does not resolve to a rejected hero id.
///
/// Pure with respect to its inputs: unchanged state returns the same
/// candidate on every call.
pub fn next_suggestion(
    names: &[String],
    suggested: &HashSet<String>,
    rejected: &HashSet<HeroId>,
    settings: &Settings,
    catalog: &dyn HeroCatalog,
) -> Option<String> {
    names
        .iter()
        .rev()
        .find(|name| {
            !suggested.contains(*name)
                && settings.hero_enabled(name)
                && !catalog
                    .hero_id(name)
                    .is_some_and(|id| rejected.contains(&id))
        })
        .cloned()
}
