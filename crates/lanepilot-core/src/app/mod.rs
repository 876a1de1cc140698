//! Application logic: snapshot ingestion, candidate selection, and the
//! orchestrator that drives both decision tracks.

pub mod ingest;
pub mod orchestrator;
pub mod selector;

pub use self::ingest::MAX_TEAM_MEMBERS;
pub use self::orchestrator::{
    LocalPlayerView, Orchestrator, POSSIBLE_HERO_SLOT, RESET_SETTINGS_SLOT, TickContext,
};
