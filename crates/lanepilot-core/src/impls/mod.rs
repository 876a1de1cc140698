//! In-memory implementations of the ports (tests and demos).

pub mod recording_sink;
pub mod static_catalog;

pub use self::recording_sink::RecordingSink;
pub use self::static_catalog::StaticCatalog;
