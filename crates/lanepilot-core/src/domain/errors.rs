//! Error types.
//!
//! The engine's failure taxonomy is "absence, not exceptions": missing
//! players, missing signals, and exhausted candidate lists are all plain
//! no-ops. The one fallible operation is membership-snapshot parsing, where
//! a malformed record must be dropped as a whole.

use thiserror::Error;

/// Why a membership snapshot was rejected.
///
/// A rejected snapshot is dropped entirely; previously ingested role
/// signals stay in effect.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum IngestError {
    #[error("snapshot has no member list")]
    MissingMemberList,

    #[error("snapshot has {count} team-scoped members, ceiling is {ceiling}")]
    TooManyMembers { count: usize, ceiling: usize },
}
