//! Party/lobby membership types: player identity, team tags, snapshot metadata.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::role::RoleFlags;

/// Stable per-player identity (steam account id), supplied by the lobby
/// collaborator. Strongly typed so it cannot be confused with hero ids.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct PlayerId(pub u64);

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "player-{}", self.0)
    }
}

/// Team affiliation. The discriminants are the wire tags used in membership
/// records; anything that is not Radiant/Dire is out of team scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(i32)]
pub enum Team {
    Radiant = 2,
    Dire = 3,
    Other = 0,
}

impl Team {
    pub fn from_wire(tag: i64) -> Team {
        match tag {
            2 => Team::Radiant,
            3 => Team::Dire,
            _ => Team::Other,
        }
    }

    /// Radiant and Dire members are the only ones a snapshot update tracks.
    pub fn is_playing(self) -> bool {
        matches!(self, Team::Radiant | Team::Dire)
    }
}

/// Which shared object a membership snapshot belongs to. Only lobby-scoped
/// snapshots are processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapshotScope {
    Lobby,
    Other,
}

/// Why a membership snapshot was delivered.
///
/// Wire codes: 0 = normal update, 2 = cleared (lobby torn down). Everything
/// else (e.g. single-member removal) is ignored by the core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapshotReason {
    Updated,
    Cleared,
    Other(i32),
}

impl SnapshotReason {
    pub fn from_wire(reason: i32) -> SnapshotReason {
        match reason {
            0 => SnapshotReason::Updated,
            2 => SnapshotReason::Cleared,
            n => SnapshotReason::Other(n),
        }
    }
}

/// One team-scoped member extracted from a snapshot: identity plus the
/// optional self-declared role signal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberUpdate {
    pub id: PlayerId,
    pub team: Team,
    pub roles: Option<RoleFlags>,
}
