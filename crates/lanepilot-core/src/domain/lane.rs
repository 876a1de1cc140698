//! Lane value space, team mirroring, and the per-match lane decision latch.

use serde::{Deserialize, Serialize};

use super::member::Team;

/// A starting-position lane, as understood by the game console command.
///
/// The numeric codes are the wire values carried by
/// `dota_select_starting_position`. `Easy`/`Hard` and the two jungles are
/// map-absolute (Radiant perspective); side-relative preferences are turned
/// into these via [`Lane::mirrored_for`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(i32)]
pub enum Lane {
    /// No resolvable position. Never emitted.
    None = 0,
    Easy = 1,
    Mid = 2,
    Hard = 3,
    RadiantJungle = 4,
    DireJungle = 5,
}

impl Lane {
    /// Wire code for the console command.
    pub fn code(self) -> i32 {
        self as i32
    }

    /// Apply team-side mirroring.
    ///
    /// Pre-mirror values are Radiant-relative: for Dire, the easy/hard pair
    /// and the jungle pair swap. `Mid` and `None` are fixed points, so the
    /// mapping is an involution for every team.
    pub fn mirrored_for(self, team: Team) -> Lane {
        if team != Team::Dire {
            return self;
        }
        match self {
            Lane::Easy => Lane::Hard,
            Lane::Hard => Lane::Easy,
            Lane::RadiantJungle => Lane::DireJungle,
            Lane::DireJungle => Lane::RadiantJungle,
            Lane::Mid | Lane::None => self,
        }
    }

    /// Is this a position the orchestrator may commit to?
    pub fn is_resolved(self) -> bool {
        self != Lane::None
    }
}

/// The lane track of the orchestrator: at most one commitment per match.
///
/// State transitions:
/// - Undecided -> Committed: first successful lane emission.
/// - Committed -> Undecided: match boundary (or a preference change that
///   invalidates the earlier decision).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LaneDecisionState {
    committed: bool,
    lane: Option<Lane>,
}

impl LaneDecisionState {
    pub fn is_committed(&self) -> bool {
        self.committed
    }

    /// The lane of the last commitment, if any.
    pub fn lane(&self) -> Option<Lane> {
        self.lane
    }

    /// Latch a decision. Terminal until [`LaneDecisionState::reset`].
    pub fn commit(&mut self, lane: Lane) {
        self.committed = true;
        self.lane = Some(lane);
    }

    pub fn reset(&mut self) {
        self.committed = false;
        self.lane = None;
    }
}
