//! Lane resolution: reconcile the role-based signal with the manual
//! preference and the team side.
//!
//! This is a pure function of its inputs (state + observation -> value, no
//! side effects); applying the result exactly once is the orchestrator's
//! responsibility.

use super::lane::Lane;
use super::member::Team;
use super::role::{Role, RoleFlags};

/// Resolve the starting position for the local player.
///
/// - `role_based == false`, or no role declared in `signal`: the manual
///   preference applies unchanged. Absence is never an error.
/// - Otherwise the last-declared role in the signal wins (later entries in
///   the declaration list override earlier ones).
///
/// The chosen role goes through the fixed mapping table and then through
/// team mirroring, so side-relative preferences land on the correct side of
/// the map for both teams.
pub fn resolve_lane(
    team: Team,
    manual: Role,
    signal: Option<RoleFlags>,
    role_based: bool,
) -> Lane {
    let role = if role_based {
        signal.and_then(RoleFlags::last_declared).unwrap_or(manual)
    } else {
        manual
    };
    lane_for_role(role).mirrored_for(team)
}

/// The mapping table, pre-mirror (Radiant perspective).
///
/// Single source of truth:
/// - mid          -> Mid
/// - offlane      -> hard-side lane
/// - support      -> own-side jungle
/// - hard-support -> easy-side lane
/// - safe-lane    -> easy-side lane
fn lane_for_role(role: Role) -> Lane {
    match role {
        Role::MidLane => Lane::Mid,
        Role::OffLane => Lane::Hard,
        Role::Support => Lane::RadiantJungle,
        Role::HardSupport | Role::SafeLane => Lane::Easy,
    }
}
