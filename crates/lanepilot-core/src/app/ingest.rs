//! Membership-snapshot ingestion.
//!
//! Snapshots arrive as loosely-typed JSON records from the lobby
//! collaborator. All of the optional-field digging happens here, once, at
//! the boundary: the orchestrator only ever sees typed [`MemberUpdate`]s or
//! a rejected snapshot.

use serde_json::Value;

use crate::domain::{IngestError, MemberUpdate, PlayerId, RoleFlags, Team};

/// Snapshots claiming more team-scoped members than this are treated as
/// malformed and dropped whole (two teams of five is the maximum a real
/// lobby produces).
pub const MAX_TEAM_MEMBERS: usize = 10;

/// Extract the team-scoped members of a snapshot record.
///
/// Shape (fields are all optional per member):
/// `{ "all_members": [ { "id": u64, "team": i64, "lane_selection_flags": u8 }, ... ] }`
///
/// Members without an identity or outside Radiant/Dire are skipped; a
/// snapshot whose remaining member count exceeds [`MAX_TEAM_MEMBERS`] is
/// rejected entirely so the caller keeps its previous state.
pub fn team_members(snapshot: &Value) -> Result<Vec<MemberUpdate>, IngestError> {
    let members = snapshot
        .get("all_members")
        .and_then(Value::as_array)
        .ok_or(IngestError::MissingMemberList)?;

    let updates: Vec<MemberUpdate> = members.iter().filter_map(member_update).collect();

    if updates.len() > MAX_TEAM_MEMBERS {
        return Err(IngestError::TooManyMembers {
            count: updates.len(),
            ceiling: MAX_TEAM_MEMBERS,
        });
    }
    Ok(updates)
}

/// Try-get one member record. `None` drops the member, not the snapshot.
fn member_update(record: &Value) -> Option<MemberUpdate> {
    let id = record.get("id").and_then(Value::as_u64).map(PlayerId)?;
    let team = Team::from_wire(record.get("team").and_then(Value::as_i64)?);
    if !team.is_playing() {
        return None;
    }
    let roles = record
        .get("lane_selection_flags")
        .and_then(Value::as_u64)
        .map(RoleFlags::from_wire);
    Some(MemberUpdate { id, team, roles })
}
