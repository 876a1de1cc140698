//! Declared role preferences: the per-player lane-selection bitmask.

use serde::{Deserialize, Serialize};

/// A self-declared role, as picked in the ranked role selector.
///
/// The discriminants match the dropdown/bitmask ordering of the game client
/// (safe lane first, hard support last).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Role {
    SafeLane = 0,
    OffLane = 1,
    MidLane = 2,
    Support = 3,
    HardSupport = 4,
}

impl Role {
    pub const ALL: [Role; 5] = [
        Role::SafeLane,
        Role::OffLane,
        Role::MidLane,
        Role::Support,
        Role::HardSupport,
    ];

    /// Bit position of this role inside [`RoleFlags`].
    pub fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

/// Bitmask of declared roles for one player, as delivered in membership
/// snapshots (`lane_selection_flags`).
///
/// The mask is ordered: listing the set bits from lowest to highest yields
/// the declaration order used by the client UI. Callers that want the
/// winning preference scan that list from the end ([`RoleFlags::last_declared`]).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoleFlags(pub u8);

impl RoleFlags {
    /// Bits covered by the five known roles.
    const KNOWN_BITS: u64 = 0b1_1111;

    pub fn empty() -> Self {
        RoleFlags(0)
    }

    /// Narrow a wire mask to the known role bits. Wire masks may be wider
    /// than a byte; everything beyond the known roles is dropped here so no
    /// later cast has to reason about truncation.
    pub fn from_wire(mask: u64) -> Self {
        RoleFlags((mask & Self::KNOWN_BITS) as u8)
    }

    pub fn of(roles: &[Role]) -> Self {
        RoleFlags(roles.iter().fold(0, |mask, r| mask | r.bit()))
    }

    pub fn is_empty(self) -> bool {
        self.to_roles().is_empty()
    }

    pub fn contains(self, role: Role) -> bool {
        self.0 & role.bit() != 0
    }

    /// Set roles in ascending bit order (declaration order).
    pub fn to_roles(self) -> Vec<Role> {
        Role::ALL
            .into_iter()
            .filter(|r| self.contains(*r))
            .collect()
    }

    /// The last-declared role: scanning the declaration list from its end,
    /// the first entry found. `None` when no role bit is set (or the mask
    /// carries only unknown bits).
    pub fn last_declared(self) -> Option<Role> {
        self.to_roles().into_iter().next_back()
    }
}

impl From<u8> for RoleFlags {
    fn from(mask: u8) -> Self {
        RoleFlags(mask)
    }
}
