//! Domain model (lanes, roles, heroes, members, commands).
//!
//! Everything in here is plain data plus pure functions; side effects live
//! in [`crate::app`] and behind the [`crate::ports`] seams.

pub mod command;
pub mod errors;
pub mod hero;
pub mod lane;
pub mod member;
pub mod resolve;
pub mod role;

pub use command::GameCommand;
pub use errors::IngestError;
pub use hero::{Attribute, HeroEntry, HeroId, HERO_NAME_PREFIX, bare_name};
pub use lane::{Lane, LaneDecisionState};
pub use member::{MemberUpdate, PlayerId, SnapshotReason, SnapshotScope, Team};
pub use resolve::resolve_lane;
pub use role::{Role, RoleFlags};
