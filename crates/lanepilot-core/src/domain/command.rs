//! Commands emitted toward the game console.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::lane::Lane;

/// A console command produced by the decision engine.
///
/// The engine emits at most one `SelectStartingPosition` per match and at
/// most one `PossibleHero` per jitter window; delivery is the
/// [`CommandSink`](crate::ports::CommandSink) collaborator's problem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum GameCommand {
    /// Pick a starting position (integer lane code).
    SelectStartingPosition(Lane),

    /// Suggest a hero by bare name (catalog prefix already stripped).
    PossibleHero(String),
}

impl fmt::Display for GameCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameCommand::SelectStartingPosition(lane) => {
                write!(f, "dota_select_starting_position {}", lane.code())
            }
            GameCommand::PossibleHero(name) => write!(f, "possible_hero {name}"),
        }
    }
}
