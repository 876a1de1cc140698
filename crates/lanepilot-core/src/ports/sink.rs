//! Command sink port.

use crate::domain::GameCommand;

/// Where emitted commands go.
///
/// Production wires this to the game's console dispatch; tests record the
/// commands and assert on them. The engine never retries an emission: the
/// once-per-match / once-per-cooldown guarantees are enforced before a
/// command reaches the sink.
pub trait CommandSink {
    fn execute(&self, command: GameCommand);
}
