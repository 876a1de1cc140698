//! Command sink that records instead of dispatching.

use std::sync::Mutex;

use crate::domain::GameCommand;
use crate::ports::CommandSink;

/// Records every executed command for later inspection (tests, demos).
#[derive(Debug, Default)]
pub struct RecordingSink {
    commands: Mutex<Vec<GameCommand>>,
}

impl RecordingSink {
    /// Snapshot of everything executed so far, in emission order.
    pub fn commands(&self) -> Vec<GameCommand> {
        self.commands
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }

    /// Drain the recorded commands.
    pub fn take(&self) -> Vec<GameCommand> {
        self.commands
            .lock()
            .map(|mut guard| std::mem::take(&mut *guard))
            .unwrap_or_default()
    }
}

impl CommandSink for RecordingSink {
    fn execute(&self, command: GameCommand) {
        if let Ok(mut guard) = self.commands.lock() {
            guard.push(command);
        }
    }
}
