use serde::{Deserialize, Serialize};

use super::{CommandId, DrawCommand};

/// What happens to undone commands when something new is committed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RedoPolicy {
    /// Undone commands stay redoable until redone or cleared
    #[default]
    Preserve,
    /// A new commit starts a new branch and drops the undone commands
    DiscardOnCommit,
}

/// A command together with the identity it was committed under
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    pub id: CommandId,
    pub command: DrawCommand,
}

/// Manages the committed and undone stacks for undo/redo.
///
/// A command lives in at most one of the two stacks at any time.
#[derive(Debug, Default)]
pub struct CommandHistory {
    /// Commands currently on the canvas, oldest first
    committed: Vec<HistoryEntry>,
    /// Commands taken back by undo, most recently undone last
    undone: Vec<HistoryEntry>,
    policy: RedoPolicy,
}

impl CommandHistory {
    /// Creates a new empty command history
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: RedoPolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    pub fn policy(&self) -> RedoPolicy {
        self.policy
    }

    pub fn set_policy(&mut self, policy: RedoPolicy) {
        self.policy = policy;
    }

    /// Append a command to the committed stack and return its identity.
    ///
    /// Cursor previews are overlay-only and are refused.
    pub fn commit(&mut self, command: impl Into<DrawCommand>) -> Option<CommandId> {
        let command = command.into();
        if !command.is_persistent() {
            log::warn!("Refusing to commit a transient command: {}", command.label());
            return None;
        }

        let id = CommandId::next();
        self.committed.push(HistoryEntry { id, command });
        if self.policy == RedoPolicy::DiscardOnCommit {
            self.undone.clear();
        }
        Some(id)
    }

    /// Move the most recent command to the undone stack.
    ///
    /// Returns false when there was nothing to undo.
    pub fn undo(&mut self) -> bool {
        match self.committed.pop() {
            Some(entry) => {
                self.undone.push(entry);
                true
            }
            None => false,
        }
    }

    /// Move the most recently undone command back onto the committed stack.
    ///
    /// Returns false when there was nothing to redo.
    pub fn redo(&mut self) -> bool {
        match self.undone.pop() {
            Some(entry) => {
                self.committed.push(entry);
                true
            }
            None => false,
        }
    }

    /// Empty both stacks
    pub fn clear(&mut self) {
        self.committed.clear();
        self.undone.clear();
    }

    /// Returns true if there are commands that can be undone
    pub fn can_undo(&self) -> bool {
        !self.committed.is_empty()
    }

    /// Returns true if there are commands that can be redone
    pub fn can_redo(&self) -> bool {
        !self.undone.is_empty()
    }

    pub fn committed(&self) -> &[HistoryEntry] {
        &self.committed
    }

    pub fn undone(&self) -> &[HistoryEntry] {
        &self.undone
    }

    /// Committed commands in replay order
    pub fn commands(&self) -> impl Iterator<Item = &DrawCommand> + '_ {
        self.committed.iter().map(|entry| &entry.command)
    }

    /// Look up a command by identity in either stack
    pub fn find_mut(&mut self, id: CommandId) -> Option<&mut DrawCommand> {
        self.committed
            .iter_mut()
            .chain(self.undone.iter_mut())
            .find(|entry| entry.id == id)
            .map(|entry| &mut entry.command)
    }
}
