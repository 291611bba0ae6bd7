//! Arm command buffer.
//!
//! [`ArmCommander`] is a Bevy resource that collects [`ArmCommand`]s from
//! any input source. The simulation drains it once per frame, in order.

use bevy::prelude::*;

use crate::command::ArmCommand;

// ---------------------------------------------------------------------------
// ArmCommander
// ---------------------------------------------------------------------------

/// Resource that buffers commands from any source.
///
/// External code (mouse handlers, text entry, scripted runs, etc.) pushes
/// commands with [`push`](Self::push). The simulation drains and applies
/// them each frame.
///
/// # Example
///
/// ```
/// use reacher_core::Point2D;
/// use reacher_teleop::{ArmCommand, ArmCommander};
///
/// let mut commander = ArmCommander::new();
/// commander.push(ArmCommand::MoveTo(Point2D::new(50.0, 20.0)));
/// commander.push(ArmCommand::Resize { l1: 80.0, l2: 60.0 });
///
/// let drained = commander.drain();
/// assert_eq!(drained.len(), 2);
/// assert!(commander.is_empty());
/// ```
#[derive(Resource, Clone, Debug, Default)]
pub struct ArmCommander {
    pending: Vec<ArmCommand>,
}

impl ArmCommander {
    /// Create an empty commander.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a command for the next frame.
    pub fn push(&mut self, command: ArmCommand) {
        self.pending.push(command);
    }

    /// Take every pending command, oldest first.
    pub fn drain(&mut self) -> Vec<ArmCommand> {
        std::mem::take(&mut self.pending)
    }

    /// Drop all pending commands.
    pub fn clear(&mut self) {
        self.pending.clear();
    }

    /// Number of pending commands.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Iterator over pending commands without consuming them.
    pub fn iter(&self) -> impl Iterator<Item = &ArmCommand> {
        self.pending.iter()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use reacher_core::Point2D;

    use super::*;

    #[test]
    fn commander_default_empty() {
        let commander = ArmCommander::new();
        assert_eq!(commander.len(), 0);
        assert!(commander.is_empty());
    }

    #[test]
    fn commander_drain_preserves_order() {
        let mut commander = ArmCommander::new();
        commander.push(ArmCommand::MoveToGrid { x: 1.0, y: 2.0 });
        commander.push(ArmCommand::Recentre(Point2D::new(5.0, 5.0)));
        commander.push(ArmCommand::MoveToGrid { x: 3.0, y: 4.0 });

        let drained = commander.drain();
        assert_eq!(
            drained,
            vec![
                ArmCommand::MoveToGrid { x: 1.0, y: 2.0 },
                ArmCommand::Recentre(Point2D::new(5.0, 5.0)),
                ArmCommand::MoveToGrid { x: 3.0, y: 4.0 },
            ]
        );
        assert!(commander.is_empty());
        assert!(commander.drain().is_empty());
    }

    #[test]
    fn commander_clear() {
        let mut commander = ArmCommander::new();
        commander.push(ArmCommand::Resize { l1: 1.0, l2: 2.0 });
        commander.clear();
        assert_eq!(commander.len(), 0);
    }

    #[test]
    fn commander_iter() {
        let mut commander = ArmCommander::new();
        commander.push(ArmCommand::MoveTo(Point2D::origin()));
        commander.push(ArmCommand::MoveTo(Point2D::new(1.0, 1.0)));
        assert_eq!(commander.iter().count(), 2);
        assert_eq!(commander.len(), 2);
    }
}
