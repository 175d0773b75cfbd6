use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use super::GameAction;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionSource {
    Player,
    Script,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueuedAction {
    pub source: ActionSource,
    pub action: GameAction,
}

/// Actions waiting for the next fixed tick, executed in FIFO order.
#[derive(Resource, Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActionQueue {
    pending: Vec<QueuedAction>,
}

impl ActionQueue {
    pub fn push(&mut self, source: ActionSource, action: GameAction) {
        self.pending.push(QueuedAction { source, action });
    }

    pub fn drain(&mut self) -> Vec<QueuedAction> {
        self.pending.drain(..).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::BuildingKind;

    #[test]
    fn push_and_drain_preserves_fifo() {
        let mut queue = ActionQueue::default();
        queue.push(ActionSource::Player, GameAction::SetPaused { paused: true });
        queue.push(ActionSource::Script, GameAction::SetSpeed { speed: 2 });
        queue.push(
            ActionSource::Player,
            GameAction::Build {
                kind: BuildingKind::Road,
                x: 5,
                y: 5,
            },
        );

        assert_eq!(queue.len(), 3);
        assert!(!queue.is_empty());

        let drained = queue.drain();
        assert_eq!(drained.len(), 3);
        assert!(queue.is_empty());

        assert_eq!(drained[0].source, ActionSource::Player);
        assert_eq!(drained[0].action, GameAction::SetPaused { paused: true });
        assert_eq!(drained[1].source, ActionSource::Script);
        assert_eq!(drained[1].action, GameAction::SetSpeed { speed: 2 });
        assert_eq!(
            drained[2].action,
            GameAction::Build {
                kind: BuildingKind::Road,
                x: 5,
                y: 5
            }
        );
    }
}
