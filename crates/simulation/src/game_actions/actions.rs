use serde::{Deserialize, Serialize};

use crate::catalog::BuildingKind;

/// Everything a player (or a script) can ask the city to do.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub enum GameAction {
    Build {
        kind: BuildingKind,
        x: usize,
        y: usize,
    },
    Demolish {
        x: usize,
        y: usize,
    },
    /// Move pending income into the treasury.
    Withdraw,
    SetAutoTax {
        enabled: bool,
    },
    SetPaused {
        paused: bool,
    },
    SetSpeed {
        speed: u32,
    },
}
