use std::fmt;

use serde::{Deserialize, Serialize};

use crate::catalog::BuildingKind;
use crate::economy::WithdrawError;
use crate::grid::{GroupId, PlacementError};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum ActionResult {
    Success,
    Built(GroupId),
    /// The group that was cleared. Demolition never refunds.
    Demolished(GroupId),
    /// Amount paid into the treasury.
    Withdrawn(f64),
    /// The action succeeded but the caller should see why it did less than asked.
    SuccessWithWarning(String),
    Error(ActionError),
}

impl ActionResult {
    /// Everything except `Error`.
    pub fn is_success(&self) -> bool {
        !matches!(self, ActionResult::Error(_))
    }

    pub fn warning(&self) -> Option<&str> {
        match self {
            ActionResult::SuccessWithWarning(w) => Some(w.as_str()),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&ActionError> {
        match self {
            ActionResult::Error(e) => Some(e),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub enum ActionError {
    Placement(PlacementError),
    InsufficientFunds { needed: f64, available: f64 },
    MissingPrerequisite(BuildingKind),
    /// The kind is spawned by the simulation and never offered to the player.
    NotBuildable(BuildingKind),
    Withdraw(WithdrawError),
}

impl fmt::Display for ActionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActionError::Placement(e) => write!(f, "cannot place building: {e}"),
            ActionError::InsufficientFunds { needed, available } => {
                write!(f, "costs {needed:.0} but only {available:.0} in the treasury")
            }
            ActionError::MissingPrerequisite(kind) => write!(f, "requires a {}", kind.name()),
            ActionError::NotBuildable(kind) => write!(f, "{} cannot be built", kind.name()),
            ActionError::Withdraw(e) => write!(f, "cannot withdraw: {e}"),
        }
    }
}

impl std::error::Error for ActionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ActionError::Placement(e) => Some(e),
            ActionError::Withdraw(e) => Some(e),
            _ => None,
        }
    }
}

impl From<PlacementError> for ActionError {
    fn from(e: PlacementError) -> Self {
        ActionError::Placement(e)
    }
}

impl From<WithdrawError> for ActionError {
    fn from(e: WithdrawError) -> Self {
        ActionError::Withdraw(e)
    }
}
