//! Action executor system: drains the [`ActionQueue`] each fixed tick and
//! applies every queued [`GameAction`], recording results in the
//! [`ActionResultLog`].

use bevy::prelude::*;

use crate::balance::Balance;
use crate::catalog::BuildingKind;
use crate::city_state::CityState;
use crate::economy::{apply_road_oneoff, withdraw, TreasuryLedger};
use crate::grid::CityGrid;
use crate::time_of_day::{GameClock, MAX_SPEED};

use super::result_log::ActionResultLog;
use super::{ActionError, ActionQueue, ActionResult, GameAction};

// ---------------------------------------------------------------------------
// System
// ---------------------------------------------------------------------------

#[allow(clippy::too_many_arguments)]
pub fn execute_queued_actions(
    mut queue: ResMut<ActionQueue>,
    mut log: ResMut<ActionResultLog>,
    mut grid: ResMut<CityGrid>,
    mut state: ResMut<CityState>,
    mut ledger: ResMut<TreasuryLedger>,
    mut clock: ResMut<GameClock>,
    balance: Res<Balance>,
) {
    if queue.is_empty() {
        return;
    }
    for queued in queue.drain() {
        let result = match queued.action {
            GameAction::Build { kind, x, y } => {
                execute_build(kind, x, y, &mut grid, &mut state, &balance)
            }
            GameAction::Demolish { x, y } => execute_demolish(x, y, &mut grid),
            GameAction::Withdraw => {
                match withdraw(&mut state, &mut ledger, &balance, clock.elapsed_seconds) {
                    Ok(paid) => ActionResult::Withdrawn(paid),
                    Err(e) => ActionResult::Error(e.into()),
                }
            }
            GameAction::SetAutoTax { enabled } => {
                ledger.auto_tax = enabled;
                ActionResult::Success
            }
            GameAction::SetPaused { paused } => {
                clock.paused = paused;
                ActionResult::Success
            }
            GameAction::SetSpeed { speed } => execute_set_speed(speed, &mut clock),
        };
        if let ActionResult::Error(e) = &result {
            debug!("{:?} from {:?} rejected: {e}", queued.action, queued.source);
        }
        log.push(queued.action, result);
    }
}

// ---------------------------------------------------------------------------
// Execution functions
// ---------------------------------------------------------------------------

/// Menu membership, prerequisites and funds are checked before placement;
/// money and build effects are committed only once the building is on the grid.
pub fn execute_build(
    kind: BuildingKind,
    x: usize,
    y: usize,
    grid: &mut CityGrid,
    state: &mut CityState,
    balance: &Balance,
) -> ActionResult {
    if !kind.in_menu() {
        return ActionResult::Error(ActionError::NotBuildable(kind));
    }
    if let Some(&missing) = kind.requires().iter().find(|req| !grid.has_building(**req)) {
        return ActionResult::Error(ActionError::MissingPrerequisite(missing));
    }
    let cost = kind.cost();
    if state.money < cost {
        return ActionResult::Error(ActionError::InsufficientFunds {
            needed: cost,
            available: state.money,
        });
    }
    let group_id = match grid.place_building(x, y, kind) {
        Ok(id) => id,
        Err(e) => return ActionResult::Error(e.into()),
    };

    state.money -= cost;
    let effects = kind.effects();
    state.happiness = (state.happiness + effects.happiness).clamp(0.0, 100.0);
    state.traffic = (state.traffic + effects.traffic).clamp(0.0, 100.0);
    if kind == BuildingKind::Road {
        apply_road_oneoff(state, balance);
    }
    debug!("built {} {group_id} at ({x}, {y}) for {cost:.0}", kind.name());
    ActionResult::Built(group_id)
}

fn execute_demolish(x: usize, y: usize, grid: &mut CityGrid) -> ActionResult {
    match grid.demolish_at(x, y) {
        Some(group_id) => ActionResult::Demolished(group_id),
        None => ActionResult::SuccessWithWarning(format!("nothing to demolish at ({x}, {y})")),
    }
}

fn execute_set_speed(speed: u32, clock: &mut GameClock) -> ActionResult {
    clock.set_speed(speed);
    if clock.speed == speed {
        ActionResult::Success
    } else {
        ActionResult::SuccessWithWarning(format!(
            "speed {speed} clamped to {} (allowed 1..={MAX_SPEED})",
            clock.speed
        ))
    }
}
