use std::collections::HashSet;
use std::fmt;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::balance::{Balance, Sector};
use crate::city_state::CityState;
use crate::grid::{CityGrid, GroupId, TileKind};

use super::constants::*;
use super::counts::{central_bank_connected, connected_sectors, demand_units, supply_units};

/// Bookkeeping for moving `treasury_pending` into `money`.
#[derive(Resource, Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreasuryLedger {
    /// Clock second of the last manual withdrawal.
    pub last_withdraw_at: Option<u64>,
    /// Collect pending income automatically once per day.
    pub auto_tax: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum WithdrawError {
    BelowThreshold { pending: f64, minimum: f64 },
    CoolingDown { remaining: u64 },
}

impl fmt::Display for WithdrawError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WithdrawError::BelowThreshold { pending, minimum } => {
                write!(f, "only {pending:.2} pending, need at least {minimum:.0}")
            }
            WithdrawError::CoolingDown { remaining } => {
                write!(f, "withdrawal available again in {remaining}s")
            }
        }
    }
}

impl std::error::Error for WithdrawError {}

/// Treasury cap from the connected producers, boosted by a connected central bank.
pub fn refresh_treasury_cap(
    state: &mut CityState,
    grid: &CityGrid,
    connected: &HashSet<GroupId>,
    balance: &Balance,
) {
    let sectors = connected_sectors(grid, connected);
    let mut cap: f64 = Sector::ALL
        .iter()
        .map(|&s| balance.cap_per_building.get(s) * f64::from(sectors.get(s)))
        .sum();
    if central_bank_connected(grid, connected) {
        cap *= balance.central_bank_cap_multiplier;
    }
    state.treasury_cap = cap;
}

/// Product of the city-wide efficiency factors applied to income.
pub fn income_efficiency(state: &CityState) -> f64 {
    let happiness = EFF_HAPPINESS_BASE + EFF_HAPPINESS_SPAN * state.happiness / 100.0;
    let power = EFF_UTILITY_BASE + EFF_UTILITY_SPAN * state.power_pct / 100.0;
    let water = EFF_UTILITY_BASE + EFF_UTILITY_SPAN * state.water_pct / 100.0;
    let traffic = PENALTY_FLOOR.max(1.0 - state.traffic / TRAFFIC_DIVISOR);
    let crime = PENALTY_FLOOR.max(1.0 - state.crime / CRIME_DIVISOR);
    let health = EFF_HEALTH_BASE + EFF_HEALTH_SPAN * state.health / 100.0;
    happiness * power * water * traffic * crime * health
}

/// Accrue one simulated second of income into `treasury_pending`, up to the cap.
pub fn income_tick_per_second(
    state: &mut CityState,
    grid: &CityGrid,
    connected: &HashSet<GroupId>,
    balance: &Balance,
) {
    let sectors = connected_sectors(grid, connected);
    if sectors.commercial + sectors.industrial + sectors.farm == 0 {
        return;
    }
    let supply = supply_units(&sectors);
    let served = demand_units(state.population).min(supply);
    if served == 0 {
        return;
    }

    let denom = SHARE_DENOM_EPSILON.max(f64::from(supply) + SHARE_DENOM_EPSILON);
    let share_com = (f64::from(sectors.commercial) + SHARE_EPSILON) / denom;
    let share_ind =
        (f64::from(INDUSTRIAL_SUPPLY_WEIGHT * sectors.industrial) + SHARE_EPSILON) / denom;
    let share_farm = (f64::from(sectors.farm) + SHARE_EPSILON) / denom;

    let literacy = state.literacy / 100.0;
    let f_com = COMMERCIAL_LITERACY_BASE + COMMERCIAL_LITERACY_SPAN * literacy;
    let f_ind = INDUSTRIAL_LITERACY_BASE + INDUSTRIAL_LITERACY_SPAN * literacy;

    let rate_per_min = f64::from(served)
        * balance.base_unit_value
        * income_efficiency(state)
        * (share_com * f_com + share_ind * f_ind + share_farm * FARM_FACTOR);
    state.treasury_pending = state
        .treasury_cap
        .min(state.treasury_pending + rate_per_min / 60.0);
}

/// Running cost for one simulated minute.
///
/// Roads cost per full block of `roads_per_upkeep_unit` roads; every other
/// upkeep tile is charged a flat amount if at least one is present.
pub fn minute_upkeep(grid: &CityGrid, balance: &Balance) -> f64 {
    let roads = grid.count_all(TileKind::Road);
    let road_blocks = roads / balance.roads_per_upkeep_unit.max(1);
    let mut drain = f64::from(road_blocks) * balance.road_upkeep_per_block;
    for (tile, cost) in balance.upkeep_per_minute.iter() {
        if cost != 0.0 && grid.count_all(tile) > 0 {
            drain += cost;
        }
    }
    drain
}

/// Charge one minute of upkeep. Returns true when this charge emptied the treasury.
pub fn upkeep_minutely(state: &mut CityState, grid: &CityGrid, balance: &Balance) -> bool {
    let drain = minute_upkeep(grid, balance);
    if drain == 0.0 {
        return false;
    }
    let was_solvent = state.money > 0.0;
    state.money = (state.money - drain).max(0.0);
    was_solvent && state.money == 0.0
}

/// Move pending income into the treasury by hand.
///
/// Inflation erodes the amount collected.
pub fn withdraw(
    state: &mut CityState,
    ledger: &mut TreasuryLedger,
    balance: &Balance,
    now: u64,
) -> Result<f64, WithdrawError> {
    if state.treasury_pending < balance.min_withdraw {
        return Err(WithdrawError::BelowThreshold {
            pending: state.treasury_pending,
            minimum: balance.min_withdraw,
        });
    }
    if let Some(last) = ledger.last_withdraw_at {
        let elapsed = now.saturating_sub(last);
        if elapsed < balance.withdraw_cooldown_s {
            return Err(WithdrawError::CoolingDown {
                remaining: balance.withdraw_cooldown_s - elapsed,
            });
        }
    }
    let paid = state.treasury_pending * (1.0 - state.inflation / 100.0);
    state.money += paid;
    state.treasury_pending = 0.0;
    ledger.last_withdraw_at = Some(now);
    Ok(paid)
}

/// Daily automatic collection. Skips the threshold and cooldown but loses a
/// small cut on top of inflation. Returns the amount paid in.
pub fn auto_tax_daily(state: &mut CityState, ledger: &TreasuryLedger, balance: &Balance) -> f64 {
    if !ledger.auto_tax || state.treasury_pending <= 0.0 {
        return 0.0;
    }
    let paid = state.treasury_pending
        * (1.0 - state.inflation / 100.0)
        * (1.0 - balance.auto_tax_loss);
    state.money += paid;
    state.treasury_pending = 0.0;
    paid
}
