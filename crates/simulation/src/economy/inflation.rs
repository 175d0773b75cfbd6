use std::collections::HashSet;

use rand::Rng;

use crate::city_state::CityState;
use crate::grid::{CityGrid, GroupId};

use super::constants::*;
use super::counts::{central_bank_connected, connected_sectors, demand_units, supply_units};

fn noise_draw(rng: &mut impl Rng) -> f64 {
    NOISE_AMPLITUDE - 2.0 * NOISE_AMPLITUDE * rng.gen::<f64>()
}

/// Hourly inflation drift from the demand/supply gap.
///
/// A connected central bank and connected farms pull inflation down. Farms
/// also add a second noise draw, taken only when at least one is connected.
pub fn inflation_hourly(
    state: &mut CityState,
    grid: &CityGrid,
    connected: &HashSet<GroupId>,
    rng: &mut impl Rng,
) {
    let sectors = connected_sectors(grid, connected);
    let gap = i64::from(demand_units(state.population)) - i64::from(supply_units(&sectors));

    let bank = if central_bank_connected(grid, connected) {
        CENTRAL_BANK_DAMPING
    } else {
        0.0
    };
    let farms = FARM_DAMPING * (f64::from(sectors.farm) / FARM_DAMPING_SCALE);
    let mut noise = noise_draw(rng);
    if sectors.farm > 0 {
        noise += noise_draw(rng);
    }

    let delta = INFLATION_GAP_GAIN * (gap as f64 / INFLATION_GAP_SCALE).tanh() - bank - farms + noise;
    state.inflation = (state.inflation + delta).clamp(0.0, INFLATION_MAX);
}
