use std::collections::HashSet;

use crate::balance::Balance;
use crate::city_state::CityState;
use crate::grid::{CityGrid, GroupId, TileKind};

/// Residents the connected homes can hold.
pub fn housing_capacity(grid: &CityGrid, connected: &HashSet<GroupId>, balance: &Balance) -> u32 {
    grid.count_connected(connected, TileKind::Residential) * balance.residents_per_home
}

/// Move the population one day toward the housing capacity.
///
/// Growth scales with happiness; shrinking does not.
pub fn update_demographics_daily(
    state: &mut CityState,
    grid: &CityGrid,
    connected: &HashSet<GroupId>,
    balance: &Balance,
) {
    let housing = housing_capacity(grid, connected, balance);
    let population = state.population;
    let next = if housing > population {
        let gap = f64::from(housing - population);
        let step = (gap * balance.settle_rate * state.happiness / 100.0).ceil() as u32;
        population + step.min(housing - population)
    } else if housing < population {
        let gap = f64::from(population - housing);
        let step = (gap * balance.settle_rate).ceil() as u32;
        population - step.min(population - housing)
    } else {
        population
    };
    state.set_population(next, balance.adult_share, balance.elder_share);
}

/// Drift literacy toward what the connected universities can sustain.
pub fn update_literacy_daily(
    state: &mut CityState,
    grid: &CityGrid,
    connected: &HashSet<GroupId>,
    balance: &Balance,
) {
    let universities = grid.count_connected(connected, TileKind::University);
    let target = (f64::from(universities) * balance.literacy_per_university).min(100.0);
    state.literacy =
        (state.literacy + (target - state.literacy) * balance.literacy_drift).clamp(0.0, 100.0);
}
