use std::collections::HashSet;

use crate::balance::Balance;
use crate::city_state::CityState;
use crate::grid::{CityGrid, GroupId, TileKind};

use super::constants::HOURS_PER_DAY;

/// Utility capacity from connected plants and the resulting headroom
/// percentages. Consumption counts every building, connected or not.
pub fn recompute_resources(
    state: &mut CityState,
    grid: &CityGrid,
    connected: &HashSet<GroupId>,
    balance: &Balance,
) {
    let plants = grid.count_connected(connected, TileKind::Utility);
    let treatment = grid.count_connected(connected, TileKind::WaterPlant);
    state.power_cap = balance.base_utility_capacity + f64::from(plants) * balance.power_per_plant;
    state.water_cap =
        balance.base_utility_capacity + f64::from(treatment) * balance.water_per_plant;

    let mut power_use_day = 0.0;
    let mut water_use_day = 0.0;
    for tile in TileKind::ALL {
        let count = grid.count_all(tile);
        if count == 0 {
            continue;
        }
        power_use_day += balance.power_use_per_day.get(tile) * f64::from(count);
        water_use_day += balance.water_use_per_day.get(tile) * f64::from(count);
    }

    state.power_pct = headroom_pct(state.power_cap, power_use_day + state.power_use_once);
    state.water_pct = headroom_pct(state.water_cap, water_use_day + state.water_use_once);
}

fn headroom_pct(cap: f64, usage: f64) -> f64 {
    ((cap - usage) / cap.max(1.0) * 100.0).clamp(0.0, 100.0)
}

/// One hour's share of the daily one-off demand decay.
pub fn decay_oneoff_resources(state: &mut CityState, balance: &Balance) {
    let keep = 1.0 - balance.oneoff_decay_per_day / HOURS_PER_DAY;
    state.power_use_once *= keep;
    state.water_use_once *= keep;
}

/// A freshly built road briefly draws extra power and water.
pub fn apply_road_oneoff(state: &mut CityState, balance: &Balance) {
    state.power_use_once += balance.road_oneoff_power;
    state.water_use_once += balance.road_oneoff_water;
}
