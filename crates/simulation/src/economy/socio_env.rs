use std::collections::HashSet;

use rand::Rng;

use crate::city_state::CityState;
use crate::grid::{CityGrid, GroupId, TileKind};

use super::constants::*;

/// Hourly pollution, crime and health update.
///
/// Pollution is recomputed from scratch; crime and health are smoothed toward
/// their targets. Crime gets one uniform draw in `[-1, 1)`.
pub fn socio_env_hourly(
    state: &mut CityState,
    grid: &CityGrid,
    connected: &HashSet<GroupId>,
    rng: &mut impl Rng,
) {
    let roads = f64::from(grid.count_all(TileKind::Road));
    let industry = f64::from(grid.count_all(TileKind::Industrial));
    let blight = f64::from(grid.count_all(TileKind::Blight));
    let parks = f64::from(grid.count_all(TileKind::Park));
    state.pollution_penalty = ((industry * POLLUTION_PER_INDUSTRY
        + blight * POLLUTION_PER_BLIGHT
        + roads * POLLUTION_PER_ROAD
        - parks * POLLUTION_PARK_RELIEF)
        / POLLUTION_DIVISOR)
        .max(0.0);

    let police = f64::from(grid.count_connected(connected, TileKind::Police));
    let crime_target = CRIME_BASE + CRIME_PER_UNEMPLOYMENT * state.unemployment
        + CRIME_PER_BLIGHT * blight
        - CRIME_PER_POLICE * police;
    let noise: f64 = rng.gen_range(-1.0..1.0);
    state.crime = (SMOOTHING_KEEP * state.crime + SMOOTHING_NEW * crime_target.max(0.0) + noise)
        .clamp(0.0, 100.0);

    let hospitals = f64::from(grid.count_connected(connected, TileKind::Hospital));
    let health_target = HEALTH_BASE + HEALTH_PER_HOSPITAL * hospitals
        - HEALTH_PER_POLLUTION * state.pollution_penalty
        - (100.0 - state.power_pct) / HEALTH_UTILITY_DIVISOR
        - (100.0 - state.water_pct) / HEALTH_UTILITY_DIVISOR;
    state.health =
        (SMOOTHING_KEEP * state.health + SMOOTHING_NEW * health_target).clamp(0.0, 100.0);
}
