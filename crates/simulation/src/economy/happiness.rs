use std::collections::HashSet;

use crate::city_state::CityState;
use crate::grid::{CityGrid, GroupId, TileKind};

use super::constants::*;

/// Penalties and bonus behind one day's happiness change.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct HappinessBreakdown {
    pub overcrowding: f64,
    pub services: f64,
    pub unemployment: f64,
    pub inflation: f64,
    pub pollution: f64,
    pub parks: f64,
}

impl HappinessBreakdown {
    pub fn delta(&self) -> f64 {
        self.parks
            - (self.unemployment
                + self.inflation
                + self.services
                + self.overcrowding
                + self.pollution)
    }
}

pub fn happiness_breakdown(
    state: &CityState,
    grid: &CityGrid,
    connected: &HashSet<GroupId>,
    grid_size: usize,
) -> HappinessBreakdown {
    let comfortable = (grid_size * grid_size) as f64 * DENSITY_TARGET_SHARE;
    let density = f64::from(state.population) / comfortable.max(1.0);
    let parks = grid.count_connected(connected, TileKind::Park);
    HappinessBreakdown {
        overcrowding: (density - 1.0).max(0.0),
        services: ((SERVICE_COMFORT_PCT - state.power_pct).max(0.0)
            + (SERVICE_COMFORT_PCT - state.water_pct).max(0.0))
            / SERVICE_COMFORT_PCT,
        unemployment: ((state.unemployment - UNEMPLOYMENT_TOLERANCE) / UNEMPLOYMENT_STEP).max(0.0)
            * UNEMPLOYMENT_WEIGHT,
        inflation: ((state.inflation - INFLATION_TOLERANCE) / INFLATION_STEP).max(0.0),
        pollution: state.pollution_penalty,
        parks: PARK_BONUS_MAX.min(PARK_BONUS_EACH * f64::from(parks)),
    }
}

/// Additive daily happiness update.
pub fn update_happiness_daily(
    state: &mut CityState,
    grid: &CityGrid,
    connected: &HashSet<GroupId>,
    grid_size: usize,
) {
    let delta = happiness_breakdown(state, grid, connected, grid_size).delta();
    state.happiness = (state.happiness + delta).clamp(0.0, 100.0);
}
