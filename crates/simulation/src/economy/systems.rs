use bevy::prelude::*;

use crate::balance::Balance;
use crate::city_state::CityState;
use crate::connectivity::Connectivity;
use crate::grid::CityGrid;
use crate::sim_rng::SimRng;
use crate::time_of_day::{CadenceTicks, GameClock};

use super::demographics::{update_demographics_daily, update_literacy_daily};
use super::happiness::update_happiness_daily;
use super::inflation::inflation_hourly;
use super::labor::{update_labor_market, LaborMarket};
use super::resources::{decay_oneoff_resources, recompute_resources};
use super::socio_env::socio_env_hourly;
use super::treasury::{
    auto_tax_daily, income_tick_per_second, refresh_treasury_cap, upkeep_minutely,
    TreasuryLedger,
};

// ---------------------------------------------------------------------------
// Every tick
// ---------------------------------------------------------------------------

pub fn update_treasury_cap(
    grid: Res<CityGrid>,
    connectivity: Res<Connectivity>,
    balance: Res<Balance>,
    mut state: ResMut<CityState>,
) {
    refresh_treasury_cap(&mut state, &grid, &connectivity.groups, &balance);
}

pub fn update_labor(
    grid: Res<CityGrid>,
    connectivity: Res<Connectivity>,
    balance: Res<Balance>,
    mut state: ResMut<CityState>,
    mut labor: ResMut<LaborMarket>,
) {
    let next = update_labor_market(&mut state, &grid, &connectivity.groups, &balance);
    if *labor != next {
        *labor = next;
    }
}

pub fn update_resources(
    grid: Res<CityGrid>,
    connectivity: Res<Connectivity>,
    balance: Res<Balance>,
    mut state: ResMut<CityState>,
) {
    recompute_resources(&mut state, &grid, &connectivity.groups, &balance);
}

// ---------------------------------------------------------------------------
// Per simulated second / minute
// ---------------------------------------------------------------------------

pub fn accrue_income(
    cadence: Res<CadenceTicks>,
    grid: Res<CityGrid>,
    connectivity: Res<Connectivity>,
    balance: Res<Balance>,
    mut state: ResMut<CityState>,
) {
    for _ in 0..cadence.seconds {
        income_tick_per_second(&mut state, &grid, &connectivity.groups, &balance);
    }
}

pub fn charge_upkeep(
    cadence: Res<CadenceTicks>,
    clock: Res<GameClock>,
    grid: Res<CityGrid>,
    balance: Res<Balance>,
    mut state: ResMut<CityState>,
) {
    for _ in 0..cadence.minutes {
        if upkeep_minutely(&mut state, &grid, &balance) {
            warn!("treasury exhausted by upkeep on {}", clock.formatted());
        }
    }
}

// ---------------------------------------------------------------------------
// Hourly / daily blocks
// ---------------------------------------------------------------------------

pub fn run_hourly_updates(
    cadence: Res<CadenceTicks>,
    grid: Res<CityGrid>,
    connectivity: Res<Connectivity>,
    balance: Res<Balance>,
    mut rng: ResMut<SimRng>,
    mut state: ResMut<CityState>,
) {
    if cadence.hours == 0 {
        return;
    }
    #[cfg(feature = "trace")]
    let _span = bevy::log::info_span!("economy_hourly").entered();

    for _ in 0..cadence.hours {
        socio_env_hourly(&mut state, &grid, &connectivity.groups, &mut rng.0);
        inflation_hourly(&mut state, &grid, &connectivity.groups, &mut rng.0);
        decay_oneoff_resources(&mut state, &balance);
    }
}

pub fn run_daily_updates(
    cadence: Res<CadenceTicks>,
    grid: Res<CityGrid>,
    connectivity: Res<Connectivity>,
    balance: Res<Balance>,
    ledger: Res<TreasuryLedger>,
    mut state: ResMut<CityState>,
) {
    if cadence.days == 0 {
        return;
    }
    #[cfg(feature = "trace")]
    let _span = bevy::log::info_span!("economy_daily").entered();

    for _ in 0..cadence.days {
        update_demographics_daily(&mut state, &grid, &connectivity.groups, &balance);
        update_literacy_daily(&mut state, &grid, &connectivity.groups, &balance);
        update_happiness_daily(&mut state, &grid, &connectivity.groups, grid.size);
        let collected = auto_tax_daily(&mut state, &ledger, &balance);
        if collected > 0.0 {
            debug!("auto-tax collected {collected:.2}");
        }
    }
}

/// Log a one-line summary of the city whenever a day rolls over.
pub fn log_daily_report(
    cadence: Res<CadenceTicks>,
    clock: Res<GameClock>,
    state: Res<CityState>,
    labor: Res<LaborMarket>,
) {
    if cadence.days == 0 {
        return;
    }
    info!(
        "{} | money {:.0} pending {:.0}/{:.0} | pop {} | happy {:.1} unemp {:.1}% infl {:.1}% \
         crime {:.1} health {:.1} | power {:.0}% water {:.0}% | jobs {}",
        clock.formatted(),
        state.money,
        state.treasury_pending,
        state.treasury_cap,
        state.population,
        state.happiness,
        state.unemployment,
        state.inflation,
        state.crime,
        state.health,
        state.power_pct,
        state.water_pct,
        labor.total_jobs(),
    );
}
