use bevy::prelude::*;

use super::labor::LaborMarket;
use super::systems::{
    accrue_income, charge_upkeep, log_daily_report, run_daily_updates, run_hourly_updates,
    update_labor, update_resources, update_treasury_cap,
};
use super::treasury::TreasuryLedger;
use crate::city_state::CityState;

pub struct EconomyPlugin;

impl Plugin for EconomyPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CityState>()
            .init_resource::<LaborMarket>()
            .init_resource::<TreasuryLedger>()
            .add_systems(
                FixedUpdate,
                (
                    update_treasury_cap,
                    update_labor,
                    update_resources,
                    accrue_income,
                    charge_upkeep,
                    run_hourly_updates,
                    run_daily_updates,
                )
                    .chain()
                    .in_set(crate::SimulationSet::Simulation),
            )
            .add_systems(
                FixedUpdate,
                log_daily_report.in_set(crate::SimulationSet::PostSim),
            );
    }
}
