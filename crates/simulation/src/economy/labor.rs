use std::collections::HashSet;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::balance::{Balance, SectorTable};
use crate::city_state::CityState;
use crate::grid::{CityGrid, GroupId};

use super::counts::connected_sectors;

/// Jobs and workers per sector after the last labor-market update.
///
/// `labor.farm` takes the rounding remainder and can therefore dip below
/// zero, so workers are signed.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaborMarket {
    pub jobs: SectorTable<i64>,
    pub labor_total: i64,
    pub labor: SectorTable<i64>,
    pub employed: i64,
}

impl LaborMarket {
    pub fn total_jobs(&self) -> i64 {
        self.jobs.commercial + self.jobs.industrial + self.jobs.farm
    }
}

/// Split the working population across the connected sectors and set
/// `state.unemployment`.
pub fn update_labor_market(
    state: &mut CityState,
    grid: &CityGrid,
    connected: &HashSet<GroupId>,
    balance: &Balance,
) -> LaborMarket {
    let sectors = connected_sectors(grid, connected);
    let jobs = sectors.map(|sector, count| {
        i64::from(balance.jobs_per_building.get(sector)) * i64::from(count)
    });
    let total_jobs = jobs.commercial + jobs.industrial + jobs.farm;

    let labor_total = (f64::from(state.pop_adult) * balance.participation_adult
        + f64::from(state.pop_elder) * balance.participation_elder)
        .round_ties_even() as i64;

    if total_jobs <= 0 || labor_total <= 0 {
        state.unemployment = if labor_total > 0 { 100.0 } else { 0.0 };
        return LaborMarket {
            jobs,
            labor_total,
            labor: SectorTable::default(),
            employed: 0,
        };
    }

    let split = |sector_jobs: i64| {
        (labor_total as f64 * (sector_jobs as f64 / total_jobs as f64)).round_ties_even() as i64
    };
    let labor_com = split(jobs.commercial);
    let labor_ind = split(jobs.industrial);
    let labor = SectorTable {
        commercial: labor_com,
        industrial: labor_ind,
        farm: labor_total - labor_com - labor_ind,
    };

    let employed = labor.commercial.min(jobs.commercial)
        + labor.industrial.min(jobs.industrial)
        + labor.farm.min(jobs.farm);
    state.unemployment = (1.0 - employed as f64 / labor_total.max(1) as f64).max(0.0) * 100.0;

    LaborMarket {
        jobs,
        labor_total,
        labor,
        employed,
    }
}
