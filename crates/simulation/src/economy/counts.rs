use std::collections::HashSet;

use crate::balance::{Sector, SectorTable};
use crate::grid::{CityGrid, GroupId, TileKind};

use super::constants::{INDUSTRIAL_SUPPLY_WEIGHT, RESIDENTS_PER_DEMAND_UNIT};

/// Connected building count of every production sector.
pub fn connected_sectors(grid: &CityGrid, connected: &HashSet<GroupId>) -> SectorTable<u32> {
    SectorTable::default().map(|sector: Sector, _: u32| grid.count_connected(connected, sector.tile()))
}

/// Supply units offered by the connected producers.
pub fn supply_units(sectors: &SectorTable<u32>) -> u32 {
    sectors.commercial + INDUSTRIAL_SUPPLY_WEIGHT * sectors.industrial + sectors.farm
}

/// Consumer demand units of the current population.
pub fn demand_units(population: u32) -> u32 {
    population / RESIDENTS_PER_DEMAND_UNIT
}

pub fn central_bank_connected(grid: &CityGrid, connected: &HashSet<GroupId>) -> bool {
    grid.count_connected(connected, TileKind::CentralBank) > 0
}
