//! Balance tables for the economy.
//!
//! [`Balance`] is built once at startup and inserted as a resource. Systems
//! only ever read it (`Res<Balance>`); the engine functions take `&Balance`
//! so tests can run them against any table without an `App`.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::grid::{TileKind, TileTable};

// ---------------------------------------------------------------------------
// Production sectors
// ---------------------------------------------------------------------------

/// The three sectors that employ workers and earn income.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sector {
    Commercial,
    Industrial,
    Farm,
}

impl Sector {
    pub const ALL: [Sector; 3] = [Sector::Commercial, Sector::Industrial, Sector::Farm];

    pub fn tile(self) -> TileKind {
        match self {
            Sector::Commercial => TileKind::Commercial,
            Sector::Industrial => TileKind::Industrial,
            Sector::Farm => TileKind::Farm,
        }
    }
}

/// One value per [`Sector`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SectorTable<T> {
    pub commercial: T,
    pub industrial: T,
    pub farm: T,
}

impl<T: Copy> SectorTable<T> {
    pub fn get(&self, sector: Sector) -> T {
        match sector {
            Sector::Commercial => self.commercial,
            Sector::Industrial => self.industrial,
            Sector::Farm => self.farm,
        }
    }

    pub fn map<U>(&self, f: impl Fn(Sector, T) -> U) -> SectorTable<U> {
        SectorTable {
            commercial: f(Sector::Commercial, self.commercial),
            industrial: f(Sector::Industrial, self.industrial),
            farm: f(Sector::Farm, self.farm),
        }
    }
}

// ---------------------------------------------------------------------------
// Per-tile coefficient tables
// ---------------------------------------------------------------------------

fn daily_power_use(tile: TileKind) -> f64 {
    match tile {
        TileKind::Residential => 0.4,
        TileKind::Commercial => 0.6,
        TileKind::Industrial => 1.5,
        TileKind::Farm => 0.4,
        TileKind::University => 1.0,
        TileKind::Park => 0.0,
        TileKind::CityHall => 0.4,
        TileKind::CentralBank => 0.6,
        TileKind::Police => 0.6,
        TileKind::Hospital => 1.2,
        TileKind::Utility | TileKind::WaterPlant | TileKind::Road | TileKind::Blight => 0.0,
    }
}

fn daily_water_use(tile: TileKind) -> f64 {
    match tile {
        TileKind::Residential => 0.6,
        TileKind::Commercial => 0.3,
        TileKind::Industrial => 0.8,
        TileKind::Farm => 1.2,
        TileKind::University => 0.7,
        TileKind::Park => 0.1,
        TileKind::CityHall => 0.2,
        TileKind::CentralBank => 0.3,
        TileKind::Police => 0.3,
        TileKind::Hospital => 1.0,
        TileKind::Utility | TileKind::WaterPlant | TileKind::Road | TileKind::Blight => 0.0,
    }
}

/// Flat per-minute running cost, charged once per tile kind present.
fn upkeep_per_minute(tile: TileKind) -> f64 {
    match tile {
        TileKind::CentralBank => 2.0,
        TileKind::University | TileKind::Police | TileKind::Hospital | TileKind::WaterPlant => 1.0,
        TileKind::Residential
        | TileKind::Commercial
        | TileKind::Industrial
        | TileKind::Farm
        | TileKind::Utility
        | TileKind::Park
        | TileKind::CityHall
        | TileKind::Road
        | TileKind::Blight => 0.0,
    }
}

// ---------------------------------------------------------------------------
// Balance resource
// ---------------------------------------------------------------------------

#[derive(Resource, Debug, Clone, Serialize, Deserialize)]
pub struct Balance {
    /// Income earned per served demand unit per minute, before efficiency.
    pub base_unit_value: f64,
    /// Share of adults that look for work.
    pub participation_adult: f64,
    /// Share of elders that look for work.
    pub participation_elder: f64,
    /// Jobs offered by each connected building.
    pub jobs_per_building: SectorTable<u32>,
    /// Treasury capacity added by each connected building.
    pub cap_per_building: SectorTable<f64>,
    /// Treasury capacity multiplier while a central bank is connected.
    pub central_bank_cap_multiplier: f64,
    /// Power/water capacity available with no plants at all.
    pub base_utility_capacity: f64,
    /// Power capacity per connected power plant.
    pub power_per_plant: f64,
    /// Water capacity per connected water treatment plant.
    pub water_per_plant: f64,
    pub power_use_per_day: TileTable<f64>,
    pub water_use_per_day: TileTable<f64>,
    /// One-off power demand added by each new road.
    pub road_oneoff_power: f64,
    /// One-off water demand added by each new road.
    pub road_oneoff_water: f64,
    /// Fraction of one-off demand shed per day, applied in hourly steps.
    pub oneoff_decay_per_day: f64,
    /// Road upkeep: this much per full block of `roads_per_upkeep_unit` roads.
    pub road_upkeep_per_block: f64,
    pub roads_per_upkeep_unit: u32,
    pub upkeep_per_minute: TileTable<f64>,
    /// Smallest pending balance that can be withdrawn by hand.
    pub min_withdraw: f64,
    /// Simulated seconds between two manual withdrawals.
    pub withdraw_cooldown_s: u64,
    /// Efficiency lost by the daily automatic withdrawal.
    pub auto_tax_loss: f64,
    /// Residents housed by each connected residential building.
    pub residents_per_home: u32,
    /// Fraction of the housing gap closed per day.
    pub settle_rate: f64,
    pub adult_share: f64,
    pub elder_share: f64,
    /// Literacy target contributed by each connected university.
    pub literacy_per_university: f64,
    /// Fraction of the literacy gap closed per day.
    pub literacy_drift: f64,
}

impl Default for Balance {
    fn default() -> Self {
        Self {
            base_unit_value: 2.0,
            participation_adult: 0.70,
            participation_elder: 0.10,
            jobs_per_building: SectorTable {
                commercial: 4,
                industrial: 8,
                farm: 3,
            },
            cap_per_building: SectorTable {
                commercial: 200.0,
                industrial: 300.0,
                farm: 120.0,
            },
            central_bank_cap_multiplier: 1.5,
            base_utility_capacity: 10.0,
            power_per_plant: 40.0,
            water_per_plant: 40.0,
            power_use_per_day: TileTable::from_fn(daily_power_use),
            water_use_per_day: TileTable::from_fn(daily_water_use),
            road_oneoff_power: 0.05,
            road_oneoff_water: 0.05,
            oneoff_decay_per_day: 0.5,
            road_upkeep_per_block: 1.0,
            roads_per_upkeep_unit: 10,
            upkeep_per_minute: TileTable::from_fn(upkeep_per_minute),
            min_withdraw: 50.0,
            withdraw_cooldown_s: 30,
            auto_tax_loss: 0.02,
            residents_per_home: 10,
            settle_rate: 0.10,
            adult_share: 0.60,
            elder_share: 0.15,
            literacy_per_university: 25.0,
            literacy_drift: 0.10,
        }
    }
}
