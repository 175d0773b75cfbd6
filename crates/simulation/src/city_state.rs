use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// City-wide aggregate state. Only the economy systems write to it.
///
/// Percentages are on a 0–100 scale except `inflation`, which is 0–40.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CityState {
    pub money: f64,
    /// Income accrued but not yet withdrawn into `money`.
    pub treasury_pending: f64,
    /// Upper bound on `treasury_pending`.
    pub treasury_cap: f64,

    pub population: u32,
    pub pop_adult: u32,
    pub pop_elder: u32,

    pub unemployment: f64,
    pub inflation: f64,
    pub happiness: f64,
    pub crime: f64,
    pub health: f64,
    pub literacy: f64,
    pub traffic: f64,

    pub power_cap: f64,
    pub water_cap: f64,
    pub power_pct: f64,
    pub water_pct: f64,
    /// Transient demand spikes that decay hour by hour.
    pub power_use_once: f64,
    pub water_use_once: f64,

    /// Non-negative; subtracted from happiness every day.
    pub pollution_penalty: f64,
}

impl Default for CityState {
    fn default() -> Self {
        Self {
            money: 1000.0,
            treasury_pending: 0.0,
            treasury_cap: 0.0,
            population: 0,
            pop_adult: 0,
            pop_elder: 0,
            unemployment: 0.0,
            inflation: 0.0,
            happiness: 70.0,
            crime: 0.0,
            health: 80.0,
            literacy: 0.0,
            traffic: 0.0,
            power_cap: 10.0,
            water_cap: 10.0,
            power_pct: 100.0,
            water_pct: 100.0,
            power_use_once: 0.0,
            water_use_once: 0.0,
            pollution_penalty: 0.0,
        }
    }
}

impl CityState {
    /// Set the population and derive the adult/elder split from it.
    pub fn set_population(&mut self, population: u32, adult_share: f64, elder_share: f64) {
        self.population = population;
        self.pop_adult = (f64::from(population) * adult_share).round_ties_even() as u32;
        self.pop_elder = (f64::from(population) * elder_share).round_ties_even() as u32;
    }

    /// True when every bounded indicator is inside its documented range.
    pub fn indicators_in_range(&self) -> bool {
        let pct = |v: f64| (0.0..=100.0).contains(&v);
        pct(self.power_pct)
            && pct(self.water_pct)
            && pct(self.happiness)
            && pct(self.crime)
            && pct(self.health)
            && pct(self.unemployment)
            && pct(self.literacy)
            && (0.0..=40.0).contains(&self.inflation)
            && self.pollution_penalty >= 0.0
            && self.money >= 0.0
    }
}
