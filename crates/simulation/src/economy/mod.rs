//! City economy: treasury, labor market, utilities, and the social
//! indicators that feed back into income.
//!
//! Every formula is a plain function over `(&mut CityState, &CityGrid,
//! &HashSet<GroupId>, &Balance)` so it can be tested without an `App`; the
//! systems in [`systems`] call them once per elapsed second, minute, hour or
//! day according to [`crate::time_of_day::CadenceTicks`].

mod constants;
mod counts;
mod demographics;
mod happiness;
mod inflation;
mod labor;
mod plugin;
mod resources;
mod socio_env;
pub mod systems;
mod treasury;

pub use constants::*;
pub use counts::{central_bank_connected, connected_sectors, demand_units, supply_units};
pub use demographics::{housing_capacity, update_demographics_daily, update_literacy_daily};
pub use happiness::{happiness_breakdown, update_happiness_daily, HappinessBreakdown};
pub use inflation::inflation_hourly;
pub use labor::{update_labor_market, LaborMarket};
pub use plugin::EconomyPlugin;
pub use resources::{apply_road_oneoff, decay_oneoff_resources, recompute_resources};
pub use socio_env::socio_env_hourly;
pub use treasury::{
    auto_tax_daily, income_efficiency, income_tick_per_second, minute_upkeep,
    refresh_treasury_cap, upkeep_minutely, withdraw, TreasuryLedger, WithdrawError,
};
