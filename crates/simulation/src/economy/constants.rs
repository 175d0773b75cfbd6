//! Fixed coefficients of the economy formulas.
//!
//! Tunable per-building numbers live in [`crate::balance::Balance`]; these are
//! the shape constants of the formulas themselves.

// ---------------------------------------------------------------------------
// Demand
// ---------------------------------------------------------------------------
/// Residents per unit of consumer demand (integer division).
pub const RESIDENTS_PER_DEMAND_UNIT: u32 = 5;
/// Supply units contributed by each connected industrial building.
pub const INDUSTRIAL_SUPPLY_WEIGHT: u32 = 2;

// ---------------------------------------------------------------------------
// Income efficiency
// ---------------------------------------------------------------------------
pub const EFF_HAPPINESS_BASE: f64 = 0.6;
pub const EFF_HAPPINESS_SPAN: f64 = 0.4;
pub const EFF_UTILITY_BASE: f64 = 0.5;
pub const EFF_UTILITY_SPAN: f64 = 0.5;
pub const TRAFFIC_DIVISOR: f64 = 200.0;
pub const CRIME_DIVISOR: f64 = 150.0;
/// Floor for both the traffic and the crime efficiency factor.
pub const PENALTY_FLOOR: f64 = 0.7;
pub const EFF_HEALTH_BASE: f64 = 0.9;
pub const EFF_HEALTH_SPAN: f64 = 0.1;
/// Keeps sector shares finite when supply is zero.
pub const SHARE_DENOM_EPSILON: f64 = 0.0003;
pub const SHARE_EPSILON: f64 = 0.0001;
pub const COMMERCIAL_LITERACY_BASE: f64 = 0.6;
pub const COMMERCIAL_LITERACY_SPAN: f64 = 0.4;
pub const INDUSTRIAL_LITERACY_BASE: f64 = 0.85;
pub const INDUSTRIAL_LITERACY_SPAN: f64 = 0.15;
pub const FARM_FACTOR: f64 = 0.7;

// ---------------------------------------------------------------------------
// Happiness (daily)
// ---------------------------------------------------------------------------
/// Comfortable population is this share of the grid's cell count.
pub const DENSITY_TARGET_SHARE: f64 = 0.6;
/// Utility percentage below which residents start complaining.
pub const SERVICE_COMFORT_PCT: f64 = 60.0;
pub const UNEMPLOYMENT_TOLERANCE: f64 = 5.0;
pub const UNEMPLOYMENT_STEP: f64 = 5.0;
pub const UNEMPLOYMENT_WEIGHT: f64 = 1.5;
pub const INFLATION_TOLERANCE: f64 = 6.0;
pub const INFLATION_STEP: f64 = 4.0;
pub const PARK_BONUS_EACH: f64 = 0.2;
pub const PARK_BONUS_MAX: f64 = 2.0;

// ---------------------------------------------------------------------------
// Pollution, crime, health (hourly)
// ---------------------------------------------------------------------------
pub const POLLUTION_PER_INDUSTRY: f64 = 3.0;
pub const POLLUTION_PER_BLIGHT: f64 = 2.0;
pub const POLLUTION_PER_ROAD: f64 = 0.05;
pub const POLLUTION_PARK_RELIEF: f64 = 0.5;
pub const POLLUTION_DIVISOR: f64 = 20.0;

/// Exponential smoothing: weight kept from the previous hour.
pub const SMOOTHING_KEEP: f64 = 0.7;
pub const SMOOTHING_NEW: f64 = 0.3;

pub const CRIME_BASE: f64 = 5.0;
pub const CRIME_PER_UNEMPLOYMENT: f64 = 0.5;
pub const CRIME_PER_BLIGHT: f64 = 3.0;
pub const CRIME_PER_POLICE: f64 = 8.0;

pub const HEALTH_BASE: f64 = 70.0;
pub const HEALTH_PER_HOSPITAL: f64 = 4.0;
pub const HEALTH_PER_POLLUTION: f64 = 8.0;
/// Each missing utility percentage point costs this fraction of a health point.
pub const HEALTH_UTILITY_DIVISOR: f64 = 10.0;

// ---------------------------------------------------------------------------
// Inflation (hourly)
// ---------------------------------------------------------------------------
pub const INFLATION_GAP_GAIN: f64 = 1.2;
pub const INFLATION_GAP_SCALE: f64 = 10.0;
pub const CENTRAL_BANK_DAMPING: f64 = 0.8;
pub const FARM_DAMPING: f64 = 0.2;
pub const FARM_DAMPING_SCALE: f64 = 6.0;
/// Each noise draw is uniform in `[-NOISE_AMPLITUDE, NOISE_AMPLITUDE]`.
pub const NOISE_AMPLITUDE: f64 = 0.1;
pub const INFLATION_MAX: f64 = 40.0;

/// Hours per day, for spreading the daily one-off decay over hourly steps.
pub const HOURS_PER_DAY: f64 = 24.0;
