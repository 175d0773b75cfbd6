pub const GRID_SIZE: usize = 20;

/// Side of one drawn tile, in screen pixels.
pub const TILE_PX: i32 = 32;
/// Gutter drawn between neighbouring tiles.
pub const TILE_GAP_PX: i32 = 2;
pub const TILE_PITCH_PX: i32 = TILE_PX + TILE_GAP_PX;
pub const MARGIN_LEFT: i32 = 16;
pub const MARGIN_TOP: i32 = 72;

/// FixedUpdate rate. Every fixed tick advances the game clock by
/// `SIM_SECONDS_PER_TICK * speed` simulated seconds.
pub const FIXED_TICK_HZ: f64 = 10.0;
/// At 10 Hz this is one simulated minute per real second at 1x speed.
pub const SIM_SECONDS_PER_TICK: u64 = 6;

pub const SECONDS_PER_MINUTE: u64 = 60;
pub const SECONDS_PER_HOUR: u64 = 60 * SECONDS_PER_MINUTE;
pub const SECONDS_PER_DAY: u64 = 24 * SECONDS_PER_HOUR;
pub const DAYS_IN_MONTH: u64 = 30;
pub const MONTHS_IN_YEAR: u64 = 12;

/// The clock starts on day 1 at 08:00.
pub const START_HOUR: u64 = 8;
