use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config::{
    DAYS_IN_MONTH, FIXED_TICK_HZ, MONTHS_IN_YEAR, SECONDS_PER_DAY, SECONDS_PER_HOUR,
    SECONDS_PER_MINUTE, SIM_SECONDS_PER_TICK, START_HOUR,
};
use crate::SimulationSet;

pub const MAX_SPEED: u32 = 16;

#[derive(Resource, Debug, Clone, Serialize, Deserialize)]
pub struct GameClock {
    /// Simulated seconds since midnight of day 1.
    pub elapsed_seconds: u64,
    pub speed: u32,
    pub paused: bool,
}

impl Default for GameClock {
    fn default() -> Self {
        Self {
            elapsed_seconds: START_HOUR * SECONDS_PER_HOUR,
            speed: 1,
            paused: false,
        }
    }
}

/// How many second/minute/hour/day boundaries the last clock step crossed.
///
/// Cadenced systems run their update once per crossed boundary, so a step
/// that skips several simulated minutes still gets every minute's upkeep.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CadenceTicks {
    pub seconds: u64,
    pub minutes: u64,
    pub hours: u64,
    pub days: u64,
}

impl GameClock {
    /// Advance by `seconds` of simulated time, ignoring pause and speed.
    pub fn advance(&mut self, seconds: u64) -> CadenceTicks {
        let before = self.elapsed_seconds;
        let after = before + seconds;
        self.elapsed_seconds = after;
        CadenceTicks {
            seconds,
            minutes: after / SECONDS_PER_MINUTE - before / SECONDS_PER_MINUTE,
            hours: after / SECONDS_PER_HOUR - before / SECONDS_PER_HOUR,
            days: after / SECONDS_PER_DAY - before / SECONDS_PER_DAY,
        }
    }

    /// One fixed-update step at the current speed.
    pub fn tick(&mut self) -> CadenceTicks {
        if self.paused {
            return CadenceTicks::default();
        }
        self.advance(SIM_SECONDS_PER_TICK * u64::from(self.speed.clamp(1, MAX_SPEED)))
    }

    pub fn set_speed(&mut self, speed: u32) {
        self.speed = speed.clamp(1, MAX_SPEED);
    }

    /// Days elapsed, counting from 1.
    pub fn day(&self) -> u64 {
        self.elapsed_seconds / SECONDS_PER_DAY + 1
    }

    pub fn hour(&self) -> u64 {
        (self.elapsed_seconds % SECONDS_PER_DAY) / SECONDS_PER_HOUR
    }

    pub fn minute(&self) -> u64 {
        (self.elapsed_seconds % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE
    }

    /// `(day_of_month, month, year)`, all 1-based, on a 30-day / 12-month calendar.
    pub fn calendar(&self) -> (u64, u64, u64) {
        let days = self.day() - 1;
        let day = days % DAYS_IN_MONTH + 1;
        let months = days / DAYS_IN_MONTH;
        let month = months % MONTHS_IN_YEAR + 1;
        let year = months / MONTHS_IN_YEAR + 1;
        (day, month, year)
    }

    pub fn formatted(&self) -> String {
        let (day, month, year) = self.calendar();
        format!(
            "{:02}/{:02}/{} - {:02}:{:02}",
            day,
            month,
            year,
            self.hour(),
            self.minute()
        )
    }
}

pub fn tick_game_clock(mut clock: ResMut<GameClock>, mut cadence: ResMut<CadenceTicks>) {
    *cadence = clock.tick();
}

pub struct TimeOfDayPlugin;

impl Plugin for TimeOfDayPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<GameClock>()
            .init_resource::<CadenceTicks>()
            .insert_resource(Time::<Fixed>::from_hz(FIXED_TICK_HZ))
            .add_systems(FixedUpdate, tick_game_clock.in_set(SimulationSet::PreSim));
    }
}
