//! # TestCity: headless integration test harness
//!
//! Wraps a `bevy::app::App` with `MinimalPlugins` + `SimulationPlugin` and
//! drives the `FixedUpdate` schedule directly, so every `tick()` is exactly
//! one simulation step regardless of wall-clock time.

mod assertions;

use bevy::app::App;
use bevy::prelude::*;

use crate::catalog::BuildingKind;
use crate::city_state::CityState;
use crate::config::{SECONDS_PER_DAY, SECONDS_PER_HOUR};
use crate::connectivity::Connectivity;
use crate::economy::{LaborMarket, TreasuryLedger};
use crate::game_actions::{ActionQueue, ActionResult, ActionResultLog, ActionSource, GameAction};
use crate::grid::{CityGrid, GroupId};
use crate::sim_rng::SimRng;
use crate::time_of_day::GameClock;
use crate::world_init::SkipWorldInit;
use crate::SimulationPlugin;

pub struct TestCity {
    app: App,
}

impl Default for TestCity {
    fn default() -> Self {
        Self::new()
    }
}

impl TestCity {
    // -----------------------------------------------------------------------
    // Constructors
    // -----------------------------------------------------------------------

    /// An **empty** 20x20 city with every resource at its default and the
    /// simulation RNG seeded with 42.
    pub fn new() -> Self {
        Self::bootstrap(42, true)
    }

    /// Empty city with a specific RNG seed.
    pub fn with_seed(seed: u64) -> Self {
        Self::bootstrap(seed, true)
    }

    /// The starter town laid out by `init_world`.
    pub fn with_starter_town() -> Self {
        Self::bootstrap(42, false)
    }

    fn bootstrap(seed: u64, empty: bool) -> Self {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        if empty {
            // Insert the marker BEFORE SimulationPlugin so init_world skips.
            app.insert_resource(SkipWorldInit);
        }
        app.insert_resource(SimRng::from_seed_u64(seed));
        app.add_plugins(SimulationPlugin);
        // Runs Startup; the first frame has no elapsed time so FixedUpdate does not fire.
        app.update();
        Self { app }
    }

    // -----------------------------------------------------------------------
    // World setup (builders consume and return Self)
    // -----------------------------------------------------------------------

    /// Place a building directly on the grid, free of charge.
    pub fn with_building(mut self, kind: BuildingKind, x: usize, y: usize) -> Self {
        self.place(kind, x, y);
        self
    }

    /// A horizontal road from `x0` to `x1` inclusive.
    pub fn with_road_row(mut self, y: usize, x0: usize, x1: usize) -> Self {
        for x in x0..=x1 {
            self.place(BuildingKind::Road, x, y);
        }
        self
    }

    /// A vertical road from `y0` to `y1` inclusive.
    pub fn with_road_column(mut self, x: usize, y0: usize, y1: usize) -> Self {
        for y in y0..=y1 {
            self.place(BuildingKind::Road, x, y);
        }
        self
    }

    pub fn with_money(self, money: f64) -> Self {
        self.with_state(|state| state.money = money)
    }

    pub fn with_state(mut self, f: impl FnOnce(&mut CityState)) -> Self {
        f(self.app.world_mut().resource_mut::<CityState>().into_inner());
        self
    }

    pub fn with_auto_tax(mut self, enabled: bool) -> Self {
        self.app.world_mut().resource_mut::<TreasuryLedger>().auto_tax = enabled;
        self
    }

    pub fn with_speed(mut self, speed: u32) -> Self {
        self.app.world_mut().resource_mut::<GameClock>().set_speed(speed);
        self
    }

    /// Place a building mid-test, bypassing the action queue.
    pub fn place(&mut self, kind: BuildingKind, x: usize, y: usize) -> GroupId {
        self.app
            .world_mut()
            .resource_mut::<CityGrid>()
            .place_building(x, y, kind)
            .unwrap_or_else(|e| panic!("test setup: {kind:?} at ({x}, {y}): {e}"))
    }

    // -----------------------------------------------------------------------
    // Actions
    // -----------------------------------------------------------------------

    pub fn queue(&mut self, action: GameAction) {
        self.app
            .world_mut()
            .resource_mut::<ActionQueue>()
            .push(ActionSource::Player, action);
    }

    /// Queue one action, run one tick, and return its result.
    pub fn act(&mut self, action: GameAction) -> ActionResult {
        self.queue(action);
        self.tick(1);
        self.log()
            .last()
            .map(|(_, result)| result.clone())
            .unwrap_or_else(|| panic!("{action:?} produced no result"))
    }

    // -----------------------------------------------------------------------
    // Simulation
    // -----------------------------------------------------------------------

    /// Run N fixed-update ticks.
    pub fn tick(&mut self, n: u32) {
        for _ in 0..n {
            self.app.world_mut().run_schedule(FixedUpdate);
        }
    }

    /// Tick until at least `seconds` of simulated time have passed.
    pub fn advance_seconds(&mut self, seconds: u64) {
        assert!(!self.clock().paused, "advancing a paused clock never ends");
        let target = self.clock().elapsed_seconds + seconds;
        while self.clock().elapsed_seconds < target {
            self.tick(1);
        }
    }

    pub fn advance_hours(&mut self, hours: u64) {
        self.advance_seconds(hours * SECONDS_PER_HOUR);
    }

    pub fn advance_days(&mut self, days: u64) {
        self.advance_seconds(days * SECONDS_PER_DAY);
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    pub fn world_mut(&mut self) -> &mut World {
        self.app.world_mut()
    }

    pub fn resource<T: Resource>(&self) -> &T {
        self.app.world().resource::<T>()
    }

    pub fn grid(&self) -> &CityGrid {
        self.resource::<CityGrid>()
    }

    pub fn state(&self) -> &CityState {
        self.resource::<CityState>()
    }

    pub fn connectivity(&self) -> &Connectivity {
        self.resource::<Connectivity>()
    }

    pub fn clock(&self) -> &GameClock {
        self.resource::<GameClock>()
    }

    pub fn labor(&self) -> &LaborMarket {
        self.resource::<LaborMarket>()
    }

    pub fn ledger(&self) -> &TreasuryLedger {
        self.resource::<TreasuryLedger>()
    }

    pub fn log(&self) -> &ActionResultLog {
        self.resource::<ActionResultLog>()
    }

    /// Whether the building covering `(x, y)` is road-connected to the city hall.
    pub fn is_connected_at(&self, x: usize, y: usize) -> bool {
        self.grid()
            .get(x, y)
            .group_id()
            .is_some_and(|gid| self.connectivity().is_connected(gid))
    }
}
