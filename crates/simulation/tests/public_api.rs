//! Public-API checks: the plugin and engine functions as a downstream crate
//! sees them, without the in-crate test harness.
//!
//! Run: cargo test -p simulation --test public_api

use std::collections::HashSet;

use bevy::prelude::*;

use simulation::balance::Balance;
use simulation::catalog::BuildingKind;
use simulation::city_state::CityState;
use simulation::connectivity::{recompute_connectivity, Connectivity};
use simulation::economy::{income_tick_per_second, recompute_resources, update_labor_market};
use simulation::game_actions::{ActionQueue, ActionResult, ActionResultLog, ActionSource, GameAction};
use simulation::grid::{CityGrid, PlacementError, TileKind};
use simulation::time_of_day::GameClock;
use simulation::world_init::SkipWorldInit;

fn headless_app(empty: bool) -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    if empty {
        app.insert_resource(SkipWorldInit);
    }
    app.add_plugins(simulation::SimulationPlugin);
    app.update();
    app
}

// ---------------------------------------------------------------------------
// Plugin wiring
// ---------------------------------------------------------------------------

#[test]
fn test_plugin_registers_resources() {
    let app = headless_app(true);
    let world = app.world();
    assert!(world.contains_resource::<CityGrid>());
    assert!(world.contains_resource::<Connectivity>());
    assert!(world.contains_resource::<CityState>());
    assert!(world.contains_resource::<Balance>());
    assert!(world.contains_resource::<GameClock>());
    assert!(world.contains_resource::<ActionQueue>());
}

#[test]
fn test_startup_builds_the_starter_town() {
    let app = headless_app(false);
    let grid = app.world().resource::<CityGrid>();
    assert!(grid.has_building(BuildingKind::CityHall));
    assert!(grid.count_all(TileKind::Road) > 0);
}

#[test]
fn test_fixed_update_runs_queued_actions() {
    let mut app = headless_app(true);
    app.world_mut().resource_mut::<ActionQueue>().push(
        ActionSource::Player,
        GameAction::Build {
            kind: BuildingKind::Farm,
            x: 10,
            y: 10,
        },
    );
    app.world_mut().run_schedule(FixedUpdate);

    let (_, result) = app
        .world()
        .resource::<ActionResultLog>()
        .last()
        .cloned()
        .expect("one result");
    assert!(matches!(result, ActionResult::Built(_)));
    assert_eq!(app.world().resource::<CityState>().money, 780.0);
    assert_eq!(app.world().resource::<CityGrid>().count_all(TileKind::Farm), 1);
}

// ---------------------------------------------------------------------------
// Engine functions
// ---------------------------------------------------------------------------

#[test]
fn test_placement_and_demolition() {
    let mut grid = CityGrid::default();
    let gid = grid.place_building(4, 4, BuildingKind::Hospital).unwrap();
    assert_eq!(grid.group_cells(gid).len(), 4);
    assert_eq!(
        grid.place_building(5, 5, BuildingKind::House),
        Err(PlacementError::Occupied)
    );
    assert_eq!(grid.demolish_at(5, 5), Some(gid));
    assert!(grid.iter().all(|(_, _, cell)| !cell.is_occupied()));
}

#[test]
fn test_connected_counts_never_exceed_totals() {
    let mut grid = CityGrid::default();
    grid.place_building(0, 0, BuildingKind::CityHall).unwrap();
    for x in 3..8 {
        grid.place_building(x, 0, BuildingKind::Road).unwrap();
    }
    grid.place_building(5, 1, BuildingKind::Shop).unwrap();
    grid.place_building(15, 15, BuildingKind::Shop).unwrap();

    let conn = recompute_connectivity(&grid);
    for tile in TileKind::ALL {
        assert!(grid.count_connected(&conn.groups, tile) <= grid.count_all(tile));
    }
    assert_eq!(grid.count_connected(&conn.groups, TileKind::Commercial), 1);
    assert_eq!(grid.count_all(TileKind::Commercial), 2);
}

#[test]
fn test_empty_grid_resources() {
    let grid = CityGrid::default();
    let mut state = CityState::default();
    recompute_resources(&mut state, &grid, &HashSet::new(), &Balance::default());
    assert_eq!(state.power_cap, 10.0);
    assert_eq!(state.power_pct, 100.0);
    assert_eq!(state.water_pct, 100.0);
}

#[test]
fn test_no_producers_means_no_income() {
    let grid = CityGrid::default();
    let mut state = CityState {
        treasury_cap: 500.0,
        treasury_pending: 12.0,
        ..Default::default()
    };
    state.set_population(100, 0.6, 0.15);
    let labor = update_labor_market(&mut state, &grid, &HashSet::new(), &Balance::default());
    assert_eq!(labor.total_jobs(), 0);
    income_tick_per_second(&mut state, &grid, &HashSet::new(), &Balance::default());
    assert_eq!(state.treasury_pending, 12.0);
}
