use bevy::prelude::*;

pub mod balance;
pub mod catalog;
pub mod city_state;
pub mod config;
pub mod connectivity;
pub mod economy;
pub mod game_actions;
pub mod grid;
pub mod sim_rng;
pub mod simulation_sets;
pub mod time_of_day;
pub mod world_init;

#[cfg(any(test, feature = "bench"))]
pub mod test_harness;

pub use simulation_sets::SimulationSet;

use balance::Balance;
use connectivity::{refresh_connectivity, Connectivity};
use game_actions::execute_queued_actions;
use grid::CityGrid;

/// Everything the headless city needs: grid, clock, actions and economy.
///
/// Insert a seeded [`sim_rng::SimRng`] or a custom [`Balance`] before adding
/// the plugin to override the defaults.
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(
            FixedUpdate,
            (
                SimulationSet::PreSim,
                SimulationSet::Simulation,
                SimulationSet::PostSim,
            )
                .chain(),
        );

        app.init_resource::<CityGrid>()
            .init_resource::<Connectivity>()
            .init_resource::<Balance>()
            .add_systems(Startup, world_init::init_world)
            .add_systems(
                FixedUpdate,
                refresh_connectivity
                    .after(execute_queued_actions)
                    .in_set(SimulationSet::PreSim),
            );

        app.add_plugins((
            sim_rng::SimRngPlugin,
            time_of_day::TimeOfDayPlugin,
            game_actions::GameActionsPlugin,
            economy::EconomyPlugin,
        ));
    }
}
