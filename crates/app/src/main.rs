//! Headless runner: builds the city, runs the fixed-step simulation for a
//! number of in-game days and prints a report.
//!
//! No window is opened. `FixedUpdate` is driven directly, so a run is as fast
//! as the machine allows and replays exactly for a given `--seed`.

mod script;

use std::path::PathBuf;

use anyhow::Result;
use bevy::log::LogPlugin;
use bevy::prelude::*;
use clap::Parser;
use serde::Serialize;

use simulation::balance::Balance;
use simulation::city_state::CityState;
use simulation::connectivity::Connectivity;
use simulation::economy::{LaborMarket, TreasuryLedger};
use simulation::game_actions::{ActionQueue, ActionResult, ActionResultLog, ActionSource, GameAction};
use simulation::sim_rng::SimRng;
use simulation::time_of_day::GameClock;
use simulation::world_init::SkipWorldInit;

use script::Script;

/// Upper bound on fixed steps per run, in case the clock never reaches the target.
const MAX_TICKS: u64 = 50_000_000;

#[derive(Parser, Debug)]
#[command(author, version, about = "Run the tile-city simulation headless", long_about = None)]
struct Args {
    /// In-game days to simulate
    #[arg(short, long, default_value_t = 7)]
    days: u64,

    /// Seed for the simulation RNG
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Clock speed multiplier (1..=16)
    #[arg(long, default_value_t = 16)]
    speed: u32,

    /// Start from an empty grid instead of the starter town
    #[arg(long)]
    empty: bool,

    /// Collect pending income automatically once a day
    #[arg(long)]
    auto_tax: bool,

    /// Never withdraw pending income by hand
    #[arg(long)]
    no_withdraw: bool,

    /// JSON-lines file of actions to queue, see `script.rs`
    #[arg(long)]
    script: Option<PathBuf>,

    /// Print the final report as JSON on stdout
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct Report {
    date: String,
    day: u64,
    seed: u64,
    ticks: u64,
    state: CityState,
    labor: LaborMarket,
    connected_buildings: usize,
    connected_roads: usize,
    withdrawals: u32,
    withdrawn: f64,
    rejected_actions: u32,
}

#[derive(Default)]
struct RunStats {
    ticks: u64,
    withdrawals: u32,
    withdrawn: f64,
    rejected_actions: u32,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut app = App::new();
    app.add_plugins((MinimalPlugins, LogPlugin::default()));
    if args.empty {
        app.insert_resource(SkipWorldInit);
    }
    app.insert_resource(SimRng::from_seed_u64(args.seed));
    app.add_plugins(simulation::SimulationPlugin);
    // Startup systems lay out the town.
    app.update();

    let mut script = match &args.script {
        Some(path) => Script::load(path)?,
        None => Script::default(),
    };
    if !script.is_empty() {
        info!("loaded {} scripted actions", script.len());
    }

    let queue = app.world_mut().resource_mut::<ActionQueue>().into_inner();
    queue.push(ActionSource::Script, GameAction::SetSpeed { speed: args.speed });
    queue.push(
        ActionSource::Script,
        GameAction::SetAutoTax {
            enabled: args.auto_tax,
        },
    );

    let target_day = app.world().resource::<GameClock>().day() + args.days;
    info!(
        "simulating {} days from {} (seed {})",
        args.days,
        app.world().resource::<GameClock>().formatted(),
        args.seed
    );

    let mut stats = RunStats::default();
    while app.world().resource::<GameClock>().day() < target_day {
        if stats.ticks >= MAX_TICKS {
            warn!("stopping after {MAX_TICKS} ticks without reaching day {target_day}");
            break;
        }
        let day = app.world().resource::<GameClock>().day();
        for action in script.due(day) {
            app.world_mut()
                .resource_mut::<ActionQueue>()
                .push(ActionSource::Script, action);
        }
        if !args.no_withdraw && withdraw_allowed(app.world()) {
            app.world_mut()
                .resource_mut::<ActionQueue>()
                .push(ActionSource::Script, GameAction::Withdraw);
        }

        app.world_mut().resource_mut::<ActionResultLog>().clear();
        app.world_mut().run_schedule(FixedUpdate);
        stats.ticks += 1;
        tally_results(app.world(), &mut stats);
    }

    let report = build_report(app.world(), args.seed, &stats);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        info!(
            "{} after {} ticks: money {:.0}, pending {:.0}, population {}, happiness {:.1}, \
             {} withdrawals worth {:.0}",
            report.date,
            report.ticks,
            report.state.money,
            report.state.treasury_pending,
            report.state.population,
            report.state.happiness,
            report.withdrawals,
            report.withdrawn,
        );
    }
    Ok(())
}

/// Same checks the executor makes, so the runner never queues a doomed withdrawal.
fn withdraw_allowed(world: &World) -> bool {
    let state = world.resource::<CityState>();
    let ledger = world.resource::<TreasuryLedger>();
    let balance = world.resource::<Balance>();
    let now = world.resource::<GameClock>().elapsed_seconds;
    state.treasury_pending >= balance.min_withdraw
        && ledger
            .last_withdraw_at
            .is_none_or(|last| now.saturating_sub(last) >= balance.withdraw_cooldown_s)
}

/// Count the results of this tick's actions. The log is cleared before every tick.
fn tally_results(world: &World, stats: &mut RunStats) {
    let log = world.resource::<ActionResultLog>();
    for (action, result) in log.last_n(log.len()) {
        match result {
            ActionResult::Withdrawn(paid) => {
                stats.withdrawals += 1;
                stats.withdrawn += paid;
            }
            ActionResult::Error(e) => {
                stats.rejected_actions += 1;
                warn!("{action:?} rejected: {e}");
            }
            ActionResult::SuccessWithWarning(msg) => warn!("{action:?}: {msg}"),
            _ => {}
        }
    }
}

fn build_report(world: &World, seed: u64, stats: &RunStats) -> Report {
    let clock = world.resource::<GameClock>();
    let connectivity = world.resource::<Connectivity>();
    Report {
        date: clock.formatted(),
        day: clock.day(),
        seed,
        ticks: stats.ticks,
        state: world.resource::<CityState>().clone(),
        labor: *world.resource::<LaborMarket>(),
        connected_buildings: connectivity.groups.len(),
        connected_roads: connectivity.roads.len(),
        withdrawals: stats.withdrawals,
        withdrawn: stats.withdrawn,
        rejected_actions: stats.rejected_actions,
    }
}
