//! Deterministic simulation ordering via `SystemSet` phases.
//!
//! ```text
//! PreSim  →  Simulation  →  PostSim
//! ```
//!
//! * **PreSim** – advance the game clock, execute queued player actions,
//!   refresh road connectivity. Everything the economy reads this tick is
//!   settled here.
//! * **Simulation** – the economy: treasury cap, labor market, utilities,
//!   then income, upkeep, and the hourly and daily blocks.
//! * **PostSim** – reporting only. Never mutates simulation state.

use bevy::prelude::*;

/// Ordered phases for systems running in the `FixedUpdate` schedule.
///
/// Configured as a chain: `PreSim` → `Simulation` → `PostSim`.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum SimulationSet {
    PreSim,
    Simulation,
    PostSim,
}
