//! Headless battle simulator for balance checks.
//!
//! Plays many seeded campaigns with an autopilot player, using the same
//! `Battle` state machine as the real game, and aggregates the results.

mod config;
mod report;
mod runner;

pub use config::SimConfig;
pub use report::{RunStats, SimReport};
pub use runner::{choose_action, run_simulation, simulate_single_run};
