//! Headless battle balance simulator
//!
//! Plays seeded campaigns with an autopilot player through the same battle
//! engine the game uses, then prints aggregate statistics.
//!
//! Usage:
//!   cargo run --bin simulator -- [OPTIONS]
//!
//! Options:
//!   --runs N        Number of campaigns (default: 100)
//!   --battles N     Battles per campaign (default: 20)
//!   --seed N        Base RNG seed; run N uses seed + N (default: random)
//!   --potion N      Drink below N percent health (default: 30)
//!   --flee N        Flee below N percent health when out of potions (default: 0)
//!   --verbose       Per-run lines and debug logging
//!   --json          Print the report as JSON
//!   --quiet         Only final summary line

use adventure::simulator::{run_simulation, SimConfig};
use std::process::exit;
use std::str::FromStr;
use tracing_subscriber::EnvFilter;

// ── CLI Configuration ────────────────────────────────────────────────

struct CliConfig {
    sim: SimConfig,
    json: bool,
    quiet: bool,
}

fn parse_args() -> CliConfig {
    let args: Vec<String> = std::env::args().collect();
    let mut config = CliConfig {
        sim: SimConfig::default(),
        json: false,
        quiet: false,
    };
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--runs" => {
                i += 1;
                config.sim.num_runs = number(&args, i, "--runs");
            }
            "--battles" => {
                i += 1;
                config.sim.battles_per_run = number(&args, i, "--battles");
            }
            "--seed" => {
                i += 1;
                config.sim.seed = Some(number(&args, i, "--seed"));
            }
            "--potion" => {
                i += 1;
                config.sim.potion_threshold_percent = number(&args, i, "--potion");
            }
            "--flee" => {
                i += 1;
                config.sim.flee_threshold_percent = number(&args, i, "--flee");
            }
            "--verbose" => config.sim.verbosity = 2,
            "--json" => config.json = true,
            "--quiet" => {
                config.quiet = true;
                config.sim.verbosity = 0;
            }
            "--help" | "-h" => {
                print_usage();
                exit(0);
            }
            other => {
                eprintln!("Unknown argument: {other}");
                print_usage();
                exit(1);
            }
        }
        i += 1;
    }
    config
}

fn number<T: FromStr>(args: &[String], i: usize, flag: &str) -> T {
    match args.get(i).map(|raw| raw.parse()) {
        Some(Ok(value)) => value,
        _ => {
            eprintln!("{flag} requires a number");
            exit(1);
        }
    }
}

fn print_usage() {
    eprintln!(
        "Adventure Battle Simulator\n\
         \n\
         Usage: simulator [OPTIONS]\n\
         \n\
         Options:\n\
         \x20 --runs N        Number of campaigns (default: 100)\n\
         \x20 --battles N     Battles per campaign (default: 20)\n\
         \x20 --seed N        Base RNG seed (default: random)\n\
         \x20 --potion N      Drink below N percent health (default: 30)\n\
         \x20 --flee N        Flee below N percent health when out of potions (default: 0)\n\
         \x20 --verbose       Per-run lines and debug logging\n\
         \x20 --json          Print the report as JSON\n\
         \x20 --quiet         Only final summary line\n\
         \x20 --help, -h      Show this help"
    );
}

fn main() {
    let config = parse_args();

    let default_filter = if config.sim.verbosity >= 2 { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let report = match run_simulation(&config.sim) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("Simulation failed: {e}");
            exit(1);
        }
    };

    if config.json {
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("Failed to encode report: {e}");
                exit(1);
            }
        }
    } else if config.quiet {
        println!(
            "runs={} survival={:.1}% avg_level={:.2} avg_wins={:.2}",
            report.num_runs,
            report.survival_rate * 100.0,
            report.avg_final_level,
            report.avg_wins,
        );
    } else {
        report.print_summary();
    }
}
