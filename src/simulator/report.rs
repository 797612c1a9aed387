//! Simulation report generation.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::character::Character;
use crate::combat::MonsterKind;

/// Tally for one campaign.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunStats {
    pub seed: u64,
    pub wins: u32,
    pub flees: u32,
    pub stalemates: u32,
    pub died: bool,
    pub turns: u64,
    pub levels_gained: u32,

    /// Monster name -> battles started against it
    pub encounters: BTreeMap<String, u32>,
    /// Monster name -> battles won against it
    pub kills: BTreeMap<String, u32>,

    pub final_character: Character,
}

impl RunStats {
    pub fn new(seed: u64, character: Character) -> Self {
        Self {
            seed,
            wins: 0,
            flees: 0,
            stalemates: 0,
            died: false,
            turns: 0,
            levels_gained: 0,
            encounters: BTreeMap::new(),
            kills: BTreeMap::new(),
            final_character: character,
        }
    }

    pub fn record_win(&mut self, kind: MonsterKind) {
        self.wins += 1;
        *self.kills.entry(kind.name().to_string()).or_insert(0) += 1;
    }

    pub fn battles(&self) -> u32 {
        self.encounters.values().sum()
    }
}

/// Aggregated results from multiple simulation runs.
#[derive(Debug, Clone, Serialize)]
pub struct SimReport {
    pub num_runs: u32,
    pub survival_rate: f64,

    // Aggregated stats
    pub avg_final_level: f64,
    pub avg_wins: f64,
    pub avg_flees: f64,
    pub avg_turns_per_battle: f64,
    pub total_stalemates: u32,

    // Distribution data
    pub level_distribution: BTreeMap<u32, u32>,
    /// Monster name -> share of encounters won
    pub win_rate_by_monster: BTreeMap<String, f64>,

    // Individual run stats for detailed analysis
    pub runs: Vec<RunStats>,
}

impl SimReport {
    /// Create a new report from completed run stats.
    pub fn from_runs(runs: Vec<RunStats>) -> Self {
        let num_runs = runs.len() as u32;
        let divisor = num_runs.max(1) as f64;

        let survivors = runs.iter().filter(|r| !r.died).count();
        let avg_final_level =
            runs.iter().map(|r| r.final_character.level() as f64).sum::<f64>() / divisor;
        let avg_wins = runs.iter().map(|r| r.wins as f64).sum::<f64>() / divisor;
        let avg_flees = runs.iter().map(|r| r.flees as f64).sum::<f64>() / divisor;

        let total_battles: u32 = runs.iter().map(RunStats::battles).sum();
        let total_turns: u64 = runs.iter().map(|r| r.turns).sum();
        let avg_turns_per_battle = total_turns as f64 / total_battles.max(1) as f64;
        let total_stalemates = runs.iter().map(|r| r.stalemates).sum();

        let mut level_distribution = BTreeMap::new();
        for run in &runs {
            *level_distribution
                .entry(run.final_character.level())
                .or_insert(0) += 1;
        }

        let mut win_rate_by_monster = BTreeMap::new();
        for kind in MonsterKind::ALL {
            let name = kind.name();
            let met: u32 = runs.iter().filter_map(|r| r.encounters.get(name)).sum();
            if met == 0 {
                continue;
            }
            let won: u32 = runs.iter().filter_map(|r| r.kills.get(name)).sum();
            win_rate_by_monster.insert(name.to_string(), won as f64 / met as f64);
        }

        Self {
            num_runs,
            survival_rate: survivors as f64 / divisor,
            avg_final_level,
            avg_wins,
            avg_flees,
            avg_turns_per_battle,
            total_stalemates,
            level_distribution,
            win_rate_by_monster,
            runs,
        }
    }

    /// Print a human-readable summary.
    pub fn print_summary(&self) {
        println!("=== Battle Simulation Report ===");
        println!("Runs: {}", self.num_runs);
        println!("Survival rate: {:.1}%", self.survival_rate * 100.0);
        println!();
        println!("Average final level: {:.2}", self.avg_final_level);
        println!("Average wins per run: {:.2}", self.avg_wins);
        println!("Average flees per run: {:.2}", self.avg_flees);
        println!("Average turns per battle: {:.2}", self.avg_turns_per_battle);
        if self.total_stalemates > 0 {
            println!("Battles stopped at the turn cap: {}", self.total_stalemates);
        }

        println!();
        println!("Win rate by monster:");
        for (name, rate) in &self.win_rate_by_monster {
            println!("  {:<10} {:>5.1}%", name, rate * 100.0);
        }

        println!();
        println!("Final level distribution:");
        for (level, count) in &self.level_distribution {
            let bar = "#".repeat(*count as usize * 40 / self.num_runs.max(1) as usize);
            println!("  Lv {:>3}: {:>4} {}", level, count, bar);
        }
    }
}
