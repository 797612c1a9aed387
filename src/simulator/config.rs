//! Simulation configuration.

/// Configuration for a simulation run.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of campaigns to play
    pub num_runs: u32,

    /// Random seed for reproducibility (None = random); run N uses seed + N
    pub seed: Option<u64>,

    /// Battles per campaign unless the character dies first
    pub battles_per_run: u32,

    /// Turn cap per battle; a battle hitting it counts as a stalemate
    pub max_turns_per_battle: u32,

    /// Drink a potion when health falls below this percent of max
    pub potion_threshold_percent: i32,

    /// Try to flee when below this percent of max and out of potions (0 = never)
    pub flee_threshold_percent: i32,

    /// Log verbosity (0 = silent, 1 = summary, 2 = per run)
    pub verbosity: u8,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_runs: 100,
            seed: None,
            battles_per_run: 20,
            max_turns_per_battle: 500,
            potion_threshold_percent: 30,
            flee_threshold_percent: 0,
            verbosity: 1,
        }
    }
}

impl SimConfig {
    /// Small reproducible config for tests
    pub fn quick(seed: u64) -> Self {
        Self {
            num_runs: 10,
            seed: Some(seed),
            battles_per_run: 10,
            verbosity: 0,
            ..Default::default()
        }
    }
}
