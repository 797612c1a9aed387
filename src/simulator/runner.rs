//! Campaign runner driving the real battle engine with an autopilot player.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, warn};

use super::config::SimConfig;
use super::report::{RunStats, SimReport};
use crate::character::Character;
use crate::combat::{Battle, BattleEvent, BattleOutcome, PlayerAction};
use crate::error::Result;
use crate::items::Item;

/// Run every campaign and aggregate the results.
pub fn run_simulation(config: &SimConfig) -> Result<SimReport> {
    let mut all_runs = Vec::with_capacity(config.num_runs as usize);

    for run_idx in 0..config.num_runs {
        let seed = match config.seed {
            Some(seed) => seed + run_idx as u64,
            None => rand::thread_rng().gen(),
        };
        let mut rng = ChaCha8Rng::seed_from_u64(seed);

        let run_stats = simulate_single_run(config, seed, &mut rng)?;
        if config.verbosity >= 2 {
            println!(
                "Run {}/{} (seed={}) - Level {}, Won {}, Fled {}, Died {}",
                run_idx + 1,
                config.num_runs,
                seed,
                run_stats.final_character.level(),
                run_stats.wins,
                run_stats.flees,
                run_stats.died,
            );
        }
        all_runs.push(run_stats);
    }

    Ok(SimReport::from_runs(all_runs))
}

/// Play one campaign: fight until the battle budget is spent or the character dies.
pub fn simulate_single_run(config: &SimConfig, seed: u64, rng: &mut impl Rng) -> Result<RunStats> {
    let mut stats = RunStats::new(seed, Character::new("SimPlayer")?);

    for _ in 0..config.battles_per_run {
        if !stats.final_character.is_alive() {
            break;
        }

        let mut battle = Battle::start(&mut stats.final_character, rng)?;
        let kind = battle.monster().kind();
        *stats.encounters.entry(kind.name().to_string()).or_insert(0) += 1;

        let mut turns = 0;
        while battle.outcome().is_none() {
            if turns >= config.max_turns_per_battle {
                warn!(seed, monster = %kind, "battle hit the turn cap");
                stats.stalemates += 1;
                break;
            }
            let action = choose_action(battle.character(), config);
            for event in battle.step(action, rng)? {
                if let BattleEvent::Victory { levels_gained, .. } = event {
                    stats.levels_gained += levels_gained;
                }
            }
            turns += 1;
        }
        let outcome = battle.outcome();
        drop(battle);

        stats.turns += u64::from(turns);
        match outcome {
            Some(BattleOutcome::Won) => stats.record_win(kind),
            Some(BattleOutcome::Fled) => stats.flees += 1,
            Some(BattleOutcome::Lost) => stats.died = true,
            None => {}
        }
        debug!(seed, monster = %kind, ?outcome, turns, "battle finished");
    }

    Ok(stats)
}

/// Autopilot: equip any weapon first, drink when low, flee when low and dry, else attack.
pub fn choose_action(character: &Character, config: &SimConfig) -> PlayerAction {
    let inventory = character.inventory();
    if let Some(weapon) = inventory
        .iter()
        .find(|item| matches!(item, Item::Weapon { .. }))
    {
        return PlayerAction::UseItem(weapon.name().to_string());
    }

    let entity = character.entity();
    let health_percent = entity.health() * 100 / entity.max_health().max(1);
    if health_percent < config.potion_threshold_percent {
        if let Some(potion) = inventory
            .iter()
            .find(|item| matches!(item, Item::HealthPotion { .. }))
        {
            return PlayerAction::UseItem(potion.name().to_string());
        }
        if health_percent < config.flee_threshold_percent {
            return PlayerAction::Flee;
        }
    }

    PlayerAction::Attack
}
