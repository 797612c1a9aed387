//! Shared combat math used by monsters and the battle engine.
//!
//! These are pure functions over an injected random source so every outcome
//! can be replayed from a seed.

use rand::Rng;

/// Roll a percentage chance.
///
/// # Arguments
/// * `chance_percent` - Chance of success (0-100)
/// * `rng` - Random number generator
///
/// # Returns
/// true when the roll in `[0, 100)` lands below `chance_percent`
pub fn roll_chance(chance_percent: u32, rng: &mut impl Rng) -> bool {
    let roll: u32 = rng.gen_range(0..100);
    roll < chance_percent
}

/// Raw damage of an attack against a defender, before it is applied.
///
/// Zero or negative means the attack has no effect.
pub fn raw_damage(attack: i32, defense: i32) -> i32 {
    attack - defense
}

/// Roll an inclusive amount in `[min, max]`.
pub fn roll_amount(min: i32, max: i32, rng: &mut impl Rng) -> i32 {
    if min >= max {
        return min;
    }
    rng.gen_range(min..=max)
}
