use rand::Rng;
use tracing::debug;

use super::types::{AttackKind, CombatEvent, Monster, MonsterKind};
use crate::character::Entity;
use crate::core::combat_math::{raw_damage, roll_chance};
use crate::core::constants::*;

/// Resolves a plain attack: attack minus defense, applied only when positive.
pub fn attack_target(attacker: &Entity, defender: &mut Entity) -> CombatEvent {
    strike(attacker, defender, attacker.attack(), AttackKind::Strike)
}

fn strike(attacker: &Entity, defender: &mut Entity, attack: i32, kind: AttackKind) -> CombatEvent {
    let damage = raw_damage(attack, defender.defense());
    let event = if damage > 0 {
        // damage is positive here, so take_damage cannot reject it
        let dealt = defender.take_damage(damage).unwrap_or(0);
        CombatEvent::Hit {
            attacker: attacker.name().to_string(),
            defender: defender.name().to_string(),
            kind,
            damage: dealt,
        }
    } else {
        CombatEvent::NoEffect {
            attacker: attacker.name().to_string(),
            defender: defender.name().to_string(),
            kind,
        }
    };

    debug!(?event, defender_health = defender.health(), "attack resolved");
    event
}

impl Monster {
    /// Attacks `target` using this monster's behaviour.
    ///
    /// - Goblin: a plain strike.
    /// - Dragon: one roll; below the breath chance it deals
    ///   `2 * attack - defense` instead.
    /// - Skeleton: a plain strike, then one roll (only if the target survived)
    ///   for an extra strike.
    pub fn attack(&self, target: &mut Entity, rng: &mut impl Rng) -> Vec<CombatEvent> {
        let me = self.entity();
        match self.kind() {
            MonsterKind::Goblin => vec![attack_target(me, target)],
            MonsterKind::Dragon => {
                if roll_chance(DRAGON_BREATH_CHANCE_PERCENT, rng) {
                    let breath = me.attack() * DRAGON_BREATH_MULTIPLIER;
                    vec![strike(me, target, breath, AttackKind::FireBreath)]
                } else {
                    vec![attack_target(me, target)]
                }
            }
            MonsterKind::Skeleton => {
                let mut events = vec![attack_target(me, target)];
                if target.is_alive() && roll_chance(SKELETON_DOUBLE_ATTACK_CHANCE_PERCENT, rng) {
                    events.push(strike(me, target, me.attack(), AttackKind::FollowUp));
                }
                events
            }
        }
    }
}
