use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::character::Entity;
use crate::core::constants::*;
use crate::error::Result;

/// The closed set of monsters a battle can spawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MonsterKind {
    Goblin,
    Dragon,
    Skeleton,
}

impl MonsterKind {
    pub const ALL: [MonsterKind; 3] = [MonsterKind::Goblin, MonsterKind::Dragon, MonsterKind::Skeleton];

    /// Picks a kind uniformly at random.
    pub fn random(rng: &mut impl Rng) -> Self {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }

    /// Returns (name, health, attack, defense, xp reward).
    fn stats(self) -> (&'static str, i32, i32, i32, u32) {
        match self {
            MonsterKind::Goblin => GOBLIN_STATS,
            MonsterKind::Dragon => DRAGON_STATS,
            MonsterKind::Skeleton => SKELETON_STATS,
        }
    }

    pub fn name(self) -> &'static str {
        self.stats().0
    }

    pub fn experience_reward(self) -> u32 {
        self.stats().4
    }
}

impl fmt::Display for MonsterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An enemy for a single battle. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Monster {
    kind: MonsterKind,
    entity: Entity,
}

impl Monster {
    pub fn new(kind: MonsterKind) -> Result<Self> {
        let (name, health, attack, defense, _) = kind.stats();
        Ok(Self {
            kind,
            entity: Entity::new(name, health, attack, defense)?,
        })
    }

    /// Spawns a monster of a uniformly random kind.
    pub fn spawn(rng: &mut impl Rng) -> Result<Self> {
        Self::new(MonsterKind::random(rng))
    }

    pub fn kind(&self) -> MonsterKind {
        self.kind
    }

    pub fn entity(&self) -> &Entity {
        &self.entity
    }

    pub fn entity_mut(&mut self) -> &mut Entity {
        &mut self.entity
    }

    pub fn name(&self) -> &str {
        self.entity.name()
    }

    pub fn is_alive(&self) -> bool {
        self.entity.is_alive()
    }

    pub fn experience_reward(&self) -> u32 {
        self.kind.experience_reward()
    }
}

/// How an attack was delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttackKind {
    Strike,
    /// Dragon critical: doubled attack before defense.
    FireBreath,
    /// Skeleton bonus swing in the same turn.
    FollowUp,
}

/// The resolution of one attack.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CombatEvent {
    Hit {
        attacker: String,
        defender: String,
        kind: AttackKind,
        damage: i32,
    },
    NoEffect {
        attacker: String,
        defender: String,
        kind: AttackKind,
    },
}

impl CombatEvent {
    /// Health the defender lost; zero for a no-effect attack.
    pub fn damage(&self) -> i32 {
        match self {
            CombatEvent::Hit { damage, .. } => *damage,
            CombatEvent::NoEffect { .. } => 0,
        }
    }

    pub fn kind(&self) -> AttackKind {
        match self {
            CombatEvent::Hit { kind, .. } | CombatEvent::NoEffect { kind, .. } => *kind,
        }
    }
}
