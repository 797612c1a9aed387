use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{GameError, Result};

/// Combat attributes shared by the player character and every monster.
///
/// Health is kept within `[0, max_health]` by every mutator. Deserialized
/// entities go through [`Entity::with_health`] like every other constructor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "EntityFields")]
pub struct Entity {
    name: String,
    health: i32,
    max_health: i32,
    attack: i32,
    defense: i32,
}

#[derive(Deserialize)]
struct EntityFields {
    name: String,
    health: i32,
    max_health: i32,
    attack: i32,
    defense: i32,
}

impl TryFrom<EntityFields> for Entity {
    type Error = GameError;

    fn try_from(f: EntityFields) -> Result<Self> {
        Entity::with_health(f.name, f.health, f.max_health, f.attack, f.defense)
    }
}

impl Entity {
    /// Creates an entity at full health.
    pub fn new(name: impl Into<String>, max_health: i32, attack: i32, defense: i32) -> Result<Self> {
        Self::with_health(name, max_health, max_health, attack, defense)
    }

    /// Creates an entity with an explicit current health (used when restoring saves).
    pub fn with_health(
        name: impl Into<String>,
        health: i32,
        max_health: i32,
        attack: i32,
        defense: i32,
    ) -> Result<Self> {
        let name = name.into();
        validate_name("name", &name)?;
        non_negative("max health", max_health)?;
        non_negative("health", health)?;
        non_negative("attack", attack)?;
        non_negative("defense", defense)?;
        if health > max_health {
            return Err(GameError::invalid(
                "health",
                format!("{} exceeds max health {}", health, max_health),
            ));
        }

        Ok(Self {
            name,
            health,
            max_health,
            attack,
            defense,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn health(&self) -> i32 {
        self.health
    }

    pub fn max_health(&self) -> i32 {
        self.max_health
    }

    pub fn attack(&self) -> i32 {
        self.attack
    }

    pub fn defense(&self) -> i32 {
        self.defense
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    /// Reduces health by `amount`, stopping at zero.
    ///
    /// Returns the health actually lost. A negative amount is rejected and
    /// leaves the entity untouched.
    pub fn take_damage(&mut self, amount: i32) -> Result<i32> {
        non_negative("damage", amount)?;
        let before = self.health;
        self.health = (self.health - amount).max(0);
        Ok(before - self.health)
    }

    /// Restores health by `amount`, never above max health.
    ///
    /// Returns the health actually restored; zero is a valid no-op.
    pub fn heal(&mut self, amount: i32) -> Result<i32> {
        non_negative("heal amount", amount)?;
        let before = self.health;
        self.health = self.health.saturating_add(amount).min(self.max_health);
        Ok(self.health - before)
    }

    /// Raises attack permanently. Negative bonuses are rejected.
    pub(crate) fn boost_attack(&mut self, bonus: i32) -> Result<i32> {
        non_negative("attack bonus", bonus)?;
        self.attack = self.attack.saturating_add(bonus);
        Ok(self.attack)
    }

    /// Applies one level-up worth of growth and refills health.
    pub(crate) fn grow(&mut self, max_health: i32, attack: i32, defense: i32) {
        self.max_health = self.max_health.saturating_add(max_health);
        self.health = self.max_health;
        self.attack = self.attack.saturating_add(attack);
        self.defense = self.defense.saturating_add(defense);
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Name: {}, HP: {}/{}, Attack: {}, Defense: {}",
            self.name, self.health, self.max_health, self.attack, self.defense
        )
    }
}

/// Names are written one per line in save files, so they must be single-line
/// and not blank.
pub(crate) fn validate_name(field: &'static str, name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(GameError::invalid(field, "cannot be empty"));
    }
    if name.contains(['\n', '\r']) {
        return Err(GameError::invalid(field, "cannot contain line breaks"));
    }
    Ok(())
}

pub(crate) fn non_negative(field: &'static str, value: i32) -> Result<()> {
    if value < 0 {
        return Err(GameError::invalid(
            field,
            format!("must not be negative (got {})", value),
        ));
    }
    Ok(())
}
