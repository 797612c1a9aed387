use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

use super::entity::{non_negative, Entity};
use crate::core::constants::*;
use crate::error::{GameError, Result};
use crate::items::{Inventory, Item, UseResult};

/// The player's character: combat stats, progression and an inventory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "CharacterFields")]
pub struct Character {
    pub(crate) entity: Entity,
    pub(crate) level: u32,
    pub(crate) experience: u32,
    pub(crate) inventory: Inventory,
}

#[derive(Deserialize)]
struct CharacterFields {
    entity: Entity,
    level: u32,
    experience: u32,
    inventory: Inventory,
}

impl TryFrom<CharacterFields> for Character {
    type Error = GameError;

    fn try_from(f: CharacterFields) -> Result<Self> {
        Character::from_parts(f.entity, f.level, f.experience, f.inventory)
    }
}

impl Character {
    /// Creates a fresh level 1 character carrying the starting kit.
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let entity = Entity::new(name, STARTING_HEALTH, STARTING_ATTACK, STARTING_DEFENSE)?;
        let (weapon, bonus) = STARTING_WEAPON;
        let (potion, heal) = STARTING_POTION;

        let mut inventory = Inventory::new();
        inventory.add(Item::weapon(weapon, bonus)?);
        inventory.add(Item::health_potion(potion, heal)?);

        Ok(Self {
            entity,
            level: 1,
            experience: 0,
            inventory,
        })
    }

    /// Rebuilds a character from stored parts, enforcing level and experience bounds.
    pub fn from_parts(entity: Entity, level: u32, experience: u32, inventory: Inventory) -> Result<Self> {
        if level == 0 {
            return Err(GameError::invalid("level", "must be at least 1"));
        }
        if experience >= XP_PER_LEVEL {
            return Err(GameError::invalid(
                "experience",
                format!("must be below {} (got {})", XP_PER_LEVEL, experience),
            ));
        }
        Ok(Self {
            entity,
            level,
            experience,
            inventory,
        })
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

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn experience(&self) -> u32 {
        self.experience
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn add_to_inventory(&mut self, item: Item) {
        self.inventory.add(item);
    }

    /// Uses the first item called `name` and removes it from the inventory.
    ///
    /// Weapons raise attack permanently, potions heal. Both are consumed.
    /// On error nothing changes: an unknown name fails with
    /// [`GameError::ItemNotFound`], a negative magnitude with
    /// [`GameError::InvalidStat`] and the item stays in the inventory.
    pub fn use_item(&mut self, name: &str) -> Result<UseResult> {
        let index = self
            .inventory
            .position(name)
            .ok_or_else(|| GameError::ItemNotFound(name.to_string()))?;
        if let Some(item) = self.inventory.iter().nth(index) {
            let field = match item {
                Item::Weapon { .. } => "attack bonus",
                Item::HealthPotion { .. } => "heal amount",
            };
            non_negative(field, item.magnitude())?;
        }

        let result = match self.inventory.take(index) {
            Item::Weapon { name, attack_bonus } => {
                let attack = self.entity.boost_attack(attack_bonus)?;
                UseResult::Equipped {
                    item: name,
                    attack_bonus,
                    attack,
                }
            }
            Item::HealthPotion { name, heal_amount } => {
                let restored = self.entity.heal(heal_amount)?;
                UseResult::Healed {
                    item: name,
                    restored,
                    health: self.entity.health(),
                }
            }
        };

        debug!(character = %self.name(), ?result, "item used");
        Ok(result)
    }
}

impl fmt::Display for Character {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, Level: {}, Experience: {}/{}",
            self.entity, self.level, self.experience, XP_PER_LEVEL
        )
    }
}
