use serde::{Deserialize, Serialize};
use std::fmt;

use crate::character::entity::{non_negative, validate_name};
use crate::core::constants::{SAVE_TAG_POTION, SAVE_TAG_WEAPON};
use crate::error::{GameError, Result};

/// A carried item. The set of kinds is closed; each carries its own data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ItemFields")]
pub enum Item {
    /// Permanently raises attack when used.
    Weapon { name: String, attack_bonus: i32 },
    /// Restores health when drunk.
    HealthPotion { name: String, heal_amount: i32 },
}

#[derive(Deserialize)]
enum ItemFields {
    Weapon { name: String, attack_bonus: i32 },
    HealthPotion { name: String, heal_amount: i32 },
}

impl TryFrom<ItemFields> for Item {
    type Error = GameError;

    fn try_from(fields: ItemFields) -> Result<Self> {
        match fields {
            ItemFields::Weapon { name, attack_bonus } => Item::weapon(name, attack_bonus),
            ItemFields::HealthPotion { name, heal_amount } => Item::health_potion(name, heal_amount),
        }
    }
}

impl Item {
    pub fn weapon(name: impl Into<String>, attack_bonus: i32) -> Result<Self> {
        let name = name.into();
        validate_name("item name", &name)?;
        non_negative("attack bonus", attack_bonus)?;
        Ok(Item::Weapon { name, attack_bonus })
    }

    pub fn health_potion(name: impl Into<String>, heal_amount: i32) -> Result<Self> {
        let name = name.into();
        validate_name("item name", &name)?;
        non_negative("heal amount", heal_amount)?;
        Ok(Item::HealthPotion { name, heal_amount })
    }

    pub fn name(&self) -> &str {
        match self {
            Item::Weapon { name, .. } | Item::HealthPotion { name, .. } => name,
        }
    }

    /// The stable keyword written ahead of this item in save files.
    pub fn tag(&self) -> &'static str {
        match self {
            Item::Weapon { .. } => SAVE_TAG_WEAPON,
            Item::HealthPotion { .. } => SAVE_TAG_POTION,
        }
    }

    /// The variant-specific number: attack bonus or heal amount.
    pub fn magnitude(&self) -> i32 {
        match self {
            Item::Weapon { attack_bonus, .. } => *attack_bonus,
            Item::HealthPotion { heal_amount, .. } => *heal_amount,
        }
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Item::Weapon { name, attack_bonus } => write!(f, "{} (+{} attack)", name, attack_bonus),
            Item::HealthPotion { name, heal_amount } => {
                write!(f, "{} (heals {} HP)", name, heal_amount)
            }
        }
    }
}

/// What happened when a character used an item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum UseResult {
    Equipped {
        item: String,
        attack_bonus: i32,
        attack: i32,
    },
    Healed {
        item: String,
        restored: i32,
        health: i32,
    },
}
