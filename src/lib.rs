//! Adventure - turn-based combat and save engine for a text adventure.
//!
//! The console menu lives outside this crate; it drives a [`GameSession`],
//! feeds [`PlayerAction`]s into a [`Battle`], and renders the events it gets back.

pub mod character;
pub mod combat;
pub mod core;
pub mod error;
pub mod items;
pub mod simulator;

pub use character::{Character, Entity, SaveManager};
pub use combat::{Battle, BattleEvent, BattleOutcome, BattleState, Monster, MonsterKind, PlayerAction};
pub use crate::core::GameSession;
pub use error::{GameError, Result};
pub use items::{Inventory, Item, UseResult};
