//! A play session: the active character plus the save slot it belongs to.
//!
//! The console front end drives this; it never reads input or prints.

use rand::Rng;
use tracing::info;

use crate::character::{Character, SaveManager};
use crate::combat::Battle;
use crate::error::Result;
use crate::items::UseResult;

pub struct GameSession {
    character: Character,
    saves: SaveManager,
    quit: bool,
}

impl GameSession {
    /// Creates a new character with the starting kit. Does not touch the save slot.
    pub fn new_game(name: impl Into<String>, saves: SaveManager) -> Result<Self> {
        let character = Character::new(name)?;
        info!(character = %character.name(), "new character created");
        Ok(Self {
            character,
            saves,
            quit: false,
        })
    }

    /// Resumes from the save slot.
    pub fn load(saves: SaveManager) -> Result<Self> {
        let character = saves.load()?;
        Ok(Self {
            character,
            saves,
            quit: false,
        })
    }

    pub fn save(&self) -> Result<()> {
        self.saves.save(&self.character)
    }

    pub fn character(&self) -> &Character {
        &self.character
    }

    pub fn saves(&self) -> &SaveManager {
        &self.saves
    }

    /// Goes exploring and runs into a random monster.
    ///
    /// The returned battle holds the character until it is dropped.
    pub fn explore(&mut self, rng: &mut impl Rng) -> Result<Battle<'_>> {
        Battle::start(&mut self.character, rng)
    }

    /// Uses an item outside of battle.
    pub fn use_item(&mut self, name: &str) -> Result<UseResult> {
        self.character.use_item(name)
    }

    pub fn quit(&mut self) {
        self.quit = true;
    }

    /// False once the character has died or the player quit.
    pub fn is_running(&self) -> bool {
        !self.quit && self.character.is_alive()
    }
}
