//! Experience and level-ups.

use tracing::info;

use super::types::Character;
use crate::core::constants::*;

impl Character {
    /// Adds experience and applies every level-up it pays for.
    ///
    /// Each level costs [`XP_PER_LEVEL`] experience and grants max health,
    /// attack, defense and a full heal. Returns the number of levels gained.
    pub fn gain_experience(&mut self, amount: u32) -> u32 {
        self.experience = self.experience.saturating_add(amount);

        let mut levelups = 0;
        while self.experience >= XP_PER_LEVEL {
            self.experience -= XP_PER_LEVEL;
            self.level_up();
            levelups += 1;
        }

        levelups
    }

    fn level_up(&mut self) {
        self.level += 1;
        self.entity
            .grow(LEVEL_UP_MAX_HEALTH, LEVEL_UP_ATTACK, LEVEL_UP_DEFENSE);
        info!(character = %self.name(), level = self.level, "level up");
    }
}
