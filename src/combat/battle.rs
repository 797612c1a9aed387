//! Turn-based battle between the player character and one monster.
//!
//! The battle is a small state machine:
//!
//! ```text
//! PlayerTurn -> ResolvingAction -> MonsterTurn -> ResolvingMonsterAction -> PlayerTurn
//!                     |                                      |
//!                     +-> Won                                +-> Lost
//! PlayerTurn -> Fled
//! ```
//!
//! Each call to [`Battle::step`] takes one player action and walks the machine
//! until it is the player's turn again or the battle has ended. The battle
//! borrows the character mutably for its lifetime and owns the monster.

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::logic::attack_target;
use super::types::{CombatEvent, Monster};
use crate::character::Character;
use crate::core::combat_math::{roll_amount, roll_chance};
use crate::core::constants::*;
use crate::error::{GameError, Result};
use crate::items::UseResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BattleState {
    PlayerTurn,
    ResolvingAction,
    MonsterTurn,
    ResolvingMonsterAction,
    Won,
    Lost,
    Fled,
}

impl BattleState {
    pub fn is_terminal(self) -> bool {
        matches!(self, BattleState::Won | BattleState::Lost | BattleState::Fled)
    }
}

/// One choice made by the player on their turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerAction {
    Attack,
    UseItem(String),
    Flee,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BattleOutcome {
    Won,
    Lost,
    Fled,
}

/// Everything that happened during a step, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BattleEvent {
    PlayerAttack(CombatEvent),
    ItemUsed(UseResult),
    FleeFailed,
    Fled,
    MonsterAttack(CombatEvent),
    Victory {
        experience: u32,
        levels_gained: u32,
        heal_roll: i32,
        health: i32,
    },
    Defeat,
}

pub struct Battle<'a> {
    character: &'a mut Character,
    monster: Monster,
    state: BattleState,
    round: u32,
}

impl<'a> Battle<'a> {
    /// Starts a battle against a freshly spawned monster of random kind.
    pub fn start(character: &'a mut Character, rng: &mut impl Rng) -> Result<Self> {
        let monster = Monster::spawn(rng)?;
        Ok(Self::against(character, monster))
    }

    /// Starts a battle against a given monster.
    ///
    /// A character that is already dead starts in the `Lost` state.
    pub fn against(character: &'a mut Character, monster: Monster) -> Self {
        let state = if character.is_alive() {
            BattleState::PlayerTurn
        } else {
            BattleState::Lost
        };
        info!(character = %character.name(), monster = %monster.name(), "battle started");
        Self {
            character,
            monster,
            state,
            round: 1,
        }
    }

    pub fn state(&self) -> BattleState {
        self.state
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn monster(&self) -> &Monster {
        &self.monster
    }

    pub fn character(&self) -> &Character {
        self.character
    }

    pub fn outcome(&self) -> Option<BattleOutcome> {
        match self.state {
            BattleState::Won => Some(BattleOutcome::Won),
            BattleState::Lost => Some(BattleOutcome::Lost),
            BattleState::Fled => Some(BattleOutcome::Fled),
            _ => None,
        }
    }

    /// Plays one player action and the monster's reply.
    ///
    /// Errors leave the battle exactly as it was:
    /// - [`GameError::BattleFinished`] once a terminal state is reached
    /// - [`GameError::ItemNotFound`] for an unknown item; the turn is not spent
    pub fn step(&mut self, action: PlayerAction, rng: &mut impl Rng) -> Result<Vec<BattleEvent>> {
        if self.state != BattleState::PlayerTurn {
            return Err(GameError::BattleFinished);
        }

        let mut events = Vec::new();
        match action {
            PlayerAction::Attack => {
                let hit = attack_target(self.character.entity(), self.monster.entity_mut());
                events.push(BattleEvent::PlayerAttack(hit));
                self.state = BattleState::ResolvingAction;
            }
            PlayerAction::UseItem(name) => {
                let used = self.character.use_item(&name)?;
                events.push(BattleEvent::ItemUsed(used));
                self.state = BattleState::ResolvingAction;
            }
            PlayerAction::Flee => {
                if roll_chance(FLEE_CHANCE_PERCENT, rng) {
                    events.push(BattleEvent::Fled);
                    self.state = BattleState::Fled;
                    info!(character = %self.character.name(), "fled from battle");
                } else {
                    events.push(BattleEvent::FleeFailed);
                    self.state = BattleState::ResolvingAction;
                }
            }
        }

        while self.state != BattleState::PlayerTurn && !self.state.is_terminal() {
            self.advance(rng, &mut events)?;
        }
        Ok(events)
    }

    fn advance(&mut self, rng: &mut impl Rng, events: &mut Vec<BattleEvent>) -> Result<()> {
        let next = match self.state {
            BattleState::ResolvingAction => {
                if self.monster.is_alive() {
                    BattleState::MonsterTurn
                } else {
                    events.push(self.claim_victory(rng)?);
                    BattleState::Won
                }
            }
            BattleState::MonsterTurn => {
                let hits = self.monster.attack(self.character.entity_mut(), rng);
                events.extend(hits.into_iter().map(BattleEvent::MonsterAttack));
                BattleState::ResolvingMonsterAction
            }
            BattleState::ResolvingMonsterAction => {
                if self.character.is_alive() {
                    self.round += 1;
                    BattleState::PlayerTurn
                } else {
                    info!(
                        character = %self.character.name(),
                        monster = %self.monster.name(),
                        "character defeated"
                    );
                    events.push(BattleEvent::Defeat);
                    BattleState::Lost
                }
            }
            other => other,
        };

        debug!(from = ?self.state, to = ?next, round = self.round, "battle transition");
        self.state = next;
        Ok(())
    }

    fn claim_victory(&mut self, rng: &mut impl Rng) -> Result<BattleEvent> {
        let experience = self.monster.experience_reward();
        let levels_gained = self.character.gain_experience(experience);
        let heal_roll = roll_amount(VICTORY_HEAL_MIN, VICTORY_HEAL_MAX, rng);
        self.character.entity_mut().heal(heal_roll)?;

        info!(
            character = %self.character.name(),
            monster = %self.monster.name(),
            experience,
            heal_roll,
            "monster defeated"
        );
        Ok(BattleEvent::Victory {
            experience,
            levels_gained,
            heal_roll,
            health: self.character.entity().health(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::Entity;
    use crate::combat::MonsterKind;
    use crate::items::{Inventory, Item};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn fighter(health: i32, max_health: i32, attack: i32, defense: i32) -> Character {
        let entity = Entity::with_health("Hero", health, max_health, attack, defense).unwrap();
        let mut inventory = Inventory::new();
        inventory.add(Item::health_potion("Potion", 20).unwrap());
        Character::from_parts(entity, 1, 0, inventory).unwrap()
    }

    fn goblin() -> Monster {
        Monster::new(MonsterKind::Goblin).unwrap()
    }

    // =========================================================================
    // Attack
    // =========================================================================

    #[test]
    fn test_attack_then_monster_replies() {
        let mut hero = fighter(100, 100, 10, 7);
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut battle = Battle::against(&mut hero, goblin());

        let events = battle.step(PlayerAction::Attack, &mut rng).unwrap();
        assert_eq!(events.len(), 2);
        assert!(matches!(&events[0], BattleEvent::PlayerAttack(e) if e.damage() == 7));
        assert!(matches!(&events[1], BattleEvent::MonsterAttack(e) if e.damage() == 1));
        assert_eq!(battle.state(), BattleState::PlayerTurn);
        assert_eq!(battle.round(), 2);
        assert_eq!(battle.monster().entity().health(), 23);
        assert_eq!(battle.character().entity().health(), 99);
    }

    #[test]
    fn test_killing_blow_wins_without_monster_reply() {
        let mut hero = fighter(50, 100, 100, 0);
        let mut rng = ChaCha8Rng::seed_from_u64(8);
        let mut battle = Battle::against(&mut hero, goblin());

        let events = battle.step(PlayerAction::Attack, &mut rng).unwrap();
        assert_eq!(battle.state(), BattleState::Won);
        assert_eq!(battle.outcome(), Some(BattleOutcome::Won));
        assert_eq!(events.len(), 2);
        match &events[1] {
            BattleEvent::Victory {
                experience,
                levels_gained,
                heal_roll,
                health,
            } => {
                assert_eq!(*experience, 20);
                assert_eq!(*levels_gained, 0);
                assert!((5..=25).contains(heal_roll));
                assert_eq!(*health, 50 + heal_roll);
            }
            other => panic!("expected victory, got {other:?}"),
        }
        drop(battle);
        assert_eq!(hero.experience(), 20);
    }

    #[test]
    fn test_defeat_stops_the_battle() {
        let mut hero = fighter(1, 100, 0, 0);
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        let mut battle = Battle::against(&mut hero, goblin());

        let events = battle.step(PlayerAction::Attack, &mut rng).unwrap();
        assert_eq!(events.last(), Some(&BattleEvent::Defeat));
        assert_eq!(battle.state(), BattleState::Lost);

        let monster_health = battle.monster().entity().health();
        assert!(matches!(
            battle.step(PlayerAction::Attack, &mut rng),
            Err(GameError::BattleFinished)
        ));
        assert_eq!(battle.monster().entity().health(), monster_health);
        drop(battle);
        assert!(!hero.is_alive());
        assert_eq!(hero.experience(), 0);
    }

    #[test]
    fn test_dead_character_starts_lost() {
        let mut hero = fighter(0, 100, 10, 7);
        let battle = Battle::against(&mut hero, goblin());
        assert_eq!(battle.outcome(), Some(BattleOutcome::Lost));
    }

    // =========================================================================
    // Items
    // =========================================================================

    #[test]
    fn test_unknown_item_keeps_player_turn() {
        let mut hero = fighter(60, 100, 10, 7);
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let mut battle = Battle::against(&mut hero, goblin());

        let err = battle
            .step(PlayerAction::UseItem("Elixir".into()), &mut rng)
            .unwrap_err();
        assert!(matches!(err, GameError::ItemNotFound(name) if name == "Elixir"));
        assert_eq!(battle.state(), BattleState::PlayerTurn);
        assert_eq!(battle.round(), 1);
        assert_eq!(battle.character().entity().health(), 60);
    }

    #[test]
    fn test_item_use_spends_the_turn() {
        let mut hero = fighter(60, 100, 10, 7);
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let mut battle = Battle::against(&mut hero, goblin());

        let events = battle
            .step(PlayerAction::UseItem("Potion".into()), &mut rng)
            .unwrap();
        assert!(matches!(
            &events[0],
            BattleEvent::ItemUsed(UseResult::Healed { restored: 20, .. })
        ));
        assert!(matches!(&events[1], BattleEvent::MonsterAttack(_)));
        assert_eq!(battle.character().entity().health(), 60 + 20 - 1);
        assert!(battle.character().inventory().is_empty());
    }

    // =========================================================================
    // Flee
    // =========================================================================

    #[test]
    fn test_flee_follows_roll() {
        let mut hero = fighter(100, 100, 10, 100);
        let mut rng = ChaCha8Rng::seed_from_u64(31);
        let mut shadow = rng.clone();
        let mut battle = Battle::against(&mut hero, goblin());

        let mut failures = 0;
        loop {
            let roll: u32 = shadow.gen_range(0..100);
            let events = battle.step(PlayerAction::Flee, &mut rng).unwrap();
            if roll < 30 {
                assert_eq!(events, vec![BattleEvent::Fled]);
                assert_eq!(battle.outcome(), Some(BattleOutcome::Fled));
                break;
            }
            failures += 1;
            assert_eq!(events[0], BattleEvent::FleeFailed);
            assert!(matches!(&events[1], BattleEvent::MonsterAttack(_)));
            assert_eq!(battle.state(), BattleState::PlayerTurn);
            assert!(failures < 100);
        }
        assert_eq!(battle.monster().entity().health(), 30);
        assert_eq!(battle.character().entity().health(), 100);
    }

    #[test]
    fn test_start_spawns_random_monster() {
        let mut rng = ChaCha8Rng::seed_from_u64(12);
        let mut shadow = rng.clone();
        let expected = MonsterKind::random(&mut shadow);

        let mut hero = Character::new("Hero").unwrap();
        let battle = Battle::start(&mut hero, &mut rng).unwrap();
        assert_eq!(battle.monster().kind(), expected);
        assert_eq!(battle.state(), BattleState::PlayerTurn);
    }
}
