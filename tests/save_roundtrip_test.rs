//! Integration test: save slot round trips
//!
//! Tests the full flow: create → play → save → load → verify, plus rejection
//! of damaged save files.

use adventure::{Character, Entity, GameError, GameSession, Inventory, Item, SaveManager};
use std::fs;
use tempfile::TempDir;

fn slot(dir: &TempDir) -> SaveManager {
    SaveManager::at(dir.path().join("savegame.txt"))
}

#[test]
fn test_fresh_character_save_layout() {
    let dir = TempDir::new().unwrap();
    let saves = slot(&dir);
    let hero = Character::new("Hero").unwrap();

    saves.save(&hero).unwrap();

    let text = fs::read_to_string(saves.path()).unwrap();
    assert_eq!(
        text,
        "Hero\n100\n100\n10\n7\n1\n0\n2\nWEAPON\nSword\n3\nPOTION\nHealth Potion\n20\n"
    );
}

#[test]
fn test_round_trip_preserves_everything() {
    let dir = TempDir::new().unwrap();
    let saves = slot(&dir);

    let entity = Entity::with_health("Aria the Bold", 42, 120, 14, 11).unwrap();
    let inventory: Inventory = vec![
        Item::weapon("Sword", 3).unwrap(),
        Item::health_potion("Potion", 20).unwrap(),
        Item::weapon("Rusty Axe", 0).unwrap(),
    ]
    .into_iter()
    .collect();
    let hero = Character::from_parts(entity, 3, 50, inventory).unwrap();

    saves.save(&hero).unwrap();
    let loaded = saves.load().unwrap();

    assert_eq!(loaded, hero);
    assert_eq!(loaded.name(), "Aria the Bold");
    assert_eq!(loaded.entity().health(), 42);
    assert_eq!(loaded.level(), 3);
    assert_eq!(loaded.experience(), 50);
    let names: Vec<&str> = loaded.inventory().iter().map(Item::name).collect();
    assert_eq!(names, ["Sword", "Potion", "Rusty Axe"]);
}

#[test]
fn test_save_overwrites_previous_slot() {
    let dir = TempDir::new().unwrap();
    let mut session = GameSession::new_game("Hero", slot(&dir)).unwrap();
    session.save().unwrap();

    session.use_item("Sword").unwrap();
    session.save().unwrap();

    let loaded = slot(&dir).load().unwrap();
    assert_eq!(loaded.entity().attack(), 13);
    assert_eq!(loaded.inventory().len(), 1);
    assert!(loaded.inventory().find("Sword").is_none());
}

#[test]
fn test_missing_save_reports_path() {
    let dir = TempDir::new().unwrap();
    let saves = slot(&dir);
    match saves.load() {
        Err(GameError::SaveNotFound(path)) => assert_eq!(path, saves.path()),
        other => panic!("expected SaveNotFound, got {other:?}"),
    }
}

#[test]
fn test_delete_then_load() {
    let dir = TempDir::new().unwrap();
    let saves = slot(&dir);
    saves.save(&Character::new("Hero").unwrap()).unwrap();

    assert!(saves.delete().unwrap());
    assert!(!saves.exists());
    assert!(!saves.delete().unwrap());
    assert!(matches!(saves.load(), Err(GameError::SaveNotFound(_))));
}

// =========================================================================
// Damaged files
// =========================================================================

fn load_text(text: &str) -> Result<Character, GameError> {
    let dir = TempDir::new().unwrap();
    let saves = slot(&dir);
    fs::write(saves.path(), text).unwrap();
    saves.load()
}

#[test]
fn test_non_numeric_stat_is_corrupt() {
    let result = load_text("Hero\nlots\n100\n10\n7\n1\n0\n0\n");
    assert!(matches!(result, Err(GameError::CorruptSaveData { line: 2, .. })));
}

#[test]
fn test_truncated_inventory_is_corrupt() {
    let result = load_text("Hero\n100\n100\n10\n7\n1\n0\n2\nWEAPON\nSword\n3\n");
    assert!(matches!(result, Err(GameError::CorruptSaveData { .. })));
}

#[test]
fn test_unknown_item_tag_is_corrupt() {
    let result = load_text("Hero\n100\n100\n10\n7\n1\n0\n1\nSHIELD\nBuckler\n2\n");
    assert!(matches!(result, Err(GameError::CorruptSaveData { line: 9, .. })));
}

#[test]
fn test_health_above_max_is_corrupt() {
    let result = load_text("Hero\n150\n100\n10\n7\n1\n0\n0\n");
    assert!(matches!(result, Err(GameError::CorruptSaveData { .. })));
}

#[test]
fn test_empty_file_is_corrupt() {
    assert!(matches!(
        load_text(""),
        Err(GameError::CorruptSaveData { line: 1, .. })
    ));
}
