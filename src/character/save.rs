use directories::ProjectDirs;
use std::fs;
use std::io::{self, BufReader, Write};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use super::types::Character;
use crate::core::constants::SAVE_FILE_NAME;
use crate::error::{GameError, Result};

/// Owns the single save slot on disk.
///
/// The slot is not locked; callers must not save and load concurrently.
pub struct SaveManager {
    save_path: PathBuf,
}

impl SaveManager {
    /// Creates a new SaveManager instance
    ///
    /// Sets up the save directory at the appropriate location for the platform
    /// using the `directories` crate.
    pub fn new() -> Result<Self> {
        let project_dirs = ProjectDirs::from("", "", "text-adventure").ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                "Could not determine config directory",
            )
        })?;

        let config_dir = project_dirs.config_dir();
        fs::create_dir_all(config_dir)?;

        Ok(Self::at(config_dir.join(SAVE_FILE_NAME)))
    }

    /// Uses an explicit save file.
    pub fn at(save_path: impl Into<PathBuf>) -> Self {
        Self {
            save_path: save_path.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.save_path
    }

    /// Checks if a save file exists
    pub fn exists(&self) -> bool {
        self.save_path.exists()
    }

    /// Writes the character, replacing any previous save.
    ///
    /// Goes through a sibling `.tmp` file that is renamed into place.
    pub fn save(&self, character: &Character) -> Result<()> {
        let tmp_path = self.save_path.with_extension("tmp");
        {
            let mut file = fs::File::create(&tmp_path)?;
            file.write_all(character.encode().as_bytes())?;
            file.sync_all()?;
        }
        fs::rename(&tmp_path, &self.save_path)?;

        info!(character = %character.name(), path = %self.save_path.display(), "game saved");
        Ok(())
    }

    /// Loads the saved character.
    ///
    /// Returns an error if:
    /// - The file doesn't exist ([`GameError::SaveNotFound`])
    /// - The contents are malformed or truncated ([`GameError::CorruptSaveData`])
    pub fn load(&self) -> Result<Character> {
        let file = match fs::File::open(&self.save_path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(GameError::SaveNotFound(self.save_path.clone()));
            }
            Err(e) => return Err(e.into()),
        };

        match Character::decode(BufReader::new(file)) {
            Ok(character) => {
                info!(character = %character.name(), path = %self.save_path.display(), "game loaded");
                Ok(character)
            }
            Err(e) => {
                warn!(path = %self.save_path.display(), error = %e, "rejected save file");
                Err(e)
            }
        }
    }

    /// Deletes the save file. Returns false when there was nothing to delete.
    pub fn delete(&self) -> Result<bool> {
        match fs::remove_file(&self.save_path) {
            Ok(()) => {
                info!(path = %self.save_path.display(), "save deleted");
                Ok(true)
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::items::Item;
    use tempfile::TempDir;

    fn manager_in(dir: &TempDir) -> SaveManager {
        SaveManager::at(dir.path().join(SAVE_FILE_NAME))
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let manager = manager_in(&dir);

        let mut hero = Character::new("Test Hero").unwrap();
        hero.gain_experience(130);
        hero.entity_mut().take_damage(17).unwrap();
        hero.add_to_inventory(Item::weapon("Axe", 5).unwrap());

        manager.save(&hero).expect("Failed to save character");
        assert!(manager.exists());

        let loaded = manager.load().expect("Failed to load character");
        assert_eq!(loaded, hero);
    }

    #[test]
    fn test_load_nonexistent() {
        let dir = TempDir::new().unwrap();
        let manager = manager_in(&dir);

        assert!(!manager.exists());
        let err = manager.load().unwrap_err();
        assert!(matches!(err, GameError::SaveNotFound(path) if path == manager.path()));
    }

    #[test]
    fn test_load_corrupted_file() {
        let dir = TempDir::new().unwrap();
        let manager = manager_in(&dir);

        fs::write(manager.path(), b"random garbage data that is not valid").unwrap();
        assert!(matches!(
            manager.load(),
            Err(GameError::CorruptSaveData { .. })
        ));
    }

    #[test]
    fn test_load_truncated_file() {
        let dir = TempDir::new().unwrap();
        let manager = manager_in(&dir);

        let text = Character::new("Hero").unwrap().encode();
        fs::write(manager.path(), &text[..text.len() / 2]).unwrap();
        assert!(matches!(
            manager.load(),
            Err(GameError::CorruptSaveData { .. })
        ));
    }

    #[test]
    fn test_save_overwrites_existing() {
        let dir = TempDir::new().unwrap();
        let manager = manager_in(&dir);

        manager.save(&Character::new("Hero1").unwrap()).unwrap();
        manager.save(&Character::new("Hero2").unwrap()).unwrap();

        let loaded = manager.load().unwrap();
        assert_eq!(loaded.name(), "Hero2");
        assert!(!manager.path().with_extension("tmp").exists());
    }

    #[test]
    fn test_delete() {
        let dir = TempDir::new().unwrap();
        let manager = manager_in(&dir);

        assert!(!manager.delete().unwrap());
        manager.save(&Character::new("Hero").unwrap()).unwrap();
        assert!(manager.delete().unwrap());
        assert!(!manager.exists());
        assert!(matches!(manager.load(), Err(GameError::SaveNotFound(_))));
    }
}
