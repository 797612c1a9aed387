//! Line-oriented save format.
//!
//! ```text
//! <name>
//! <health>
//! <max health>
//! <attack>
//! <defense>
//! <level>
//! <experience>
//! <item count>
//! <tag>        WEAPON | POTION, repeated per item
//! <item name>
//! <attack bonus | heal amount>
//! ```
//!
//! Every line ends with `\n`. Any parse or validation failure aborts the whole
//! decode with [`GameError::CorruptSaveData`]; no partial value escapes.

use std::io::BufRead;
use std::str::FromStr;

use super::entity::Entity;
use super::types::Character;
use crate::core::constants::{SAVE_TAG_POTION, SAVE_TAG_WEAPON};
use crate::error::{GameError, Result};
use crate::items::{Inventory, Item};

/// Reads save lines while tracking the 1-based line number for error reports.
struct SaveReader<R> {
    inner: R,
    line: usize,
}

impl<R: BufRead> SaveReader<R> {
    fn new(inner: R) -> Self {
        Self { inner, line: 0 }
    }

    fn read_raw(&mut self) -> Result<Option<String>> {
        let mut buf = String::new();
        let read = self
            .inner
            .read_line(&mut buf)
            .map_err(|e| GameError::corrupt(self.line + 1, e.to_string()))?;
        if read == 0 {
            return Ok(None);
        }
        self.line += 1;
        if buf.ends_with('\n') {
            buf.pop();
            if buf.ends_with('\r') {
                buf.pop();
            }
        }
        Ok(Some(buf))
    }

    fn next_line(&mut self, what: &str) -> Result<String> {
        self.read_raw()?.ok_or_else(|| {
            GameError::corrupt(
                self.line + 1,
                format!("unexpected end of data, expected {}", what),
            )
        })
    }

    fn next_number<T: FromStr>(&mut self, what: &str) -> Result<T> {
        let raw = self.next_line(what)?;
        raw.trim().parse().map_err(|_| {
            GameError::corrupt(self.line, format!("expected {} as an integer, got {:?}", what, raw))
        })
    }

    /// Turns a domain validation failure into a corruption report at the current line.
    fn check<T>(&self, value: Result<T>) -> Result<T> {
        value.map_err(|e| GameError::corrupt(self.line, e.to_string()))
    }

    fn expect_end(&mut self) -> Result<()> {
        while let Some(extra) = self.read_raw()? {
            if !extra.trim().is_empty() {
                return Err(GameError::corrupt(
                    self.line,
                    format!("unexpected trailing data {:?}", extra),
                ));
            }
        }
        Ok(())
    }
}

impl Inventory {
    /// Writes the item count followed by three lines per item.
    pub fn encode(&self) -> String {
        let mut out = format!("{}\n", self.len());
        for item in self.iter() {
            out.push_str(&format!("{}\n{}\n{}\n", item.tag(), item.name(), item.magnitude()));
        }
        out
    }

    /// Reads an inventory block written by [`Inventory::encode`].
    pub fn decode(reader: impl BufRead) -> Result<Self> {
        let mut reader = SaveReader::new(reader);
        read_inventory(&mut reader)
    }
}

impl Character {
    /// Encodes every persisted field, inventory included.
    pub fn encode(&self) -> String {
        let entity = self.entity();
        let mut out = format!(
            "{}\n{}\n{}\n{}\n{}\n{}\n{}\n",
            entity.name(),
            entity.health(),
            entity.max_health(),
            entity.attack(),
            entity.defense(),
            self.level(),
            self.experience(),
        );
        out.push_str(&self.inventory().encode());
        out
    }

    /// Decodes a character written by [`Character::encode`].
    pub fn decode(reader: impl BufRead) -> Result<Self> {
        let mut reader = SaveReader::new(reader);

        let name = reader.next_line("name")?;
        let health: i32 = reader.next_number("health")?;
        let max_health: i32 = reader.next_number("max health")?;
        let attack: i32 = reader.next_number("attack")?;
        let defense: i32 = reader.next_number("defense")?;
        let entity = reader.check(Entity::with_health(name, health, max_health, attack, defense))?;

        let level: u32 = reader.next_number("level")?;
        let experience: u32 = reader.next_number("experience")?;
        let inventory = read_inventory(&mut reader)?;
        let character = reader.check(Character::from_parts(entity, level, experience, inventory))?;

        reader.expect_end()?;
        Ok(character)
    }
}

fn read_inventory<R: BufRead>(reader: &mut SaveReader<R>) -> Result<Inventory> {
    let count: usize = reader.next_number("item count")?;

    let mut items = Vec::new();
    for _ in 0..count {
        items.push(read_item(reader)?);
    }
    Ok(items.into_iter().collect())
}

fn read_item<R: BufRead>(reader: &mut SaveReader<R>) -> Result<Item> {
    let tag = reader.next_line("item tag")?;
    let tag_line = reader.line;
    let name = reader.next_line("item name")?;
    match tag.trim() {
        SAVE_TAG_WEAPON => {
            let bonus: i32 = reader.next_number("attack bonus")?;
            reader.check(Item::weapon(name, bonus))
        }
        SAVE_TAG_POTION => {
            let heal: i32 = reader.next_number("heal amount")?;
            reader.check(Item::health_potion(name, heal))
        }
        other => Err(GameError::corrupt(
            tag_line,
            format!("unknown item tag {:?}", other),
        )),
    }
}
