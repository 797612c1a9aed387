use serde::{Deserialize, Serialize};

use super::types::Item;
use crate::error::{GameError, Result};

/// Ordered bag of items. Insertion order is display and lookup order; names
/// may repeat and the first match wins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inventory {
    items: Vec<Item>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, item: Item) {
        self.items.push(item);
    }

    /// Removes and returns the first item called `name`.
    pub fn remove(&mut self, name: &str) -> Result<Item> {
        let index = self
            .position(name)
            .ok_or_else(|| GameError::ItemNotFound(name.to_string()))?;
        Ok(self.items.remove(index))
    }

    pub fn find(&self, name: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.name() == name)
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.items.iter().position(|item| item.name() == name)
    }

    /// Removes the item at `index`, which must come from [`Inventory::position`]
    /// in the same step.
    pub(crate) fn take(&mut self, index: usize) -> Item {
        self.items.remove(index)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }
}

impl FromIterator<Item> for Inventory {
    fn from_iter<I: IntoIterator<Item = Item>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kit() -> Inventory {
        let mut inv = Inventory::new();
        inv.add(Item::weapon("Sword", 3).unwrap());
        inv.add(Item::health_potion("Potion", 20).unwrap());
        inv.add(Item::weapon("Sword", 7).unwrap());
        inv
    }

    #[test]
    fn test_add_keeps_insertion_order() {
        let inv = kit();
        let names: Vec<_> = inv.iter().map(Item::name).collect();
        assert_eq!(names, vec!["Sword", "Potion", "Sword"]);
        assert_eq!(inv.len(), 3);
        assert!(!inv.is_empty());
    }

    #[test]
    fn test_find_returns_first_match() {
        let inv = kit();
        assert_eq!(inv.find("Sword").map(Item::magnitude), Some(3));
        assert!(inv.find("Axe").is_none());
    }

    #[test]
    fn test_remove_first_match() {
        let mut inv = kit();
        let removed = inv.remove("Sword").unwrap();
        assert_eq!(removed.magnitude(), 3);
        assert_eq!(inv.len(), 2);
        assert_eq!(inv.find("Sword").map(Item::magnitude), Some(7));
    }

    #[test]
    fn test_remove_missing_leaves_inventory_unchanged() {
        let mut inv = kit();
        let before = inv.clone();
        assert!(matches!(inv.remove("Axe"), Err(GameError::ItemNotFound(name)) if name == "Axe"));
        assert_eq!(inv, before);
    }

    #[test]
    fn test_remove_from_empty() {
        let mut inv = Inventory::new();
        assert!(matches!(inv.remove("Sword"), Err(GameError::ItemNotFound(_))));
        assert!(inv.is_empty());
    }
}
