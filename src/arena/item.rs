//! Shop catalog, loaded once from the setup phase

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

/// One purchasable item. Name keywords encode tier (BRONZE through
/// LEGENDARY) and role (BLADE for damage, BOOTS for speed).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    pub cost: i32,
    pub damage: i32,
    pub health: i32,
    pub max_health: i32,
    pub mana: i32,
    pub max_mana: i32,
    pub speed: i32,
    pub mana_regen: i32,
    pub is_potion: bool,
}

impl Item {
    /// Entry-tier gear, skipped once a hero carries two real items
    pub fn is_entry_tier(&self) -> bool {
        self.name.contains("BRONZE")
    }
}

/// Process-lifetime item catalog, read-only after load.
///
/// Iteration preserves wire order, which doubles as the tie-break for
/// equal ranking scores.
#[derive(Debug, Clone, Default)]
pub struct ItemCatalog {
    items: Vec<Item>,
    by_name: AHashMap<String, usize>,
}

impl ItemCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, item: Item) {
        self.by_name.insert(item.name.clone(), self.items.len());
        self.items.push(item);
    }

    pub fn get(&self, name: &str) -> Option<&Item> {
        self.by_name.get(name).map(|&idx| &self.items[idx])
    }

    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
