//! Shop evaluation
//!
//! Both evaluators are pure ranking passes over the catalog. The caller
//! owns the gold ledger and debits it the moment it commits to a buy,
//! so the second hero decided in the same turn sees the reduced total.

use crate::arena::item::{Item, ItemCatalog};
use crate::tactics::constants::{
    ITEM_SLOT_CAP, MIN_ITEM_DAMAGE, MIN_ITEM_MAX_HEALTH, MIN_ITEM_SPEED, MIN_POTION_HEALTH,
};

/// Stat value per gold spent. Damage weighs heaviest, speed next, raw
/// health last.
fn item_score(item: &Item) -> f64 {
    (item.damage * 10 + item.max_health + item.speed * 4) as f64 / item.cost as f64
}

/// Best permanent item strictly affordable under `gold`, or none.
/// Entry-tier gear stops qualifying once the hero holds two items.
pub fn eval_purchase(catalog: &ItemCatalog, gold: i32, items_owned: i32) -> Option<&Item> {
    let mut best: Option<(&Item, f64)> = None;
    for item in catalog.iter() {
        if item.is_potion || item.cost >= gold {
            continue;
        }
        if item.damage < MIN_ITEM_DAMAGE
            && item.speed < MIN_ITEM_SPEED
            && item.max_health < MIN_ITEM_MAX_HEALTH
        {
            continue;
        }
        if items_owned >= 2 && item.is_entry_tier() {
            continue;
        }
        let score = item_score(item);
        if best.map_or(true, |(_, s)| score > s) {
            best = Some((item, score));
        }
    }
    best.map(|(item, _)| item)
}

/// Strongest affordable restorative for a hurt hero. While the hero
/// still has free item slots any restorative item qualifies, not just
/// potions.
pub fn eval_potion(catalog: &ItemCatalog, gold: i32, items_owned: i32) -> Option<&Item> {
    let mut best: Option<&Item> = None;
    for item in catalog.iter() {
        if !item.is_potion && items_owned >= ITEM_SLOT_CAP {
            continue;
        }
        if item.cost >= gold || item.health <= MIN_POTION_HEALTH {
            continue;
        }
        if best.map_or(true, |b| item.health > b.health) {
            best = Some(item);
        }
    }
    best
}
