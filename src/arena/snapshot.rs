//! Per-turn world view and the same-turn gold ledger

use ahash::AHashMap;

use crate::arena::entity::Entity;
use crate::core::types::{Team, UnitId, UnitKind};

/// Immutable bundle of everything known this turn.
///
/// Entities are held in id maps with side-ordered id lists so that
/// every iteration runs in wire order. Ranking code relies on that
/// order as its tie-break.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    pub gold: i32,
    pub enemy_gold: i32,
    pub round_type: i32,
    mine: AHashMap<UnitId, Entity>,
    theirs: AHashMap<UnitId, Entity>,
    my_order: Vec<UnitId>,
    his_order: Vec<UnitId>,
    my_hero_ids: Vec<UnitId>,
    his_hero_ids: Vec<UnitId>,
    my_tower_id: Option<UnitId>,
    his_tower_id: Option<UnitId>,
}

impl Snapshot {
    pub fn new(gold: i32, enemy_gold: i32, round_type: i32, entities: Vec<Entity>) -> Self {
        let mut snapshot = Snapshot {
            gold,
            enemy_gold,
            round_type,
            ..Default::default()
        };
        for entity in entities {
            snapshot.insert(entity);
        }
        snapshot
    }

    fn insert(&mut self, entity: Entity) {
        let (map, order, heroes, tower) = match entity.team {
            Team::Mine => (
                &mut self.mine,
                &mut self.my_order,
                &mut self.my_hero_ids,
                &mut self.my_tower_id,
            ),
            Team::Theirs => (
                &mut self.theirs,
                &mut self.his_order,
                &mut self.his_hero_ids,
                &mut self.his_tower_id,
            ),
        };
        match entity.kind {
            UnitKind::Hero => heroes.push(entity.id),
            UnitKind::Tower => *tower = Some(entity.id),
            _ => {}
        }
        order.push(entity.id);
        map.insert(entity.id, entity);
    }

    pub fn get(&self, id: UnitId) -> Option<&Entity> {
        self.mine.get(&id).or_else(|| self.theirs.get(&id))
    }

    /// My entities in wire order
    pub fn my_units(&self) -> impl Iterator<Item = &Entity> {
        self.my_order.iter().filter_map(|id| self.mine.get(id))
    }

    /// Enemy entities in wire order
    pub fn his_units(&self) -> impl Iterator<Item = &Entity> {
        self.his_order.iter().filter_map(|id| self.theirs.get(id))
    }

    /// My controlled heroes in wire order
    pub fn my_heroes(&self) -> impl Iterator<Item = &Entity> {
        self.my_hero_ids.iter().filter_map(|id| self.mine.get(id))
    }

    /// Enemy heroes in wire order
    pub fn his_heroes(&self) -> impl Iterator<Item = &Entity> {
        self.his_hero_ids.iter().filter_map(|id| self.theirs.get(id))
    }

    /// My plain lane units, the bodies a hero can hide behind
    pub fn my_cover_units(&self) -> impl Iterator<Item = &Entity> {
        self.my_units().filter(|e| e.kind == UnitKind::Unit)
    }

    /// Towers can be absent once destroyed; callers fall back explicitly
    pub fn my_tower(&self) -> Option<&Entity> {
        self.my_tower_id.and_then(|id| self.mine.get(&id))
    }

    pub fn his_tower(&self) -> Option<&Entity> {
        self.his_tower_id.and_then(|id| self.theirs.get(&id))
    }

    pub fn my_hero_count(&self) -> usize {
        self.my_hero_ids.len()
    }
}

/// Spendable gold for the current turn.
///
/// Borrowed mutably down the per-hero decision chain so the second
/// hero observes the first hero's committed purchases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GoldLedger {
    remaining: i32,
}

impl GoldLedger {
    pub fn new(gold: i32) -> Self {
        Self { remaining: gold }
    }

    pub fn remaining(&self) -> i32 {
        self.remaining
    }

    /// Commit a purchase. The shop requires cost strictly below the
    /// balance; an unaffordable cost leaves the balance untouched.
    pub fn try_spend(&mut self, cost: i32) -> bool {
        if cost < self.remaining {
            self.remaining -= cost;
            true
        } else {
            false
        }
    }
}
