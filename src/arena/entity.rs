//! Arena entities: units, heroes, towers and neutral camps

use serde::{Deserialize, Serialize};

use crate::core::types::{HeroClass, Point, Team, UnitId, UnitKind};

/// One entity from the current turn's snapshot.
///
/// Position is composed, not inherited: the geometry routines read
/// `pos`, everything else is combat bookkeeping from the wire. Shield,
/// stun and mana-regen arrive on every record and are carried even
/// though the current tactics never read them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entity {
    pub id: UnitId,
    pub team: Team,
    pub kind: UnitKind,
    pub pos: Point,
    pub attack_range: i32,
    pub health: i32,
    pub max_health: i32,
    pub shield: i32,
    pub attack_damage: i32,
    pub speed: i32,
    pub stun_duration: i32,
    pub gold_value: i32,
    pub cooldowns: [i32; 3],
    pub mana: i32,
    pub max_mana: i32,
    pub mana_regen: i32,
    pub hero_class: Option<HeroClass>,
    pub visible: bool,
    pub items_owned: i32,
}

impl Entity {
    pub fn is_hero(&self) -> bool {
        self.kind == UnitKind::Hero
    }

    /// Health as a fraction of max; zero when max health is zero
    pub fn health_ratio(&self) -> f64 {
        if self.max_health <= 0 {
            return 0.0;
        }
        self.health as f64 / self.max_health as f64
    }

    /// Ability gate: mana strictly above the cost and the slot off cooldown
    pub fn can_cast(&self, slot: usize, cost: i32) -> bool {
        self.mana > cost && self.cooldowns[slot] == 0
    }

    pub fn dist(&self, other: &Entity) -> f64 {
        self.pos.dist(other.pos)
    }

    pub fn dist2(&self, other: &Entity) -> i64 {
        self.pos.dist2(other.pos)
    }
}
