//! Fixed game facts, all in one place
//!
//! These are rules of the arena, not tuning knobs. Behavioral knobs
//! live on the doctrine instead.

pub use crate::core::types::{MAP_HEIGHT, MAP_WIDTH};

// Geometry
pub const SQRT_2: f64 = std::f64::consts::SQRT_2;

/// Squared distance under which a tower fires back; post-move points
/// inside this radius of the enemy tower are dive territory
pub const TOWER_DANGER_DIST2: i64 = 160_000; // 400 units

/// A retreat destination closer than this to the hero counts as
/// standing still, which frees the turn for a cast
pub const STATIONARY_EPSILON: f64 = 2.0;

/// Extra margin past an enemy's reach when stepping away from it
pub const STEP_AWAY_MARGIN: f64 = 5.0;

/// Attack wind-up only matters for long-range attackers
pub const RANGED_ATTACK_THRESHOLD: i32 = 150;

// Ability slots and mana costs per hero class
pub const BLINK_SLOT: usize = 0;
pub const BLINK_COST: i32 = 16;
pub const BLINK_RANGE: f64 = 200.0;

pub const FIREBALL_SLOT: usize = 1;
pub const FIREBALL_COST: i32 = 60;

pub const BURNING_SLOT: usize = 2;
pub const BURNING_COST: i32 = 50;
pub const BURNING_RANGE: f64 = 250.0;

pub const AOEHEAL_SLOT: usize = 0;
pub const AOEHEAL_COST: i32 = 50;

pub const COUNTER_SLOT: usize = 0;
pub const COUNTER_COST: i32 = 40;

// Targeted-nuke geometry
pub const NUKE_RANGE: f64 = 500.0;
pub const NUKE_PAIR_RADIUS: f64 = 50.0;

// Area-heal geometry
pub const HEAL_HEALTH_FLOOR: i32 = 300;
pub const HEAL_SEARCH_RANGE: f64 = 350.0;
pub const HEAL_CAST_RANGE: f64 = 250.0;

// Shop impact bar: an item must clear at least one of these to be
// worth a purchase slot
pub const MIN_ITEM_DAMAGE: i32 = 5;
pub const MIN_ITEM_SPEED: i32 = 20;
pub const MIN_ITEM_MAX_HEALTH: i32 = 80;

/// Potions restoring this little are never worth the turn
pub const MIN_POTION_HEALTH: i32 = 25;

/// A hero carries at most this many permanent items
pub const ITEM_SLOT_CAP: i32 = 3;

/// Squared distance under which a hero counts as parked at its tower
pub const TOWER_PARK_DIST2: i64 = 50;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tower_danger_radius() {
        // 400 units squared
        assert_eq!(TOWER_DANGER_DIST2, 400 * 400);
    }

    #[test]
    fn test_nuke_pair_tighter_than_range() {
        assert!(NUKE_PAIR_RADIUS < NUKE_RANGE);
    }

    #[test]
    fn test_heal_ranges_ordering() {
        assert!(HEAL_CAST_RANGE < HEAL_SEARCH_RANGE);
    }

    #[test]
    fn test_ability_costs_positive() {
        assert!(BLINK_COST > 0);
        assert!(FIREBALL_COST > 0);
        assert!(BURNING_COST > 0);
        assert!(AOEHEAL_COST > 0);
        assert!(COUNTER_COST > 0);
    }

    #[test]
    fn test_map_bounds() {
        assert_eq!(MAP_WIDTH, 1920);
        assert_eq!(MAP_HEIGHT, 750);
    }
}
