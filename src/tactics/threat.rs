//! Point-in-space safety
//!
//! A point is unsafe when some enemy can close the distance and hit it
//! within one turn. Friendly bodies draw aggro: a non-hero friendly
//! strictly closer to the enemy than the point neutralizes that enemy,
//! unless the enemy is a hero, which retargets at will.

use crate::arena::snapshot::Snapshot;
use crate::core::types::Point;

/// True when no enemy threatens the point this turn. Evaluated
/// pointwise on demand; nothing is cached between calls.
pub fn is_safe(point: Point, snapshot: &Snapshot) -> bool {
    for enemy in snapshot.his_units() {
        let dist2 = point.dist2(enemy.pos);
        let reach = enemy.speed as f64 + enemy.attack_range as f64;
        if (dist2 as f64).sqrt() - reach >= 0.0 {
            continue;
        }
        if enemy.is_hero() {
            return false;
        }
        let covered = snapshot
            .my_units()
            .filter(|m| !m.is_hero())
            .any(|m| m.pos.dist2(enemy.pos) < dist2);
        if !covered {
            return false;
        }
    }
    true
}
