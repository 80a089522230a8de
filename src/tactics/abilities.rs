//! Per-class ability selection
//!
//! Every cast is gated twice: the caster's mana and cooldown slot, then
//! a class-specific geometric precondition. A returned action replaces
//! the rest of that hero's turn.

use tracing::debug;

use crate::arena::action::Action;
use crate::arena::entity::Entity;
use crate::arena::snapshot::Snapshot;
use crate::core::types::{HeroClass, Point};
use crate::tactics::constants::{
    AOEHEAL_COST, AOEHEAL_SLOT, BURNING_COST, BURNING_RANGE, BURNING_SLOT, COUNTER_COST,
    COUNTER_SLOT, FIREBALL_COST, FIREBALL_SLOT, HEAL_CAST_RANGE, HEAL_HEALTH_FLOOR,
    HEAL_SEARCH_RANGE, NUKE_PAIR_RADIUS, NUKE_RANGE, TOWER_DANGER_DIST2,
};
use crate::tactics::movement::step_toward;

/// Offensive or restorative cast for a hero whose turn is otherwise
/// free. `None` when the class has no such ability or no precondition
/// holds.
pub fn offensive_ability(hero: &Entity, snapshot: &Snapshot) -> Option<Action> {
    match hero.hero_class {
        Some(HeroClass::Ironman) => ironman_nuke(hero, snapshot),
        Some(HeroClass::DoctorStrange) => strange_heal(hero, snapshot),
        _ => None,
    }
}

/// Stance casts with no positional cost, checked before any movement is
/// considered.
pub fn instant_ability(hero: &Entity, snapshot: &Snapshot) -> Option<Action> {
    if hero.hero_class != Some(HeroClass::Deadpool) {
        return None;
    }
    if !hero.can_cast(COUNTER_SLOT, COUNTER_COST) {
        return None;
    }
    let in_brawl_range = snapshot
        .his_tower()
        .map_or(false, |tower| hero.pos.dist2(tower.pos) <= TOWER_DANGER_DIST2);
    if in_brawl_range {
        debug!(hero = hero.id.0, "counter stance");
        return Some(Action::Counter);
    }
    None
}

fn ironman_nuke(hero: &Entity, snapshot: &Snapshot) -> Option<Action> {
    if hero.can_cast(FIREBALL_SLOT, FIREBALL_COST) {
        if let Some(target) = fireball_target(hero, snapshot) {
            debug!(hero = hero.id.0, x = target.x, y = target.y, "fireball");
            return Some(Action::Fireball(target));
        }
    }
    if hero.can_cast(BURNING_SLOT, BURNING_COST) {
        if let Some(target) = burning_target(hero, snapshot) {
            debug!(hero = hero.id.0, x = target.x, y = target.y, "burning ground");
            return Some(Action::Burning(target));
        }
    }
    None
}

/// The fireball scales with stored mana and distance travelled, so the
/// furthest reachable enemy hero takes the most damage. A tight pair is
/// worth more than any single target.
fn fireball_target(hero: &Entity, snapshot: &Snapshot) -> Option<Point> {
    let candidates: Vec<&Entity> = snapshot
        .his_heroes()
        .filter(|enemy| enemy.visible && hero.dist(enemy) < NUKE_RANGE)
        .collect();

    if let [first, second] = candidates.as_slice() {
        if first.dist(second) < NUKE_PAIR_RADIUS {
            return Some(Point::new(
                (first.pos.x + second.pos.x) / 2,
                (first.pos.y + second.pos.y) / 2,
            ));
        }
    }

    let mut best: Option<(&Entity, f64)> = None;
    for &enemy in &candidates {
        let score = 0.2 * hero.mana as f64 + 55.0 * hero.dist(enemy) / 1000.0;
        if best.map_or(true, |(_, s)| score > s) {
            best = Some((enemy, score));
        }
    }
    best.map(|(enemy, _)| enemy.pos)
}

/// Cheaper fallback nuke, close range only.
fn burning_target(hero: &Entity, snapshot: &Snapshot) -> Option<Point> {
    let mut best: Option<(&Entity, f64)> = None;
    for enemy in snapshot.his_heroes() {
        if !enemy.visible {
            continue;
        }
        let dist = hero.dist(enemy);
        if dist < BURNING_RANGE && best.map_or(true, |(_, d)| d > dist) {
            best = Some((enemy, dist));
        }
    }
    best.map(|(enemy, _)| enemy.pos)
}

/// Heal the hurt ally if one is in range, casting at the ally itself
/// when close enough and at the cast-range limit along the line toward
/// it otherwise. With no ally to patch up, a hurt caster heals itself.
fn strange_heal(hero: &Entity, snapshot: &Snapshot) -> Option<Action> {
    if !hero.can_cast(AOEHEAL_SLOT, AOEHEAL_COST) {
        return None;
    }
    let ally = snapshot.my_heroes().find(|ally| {
        ally.id != hero.id
            && ally.health < HEAL_HEALTH_FLOOR
            && hero.dist(ally) < HEAL_SEARCH_RANGE
    });
    match ally {
        Some(ally) => {
            let target = if hero.dist(ally) < HEAL_CAST_RANGE {
                ally.pos
            } else {
                step_toward(hero.pos, ally.pos, HEAL_CAST_RANGE)
            };
            debug!(hero = hero.id.0, ally = ally.id.0, "area heal");
            Some(Action::AoeHeal(target))
        }
        None if hero.health < HEAL_HEALTH_FLOOR => {
            debug!(hero = hero.id.0, "self heal");
            Some(Action::AoeHeal(hero.pos))
        }
        None => None,
    }
}
