//! Repositioning: where a hero should stand when not committed to a kill
//!
//! The search prefers striking from safety, then hiding in a ring
//! around a friendly lane unit, then stepping just out of the nearest
//! threat's reach. Every candidate point is judged with the same safety
//! predicate the callers use.

use tracing::debug;

use crate::arena::action::Action;
use crate::arena::entity::Entity;
use crate::arena::snapshot::Snapshot;
use crate::core::types::{HeroClass, Point};
use crate::tactics::abilities::offensive_ability;
use crate::tactics::constants::{
    BLINK_COST, BLINK_RANGE, BLINK_SLOT, SQRT_2, STATIONARY_EPSILON, STEP_AWAY_MARGIN,
    TOWER_DANGER_DIST2,
};
use crate::tactics::doctrine::{Doctrine, TargetPolicy};
use crate::tactics::engagement::{attack_option, AttackOption};
use crate::tactics::movement::step_away;
use crate::tactics::threat::is_safe;

/// Up to eight candidate points on a ring around `center`: the four
/// axis offsets at `delta` and the four diagonals at `delta/√2`, in a
/// fixed order (N, S, NW, NE, W, E, SW, SE) that callers rely on as
/// the tie-break. Off-map candidates are dropped.
pub fn ring_points(center: Point, delta: i32) -> Vec<Point> {
    let x = center.x as f64;
    let y = center.y as f64;
    let axis = delta as f64;
    let diag = delta as f64 / SQRT_2;

    let candidates = [
        (x, y - axis),
        (x, y + axis),
        (x - diag, y - diag),
        (x + diag, y - diag),
        (x - axis, y),
        (x + axis, y),
        (x - diag, y + diag),
        (x + diag, y + diag),
    ];

    candidates
        .iter()
        .map(|&(cx, cy)| Point::new(cx as i32, cy as i32))
        .filter(Point::in_bounds)
        .collect()
}

/// The hero's turn when nothing has claimed it yet: strike if safe,
/// otherwise reposition behind friendly lines.
pub fn find_safe_position(hero: &Entity, snapshot: &Snapshot, doctrine: &Doctrine) -> Action {
    if is_safe(hero.pos, snapshot) && hero.health > doctrine.targeting.survivability_floor {
        if let Some(action) = offensive_ability(hero, snapshot) {
            return action;
        }
        if let Some(option) = select_attack(hero, snapshot, doctrine) {
            debug!(hero = hero.id.0, target = option.target.0, "safe strike");
            return option.action;
        }
    }

    let wounded = hero.health_ratio() < doctrine.retreat.critical_health_ratio;
    match retreat_destination(snapshot, doctrine, wounded) {
        Some(destination) => {
            debug!(
                hero = hero.id.0,
                x = destination.x,
                y = destination.y,
                "retreating behind a lane unit"
            );
            upgrade_reposition(hero, snapshot, destination)
        }
        None => {
            let Some(threat) = nearest_threat(snapshot, hero) else {
                return Action::Wait;
            };
            let margin =
                threat.attack_range as f64 + threat.speed as f64 + STEP_AWAY_MARGIN;
            let destination = step_away(hero.pos, threat.pos, margin);
            debug!(
                hero = hero.id.0,
                threat = threat.id.0,
                x = destination.x,
                y = destination.y,
                "stepping out of enemy reach"
            );
            if wounded
                && hero.hero_class == Some(HeroClass::Ironman)
                && hero.can_cast(BLINK_SLOT, BLINK_COST)
                && hero.pos.dist(destination) < BLINK_RANGE
            {
                return Action::Blink(destination);
            }
            upgrade_reposition(hero, snapshot, destination)
        }
    }
}

/// Pick a strike among this turn's feasible targets, skipping any whose
/// landing point would dive the enemy tower without being safe.
fn select_attack(
    hero: &Entity,
    snapshot: &Snapshot,
    doctrine: &Doctrine,
) -> Option<AttackOption> {
    let mut best: Option<AttackOption> = None;
    for enemy in snapshot.his_units() {
        let Some(option) = attack_option(hero, enemy) else {
            continue;
        };
        if !admissible_stand(option.stand, snapshot) {
            continue;
        }
        match doctrine.targeting.policy {
            TargetPolicy::FirstAdmissible => return Some(option),
            TargetPolicy::LowestHealth => {
                if best
                    .as_ref()
                    .map_or(true, |b| b.target_health > option.target_health)
                {
                    best = Some(option);
                }
            }
        }
    }
    best
}

/// A landing point is admissible unless it sits inside the enemy
/// tower's reach while also being unsafe. Without an enemy tower the
/// reach test passes by definition.
fn admissible_stand(stand: Point, snapshot: &Snapshot) -> bool {
    let diving = snapshot
        .his_tower()
        .map_or(false, |tower| stand.dist2(tower.pos) <= TOWER_DANGER_DIST2);
    !diving || is_safe(stand, snapshot)
}

/// First safe ring point around the best covering unit. Covers are
/// tried nearest-to-tower first; a badly wounded hero flips that order
/// and searches a wider ring.
fn retreat_destination(snapshot: &Snapshot, doctrine: &Doctrine, wounded: bool) -> Option<Point> {
    let ring = if wounded {
        doctrine.retreat.cover_ring_wounded
    } else {
        doctrine.retreat.cover_ring
    };

    let mut covers: Vec<&Entity> = snapshot.my_cover_units().collect();
    if let Some(tower) = snapshot.my_tower() {
        if wounded {
            covers.sort_by_key(|u| std::cmp::Reverse(u.pos.dist2(tower.pos)));
        } else {
            covers.sort_by_key(|u| u.pos.dist2(tower.pos));
        }
    }

    covers.iter().find_map(|cover| {
        ring_points(cover.pos, ring)
            .into_iter()
            .find(|p| is_safe(*p, snapshot))
    })
}

/// A reposition is still a combat turn: standing in place frees it for
/// a cast, and any enemy inside attack range from the destination turns
/// the move into a strike on the weakest of them.
fn upgrade_reposition(hero: &Entity, snapshot: &Snapshot, destination: Point) -> Action {
    if hero.pos.dist(destination) < STATIONARY_EPSILON {
        if let Some(action) = offensive_ability(hero, snapshot) {
            return action;
        }
    }
    let mut target: Option<&Entity> = None;
    for enemy in snapshot.his_units() {
        if destination.dist(enemy.pos) < hero.attack_range as f64
            && target.map_or(true, |t| t.health > enemy.health)
        {
            target = Some(enemy);
        }
    }
    match target {
        Some(enemy) => Action::MoveAttack(destination, enemy.id),
        None => Action::Move(destination),
    }
}

/// The enemy whose reach closes on the hero soonest: smallest gap
/// between current distance and reach.
fn nearest_threat<'a>(snapshot: &'a Snapshot, hero: &Entity) -> Option<&'a Entity> {
    let mut best: Option<(&Entity, f64)> = None;
    for enemy in snapshot.his_units() {
        let gap = hero.dist(enemy) - enemy.attack_range as f64 - enemy.speed as f64;
        if best.map_or(true, |(_, g)| g > gap) {
            best = Some((enemy, gap));
        }
    }
    best.map(|(enemy, _)| enemy)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::{Team, UnitId, UnitKind};

    fn create_test_entity(id: i32, team: Team, kind: UnitKind, x: i32, y: i32) -> Entity {
        Entity {
            id: UnitId(id),
            team,
            kind,
            pos: Point::new(x, y),
            attack_range: 90,
            health: 400,
            max_health: 400,
            shield: 0,
            attack_damage: 40,
            speed: 150,
            stun_duration: 0,
            gold_value: 30,
            cooldowns: [0, 0, 0],
            mana: 0,
            max_mana: 0,
            mana_regen: 0,
            hero_class: None,
            visible: true,
            items_owned: 0,
        }
    }

    fn create_test_hero(id: i32, x: i32, y: i32) -> Entity {
        let mut hero = create_test_entity(id, Team::Mine, UnitKind::Hero, x, y);
        hero.attack_range = 150;
        hero.speed = 400;
        hero.health = 1000;
        hero.max_health = 1000;
        hero.mana = 100;
        hero.max_mana = 200;
        hero
    }

    #[test]
    fn test_ring_full_order_mid_map() {
        let points = ring_points(Point::new(960, 375), 20);
        assert_eq!(
            points,
            vec![
                Point::new(960, 355),
                Point::new(960, 395),
                Point::new(945, 360),
                Point::new(974, 360),
                Point::new(940, 375),
                Point::new(980, 375),
                Point::new(945, 389),
                Point::new(974, 389),
            ]
        );
    }

    #[test]
    fn test_ring_filters_map_corner() {
        // near the origin only the south, east and southeast survive
        let points = ring_points(Point::new(5, 5), 20);
        assert_eq!(
            points,
            vec![Point::new(5, 25), Point::new(25, 5), Point::new(19, 19)]
        );
    }

    #[test]
    fn test_ring_filters_south_edge() {
        let points = ring_points(Point::new(960, 740), 20);
        assert!(points.iter().all(|p| p.in_bounds()));
        assert!(!points.contains(&Point::new(960, 760)));
        assert_eq!(points.len(), 5);
    }

    #[test]
    fn test_safe_hero_strikes_weakest_reachable() {
        let hero = create_test_hero(1, 500, 300);
        let mut weak = create_test_entity(11, Team::Theirs, UnitKind::Unit, 620, 300);
        weak.health = 50;
        let mut sturdy = create_test_entity(12, Team::Theirs, UnitKind::Unit, 600, 300);
        sturdy.health = 100;
        // friendly body beside both enemies keeps the hero safe
        let cover = create_test_entity(3, Team::Mine, UnitKind::Unit, 610, 300);
        let snap = Snapshot::new(0, 0, 0, vec![hero.clone(), cover, sturdy, weak]);

        let action = find_safe_position(&hero, &snap, &Doctrine::default());
        assert_eq!(action, Action::Attack(UnitId(11)));
    }

    #[test]
    fn test_first_admissible_policy_takes_snapshot_order() {
        let hero = create_test_hero(1, 500, 300);
        let mut weak = create_test_entity(11, Team::Theirs, UnitKind::Unit, 620, 300);
        weak.health = 50;
        let mut sturdy = create_test_entity(12, Team::Theirs, UnitKind::Unit, 600, 300);
        sturdy.health = 100;
        let cover = create_test_entity(3, Team::Mine, UnitKind::Unit, 610, 300);
        let snap = Snapshot::new(0, 0, 0, vec![hero.clone(), cover, sturdy, weak]);

        let mut doctrine = Doctrine::default();
        doctrine.targeting.policy = TargetPolicy::FirstAdmissible;
        let action = find_safe_position(&hero, &snap, &doctrine);
        assert_eq!(action, Action::Attack(UnitId(12)));
    }

    #[test]
    fn test_unsafe_landing_near_tower_is_rejected() {
        // hero stands exactly at the edge of the tower's reach, so it is
        // safe where it is, but every strike point lands in tower shadow
        let hero = create_test_hero(1, 500, 300);
        let mut bait = create_test_entity(21, Team::Theirs, UnitKind::Unit, 700, 300);
        bait.attack_range = 30;
        bait.speed = 20;
        let mut tower = create_test_entity(22, Team::Theirs, UnitKind::Tower, 900, 300);
        tower.attack_range = 400;
        tower.speed = 0;
        let snap = Snapshot::new(0, 0, 0, vec![hero.clone(), bait, tower]);

        let action = find_safe_position(&hero, &snap, &Doctrine::default());
        // no strike: the engine backs out of the tower's reach instead
        assert_eq!(action, Action::Move(Point::new(495, 300)));
    }

    #[test]
    fn test_retreat_hides_behind_cover_nearest_own_tower() {
        let hero = create_test_hero(1, 500, 300);
        let enemy_hero = create_test_entity(31, Team::Theirs, UnitKind::Hero, 600, 300);
        let my_tower = create_test_entity(2, Team::Mine, UnitKind::Tower, 100, 300);
        let far_cover = create_test_entity(3, Team::Mine, UnitKind::Unit, 300, 300);
        let near_cover = create_test_entity(4, Team::Mine, UnitKind::Unit, 200, 300);
        let snap = Snapshot::new(
            0,
            0,
            0,
            vec![hero.clone(), my_tower, far_cover, near_cover, enemy_hero],
        );

        let action = find_safe_position(&hero, &snap, &Doctrine::default());
        // ring around the cover closest to the tower, north point first
        assert_eq!(action, Action::Move(Point::new(200, 280)));
    }

    #[test]
    fn test_wounded_retreat_flips_cover_order_and_widens_ring() {
        let mut hero = create_test_hero(1, 500, 300);
        hero.health = 50;
        let enemy_hero = create_test_entity(31, Team::Theirs, UnitKind::Hero, 600, 300);
        let my_tower = create_test_entity(2, Team::Mine, UnitKind::Tower, 100, 300);
        let far_cover = create_test_entity(3, Team::Mine, UnitKind::Unit, 300, 300);
        let near_cover = create_test_entity(4, Team::Mine, UnitKind::Unit, 200, 300);
        let snap = Snapshot::new(
            0,
            0,
            0,
            vec![hero.clone(), my_tower, far_cover, near_cover, enemy_hero],
        );

        let action = find_safe_position(&hero, &snap, &Doctrine::default());
        // cover furthest from the tower, ring widened to 100
        assert_eq!(action, Action::Move(Point::new(300, 200)));
    }

    #[test]
    fn test_empty_field_waits() {
        let hero = create_test_hero(1, 500, 300);
        let snap = Snapshot::new(0, 0, 0, vec![hero.clone()]);
        assert_eq!(
            find_safe_position(&hero, &snap, &Doctrine::default()),
            Action::Wait
        );
    }

    #[test]
    fn test_stationary_fallback_frees_the_turn_for_a_cast() {
        // step-away lands exactly on the hero, who is hurt enough to self heal
        let mut hero = create_test_hero(1, 500, 300);
        hero.hero_class = Some(HeroClass::DoctorStrange);
        hero.health = 150;
        let mut enemy = create_test_entity(41, Team::Theirs, UnitKind::Unit, 800, 300);
        enemy.attack_range = 200;
        enemy.speed = 95;
        let snap = Snapshot::new(0, 0, 0, vec![hero.clone(), enemy]);

        let action = find_safe_position(&hero, &snap, &Doctrine::default());
        assert_eq!(action, Action::AoeHeal(Point::new(500, 300)));
    }

    #[test]
    fn test_retreat_upgrades_to_strike_on_covered_enemy() {
        let hero = create_test_hero(1, 500, 300);
        let chaser = create_test_entity(51, Team::Theirs, UnitKind::Hero, 700, 300);
        let my_tower = create_test_entity(2, Team::Mine, UnitKind::Tower, 100, 300);
        let mut prey = create_test_entity(52, Team::Theirs, UnitKind::Unit, 350, 300);
        prey.health = 80;
        let body = create_test_entity(3, Team::Mine, UnitKind::Unit, 360, 300);
        let snap = Snapshot::new(
            0,
            0,
            0,
            vec![hero.clone(), my_tower, body, chaser, prey],
        );

        let action = find_safe_position(&hero, &snap, &Doctrine::default());
        assert_eq!(
            action,
            Action::MoveAttack(Point::new(360, 280), UnitId(52))
        );
    }

    #[test]
    fn test_survivability_floor_blocks_the_forward_strike() {
        let mut hero = create_test_hero(1, 500, 300);
        hero.health = 150; // under the default floor of 200
        let mut bait = create_test_entity(21, Team::Theirs, UnitKind::Unit, 700, 300);
        bait.attack_range = 30;
        bait.speed = 20;
        let snap = Snapshot::new(0, 0, 0, vec![hero.clone(), bait]);

        let action = find_safe_position(&hero, &snap, &Doctrine::default());
        // at full health the hero would close to (551, 300); under the
        // floor it backs off to the reach margin and pokes from there
        assert_eq!(
            action,
            Action::MoveAttack(Point::new(645, 300), UnitId(21))
        );
    }
}
