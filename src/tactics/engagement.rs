//! Single-turn attack feasibility
//!
//! The feasibility window: can an attacker close the distance and still
//! land its hit inside the current turn's movement and action budget.

use tracing::trace;

use crate::arena::action::Action;
use crate::arena::entity::Entity;
use crate::core::types::{Point, UnitId};
use crate::tactics::constants::RANGED_ATTACK_THRESHOLD;
use crate::tactics::movement::post_move_point;

/// A strike some hero can land this turn, with the data the selectors
/// rank on and the point the hero ends the turn standing on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttackOption {
    pub target: UnitId,
    pub target_health: i32,
    pub stand: Point,
    pub action: Action,
}

/// Whether `me` can land an attack on `him` this turn.
///
/// Inside attack range the hit is immediate. Inside range plus speed,
/// the move and the wind-up (long-range attackers pay one proportional
/// to distance) must fit the turn together; the hero then ends on the
/// interpolated point just inside range.
pub fn attack_this_turn(me: &Entity, him: &Entity) -> Action {
    let dist = me.dist(him);
    let range = me.attack_range as f64;
    if dist < range {
        return Action::Attack(him.id);
    }
    if dist > 0.0 && dist < me.speed as f64 + range {
        let attack_time = if me.attack_range > RANGED_ATTACK_THRESHOLD {
            0.1 * dist / range
        } else {
            0.0
        };
        let move_time = (dist - range + 1.0) / me.speed as f64;
        if move_time + attack_time < 1.0 {
            let pct = (1.0 + dist - range) / dist;
            let stand = post_move_point(me.pos, him.pos, pct);
            trace!(
                dist,
                attack_range = me.attack_range,
                move_time,
                attack_time,
                pct,
                "strike window open"
            );
            return Action::MoveAttack(stand, him.id);
        }
    }
    Action::Wait
}

/// Committed pursuit of one target: same feasibility test, but out of
/// window the hero closes distance instead of standing still.
pub fn chase(me: &Entity, him: &Entity) -> Action {
    match attack_this_turn(me, him) {
        Action::Wait => Action::Move(him.pos),
        action => action,
    }
}

/// Evaluate a strike on `him` as a ranked candidate; None outside the
/// feasibility window.
pub fn attack_option(me: &Entity, him: &Entity) -> Option<AttackOption> {
    let action = attack_this_turn(me, him);
    if action.is_wait() {
        return None;
    }
    Some(AttackOption {
        target: him.id,
        target_health: him.health,
        stand: action.destination().unwrap_or(me.pos),
        action,
    })
}
