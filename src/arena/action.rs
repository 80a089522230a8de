//! Actions a hero can take, one per hero per turn

use serde::{Deserialize, Serialize};

use crate::core::types::{Point, UnitId, UnitKind};

/// A hero's decision for the turn. Wire formatting is a total match in
/// `protocol::output`; nothing here touches strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    Wait,
    Move(Point),
    Attack(UnitId),
    MoveAttack(Point, UnitId),
    Fireball(Point),
    Burning(Point),
    Blink(Point),
    AoeHeal(Point),
    Counter,
    AttackNearest(UnitKind),
}

impl Action {
    pub fn is_wait(&self) -> bool {
        matches!(self, Action::Wait)
    }

    /// Where the hero stands after the action, for the variants that move it
    pub fn destination(&self) -> Option<Point> {
        match self {
            Action::Move(p) | Action::MoveAttack(p, _) | Action::Blink(p) => Some(*p),
            _ => None,
        }
    }
}

/// One output line for one hero: a shop purchase takes the whole turn
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnCommand {
    Buy(String),
    Act(Action),
}
