//! Turn orchestration: one command per controlled hero
//!
//! The commander owns the doctrine and walks a fixed priority ladder
//! for every hero: instant cast, tower-dive guard, restorative buy,
//! coordinated attack, economy backfill, then repositioning. A shared
//! gold ledger threads through the turn so the second hero never
//! spends gold the first already committed.

use tracing::debug;

use crate::arena::action::{Action, TurnCommand};
use crate::arena::entity::Entity;
use crate::arena::item::ItemCatalog;
use crate::arena::snapshot::{GoldLedger, Snapshot};
use crate::core::types::{HeroClass, Point, Turn, UnitId, UnitKind};
use crate::tactics::abilities::instant_ability;
use crate::tactics::constants::{TOWER_DANGER_DIST2, TOWER_PARK_DIST2};
use crate::tactics::doctrine::Doctrine;
use crate::tactics::engagement::{attack_option, attack_this_turn, chase, AttackOption};
use crate::tactics::positioning::find_safe_position;
use crate::tactics::shop::{eval_potion, eval_purchase};

/// Draft-phase pick by turn index: the nuke carry first, then the
/// healer to pair with it.
pub fn draft_pick(turn: Turn) -> HeroClass {
    if turn == 1 {
        HeroClass::Ironman
    } else {
        HeroClass::DoctorStrange
    }
}

/// Per-turn decision engine for both controlled heroes
pub struct TurnCommander {
    doctrine: Doctrine,
}

impl TurnCommander {
    pub fn new(doctrine: Doctrine) -> Self {
        Self { doctrine }
    }

    pub fn doctrine(&self) -> &Doctrine {
        &self.doctrine
    }

    /// One command per controlled hero, in snapshot order.
    pub fn decide_turn(
        &self,
        turn: Turn,
        snapshot: &Snapshot,
        catalog: &ItemCatalog,
    ) -> Vec<TurnCommand> {
        let mut ledger = GoldLedger::new(snapshot.gold);
        if turn <= self.doctrine.economy.laning_turns {
            self.laning_turn(turn, snapshot, catalog, &mut ledger)
        } else {
            self.combat_turn(snapshot, catalog, &mut ledger)
        }
    }

    /// Opening routine: heroes alternate between shopping and walking
    /// back to their tower, by turn parity.
    fn laning_turn(
        &self,
        turn: Turn,
        snapshot: &Snapshot,
        catalog: &ItemCatalog,
        ledger: &mut GoldLedger,
    ) -> Vec<TurnCommand> {
        let buying_index = if turn % 2 == 0 { 0 } else { 1 };
        let tower = snapshot.my_tower().map(|t| t.pos);

        let mut commands = Vec::new();
        for (index, hero) in snapshot.my_heroes().enumerate() {
            let command = if index == buying_index {
                match eval_purchase(catalog, ledger.remaining(), hero.items_owned) {
                    Some(item) if ledger.try_spend(item.cost) => {
                        debug!(hero = hero.id.0, item = %item.name, "laning buy");
                        TurnCommand::Buy(item.name.clone())
                    }
                    _ => return_to_tower(tower),
                }
            } else {
                return_to_tower(tower)
            };
            commands.push(command);
        }
        commands
    }

    fn combat_turn(
        &self,
        snapshot: &Snapshot,
        catalog: &ItemCatalog,
        ledger: &mut GoldLedger,
    ) -> Vec<TurnCommand> {
        let heroes: Vec<&Entity> = snapshot.my_heroes().collect();
        let common = self.common_target(&heroes, snapshot);

        let mut commands = Vec::with_capacity(heroes.len());
        for hero in &heroes {
            commands.push(self.decide_hero(hero, snapshot, catalog, ledger, common));
        }
        commands
    }

    fn decide_hero(
        &self,
        hero: &Entity,
        snapshot: &Snapshot,
        catalog: &ItemCatalog,
        ledger: &mut GoldLedger,
        common: Option<UnitId>,
    ) -> TurnCommand {
        let doctrine = &self.doctrine;

        if let Some(action) = instant_ability(hero, snapshot) {
            return TurnCommand::Act(action);
        }

        if let Some(tower) = snapshot.his_tower() {
            if hero.pos.dist2(tower.pos) <= TOWER_DANGER_DIST2 {
                debug!(hero = hero.id.0, "inside enemy tower reach, disengaging");
                return TurnCommand::Act(find_safe_position(hero, snapshot, doctrine));
            }
        }

        if hero.health_ratio() < doctrine.economy.potion_health_ratio {
            if let Some(item) = eval_potion(catalog, ledger.remaining(), hero.items_owned) {
                if ledger.try_spend(item.cost) {
                    debug!(hero = hero.id.0, item = %item.name, "restorative buy");
                    return TurnCommand::Buy(item.name.clone());
                }
            }
            let parked = snapshot
                .my_tower()
                .map_or(false, |t| hero.pos.dist2(t.pos) <= TOWER_PARK_DIST2);
            if parked {
                // nothing to drink and nowhere to run; farm what comes
                return TurnCommand::Act(match engagement_scan(hero, snapshot) {
                    Some(option) => option.action,
                    None => Action::AttackNearest(UnitKind::Unit),
                });
            }
            return TurnCommand::Act(find_safe_position(hero, snapshot, doctrine));
        }

        if let Some(target_id) = common {
            if let Some(target) = snapshot.get(target_id) {
                debug!(
                    hero = hero.id.0,
                    target = target_id.0,
                    "committing to the shared target"
                );
                return TurnCommand::Act(chase(hero, target));
            }
        }

        if hero.items_owned < doctrine.economy.item_cap {
            if let Some(item) = eval_purchase(catalog, ledger.remaining(), hero.items_owned) {
                if ledger.try_spend(item.cost) {
                    debug!(hero = hero.id.0, item = %item.name, "economy backfill");
                    return TurnCommand::Buy(item.name.clone());
                }
            }
        }

        TurnCommand::Act(find_safe_position(hero, snapshot, doctrine))
    }

    /// An enemy every controlled hero can strike this turn, weakest
    /// first. Requires two heroes, both healthy enough to commit.
    fn common_target(&self, heroes: &[&Entity], snapshot: &Snapshot) -> Option<UnitId> {
        if heroes.len() < 2 {
            return None;
        }
        let ratio_floor = self.doctrine.targeting.attack_health_ratio;
        if heroes.iter().any(|hero| hero.health_ratio() < ratio_floor) {
            return None;
        }

        let mut best: Option<&Entity> = None;
        for enemy in snapshot.his_units() {
            if heroes.iter().any(|hero| attack_this_turn(hero, enemy).is_wait()) {
                continue;
            }
            if best.map_or(true, |b| b.health > enemy.health) {
                best = Some(enemy);
            }
        }
        best.map(|enemy| enemy.id)
    }
}

/// Weakest enemy this hero can strike right now without the landing
/// point entering tower reach.
fn engagement_scan(hero: &Entity, snapshot: &Snapshot) -> Option<AttackOption> {
    let mut best: Option<AttackOption> = None;
    for enemy in snapshot.his_units() {
        let Some(option) = attack_option(hero, enemy) else {
            continue;
        };
        if let Some(tower) = snapshot.his_tower() {
            if option.stand.dist2(tower.pos) <= TOWER_DANGER_DIST2 {
                continue;
            }
        }
        if best
            .as_ref()
            .map_or(true, |b| b.target_health > option.target_health)
        {
            best = Some(option);
        }
    }
    best
}

fn return_to_tower(tower: Option<Point>) -> TurnCommand {
    match tower {
        Some(pos) => TurnCommand::Act(Action::Move(pos)),
        None => TurnCommand::Act(Action::Wait),
    }
}
