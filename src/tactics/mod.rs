//! The decision engine: pure functions from snapshot to commands
//!
//! Layering, bottom up: movement interpolation and the safety
//! predicate, per-target engagement feasibility, repositioning, class
//! abilities and shop ranking, then the commander that walks the
//! priority ladder for each hero. Nothing in here performs IO; the
//! protocol layer owns both ends of the pipe.

pub mod abilities;
pub mod commander;
pub mod constants;
pub mod doctrine;
pub mod engagement;
pub mod movement;
pub mod positioning;
pub mod shop;
pub mod threat;

// Re-exports for convenient access
pub use abilities::{instant_ability, offensive_ability};
pub use commander::{draft_pick, TurnCommander};
pub use constants::*;
pub use doctrine::{
    load_doctrine, Doctrine, EconomyConfig, RetreatConfig, TargetPolicy, TargetingConfig,
};
pub use engagement::{attack_option, attack_this_turn, chase, AttackOption};
pub use movement::{post_move_point, step_away, step_toward};
pub use positioning::{find_safe_position, ring_points};
pub use shop::{eval_potion, eval_purchase};
pub use threat::is_safe;
