//! Turn-scoped arena data model
//!
//! Everything here is a value: snapshots, entities and actions live for
//! one turn and are never mutated in place. The item catalog is the one
//! process-lifetime structure, read-only after load.

pub mod action;
pub mod entity;
pub mod item;
pub mod snapshot;

pub use action::{Action, TurnCommand};
pub use entity::Entity;
pub use item::{Item, ItemCatalog};
pub use snapshot::{GoldLedger, Snapshot};
