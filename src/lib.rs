//! Lane Warden - per-turn tactical decision engine for two-hero lane combat

pub mod arena;
pub mod core;
pub mod protocol;
pub mod tactics;
