//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};

/// Playable map width; valid x coordinates are `0..MAP_WIDTH`
pub const MAP_WIDTH: i32 = 1920;

/// Playable map height; valid y coordinates are `0..MAP_HEIGHT`
pub const MAP_HEIGHT: i32 = 750;

/// Unique identifier for arena entities, assigned by the game engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UnitId(pub i32);

impl UnitId {
    pub fn new(id: i32) -> Self {
        Self(id)
    }
}

/// Turn counter (first decision turn is 1)
pub type Turn = u32;

/// Which side an entity fights for, resolved against our team id.
/// Neutral camps count as hostile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Team {
    Mine,
    Theirs,
}

/// Entity categories the wire protocol distinguishes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnitKind {
    Unit,
    Hero,
    Tower,
    Groot,
}

impl UnitKind {
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "UNIT" => Some(UnitKind::Unit),
            "HERO" => Some(UnitKind::Hero),
            "TOWER" => Some(UnitKind::Tower),
            "GROOT" => Some(UnitKind::Groot),
            _ => None,
        }
    }

    pub fn token(&self) -> &'static str {
        match self {
            UnitKind::Unit => "UNIT",
            UnitKind::Hero => "HERO",
            UnitKind::Tower => "TOWER",
            UnitKind::Groot => "GROOT",
        }
    }
}

/// Hero classes named by the draft protocol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HeroClass {
    Ironman,
    Hulk,
    Deadpool,
    Valkyrie,
    DoctorStrange,
}

impl HeroClass {
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "IRONMAN" => Some(HeroClass::Ironman),
            "HULK" => Some(HeroClass::Hulk),
            "DEADPOOL" => Some(HeroClass::Deadpool),
            "VALKYRIE" => Some(HeroClass::Valkyrie),
            "DOCTOR_STRANGE" => Some(HeroClass::DoctorStrange),
            _ => None,
        }
    }

    pub fn token(&self) -> &'static str {
        match self {
            HeroClass::Ironman => "IRONMAN",
            HeroClass::Hulk => "HULK",
            HeroClass::Deadpool => "DEADPOOL",
            HeroClass::Valkyrie => "VALKYRIE",
            HeroClass::DoctorStrange => "DOCTOR_STRANGE",
        }
    }
}

/// 2D map position in integer units
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Squared distance, exact in integer arithmetic
    pub fn dist2(&self, other: Point) -> i64 {
        let dx = (self.x - other.x) as i64;
        let dy = (self.y - other.y) as i64;
        dx * dx + dy * dy
    }

    /// Straight-line distance
    pub fn dist(&self, other: Point) -> f64 {
        (self.dist2(other) as f64).sqrt()
    }

    pub fn in_bounds(&self) -> bool {
        self.x >= 0 && self.x < MAP_WIDTH && self.y >= 0 && self.y < MAP_HEIGHT
    }
}
