//! Combat doctrine configuration loaded from TOML
//!
//! Doctrines hold the tuning knobs of the decision engine: target
//! selection policy, retreat thresholds and the economy schedule.
//! Fixed game facts stay in the constants module instead.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::core::Result;

/// How the already-safe branch ranks its strike candidates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetPolicy {
    /// Weakest reachable enemy first
    LowestHealth,
    /// First admissible candidate in snapshot order
    FirstAdmissible,
}

/// Target selection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetingConfig {
    /// Ranking policy for strike candidates
    pub policy: TargetPolicy,
    /// Do not open an engagement below this absolute health
    pub survivability_floor: i32,
    /// Minimum health ratio for joining a coordinated attack
    pub attack_health_ratio: f64,
}

impl Default for TargetingConfig {
    fn default() -> Self {
        Self {
            policy: TargetPolicy::LowestHealth,
            survivability_floor: 200,
            attack_health_ratio: 0.3,
        }
    }
}

/// Retreat behavior
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetreatConfig {
    /// Health ratio below which a hero counts as badly wounded
    pub critical_health_ratio: f64,
    /// Ring radius searched around covering units
    pub cover_ring: i32,
    /// Widened ring radius for a badly wounded hero
    pub cover_ring_wounded: i32,
}

impl Default for RetreatConfig {
    fn default() -> Self {
        Self {
            critical_health_ratio: 0.25,
            cover_ring: 20,
            cover_ring_wounded: 100,
        }
    }
}

/// Economy schedule
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EconomyConfig {
    /// Turns spent in the buy-and-return laning routine
    pub laning_turns: u32,
    /// Health ratio below which a potion purchase is considered
    pub potion_health_ratio: f64,
    /// Stop backfilling permanent items at this count
    pub item_cap: i32,
}

impl Default for EconomyConfig {
    fn default() -> Self {
        Self {
            laning_turns: 5,
            potion_health_ratio: 0.5,
            item_cap: 3,
        }
    }
}

/// Complete combat doctrine
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Doctrine {
    /// Name of this doctrine (set from filename)
    #[serde(default)]
    pub name: String,
    /// Target selection
    #[serde(default)]
    pub targeting: TargetingConfig,
    /// Retreat behavior
    #[serde(default)]
    pub retreat: RetreatConfig,
    /// Economy schedule
    #[serde(default)]
    pub economy: EconomyConfig,
}

impl Default for Doctrine {
    fn default() -> Self {
        Self {
            name: "default".to_string(),
            targeting: TargetingConfig::default(),
            retreat: RetreatConfig::default(),
            economy: EconomyConfig::default(),
        }
    }
}

/// Load a doctrine from TOML
///
/// Loads from `data/doctrines/{name}.toml`
pub fn load_doctrine(name: &str) -> Result<Doctrine> {
    let path = doctrine_path(name);
    let contents = fs::read_to_string(&path)?;
    let mut doctrine: Doctrine = toml::from_str(&contents)?;
    doctrine.name = name.to_string();
    Ok(doctrine)
}

/// Get path to doctrine file
fn doctrine_path(name: &str) -> PathBuf {
    PathBuf::from("data/doctrines").join(format!("{}.toml", name))
}
