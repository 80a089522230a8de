//! Straight-line movement interpolation
//!
//! All arena movement is point-to-point along the connecting line, so
//! the engine only ever needs a post-move position, never a path.
//! Results are intentionally not clamped to the map; the referee clamps
//! movement targets itself.

use crate::core::types::Point;

/// Point `pct` of the way from `from` to `toward`, truncated to the
/// integer grid the same way the referee rounds movement.
pub fn post_move_point(from: Point, toward: Point, pct: f64) -> Point {
    let x = from.x as f64 + pct * (toward.x - from.x) as f64;
    let y = from.y as f64 + pct * (toward.y - from.y) as f64;
    Point::new(x as i32, y as i32)
}

/// Point `delta` units out of `from` along the line to `toward`.
/// Coincident endpoints collapse to no movement.
pub fn step_toward(from: Point, toward: Point, delta: f64) -> Point {
    let dist = from.dist(toward);
    if dist == 0.0 {
        return from;
    }
    post_move_point(from, toward, delta / dist)
}

/// Point `delta` units from `threat` back along the line through
/// `from`, i.e. just outside a pursuer's reach. Coincident endpoints
/// collapse to no movement.
pub fn step_away(from: Point, threat: Point, delta: f64) -> Point {
    let dist = from.dist(threat);
    if dist == 0.0 {
        return from;
    }
    let pct = -delta / dist;
    let x = threat.x as f64 + pct * (threat.x - from.x) as f64;
    let y = threat.y as f64 + pct * (threat.y - from.y) as f64;
    Point::new(x as i32, y as i32)
}
