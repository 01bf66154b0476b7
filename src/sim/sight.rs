//! Line-of-sight queries against the static maze

use glam::Vec2;

use super::geometry::segment_rect_intersects;
use super::walls::WallSet;

/// True if no wall intersects the segment between `from` and `to`.
/// The first intersecting wall short-circuits to "blocked".
pub fn has_line_of_sight(walls: &WallSet, from: Vec2, to: Vec2) -> bool {
    !walls
        .iter()
        .any(|wall| segment_rect_intersects(from, to, wall))
}
