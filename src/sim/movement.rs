//! Axis-separated collision-aware movement shared by player and enemy
//!
//! X is attempted first, then Y from the (possibly updated) X. A blocked
//! axis keeps its old coordinate, so diagonal contact slides along walls
//! instead of stopping dead.

use glam::Vec2;

use super::walls::WallSet;

/// Result of one movement step
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoveOutcome {
    pub pos: Vec2,
    pub blocked_x: bool,
    pub blocked_y: bool,
}

impl MoveOutcome {
    #[inline]
    pub fn blocked(&self) -> bool {
        self.blocked_x || self.blocked_y
    }
}

/// Move a circle of `radius` from `pos` by `delta`, resolving each axis
/// independently against `walls`.
pub fn step_axis_separated(pos: Vec2, delta: Vec2, radius: f32, walls: &WallSet) -> MoveOutcome {
    let mut next = pos;

    let try_x = Vec2::new(pos.x + delta.x, next.y);
    let blocked_x = walls.blocks_circle(try_x, radius);
    if !blocked_x {
        next.x = try_x.x;
    }

    let try_y = Vec2::new(next.x, pos.y + delta.y);
    let blocked_y = walls.blocks_circle(try_y, radius);
    if !blocked_y {
        next.y = try_y.y;
    }

    MoveOutcome {
        pos: next,
        blocked_x,
        blocked_y,
    }
}
