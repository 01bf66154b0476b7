//! Overlap tests between circles, rectangles and segments
//!
//! Everything here is a pure function. Rectangles are axis-aligned walls
//! given by their top-left corner and size.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle of the maze
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Wall {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Wall {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[inline]
    pub fn min(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        Vec2::new(self.x + self.width, self.y + self.height)
    }

    /// Point of the rectangle closest to `point`
    #[inline]
    pub fn closest_point(&self, point: Vec2) -> Vec2 {
        point.clamp(self.min(), self.max())
    }
}

/// Circle vs rectangle. Touching (distance == radius) counts as overlap.
pub fn circle_rect_overlap(center: Vec2, radius: f32, rect: &Wall) -> bool {
    let closest = rect.closest_point(center);
    (center - closest).length_squared() <= radius * radius
}

/// Circle vs circle. Touching counts as overlap.
pub fn circle_circle_overlap(a: Vec2, radius_a: f32, b: Vec2, radius_b: f32) -> bool {
    let reach = radius_a + radius_b;
    (a - b).length_squared() <= reach * reach
}

/// Liang-Barsky clip of segment `from -> to` against `rect`.
///
/// Conservative: a constraint with a zero direction coefficient whose offset
/// is negative reports an intersection. Axis-aligned segments lying outside a
/// wall's slab are therefore treated as blocked. Only use this for occlusion.
pub fn segment_rect_intersects(from: Vec2, to: Vec2, rect: &Wall) -> bool {
    let d = to - from;
    let p = [-d.x, d.x, -d.y, d.y];
    let q = [
        from.x - rect.x,
        rect.x + rect.width - from.x,
        from.y - rect.y,
        rect.y + rect.height - from.y,
    ];

    let mut t0 = 0.0_f32;
    let mut t1 = 1.0_f32;

    for (&pi, &qi) in p.iter().zip(q.iter()) {
        if pi == 0.0 {
            if qi < 0.0 {
                return true;
            }
            continue;
        }

        let t = qi / pi;
        if pi < 0.0 {
            if t > t1 {
                return false;
            }
            t0 = t0.max(t);
        } else {
            if t < t0 {
                return false;
            }
            t1 = t1.min(t);
        }
    }

    t0 <= t1
}
