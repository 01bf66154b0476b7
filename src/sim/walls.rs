//! Static maze geometry

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geometry::{Wall, circle_rect_overlap};

/// The fixed maze layout: outer boundary followed by interior obstacles
pub const MAZE_WALLS: [Wall; 15] = [
    // Boundary
    Wall::new(0.0, 0.0, 800.0, 20.0),
    Wall::new(0.0, 580.0, 800.0, 20.0),
    Wall::new(0.0, 0.0, 20.0, 600.0),
    Wall::new(780.0, 0.0, 20.0, 600.0),
    // Interior
    Wall::new(100.0, 100.0, 150.0, 20.0),
    Wall::new(100.0, 100.0, 20.0, 150.0),
    Wall::new(300.0, 200.0, 20.0, 200.0),
    Wall::new(300.0, 380.0, 200.0, 20.0),
    Wall::new(550.0, 100.0, 150.0, 20.0),
    Wall::new(680.0, 100.0, 20.0, 200.0),
    Wall::new(400.0, 50.0, 20.0, 100.0),
    Wall::new(150.0, 300.0, 100.0, 20.0),
    Wall::new(500.0, 450.0, 200.0, 20.0),
    Wall::new(500.0, 300.0, 20.0, 150.0),
    Wall::new(100.0, 480.0, 150.0, 20.0),
];

/// Immutable set of walls, shared read-only by movement and visibility
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WallSet {
    walls: Vec<Wall>,
}

impl WallSet {
    pub fn new(walls: Vec<Wall>) -> Self {
        Self { walls }
    }

    /// The standard 800x600 maze
    pub fn maze() -> Self {
        Self::new(MAZE_WALLS.to_vec())
    }

    pub fn walls(&self) -> &[Wall] {
        &self.walls
    }

    pub fn iter(&self) -> impl Iterator<Item = &Wall> {
        self.walls.iter()
    }

    pub fn len(&self) -> usize {
        self.walls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.walls.is_empty()
    }

    /// True if a circle at `center` touches any wall
    pub fn blocks_circle(&self, center: Vec2, radius: f32) -> bool {
        self.walls
            .iter()
            .any(|wall| circle_rect_overlap(center, radius, wall))
    }
}
