//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per display frame, speeds in units per tick
//! - Time only through an injected `Clock`
//! - Randomness only through an injected `HeadingSource`
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod enemy;
pub mod geometry;
pub mod movement;
pub mod player;
pub mod rng;
pub mod sight;
pub mod state;
pub mod tick;
pub mod walls;

pub use autopilot::flee_input;
pub use enemy::{Enemy, EnemyMode, speed_multiplier};
pub use geometry::{Wall, circle_circle_overlap, circle_rect_overlap, segment_rect_intersects};
pub use movement::{MoveOutcome, step_axis_separated};
pub use player::{Direction, DirectionKeys, Player, PlayerMode};
pub use rng::{GameRng, HeadingSequence, HeadingSource};
pub use sight::has_line_of_sight;
pub use state::{GameEvent, GamePhase, GameState};
pub use tick::{TickInput, tick};
pub use walls::{MAZE_WALLS, WallSet};
