//! Player entity: input-driven movement plus the hit/invincibility cycle

use glam::Vec2;
use serde::{Deserialize, Serialize};
use std::f32::consts::FRAC_1_SQRT_2;

use super::movement::step_axis_separated;
use super::walls::WallSet;
use crate::settings::Tuning;

/// A directional input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Held state of the four directional inputs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectionKeys {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl DirectionKeys {
    pub fn set(&mut self, direction: Direction, held: bool) {
        match direction {
            Direction::Up => self.up = held,
            Direction::Down => self.down = held,
            Direction::Left => self.left = held,
            Direction::Right => self.right = held,
        }
    }

    /// Sum of held directions, each axis in {-1, 0, 1}
    pub fn vector(&self) -> Vec2 {
        let mut v = Vec2::ZERO;
        if self.up {
            v.y -= 1.0;
        }
        if self.down {
            v.y += 1.0;
        }
        if self.left {
            v.x -= 1.0;
        }
        if self.right {
            v.x += 1.0;
        }
        v
    }
}

/// Player hit state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerMode {
    Normal,
    /// Cannot be hit again until the timer runs out
    Invincible { ticks_left: u32 },
}

/// The player-controlled circle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    pub radius: f32,
    /// Units per tick
    pub speed: f32,
    pub lives: u8,
    pub mode: PlayerMode,
    pub keys: DirectionKeys,
    /// Pointer/touch follow target
    pub target: Option<Vec2>,
    spawn: Vec2,
    invincible_ticks: u32,
    pointer_dead_zone: f32,
    blink_ticks: u32,
}

impl Player {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            pos: tuning.player_start,
            radius: tuning.player_radius,
            speed: tuning.player_speed,
            lives: tuning.initial_lives,
            mode: PlayerMode::Normal,
            keys: DirectionKeys::default(),
            target: None,
            spawn: tuning.player_start,
            invincible_ticks: tuning.invincible_ticks(),
            pointer_dead_zone: tuning.pointer_dead_zone,
            blink_ticks: tuning.blink_ticks.max(1),
        }
    }

    pub fn is_invincible(&self) -> bool {
        matches!(self.mode, PlayerMode::Invincible { .. })
    }

    /// Blink flag for rendering: hidden on alternating windows while invincible
    pub fn is_visible(&self) -> bool {
        match self.mode {
            PlayerMode::Normal => true,
            PlayerMode::Invincible { ticks_left } => (ticks_left / self.blink_ticks) % 2 != 0,
        }
    }

    /// Set the pointer target. Non-finite points clear it, others are
    /// clamped into `bounds`.
    pub fn set_target(&mut self, target: Option<Vec2>, bounds: Vec2) {
        self.target = target
            .filter(|t| t.is_finite())
            .map(|t| t.clamp(Vec2::ZERO, bounds));
    }

    /// Direction for this tick before scaling by speed.
    ///
    /// Keys set the vector first; an active pointer target farther than the
    /// dead zone replaces it with a unit vector toward the target. A vector
    /// with both components non-zero is scaled by 1/√2, even when it came
    /// from the pointer and is already unit length.
    pub fn intended_direction(&self) -> Vec2 {
        let mut dir = self.keys.vector();

        if let Some(target) = self.target {
            let to_target = target - self.pos;
            let distance = to_target.length();
            if distance > self.pointer_dead_zone {
                dir = to_target / distance;
            }
        }

        if dir.x != 0.0 && dir.y != 0.0 {
            dir *= FRAC_1_SQRT_2;
        }
        dir
    }

    /// Move one tick and run down the invincibility timer
    pub fn update(&mut self, walls: &WallSet) {
        let delta = self.intended_direction() * self.speed;
        self.pos = step_axis_separated(self.pos, delta, self.radius, walls).pos;

        if let PlayerMode::Invincible { ticks_left } = self.mode {
            let ticks_left = ticks_left.saturating_sub(1);
            self.mode = if ticks_left == 0 {
                PlayerMode::Normal
            } else {
                PlayerMode::Invincible { ticks_left }
            };
        }
    }

    /// Register a catch. Returns false without effect while invincible;
    /// otherwise loses a life, turns invincible and respawns.
    pub fn hit(&mut self) -> bool {
        if self.is_invincible() {
            return false;
        }
        self.lives = self.lives.saturating_sub(1);
        self.mode = if self.invincible_ticks == 0 {
            PlayerMode::Normal
        } else {
            PlayerMode::Invincible {
                ticks_left: self.invincible_ticks,
            }
        };
        self.respawn();
        true
    }

    pub fn respawn(&mut self) {
        self.pos = self.spawn;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_field() -> WallSet {
        WallSet::default()
    }

    #[test]
    fn test_keys_move_at_speed() {
        let mut player = Player::new(&Tuning::default());
        player.keys.set(Direction::Right, true);
        player.update(&open_field());
        assert_eq!(player.pos, Vec2::new(63.0, 60.0));
    }

    #[test]
    fn test_opposing_keys_cancel() {
        let mut player = Player::new(&Tuning::default());
        player.keys.set(Direction::Left, true);
        player.keys.set(Direction::Right, true);
        player.update(&open_field());
        assert_eq!(player.pos, Vec2::new(60.0, 60.0));
    }

    #[test]
    fn test_diagonal_keys_normalized() {
        let mut player = Player::new(&Tuning::default());
        player.keys.set(Direction::Down, true);
        player.keys.set(Direction::Right, true);
        player.update(&open_field());
        let moved = player.pos - Vec2::new(60.0, 60.0);
        assert!((moved.length() - 3.0).abs() < 1e-4);
    }

    #[test]
    fn test_pointer_overrides_keys() {
        let mut player = Player::new(&Tuning::default());
        player.keys.set(Direction::Left, true);
        player.set_target(Some(Vec2::new(60.0, 160.0)), Vec2::new(800.0, 600.0));
        player.update(&open_field());
        assert_eq!(player.pos, Vec2::new(60.0, 63.0));
    }

    #[test]
    fn test_pointer_inside_dead_zone_keeps_keys() {
        let mut player = Player::new(&Tuning::default());
        player.keys.set(Direction::Left, true);
        player.set_target(Some(Vec2::new(62.0, 62.0)), Vec2::new(800.0, 600.0));
        assert_eq!(player.intended_direction(), Vec2::new(-1.0, 0.0));
    }

    #[test]
    fn test_diagonal_pointer_is_under_scaled() {
        let mut player = Player::new(&Tuning::default());
        player.set_target(Some(Vec2::new(160.0, 160.0)), Vec2::new(800.0, 600.0));
        let dir = player.intended_direction();
        assert!((dir.length() - FRAC_1_SQRT_2).abs() < 1e-5);
    }

    #[test]
    fn test_invalid_target_ignored_and_far_target_clamped() {
        let mut player = Player::new(&Tuning::default());
        let bounds = Vec2::new(800.0, 600.0);
        player.set_target(Some(Vec2::new(f32::NAN, 10.0)), bounds);
        assert_eq!(player.target, None);
        player.set_target(Some(Vec2::new(5000.0, -20.0)), bounds);
        assert_eq!(player.target, Some(Vec2::new(800.0, 0.0)));
    }

    #[test]
    fn test_hit_twice_only_costs_one_life() {
        let mut player = Player::new(&Tuning::default());
        player.pos = Vec2::new(400.0, 300.0);
        assert!(player.hit());
        assert!(!player.hit());
        assert_eq!(player.lives, 2);
        assert_eq!(player.pos, Vec2::new(60.0, 60.0));
        assert_eq!(player.mode, PlayerMode::Invincible { ticks_left: 120 });
    }

    #[test]
    fn test_invincibility_expires_after_duration() {
        let mut player = Player::new(&Tuning::default());
        player.hit();
        let walls = open_field();
        for _ in 0..119 {
            player.update(&walls);
        }
        assert!(player.is_invincible());
        player.update(&walls);
        assert!(!player.is_invincible());
        assert!(player.hit());
    }

    #[test]
    fn test_blink_alternates_every_five_ticks() {
        let mut player = Player::new(&Tuning::default());
        player.mode = PlayerMode::Invincible { ticks_left: 120 };
        // floor(120 / 5) = 24, even => hidden
        assert!(!player.is_visible());
        player.mode = PlayerMode::Invincible { ticks_left: 115 };
        // floor(115 / 5) = 23, odd => shown
        assert!(player.is_visible());
        player.mode = PlayerMode::Normal;
        assert!(player.is_visible());
    }

    #[test]
    fn test_lives_never_underflow() {
        let mut player = Player::new(&Tuning::default());
        player.lives = 0;
        assert!(player.hit());
        assert_eq!(player.lives, 0);
    }
}
