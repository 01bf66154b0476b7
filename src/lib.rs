//! Maze Chase - a player circle evades a patrolling enemy through a wall maze
//!
//! Core modules:
//! - `sim`: Deterministic simulation (geometry, movement, entities, tick)
//! - `platform`: Clock abstraction (wall clock or manual/simulated)
//! - `settings`: Data-driven tuning loaded from JSON

pub mod platform;
pub mod settings;
pub mod sim;

pub use platform::{Clock, ManualClock, SystemClock};
pub use settings::{SettingsError, Tuning};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Nominal display refresh rate the per-tick speeds are tuned for
    pub const TICK_HZ: f32 = 60.0;
    /// Fixed simulated timestep (seconds) used by the headless driver
    pub const SIM_DT: f64 = 1.0 / 60.0;

    /// Arena dimensions
    pub const ARENA_WIDTH: f32 = 800.0;
    pub const ARENA_HEIGHT: f32 = 600.0;

    /// Player defaults (speeds are units per tick)
    pub const PLAYER_RADIUS: f32 = 15.0;
    pub const PLAYER_SPEED: f32 = 3.0;
    pub const PLAYER_START: (f32, f32) = (60.0, 60.0);
    pub const INITIAL_LIVES: u8 = 3;
    pub const INVINCIBLE_MS: f32 = 2000.0;
    /// Pointer targets closer than this are ignored (avoids jitter)
    pub const POINTER_DEAD_ZONE: f32 = 5.0;
    /// Blink window while invincible, in ticks
    pub const BLINK_TICKS: u32 = 5;

    /// Enemy defaults
    pub const ENEMY_RADIUS: f32 = 15.0;
    pub const ENEMY_SPEED: f32 = 2.5;
    pub const ENEMY_CHASE_SPEED: f32 = 4.0;
    pub const ENEMY_VISION_RANGE: f32 = 200.0;
    pub const ENEMY_START: (f32, f32) = (740.0, 540.0);
    /// Ticks between wander heading re-rolls
    pub const WANDER_INTERVAL_TICKS: u32 = 60;

    /// Speed boost: +STEP every INTERVAL seconds without a catch, capped
    pub const BOOST_INTERVAL_SECS: f64 = 5.0;
    pub const BOOST_STEP: f32 = 0.2;
    pub const BOOST_MAX_MULTIPLIER: f32 = 3.0;

    /// Survive this long to win
    pub const WIN_TIME_SECS: f64 = 300.0;
    /// "Caught" banner duration after a hit
    pub const HIT_MESSAGE_MS: f32 = 1500.0;
}

/// Unit vector for a heading angle (radians, 0 = +x, clockwise in screen space)
#[inline]
pub fn heading_vector(angle: f32) -> Vec2 {
    Vec2::new(angle.cos(), angle.sin())
}

/// Convert a millisecond duration to whole ticks at the given rate
#[inline]
pub fn ms_to_ticks(ms: f32, tick_hz: f32) -> u32 {
    (ms * tick_hz / 1000.0).round().max(0.0) as u32
}
