//! Game tuning
//!
//! Every gameplay constant can be overridden from a JSON file. Missing
//! fields fall back to the values in [`crate::consts`].

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;
use crate::ms_to_ticks;

/// Errors raised while loading tuning
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid settings: {0}")]
    Invalid(String),
}

/// Tunable gameplay parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Rate the per-tick speeds and tick-based timers assume
    pub tick_hz: f32,

    // === Arena ===
    pub arena_width: f32,
    pub arena_height: f32,

    // === Player ===
    pub player_radius: f32,
    /// Units per tick
    pub player_speed: f32,
    pub player_start: Vec2,
    pub initial_lives: u8,
    pub invincible_ms: f32,
    pub pointer_dead_zone: f32,
    pub blink_ticks: u32,

    // === Enemy ===
    pub enemy_radius: f32,
    /// Patrol speed before any boost, units per tick
    pub enemy_speed: f32,
    /// Chase speed before any boost, units per tick
    pub enemy_chase_speed: f32,
    pub enemy_vision_range: f32,
    pub enemy_start: Vec2,
    pub wander_interval_ticks: u32,

    // === Speed boost ===
    pub boost_interval_secs: f64,
    pub boost_step: f32,
    pub boost_max_multiplier: f32,

    // === Session ===
    pub win_time_secs: f64,
    pub hit_message_ms: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            tick_hz: TICK_HZ,

            arena_width: ARENA_WIDTH,
            arena_height: ARENA_HEIGHT,

            player_radius: PLAYER_RADIUS,
            player_speed: PLAYER_SPEED,
            player_start: Vec2::new(PLAYER_START.0, PLAYER_START.1),
            initial_lives: INITIAL_LIVES,
            invincible_ms: INVINCIBLE_MS,
            pointer_dead_zone: POINTER_DEAD_ZONE,
            blink_ticks: BLINK_TICKS,

            enemy_radius: ENEMY_RADIUS,
            enemy_speed: ENEMY_SPEED,
            enemy_chase_speed: ENEMY_CHASE_SPEED,
            enemy_vision_range: ENEMY_VISION_RANGE,
            enemy_start: Vec2::new(ENEMY_START.0, ENEMY_START.1),
            wander_interval_ticks: WANDER_INTERVAL_TICKS,

            boost_interval_secs: BOOST_INTERVAL_SECS,
            boost_step: BOOST_STEP,
            boost_max_multiplier: BOOST_MAX_MULTIPLIER,

            win_time_secs: WIN_TIME_SECS,
            hit_message_ms: HIT_MESSAGE_MS,
        }
    }
}

impl Tuning {
    /// Parse and validate tuning from a JSON string
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let tuning: Self = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Load and validate tuning from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Load from `path`, falling back to defaults if the file is absent
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        if !path.exists() {
            log::info!("No settings at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let tuning = Self::load(path)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(tuning)
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), SettingsError> {
        let positive = [
            ("tick_hz", self.tick_hz),
            ("arena_width", self.arena_width),
            ("arena_height", self.arena_height),
            ("player_radius", self.player_radius),
            ("player_speed", self.player_speed),
            ("enemy_radius", self.enemy_radius),
            ("enemy_speed", self.enemy_speed),
            ("enemy_chase_speed", self.enemy_chase_speed),
            ("enemy_vision_range", self.enemy_vision_range),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(SettingsError::Invalid(format!(
                    "{name} must be positive and finite, got {value}"
                )));
            }
        }

        if !self.boost_max_multiplier.is_finite() || self.boost_max_multiplier < 1.0 {
            return Err(SettingsError::Invalid(format!(
                "boost_max_multiplier must be at least 1.0, got {}",
                self.boost_max_multiplier
            )));
        }
        if !self.boost_interval_secs.is_finite() || self.boost_interval_secs <= 0.0 {
            return Err(SettingsError::Invalid(format!(
                "boost_interval_secs must be positive, got {}",
                self.boost_interval_secs
            )));
        }
        if !self.player_start.is_finite() || !self.enemy_start.is_finite() {
            return Err(SettingsError::Invalid("spawn points must be finite".into()));
        }
        Ok(())
    }

    /// Invincibility duration in ticks
    pub fn invincible_ticks(&self) -> u32 {
        ms_to_ticks(self.invincible_ms, self.tick_hz)
    }

    /// "Caught" banner duration in ticks
    pub fn hit_message_ticks(&self) -> u32 {
        ms_to_ticks(self.hit_message_ms, self.tick_hz)
    }

    /// Clamp a point into the arena rectangle
    pub fn clamp_to_arena(&self, point: Vec2) -> Vec2 {
        point.clamp(Vec2::ZERO, Vec2::new(self.arena_width, self.arena_height))
    }
}
