//! Enemy entity: wander/chase behavior with escalating speed
//!
//! The enemy re-derives its mode every tick: it chases when the player is
//! within vision range and nothing in the maze blocks the sight line,
//! otherwise it wanders on a random heading. Every boost interval without a
//! catch raises its speed multiplier by one step, up to a cap.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::movement::step_axis_separated;
use super::rng::HeadingSource;
use super::sight::has_line_of_sight;
use super::walls::WallSet;
use crate::heading_vector;
use crate::settings::Tuning;

/// Enemy behavior for the current tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnemyMode {
    #[default]
    Patrol,
    Chase,
}

/// Speed multiplier after `since_catch` seconds without a catch.
///
/// `min(1 + floor(since_catch / interval) * step, cap)`; negative elapsed
/// time counts as zero.
pub fn speed_multiplier(since_catch: f64, interval: f64, step: f32, cap: f32) -> f32 {
    let intervals = (since_catch.max(0.0) / interval).floor() as f32;
    (1.0 + intervals * step).min(cap)
}

/// The pursuing circle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub pos: Vec2,
    pub radius: f32,
    pub base_speed: f32,
    /// Current patrol speed, `base_speed * multiplier`
    pub speed: f32,
    pub chase_speed: f32,
    pub vision_range: f32,
    pub mode: EnemyMode,
    /// Wander heading (radians)
    pub heading: f32,
    /// Ticks spent on the current heading
    pub wander_ticks: u32,
    pub wander_interval: u32,
    /// Clock time (seconds) of the last catch
    pub last_catch_time: f64,
    boost_interval_secs: f64,
    boost_step: f32,
    boost_max_multiplier: f32,
}

impl Enemy {
    pub fn new(tuning: &Tuning, now: f64, headings: &mut impl HeadingSource) -> Self {
        Self {
            pos: tuning.enemy_start,
            radius: tuning.enemy_radius,
            base_speed: tuning.enemy_speed,
            speed: tuning.enemy_speed,
            chase_speed: tuning.enemy_chase_speed,
            vision_range: tuning.enemy_vision_range,
            mode: EnemyMode::Patrol,
            heading: headings.next_heading(),
            wander_ticks: 0,
            wander_interval: tuning.wander_interval_ticks,
            last_catch_time: now,
            boost_interval_secs: tuning.boost_interval_secs,
            boost_step: tuning.boost_step,
            boost_max_multiplier: tuning.boost_max_multiplier,
        }
    }

    pub fn is_chasing(&self) -> bool {
        self.mode == EnemyMode::Chase
    }

    /// Current boost factor applied to both patrol and chase speed
    pub fn speed_multiplier(&self) -> f32 {
        self.speed / self.base_speed
    }

    pub fn seconds_since_catch(&self, now: f64) -> f64 {
        now - self.last_catch_time
    }

    /// Recompute `speed` from the time elapsed since the last catch
    pub fn update_speed_boost(&mut self, since_catch: f64) -> f32 {
        let multiplier = speed_multiplier(
            since_catch,
            self.boost_interval_secs,
            self.boost_step,
            self.boost_max_multiplier,
        );
        self.speed = self.base_speed * multiplier;
        multiplier
    }

    /// Called when the enemy catches the player
    pub fn reset_speed_boost(&mut self, now: f64) {
        self.last_catch_time = now;
        self.speed = self.base_speed;
    }

    /// Advance one tick toward (or around) the player at `target`
    pub fn update(
        &mut self,
        target: Vec2,
        since_catch: f64,
        walls: &WallSet,
        headings: &mut impl HeadingSource,
    ) {
        let multiplier = self.update_speed_boost(since_catch);

        let to_target = target - self.pos;
        let distance = to_target.length();
        let sees_target =
            distance <= self.vision_range && has_line_of_sight(walls, self.pos, target);

        let mode = if sees_target {
            EnemyMode::Chase
        } else {
            EnemyMode::Patrol
        };
        if mode != self.mode {
            log::debug!("Enemy {:?} -> {:?} at distance {:.1}", self.mode, mode, distance);
        }
        self.mode = mode;

        let delta = match self.mode {
            EnemyMode::Chase if distance > 0.0 => {
                to_target / distance * (self.chase_speed * multiplier)
            }
            EnemyMode::Chase => Vec2::ZERO,
            EnemyMode::Patrol => {
                self.wander_ticks += 1;
                if self.wander_ticks >= self.wander_interval {
                    self.heading = headings.next_heading();
                    self.wander_ticks = 0;
                }
                heading_vector(self.heading) * self.speed
            }
        };

        let outcome = step_axis_separated(self.pos, delta, self.radius, walls);
        self.pos = outcome.pos;

        // Each blocked axis deflects the wander heading
        if outcome.blocked_x {
            self.heading = headings.next_heading();
        }
        if outcome.blocked_y {
            self.heading = headings.next_heading();
        }
    }
}
