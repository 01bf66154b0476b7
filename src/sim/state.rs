//! Game state and session lifecycle
//!
//! `GameState` is the explicit simulation context: it owns the player and
//! enemy exclusively and is advanced by [`super::tick::tick`].

use serde::{Deserialize, Serialize};

use super::enemy::Enemy;
use super::player::Player;
use super::rng::HeadingSource;
use crate::platform::Clock;
use crate::settings::Tuning;

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Constructed, waiting for `start`
    Ready,
    /// Active gameplay
    Playing,
    /// Out of lives
    GameOver,
    /// Survived the full time
    Won,
}

/// Signals raised during a tick for UI/audio collaborators
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// The enemy caught the player
    Hit { lives_left: u8, elapsed: f64 },
    GameOver { elapsed: f64 },
    Won { elapsed: f64 },
}

/// Complete session state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub tuning: Tuning,
    pub phase: GamePhase,
    pub player: Player,
    pub enemy: Enemy,
    /// Clock time (seconds) the session started
    pub start_time: f64,
    /// Seconds since start, refreshed every playing tick
    pub elapsed: f64,
    /// Playing ticks since start
    pub time_ticks: u64,
    /// Remaining ticks of the "caught" banner
    pub hit_flash_ticks: u32,
    /// Events raised by the most recent tick
    pub events: Vec<GameEvent>,
}

impl GameState {
    pub fn new(tuning: Tuning, clock: &impl Clock, headings: &mut impl HeadingSource) -> Self {
        let now = clock.now_secs();
        let player = Player::new(&tuning);
        let enemy = Enemy::new(&tuning, now, headings);
        Self {
            tuning,
            phase: GamePhase::Ready,
            player,
            enemy,
            start_time: now,
            elapsed: 0.0,
            time_ticks: 0,
            hit_flash_ticks: 0,
            events: Vec::new(),
        }
    }

    /// Begin play from `Ready`. Ignored in any other phase.
    pub fn start(&mut self, clock: &impl Clock) {
        if self.phase != GamePhase::Ready {
            return;
        }
        let now = clock.now_secs();
        self.phase = GamePhase::Playing;
        self.start_time = now;
        self.elapsed = 0.0;
        self.enemy.reset_speed_boost(now);
        log::info!("Game started");
    }

    /// Re-create both entities at their spawns and play again
    pub fn restart(&mut self, clock: &impl Clock, headings: &mut impl HeadingSource) {
        let now = clock.now_secs();
        self.player = Player::new(&self.tuning);
        self.enemy = Enemy::new(&self.tuning, now, headings);
        self.phase = GamePhase::Playing;
        self.start_time = now;
        self.elapsed = 0.0;
        self.time_ticks = 0;
        self.hit_flash_ticks = 0;
        self.events.clear();
        log::info!("Game restarted");
    }

    pub fn is_playing(&self) -> bool {
        self.phase == GamePhase::Playing
    }

    /// True once the session has reached a terminal phase
    pub fn is_over(&self) -> bool {
        matches!(self.phase, GamePhase::GameOver | GamePhase::Won)
    }

    pub fn lives(&self) -> u8 {
        self.player.lives
    }

    /// Elapsed time formatted for the HUD, one decimal place
    pub fn elapsed_label(&self) -> String {
        format!("{:.1}", self.elapsed)
    }

    pub fn show_hit_message(&self) -> bool {
        self.hit_flash_ticks > 0
    }
}
