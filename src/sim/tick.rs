//! Per-frame simulation tick
//!
//! One call advances the session by one display frame: player, then enemy,
//! then the catch check, then the survival timer.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geometry::circle_circle_overlap;
use super::player::DirectionKeys;
use super::rng::HeadingSource;
use super::state::{GameEvent, GamePhase, GameState};
use super::walls::WallSet;
use crate::platform::Clock;

/// Input intents held by the input collaborator for this tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TickInput {
    /// Held directional keys
    pub keys: DirectionKeys,
    /// Pointer/touch follow target, `None` when the pointer left the arena
    pub target: Option<Vec2>,
}

/// Advance the session by one frame. Outside `Playing` this only clears
/// the previous tick's events.
pub fn tick(
    state: &mut GameState,
    input: &TickInput,
    walls: &WallSet,
    clock: &impl Clock,
    headings: &mut impl HeadingSource,
) {
    state.events.clear();
    if state.phase != GamePhase::Playing {
        return;
    }

    state.time_ticks += 1;
    state.hit_flash_ticks = state.hit_flash_ticks.saturating_sub(1);

    let now = clock.now_secs();
    state.elapsed = now - state.start_time;

    let bounds = Vec2::new(state.tuning.arena_width, state.tuning.arena_height);
    state.player.keys = input.keys;
    state.player.set_target(input.target, bounds);

    state.player.update(walls);

    let since_catch = state.enemy.seconds_since_catch(now);
    state
        .enemy
        .update(state.player.pos, since_catch, walls, headings);

    let caught = circle_circle_overlap(
        state.player.pos,
        state.player.radius,
        state.enemy.pos,
        state.enemy.radius,
    );
    if caught && state.player.hit() {
        state.enemy.reset_speed_boost(now);
        state.hit_flash_ticks = state.tuning.hit_message_ticks();
        state.events.push(GameEvent::Hit {
            lives_left: state.player.lives,
            elapsed: state.elapsed,
        });
        log::debug!("Player caught, {} lives left", state.player.lives);

        if state.player.lives == 0 {
            state.phase = GamePhase::GameOver;
            state.events.push(GameEvent::GameOver {
                elapsed: state.elapsed,
            });
            log::info!("Game over after {:.1}s", state.elapsed);
        }
    }

    if state.phase == GamePhase::Playing && state.elapsed >= state.tuning.win_time_secs {
        state.phase = GamePhase::Won;
        state.events.push(GameEvent::Won {
            elapsed: state.elapsed,
        });
        log::info!("Survived {:.1}s, player wins", state.elapsed);
    }
}
