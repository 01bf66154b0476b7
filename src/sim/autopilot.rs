//! Demo autopilot
//!
//! Steers the player away from the enemy so headless and attract-mode runs
//! exercise the full simulation without a human at the controls.

use glam::Vec2;

use super::state::GameState;
use super::tick::TickInput;
use super::walls::WallSet;

/// Start fleeing once the enemy is this close, even if it is not chasing
const FLEE_DISTANCE: f32 = 260.0;
/// How far ahead the pointer target is placed
const LEAD_DISTANCE: f32 = 80.0;
/// Ticks of movement probed for wall contact when picking an escape direction
const PROBE_TICKS: f32 = 4.0;

/// Pointer input that moves the player away from the enemy.
///
/// Tries straight away first, then the two perpendiculars, then the
/// diagonals between them, picking the first whose probe point is clear.
/// Returns an idle input when the enemy is far and not chasing.
pub fn flee_input(state: &GameState, walls: &WallSet) -> TickInput {
    let player = &state.player;
    let enemy = &state.enemy;

    let away = player.pos - enemy.pos;
    if !enemy.is_chasing() && away.length() > FLEE_DISTANCE {
        return TickInput::default();
    }

    let away = away.try_normalize().unwrap_or(Vec2::X);
    let left = away.perp();
    let candidates = [
        away,
        left,
        -left,
        (away + left).normalize(),
        (away - left).normalize(),
    ];

    let probe_reach = player.speed * PROBE_TICKS;
    let escape = candidates
        .into_iter()
        .find(|dir| !walls.blocks_circle(player.pos + *dir * probe_reach, player.radius))
        .unwrap_or(away);

    let target = state.tuning.clamp_to_arena(player.pos + escape * LEAD_DISTANCE);
    TickInput {
        keys: Default::default(),
        target: Some(target),
    }
}
