//! Per-frame simulation tick
//!
//! Orchestrates one frame in fixed order: input edges, respawn cooldown,
//! ship motion, missile motion, collision, crash handling. The 1 Hz
//! wall-clock side lives in [`crate::sim::spawn`].

use crate::consts::RELAUNCH_KICK;
use crate::sim::collision;
use crate::sim::spawn;
use crate::sim::state::{Attitude, GamePhase, GameState, LateralDirection};

/// Input for a single frame tick (deterministic)
///
/// `left`/`right`/`thrust` are held levels sampled from the input source;
/// the `*_pressed`/`*_released` flags are one-shot key-event edges the host
/// clears after each tick.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    pub thrust: bool,
    /// Left key went down this frame: latches the drift direction
    pub left_pressed: bool,
    /// Right key went down this frame: latches the drift direction
    pub right_pressed: bool,
    /// Thrust key came up this frame: triggers the relaunch kick
    pub thrust_released: bool,
}

/// Advance the game state by one frame tick.
pub fn frame_tick(state: &mut GameState, input: &TickInput) {
    state.frame += 1;

    // Key-event edges first: they happened between the previous frame and
    // this one.
    if input.left_pressed {
        state.ship.lateral_direction = LateralDirection::Left;
    }
    if input.right_pressed {
        state.ship.lateral_direction = LateralDirection::Right;
    }
    if input.thrust_released {
        state.ship.vertical_speed = RELAUNCH_KICK;
    }

    state.ship.attitude = if input.left {
        Attitude::TurningLeft
    } else if input.right {
        Attitude::TurningRight
    } else {
        Attitude::Neutral
    };
    state.ship.thrusting = input.thrust;

    // Cooldown resolves before collision so the ship turns collidable on
    // the exact frame the countdown reaches zero.
    if state.phase == GamePhase::Crashed && state.frame >= state.respawn_frame() {
        state.phase = GamePhase::Flying;
        log::info!("respawned at frame {}", state.frame);
    }

    state.ship.update_vertical(input.thrust, &state.config);
    state
        .ship
        .update_lateral(input.left, input.right, &state.config);

    spawn::update_missiles(state);

    // First hit in list order wins; the rest are not checked this tick.
    if state.phase == GamePhase::Flying
        && collision::first_hit(&state.ship, &state.missiles).is_some()
    {
        state.crash();
    }
}
