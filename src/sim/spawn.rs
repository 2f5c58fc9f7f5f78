//! Time-driven missile scheduling
//!
//! The wall-clock side of the simulation: the 1 Hz entry point that advances
//! elapsed time, ramps difficulty and grows the missile population, plus the
//! per-frame missile advance/recycle used by the frame tick.

use crate::consts::*;
use crate::sim::state::GameState;

/// Advance the real-time second counter.
///
/// Driven by the host from its own 1 Hz timer, independent of
/// [`crate::sim::frame_tick`] and the display refresh. Every 30 elapsed
/// seconds the global fall multiplier steps up; every 60, one missile joins
/// the wave. A crash resets the counter and both ramps restart from it.
pub fn second_tick(state: &mut GameState) {
    state.elapsed_seconds += 1;

    if state.elapsed_seconds % DIFFICULTY_INTERVAL_SECS == 0 {
        state.difficulty += DIFFICULTY_STEP;
        log::debug!(
            "difficulty up to {:.2} at {}s",
            state.difficulty,
            state.elapsed_seconds
        );
    }

    if state.elapsed_seconds % SPAWN_INTERVAL_SECS == 0 {
        state.spawn_missile();
        log::info!(
            "missile wave grown to {} at {}s",
            state.missiles.len(),
            state.elapsed_seconds
        );
    }
}

/// Advance every missile one frame and recycle the ones that have left the
/// canvas bottom. Recycling repositions in place; the wave never shrinks
/// here.
pub(crate) fn update_missiles(state: &mut GameState) {
    let difficulty = state.difficulty;
    let rng = &mut state.rng;
    let config = &state.config;
    for missile in &mut state.missiles {
        missile.fall(difficulty);
        if missile.below_canvas(config) {
            missile.recycle(rng, config);
        }
    }
}
