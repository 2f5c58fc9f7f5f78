//! Astro Dodge entry point
//!
//! Headless demo driver: runs a scripted session against the simulation
//! core and dumps the final renderer snapshot as JSON. A real host wires a
//! renderer and an input source to the library instead.

use astro_dodge::SimConfig;
use astro_dodge::consts::TICK_RATE;
use astro_dodge::sim::{GameState, TickInput, frame_tick, second_tick};

fn main() {
    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(0xA57D0);

    let mut state = match GameState::new(SimConfig::default(), seed) {
        Ok(state) => state,
        Err(err) => {
            log::error!("invalid config: {err}");
            std::process::exit(1);
        }
    };

    let seconds = 90u64;
    let tick_rate = TICK_RATE as u64;
    log::info!("running {seconds} scripted seconds at {TICK_RATE} Hz, seed {seed}");

    // Scripted pilot on a 12-second cycle: climb, glide, drift left, coast,
    // drift right, coast.
    for frame in 0..(seconds * tick_rate) {
        let second = frame / tick_rate;
        let phase = second % 12;
        let second_edge = frame % tick_rate == 0;

        let input = TickInput {
            thrust: phase < 2,
            thrust_released: phase == 2 && second_edge,
            left: (4..6).contains(&phase),
            left_pressed: phase == 4 && second_edge,
            right: (8..10).contains(&phase),
            right_pressed: phase == 8 && second_edge,
        };
        frame_tick(&mut state, &input);

        // The demo derives the wall-clock tick from the frame counter; a
        // real host drives it from an independent 1 Hz timer.
        if frame % tick_rate == tick_rate - 1 {
            second_tick(&mut state);
        }
    }

    let snapshot = state.snapshot();
    log::info!(
        "done: {} crashes, {} missiles active, difficulty {:.2}",
        snapshot.collision_count,
        snapshot.missiles.len(),
        snapshot.difficulty
    );
    if let Ok(json) = serde_json::to_string_pretty(&snapshot) {
        println!("{json}");
    }
}
