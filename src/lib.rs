//! Astro Dodge - a missile-dodging arcade game core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (motion, spawning, collisions, game state)
//! - `config`: Runtime configuration with init-time validation
//!
//! Rendering and input collection are external collaborators. A host feeds a
//! [`sim::TickInput`] into [`sim::frame_tick`] once per display frame, drives
//! [`sim::second_tick`] from its own 1 Hz wall-clock timer, and draws from
//! the [`sim::FrameSnapshot`] it takes back out each frame.

pub mod config;
pub mod sim;

pub use config::{ConfigError, SimConfig};
pub use sim::{FrameSnapshot, GameState, TickInput};

/// Game tuning constants
pub mod consts {
    /// Frame ticks per second the respawn cooldown is measured against
    pub const TICK_RATE: u32 = 60;
    /// Frame timestep at the target tick rate
    pub const SIM_DT: f32 = 1.0 / TICK_RATE as f32;

    /// Canvas defaults
    pub const CANVAS_WIDTH: f32 = 600.0;
    pub const CANVAS_HEIGHT: f32 = 600.0;

    /// Ship hull
    pub const SHIP_WIDTH: f32 = 20.0;
    pub const SHIP_HEIGHT: f32 = 30.0;

    /// Climb acceleration per tick while thrust is held
    pub const THRUST_ACCEL: f32 = 0.1;
    /// Glide slowdown per tick once thrust cuts out
    pub const GLIDE_DECAY: f32 = 0.007;
    /// Glide speed never decays below this
    pub const GLIDE_FLOOR: f32 = 0.7;
    /// Vertical speed forced on the thrust key-release edge
    pub const RELAUNCH_KICK: f32 = 2.0;

    /// Lateral acceleration per tick, left turn (the heavier side)
    pub const LEFT_ACCEL: f32 = 0.03;
    /// Lateral acceleration per tick, right turn
    pub const RIGHT_ACCEL: f32 = 0.15;
    /// Lateral float magnitude cap
    pub const FLOAT_MAX: f32 = 4.0;
    /// Lateral drift slowdown per tick with no key held
    pub const FLOAT_DECAY: f32 = 0.03;
    /// Coasting drift never decays below this
    pub const FLOAT_FLOOR: f32 = 0.7;

    /// Missile body
    pub const MISSILE_WIDTH: f32 = 16.0;
    pub const MISSILE_HEIGHT: f32 = 45.0;
    /// Per-missile fall rate range (inclusive)
    pub const FALL_SPEED_MIN: u8 = 1;
    pub const FALL_SPEED_MAX: u8 = 10;
    /// Missiles spawn on columns aligned to this grid
    pub const SPAWN_GRID: f32 = 40.0;

    /// Global fall multiplier at game start (and after a crash)
    pub const BASE_DIFFICULTY: f32 = 0.3;
    /// Difficulty increment applied on each ramp step
    pub const DIFFICULTY_STEP: f32 = 0.05;
    /// Elapsed seconds between difficulty steps
    pub const DIFFICULTY_INTERVAL_SECS: u64 = 30;
    /// Elapsed seconds between missile-population increments
    pub const SPAWN_INTERVAL_SECS: u64 = 60;

    /// Post-crash invulnerability window (seconds)
    pub const RESPAWN_SECONDS: f32 = 3.0;
    /// Missiles alive at game start (and after crash truncation)
    pub const INITIAL_MISSILES: usize = 3;
}
