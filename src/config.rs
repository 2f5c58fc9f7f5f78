//! Simulation configuration and init-time validation
//!
//! The canvas geometry and timing knobs live here; motion constants stay
//! compile-time in [`crate::consts`]. A config is checked once when the game
//! is constructed. Nothing in the simulation itself can fail after that.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Runtime simulation configuration.
///
/// Defaults to the canonical 600x600 / 60 Hz arcade setup; a host may
/// override any subset before constructing the game.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    pub canvas_width: f32,
    pub canvas_height: f32,
    /// Frame ticks per second the respawn cooldown is measured against
    pub tick_rate: u32,
    /// Post-crash invulnerability window in seconds
    pub respawn_seconds: f32,
    /// Missile population at game start (and after crash truncation)
    pub initial_missiles: usize,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            canvas_width: CANVAS_WIDTH,
            canvas_height: CANVAS_HEIGHT,
            tick_rate: TICK_RATE,
            respawn_seconds: RESPAWN_SECONDS,
            initial_missiles: INITIAL_MISSILES,
        }
    }
}

impl SimConfig {
    /// Check the init-time preconditions.
    ///
    /// The ship's flight band needs `canvas_height >= 3 * ship_height`
    /// (hull top between one and minus-two hull-heights of the edges), and
    /// at least one spawn column has to fit the canvas width.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.canvas_width <= 0.0 || self.canvas_height <= 0.0 {
            return Err(ConfigError::NonPositiveCanvas {
                width: self.canvas_width,
                height: self.canvas_height,
            });
        }
        if self.tick_rate == 0 {
            return Err(ConfigError::ZeroTickRate);
        }
        if self.respawn_seconds < 0.0 {
            return Err(ConfigError::NegativeRespawn {
                seconds: self.respawn_seconds,
            });
        }
        if self.canvas_height < SHIP_HEIGHT * 3.0 {
            return Err(ConfigError::CanvasTooShort {
                height: self.canvas_height,
                required: SHIP_HEIGHT * 3.0,
            });
        }
        if self.canvas_width < SPAWN_GRID {
            return Err(ConfigError::CanvasTooNarrow {
                width: self.canvas_width,
                required: SPAWN_GRID,
            });
        }
        Ok(())
    }

    /// Respawn cooldown expressed in frame ticks.
    #[inline]
    pub fn cooldown_ticks(&self) -> u64 {
        (self.respawn_seconds * self.tick_rate as f32) as u64
    }
}

/// Init-time precondition violations.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Canvas dimensions must both be strictly positive.
    NonPositiveCanvas { width: f32, height: f32 },
    /// The respawn cooldown is measured in frame ticks; a zero tick rate
    /// would make it undefined.
    ZeroTickRate,
    /// A negative invulnerability window has no meaning.
    NegativeRespawn { seconds: f32 },
    /// Canvas too short for the ship's vertical flight band.
    CanvasTooShort { height: f32, required: f32 },
    /// Canvas too narrow to fit one missile spawn column.
    CanvasTooNarrow { width: f32, required: f32 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NonPositiveCanvas { width, height } => {
                write!(f, "canvas dimensions must be positive, got {width}x{height}")
            }
            ConfigError::ZeroTickRate => write!(f, "tick rate must be at least 1 Hz"),
            ConfigError::NegativeRespawn { seconds } => {
                write!(f, "respawn window must be non-negative, got {seconds}s")
            }
            ConfigError::CanvasTooShort { height, required } => write!(
                f,
                "canvas height {height} cannot hold the ship's flight band (need >= {required})"
            ),
            ConfigError::CanvasTooNarrow { width, required } => write!(
                f,
                "canvas width {width} cannot fit a missile spawn column (need >= {required})"
            ),
        }
    }
}

impl std::error::Error for ConfigError {}
