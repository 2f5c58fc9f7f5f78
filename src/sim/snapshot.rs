//! Read-only renderer interface
//!
//! Plain data handed to the external renderer once per frame. Everything is
//! `Serialize` so a host can ship a frame across a process or language
//! boundary unchanged.

use serde::Serialize;

use crate::sim::state::{Attitude, GamePhase, GameState};

/// Ship pose and visual tags for one frame
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ShipView {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub attitude: Attitude,
    pub thrusting: bool,
}

/// Missile pose for one frame
#[derive(Debug, Clone, Copy, Serialize)]
pub struct MissileView {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// Everything the renderer needs to draw one frame
#[derive(Debug, Clone, Serialize)]
pub struct FrameSnapshot {
    pub frame: u64,
    pub ship: ShipView,
    pub missiles: Vec<MissileView>,
    pub elapsed_seconds: u64,
    pub difficulty: f32,
    pub collision_count: u32,
    /// True while the invulnerability window is active
    pub crashed: bool,
    /// Seconds left on the respawn countdown, zero outside the window
    pub respawn_countdown: f32,
}

impl GameState {
    /// Capture the per-frame snapshot for the renderer.
    pub fn snapshot(&self) -> FrameSnapshot {
        FrameSnapshot {
            frame: self.frame,
            ship: ShipView {
                x: self.ship.pos.x,
                y: self.ship.pos.y,
                width: self.ship.width,
                height: self.ship.height,
                attitude: self.ship.attitude,
                thrusting: self.ship.thrusting,
            },
            missiles: self
                .missiles
                .iter()
                .map(|m| MissileView {
                    x: m.pos.x,
                    y: m.pos.y,
                    width: m.width,
                    height: m.height,
                })
                .collect(),
            elapsed_seconds: self.elapsed_seconds,
            difficulty: self.difficulty,
            collision_count: self.collision_count,
            crashed: self.phase == GamePhase::Crashed,
            respawn_countdown: self.respawn_countdown(),
        }
    }
}
