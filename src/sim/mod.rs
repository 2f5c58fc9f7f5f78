//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure and
//! deterministic:
//! - Two fixed entry points only: [`frame_tick`] per display frame and
//!   [`second_tick`] per wall-clock second
//! - Seeded RNG only
//! - Stable iteration order (missile list order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod snapshot;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{first_hit, ship_hits_missile};
pub use snapshot::{FrameSnapshot, MissileView, ShipView};
pub use spawn::second_tick;
pub use state::{Attitude, GamePhase, GameState, LateralDirection, Missile, Ship};
pub use tick::{TickInput, frame_tick};
