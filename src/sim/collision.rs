//! Ship/missile overlap detection
//!
//! The overlap rule is edge containment, not interval intersection: an axis
//! matches only when one of the ship's edges lands inside the missile's
//! span on that axis. A missile body strictly inside the ship's horizontal
//! span therefore does NOT register. Gameplay feel depends on this exact
//! rule; keep it.

use crate::sim::state::{Missile, Ship};

/// True when `v` lies inside `[lo, hi]`, both ends inclusive.
#[inline]
fn within(v: f32, lo: f32, hi: f32) -> bool {
    v >= lo && v <= hi
}

/// Edge-containment overlap test between the ship and one missile.
///
/// Horizontal spans are half-width bands around each center. Vertically the
/// ship's span hangs below its top edge while the missile's extends up from
/// the nose.
pub fn ship_hits_missile(ship: &Ship, missile: &Missile) -> bool {
    let ship_left = ship.pos.x - ship.width / 2.0;
    let ship_right = ship.pos.x + ship.width / 2.0;
    let missile_left = missile.pos.x - missile.width / 2.0;
    let missile_right = missile.pos.x + missile.width / 2.0;

    let x_overlap = within(ship_left, missile_left, missile_right)
        || within(ship_right, missile_left, missile_right);

    let ship_top = ship.pos.y;
    let ship_bottom = ship.pos.y + ship.height;
    let missile_tail = missile.pos.y - missile.height;
    let missile_nose = missile.pos.y;

    let y_overlap = within(ship_top, missile_tail, missile_nose)
        || within(ship_bottom, missile_tail, missile_nose);

    x_overlap && y_overlap
}

/// Index of the first missile overlapping the ship, in list order.
///
/// The caller stops at the first hit; later missiles are not checked on the
/// tick that crashes.
pub fn first_hit(ship: &Ship, missiles: &[Missile]) -> Option<usize> {
    missiles.iter().position(|m| ship_hits_missile(ship, m))
}
