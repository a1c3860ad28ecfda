//! Toroidal boundary wrap.
//!
//! Positions live in `[-extent/2, extent/2]` on each axis; crossing an
//! edge re-enters on the opposite side. Wrap is applied one body at a
//! time and reports whether it fired so the integrator can break the
//! trail at the seam.

use crate::simulation::params::World;
use crate::simulation::states::{Body, NVec2};

/// Wrap a point back into range, at most one extent per axis.
/// Returns the wrapped point and whether any axis wrapped.
pub fn wrap_point(mut p: NVec2, world: &World) -> (NVec2, bool) {
    let mut wrapped = false;
    if p.x < -world.width / 2.0 {
        p.x += world.width;
        wrapped = true;
    } else if p.x > world.width / 2.0 {
        p.x -= world.width;
        wrapped = true;
    }
    if p.y < -world.height / 2.0 {
        p.y += world.height;
        wrapped = true;
    } else if p.y > world.height / 2.0 {
        p.y -= world.height;
        wrapped = true;
    }
    (p, wrapped)
}

/// Wrap a single body's position; no cross-body effects.
pub fn wrap_body(body: &mut Body, world: &World) -> bool {
    let (p, wrapped) = wrap_point(body.x, world);
    body.x = p;
    wrapped
}
