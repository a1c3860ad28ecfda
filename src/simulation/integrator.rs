//! Fixed-step leapfrog integrator for the toroidal N-body system.
//!
//! Kick-drift-kick (velocity-Verlet-equivalent): half velocity update
//! with the previous step's accelerations, full position drift, toroidal
//! wrap, force re-evaluation, second half kick, then trail bookkeeping.

use crate::simulation::boundary::wrap_body;
use crate::simulation::forces::AccelSet;
use crate::simulation::params::{Parameters, World};
use crate::simulation::states::{NVec2, System};

/// Advance the system by one step of `params.h0`.
///
/// The accelerations stored on the bodies must come from the previous
/// step's force evaluation (or the engine's initial one); the opening
/// half-kick consumes them before they are overwritten. Recomputing them
/// any earlier would break the symmetry of the scheme.
pub fn leapfrog_step(sys: &mut System, forces: &AccelSet, world: &World, params: &Parameters) {
    let dt = params.h0; // time step dt
    let half_dt = 0.5 * dt; // half step dt/2

    let n = sys.bodies.len();
    if n == 0 { // no bodies, just advance time
        sys.t += dt;
        return;
    }

    // Kick + drift:
    // v_n+1/2 = v_n + (dt/2) a_n
    // x_n+1   = x_n + dt v_n+1/2
    // a_n is the acceleration carried over from the previous step
    for b in sys.bodies.iter_mut() {
        b.v += half_dt * b.a;
        b.x += dt * b.v;
    }

    // Wrap every body back onto the torus, remembering who crossed a seam
    let mut crossed = vec![false; n];
    for (b, c) in sys.bodies.iter_mut().zip(crossed.iter_mut()) {
        *c = wrap_body(b, world);
    }

    // a_n+1 from the wrapped positions x_n+1
    let mut a_new = vec![NVec2::zeros(); n];
    forces.accumulate_accels(&*sys, world, &mut a_new);

    // Store the fresh accelerations and finish the velocity update:
    // v_n+1 = v_n+1/2 + (dt/2) a_n+1
    for (b, a) in sys.bodies.iter_mut().zip(a_new.iter()) {
        b.a = *a;
        b.v += half_dt * *a;
    }

    // Trail bookkeeping: a seam crossing gets a break sentinel first so
    // the pre- and post-wrap runs render as disconnected polylines
    let cap = params.trail_cap;
    for (b, c) in sys.bodies.iter_mut().zip(crossed.iter()) {
        if *c {
            b.push_trail(None, cap);
        }
        let x = b.x;
        b.push_trail(Some(x), cap);
    }

    // Increment the system time by one full step
    sys.t += dt;
}
