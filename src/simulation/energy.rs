//! System energy diagnostics.
//!
//! Read-only queries used for validation and display; nothing here
//! mutates the system, and nothing in the tick loop depends on them.

use crate::simulation::params::{Parameters, World};
use crate::simulation::states::System;

/// Kinetic, potential, and total mechanical energy of the system.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Energy {
    pub kinetic: f64,
    pub potential: f64,
    pub total: f64,
}

/// Total energy under the periodic metric.
///
/// Kinetic: sum of 1/2 m |v|^2 over all bodies. Potential: sum over
/// unordered pairs of -G m1 m2 / (d + softening), with d the
/// minimum-image distance. The softening enters the linear distance
/// here, mirroring the softened force law.
pub fn total_energy(sys: &System, world: &World, params: &Parameters) -> Energy {
    let kinetic: f64 = sys.bodies.iter().map(|b| b.kinetic_energy()).sum();

    let mut potential = 0.0;
    let n = sys.bodies.len();
    for i in 0..n {
        for j in (i + 1)..n {
            let bi = &sys.bodies[i];
            let bj = &sys.bodies[j];
            let d = world.min_image(bj.x - bi.x).norm() + params.softening;
            if d > 0.0 {
                potential -= params.G * bi.m * bj.m / d;
            }
        }
    }

    Energy {
        kinetic,
        potential,
        total: kinetic + potential,
    }
}
