//! Timing sweeps for the force loop and the full tick.
//!
//! Body placements are deterministic sin/cos scatters so runs are
//! comparable without pulling in a RNG.

use std::time::Instant;

use crate::simulation::collisions::merge_overlaps;
use crate::simulation::forces::{AccelSet, NewtonianGravity};
use crate::simulation::integrator::leapfrog_step;
use crate::simulation::params::{Parameters, World};
use crate::simulation::states::{Body, NVec2, System};

fn build_system(n: usize, world: &World) -> System {
    let mut bodies = Vec::with_capacity(n);

    for i in 0..n {
        let i_f = i as f64;
        // deterministic positions, no rand needed
        let x = NVec2::new(
            (i_f * 0.37).sin() * world.width * 0.45,
            (i_f * 0.13).cos() * world.height * 0.45,
        );
        let v = NVec2::zeros();

        let body = Body::new(i as u64, x, v, 1.0).expect("bench body is valid");
        bodies.push(body);
    }

    System { bodies, t: 0.0 }
}

pub fn bench_gravity() {
    // Different system sizes to test
    let ns = [200, 400, 800, 1600, 3200];
    let world = World::new(1000.0, 1000.0).expect("bench world is valid");

    for n in ns {
        let sys = build_system(n, &world);
        let mut out = vec![NVec2::zeros(); n];

        let gravity = AccelSet::new().with(NewtonianGravity {
            G: 9.8,
            softening: 0.1,
        });

        // Warm up
        gravity.accumulate_accels(&sys, &world, &mut out);

        let t0 = Instant::now();
        gravity.accumulate_accels(&sys, &world, &mut out);
        let dt = t0.elapsed().as_secs_f64();

        println!("N = {n:5}, force eval = {dt:8.6} s");
    }
}

pub fn bench_step() {
    let ns = [200, 400, 800, 1600];
    let steps = 10;
    let world = World::new(1000.0, 1000.0).expect("bench world is valid");
    let params = Parameters::default();

    for n in ns {
        let mut sys = build_system(n, &world);
        let forces = AccelSet::new().with(NewtonianGravity {
            G: params.G,
            softening: params.softening,
        });

        // Prime the stored accelerations the way the engine does before
        // its first tick
        let mut out = vec![NVec2::zeros(); sys.bodies.len()];
        forces.accumulate_accels(&sys, &world, &mut out);
        for (b, a) in sys.bodies.iter_mut().zip(out.iter()) {
            b.a = *a;
        }

        let t0 = Instant::now();
        for _ in 0..steps {
            leapfrog_step(&mut sys, &forces, &world, &params);
            merge_overlaps(&mut sys, &world, params.trail_cap);
        }
        let dt = t0.elapsed().as_secs_f64() / steps as f64;

        println!(
            "N = {n:5}, step = {dt:8.6} s (ends with {} bodies)",
            sys.bodies.len()
        );
    }
}
