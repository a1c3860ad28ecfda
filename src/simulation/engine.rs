//! Simulation engine facade.
//!
//! Owns the world geometry, parameters, body set, and force terms, and
//! exposes the operations the surrounding UI layer drives: body
//! creation, stepping, snapshotting, and the energy query. The engine is
//! the sole owner of the body set; components borrow it one call at a
//! time, so a tick is a plain sequence of in-place mutations.

use log::debug;

use crate::error::Result;
use crate::simulation::collisions::merge_overlaps;
use crate::simulation::energy::{total_energy, Energy};
use crate::simulation::forces::{AccelSet, NewtonianGravity};
use crate::simulation::integrator::leapfrog_step;
use crate::simulation::params::{Parameters, World};
use crate::simulation::states::{Body, BodyView, NVec2, System};

pub struct Simulation {
    world: World,
    parameters: Parameters,
    system: System,
    forces: AccelSet,
    next_id: u64,
}

impl Simulation {
    /// Build an empty simulation for the given world and parameters.
    pub fn new(world: World, parameters: Parameters) -> Result<Self> {
        parameters.validate()?;

        // Forces: construct an AccelSet and register Newtonian gravity
        let forces = AccelSet::new().with(NewtonianGravity {
            G: parameters.G,
            softening: parameters.softening,
        });

        Ok(Self {
            world,
            parameters,
            system: System::new(),
            forces,
            next_id: 0,
        })
    }

    /// Add a body with caller-supplied initial state; returns its handle.
    ///
    /// Accelerations are re-evaluated immediately so the newcomer takes
    /// part in the next step's opening half-kick.
    pub fn create_body(&mut self, x: f64, y: f64, vx: f64, vy: f64, mass: f64) -> Result<u64> {
        let id = self.next_id;
        let body = Body::new(id, NVec2::new(x, y), NVec2::new(vx, vy), mass)?;
        self.next_id += 1;
        self.system.bodies.push(body);
        self.recompute_accels();
        debug!("created body {id} with mass {mass}");
        Ok(id)
    }

    /// Advance one fixed tick: integrate, then resolve overlaps.
    pub fn step(&mut self) {
        leapfrog_step(&mut self.system, &self.forces, &self.world, &self.parameters);
        let merges = merge_overlaps(&mut self.system, &self.world, self.parameters.trail_cap);
        if merges > 0 {
            debug!(
                "t={:.3}: {merges} merge(s), {} bodies remain",
                self.system.t,
                self.system.bodies.len()
            );
        }
    }

    /// Owned copies of (id, position, radius, trail) for drawing.
    /// Later steps cannot corrupt a snapshot already handed out.
    pub fn snapshot(&self) -> Vec<BodyView> {
        self.system
            .bodies
            .iter()
            .map(|b| BodyView {
                id: b.id,
                position: b.x,
                radius: b.radius,
                trail: b.trail.iter().copied().collect(),
            })
            .collect()
    }

    /// Kinetic/potential/total energy at the current tick boundary.
    pub fn energy(&self) -> Energy {
        total_energy(&self.system, &self.world, &self.parameters)
    }

    /// Current simulation time.
    pub fn time(&self) -> f64 {
        self.system.t
    }

    /// Number of live bodies.
    pub fn len(&self) -> usize {
        self.system.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.system.bodies.is_empty()
    }

    /// Shared view of the live bodies (tests and diagnostics).
    pub fn bodies(&self) -> &[Body] {
        &self.system.bodies
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    /// Overwrite every body's stored acceleration from a fresh force
    /// evaluation at the current positions.
    fn recompute_accels(&mut self) {
        let mut out = vec![NVec2::zeros(); self.system.bodies.len()];
        self.forces
            .accumulate_accels(&self.system, &self.world, &mut out);
        for (b, a) in self.system.bodies.iter_mut().zip(out.iter()) {
            b.a = *a;
        }
    }
}
