//! Force / acceleration contributors for the N-body engine.
//!
//! Defines the acceleration trait and direct Newtonian gravity under
//! periodic (minimum-image) boundary conditions.

use crate::simulation::params::World;
use crate::simulation::states::{NVec2, System};

/// Collection of acceleration terms (gravity today, drag etc. later).
/// Each term implements [`Acceleration`] and their contributions are summed
/// into a single acceleration vector per body.
pub struct AccelSet {
    terms: Vec<Box<dyn Acceleration + Send + Sync>>,
}

impl AccelSet {
    /// Create an empty acceleration set.
    pub fn new() -> Self {
        Self { terms: Vec::new() }
    }

    /// Add an acceleration term.
    pub fn with<T>(mut self, term: T) -> Self
    where
        T: Acceleration + Send + Sync + 'static,
    {
        self.terms.push(Box::new(term));
        self
    }

    /// Compute total accelerations for all bodies in `sys`.
    /// - `out[i]` will be set to the sum of contributions from all terms;
    ///   the buffer is overwritten, never accumulated across calls.
    pub fn accumulate_accels(&self, sys: &System, world: &World, out: &mut [NVec2]) {
        // Zero buffer
        for a in out.iter_mut() {
            *a = NVec2::zeros();
        }
        // Iterate over all acceleration contributors
        for term in &self.terms {
            term.acceleration(sys, world, out);
        }
    }
}

/// Trait for acceleration sources operating on [`System`].
/// Implementations add their contribution into `out[i]` for each body.
pub trait Acceleration {
    fn acceleration(&self, sys: &System, world: &World, out: &mut [NVec2]);
}

/// Newtonian gravity with softening on a toroidal world.
/// Pair displacements take the minimum image, never the raw difference,
/// so a pair straddling the seam attracts across it.
pub struct NewtonianGravity {
    pub G: f64, // gravitational constant
    pub softening: f64, // added to squared separation before the square root
}

impl Acceleration for NewtonianGravity {
    fn acceleration(&self, sys: &System, world: &World, out: &mut [NVec2]) {
        let n = sys.bodies.len();
        if n == 0 { // No bodies, return
            return;
        }

        // Loop over each unordered pair (i, j) with i < j
        for i in 0..n {
            // bi: body i (left side of the pair)
            let bi = &sys.bodies[i];
            let xi = bi.x;      // position of body i
            let mi = bi.m;      // mass of body i

            for j in (i + 1)..n {
                // bj: body j (right side of the pair)
                let bj = &sys.bodies[j];
                let mj = bj.m;  // mass of body j

                // r is the shortest displacement from i to j on the torus.
                // If r points from i to j, then i feels a pull along +r,
                // j feels a pull along -r
                let r = world.min_image(bj.x - xi);

                // Softened squared separation:
                // d2 = |r|^2 + softening
                // The softening goes in before the square root so the
                // force stays bounded as the pair closes in
                let d2 = r.norm_squared() + self.softening;
                if d2 == 0.0 {
                    // Coincident bodies with zero softening: there is no
                    // direction to pull along, so the pair contributes
                    // nothing instead of dividing by zero
                    continue;
                }

                // 1 / |r_soft|
                let inv_r = d2.sqrt().recip();

                // 1 / |r_soft|^3
                // (this is what appears in the Newtonian acceleration
                // formula: a = G m r / |r|^3)
                let inv_r3 = inv_r * inv_r * inv_r;

                // coef = G / |r_soft|^3
                let coef = self.G * inv_r3;

                // Apply Newton's law once per pair, equal and opposite:
                // a_i +=  G * m_j * r / |r_soft|^3
                // a_j += -G * m_i * r / |r_soft|^3
                out[i] += coef * mj * r;
                out[j] -= coef * mi * r;
            }
        }
    }
}
