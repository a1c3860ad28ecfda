//! Numerical parameters and world geometry for the simulation.
//!
//! `Parameters` holds runtime settings:
//! - integration step size and end time,
//! - gravitational constant and softening,
//! - trail cap and scatter seed
//!
//! `World` is the fixed toroidal extent. Its `min_image` is the single
//! source of periodic displacement, shared by forces, collisions, and
//! energy so no caller falls back to the raw Euclidean difference.

use crate::error::{Error, Result};
use crate::simulation::states::NVec2;

/// Fixed rectangular extent with left/right and top/bottom edges
/// identified.
#[derive(Debug, Clone, Copy)]
pub struct World {
    pub width: f64,
    pub height: f64,
}

impl World {
    pub fn new(width: f64, height: f64) -> Result<Self> {
        if !width.is_finite() || width <= 0.0 {
            return Err(Error::InvalidConfig(format!(
                "world width must be finite and > 0, got {width}"
            )));
        }
        if !height.is_finite() || height <= 0.0 {
            return Err(Error::InvalidConfig(format!(
                "world height must be finite and > 0, got {height}"
            )));
        }
        Ok(Self { width, height })
    }

    /// Minimum-image displacement: the shortest vector between two points
    /// on the torus, per axis `d -= round(d / extent) * extent`.
    #[inline]
    pub fn min_image(&self, mut d: NVec2) -> NVec2 {
        d.x -= (d.x / self.width).round() * self.width;
        d.y -= (d.y / self.height).round() * self.height;
        d
    }
}

/// Global numerical and physical parameters.
#[derive(Debug, Clone)]
pub struct Parameters {
    pub t_end: f64, // headless run duration
    pub h0: f64, // fixed step size
    pub G: f64, // gravitational constant
    pub softening: f64, // added to squared separation in the force law
    pub trail_cap: usize, // max trail entries per body, sentinels included
    pub seed: u64, // deterministic seed for scenario scatter
}

impl Parameters {
    /// Reject parameter combinations the integrator cannot run with.
    pub fn validate(&self) -> Result<()> {
        if !self.h0.is_finite() || self.h0 <= 0.0 {
            return Err(Error::InvalidConfig(format!(
                "timestep h0 must be finite and > 0, got {}",
                self.h0
            )));
        }
        if !self.t_end.is_finite() || self.t_end < 0.0 {
            return Err(Error::InvalidConfig(format!(
                "t_end must be finite and >= 0, got {}",
                self.t_end
            )));
        }
        if !self.G.is_finite() {
            return Err(Error::InvalidConfig("G must be finite".into()));
        }
        if !self.softening.is_finite() || self.softening < 0.0 {
            return Err(Error::InvalidConfig(format!(
                "softening must be finite and >= 0, got {}",
                self.softening
            )));
        }
        if self.trail_cap == 0 {
            return Err(Error::InvalidConfig("trail_cap must be >= 1".into()));
        }
        Ok(())
    }
}

impl Default for Parameters {
    /// Reference values of the original sandbox.
    fn default() -> Self {
        Self {
            t_end: 60.0,
            h0: 0.1,
            G: 9.8,
            softening: 0.1,
            trail_cap: 120,
            seed: 42,
        }
    }
}
