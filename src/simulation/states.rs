//! Core state types for the toroidal N-body simulation.
//!
//! Defines the body/system structs:
//! - `Body` holds position, velocity, the acceleration carried between
//!   steps, mass, the mass-derived radius, and the recorded trail
//! - `System` holds the list of bodies and the current simulation time `t`

use std::collections::VecDeque;

use nalgebra::Vector2;

use crate::error::{Error, Result};

pub type NVec2 = Vector2<f64>;

/// Smallest radius a body can have; very light bodies still get a
/// non-degenerate collision disc.
pub const MIN_RADIUS: f64 = 2.0;

/// The radius is a function of mass, never stored independently.
#[inline]
pub fn radius_from_mass(m: f64) -> f64 {
    m.sqrt().max(MIN_RADIUS)
}

/// One recorded path entry. `None` marks a wrap discontinuity so a
/// renderer does not draw a line across the seam.
pub type TrailSample = Option<NVec2>;

#[derive(Debug, Clone)]
pub struct Body {
    pub id: u64, // stable identity, survives merges
    pub x: NVec2, // position
    pub v: NVec2, // velocity
    pub a: NVec2, // acceleration from the latest force evaluation
    pub m: f64, // mass
    pub radius: f64, // always radius_from_mass(m)
    pub trail: VecDeque<TrailSample>, // recent positions plus wrap sentinels
}

impl Body {
    /// Create a body from caller-supplied initial state.
    ///
    /// Rejects non-positive or non-finite mass and non-finite position or
    /// velocity components.
    pub fn new(id: u64, x: NVec2, v: NVec2, m: f64) -> Result<Self> {
        if !m.is_finite() || m <= 0.0 {
            return Err(Error::InvalidBody(format!(
                "mass must be finite and > 0, got {m}"
            )));
        }
        if !(x.x.is_finite() && x.y.is_finite()) {
            return Err(Error::InvalidBody("position must be finite".into()));
        }
        if !(v.x.is_finite() && v.y.is_finite()) {
            return Err(Error::InvalidBody("velocity must be finite".into()));
        }
        Ok(Self {
            id,
            x,
            v,
            a: NVec2::zeros(),
            m,
            radius: radius_from_mass(m),
            trail: VecDeque::new(),
        })
    }

    /// Re-derive the radius after a mass change.
    #[inline]
    pub fn update_radius(&mut self) {
        self.radius = radius_from_mass(self.m);
    }

    /// Kinetic energy 1/2 m |v|^2.
    #[inline]
    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.m * self.v.norm_squared()
    }

    /// Append a trail entry, evicting from the front once `cap` is
    /// exceeded. Sentinels count toward the cap like position samples.
    pub fn push_trail(&mut self, sample: TrailSample, cap: usize) {
        self.trail.push_back(sample);
        while self.trail.len() > cap {
            self.trail.pop_front();
        }
    }
}

#[derive(Debug, Clone)]
pub struct System {
    pub bodies: Vec<Body>, // collection of bodies
    pub t: f64, // time
}

impl System {
    pub fn new() -> Self {
        Self {
            bodies: Vec::new(),
            t: 0.0,
        }
    }
}

impl Default for System {
    fn default() -> Self {
        Self::new()
    }
}

/// Owned read-only view of one body, handed to renderers.
///
/// All fields are copies of the live state; a caller can hold a view
/// across later steps without touching engine internals.
#[derive(Debug, Clone)]
pub struct BodyView {
    pub id: u64,
    pub position: NVec2,
    pub radius: f64,
    pub trail: Vec<TrailSample>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_body_ok() -> Result<()> {
        let b = Body::new(3, NVec2::new(1.0, -2.0), NVec2::new(0.5, 0.0), 100.0)?;
        assert_eq!(b.id, 3);
        assert_eq!(b.m, 100.0);
        assert_eq!(b.radius, 10.0);
        assert_eq!(b.a, NVec2::zeros());
        assert!(b.trail.is_empty());
        Ok(())
    }

    #[test]
    fn nonpositive_mass_rejected() {
        assert!(Body::new(0, NVec2::zeros(), NVec2::zeros(), 0.0).is_err());
        assert!(Body::new(0, NVec2::zeros(), NVec2::zeros(), -5.0).is_err());
        assert!(Body::new(0, NVec2::zeros(), NVec2::zeros(), f64::NAN).is_err());
    }

    #[test]
    fn nonfinite_state_rejected() {
        let nan = NVec2::new(f64::NAN, 0.0);
        assert!(Body::new(0, nan, NVec2::zeros(), 1.0).is_err());
        assert!(Body::new(0, NVec2::zeros(), nan, 1.0).is_err());
    }

    #[test]
    fn radius_has_floor() {
        // sqrt(1) = 1 is below the floor; sqrt(100) = 10 is above it
        assert_eq!(radius_from_mass(1.0), MIN_RADIUS);
        assert_eq!(radius_from_mass(100.0), 10.0);
    }

    #[test]
    fn radius_follows_mass() -> Result<()> {
        let mut b = Body::new(0, NVec2::zeros(), NVec2::zeros(), 100.0)?;
        b.m = 400.0;
        b.update_radius();
        assert_eq!(b.radius, 20.0);
        Ok(())
    }

    #[test]
    fn kinetic_energy_computed() -> Result<()> {
        // v = (3,4), |v|^2 = 25; KE = 0.5 * 2 * 25
        let b = Body::new(0, NVec2::zeros(), NVec2::new(3.0, 4.0), 2.0)?;
        assert!((b.kinetic_energy() - 25.0).abs() < 1e-12);
        Ok(())
    }

    #[test]
    fn trail_evicts_fifo_at_cap() -> Result<()> {
        let mut b = Body::new(0, NVec2::zeros(), NVec2::zeros(), 4.0)?;
        for i in 0..5 {
            b.push_trail(Some(NVec2::new(i as f64, 0.0)), 3);
        }
        assert_eq!(b.trail.len(), 3);
        // Oldest two samples were dropped
        assert_eq!(b.trail[0], Some(NVec2::new(2.0, 0.0)));
        Ok(())
    }
}
