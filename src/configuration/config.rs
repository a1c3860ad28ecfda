//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! simulation scenario. A scenario consists of:
//!
//! - [`WorldConfig`]      – toroidal world extent
//! - [`ParametersConfig`] – numerical parameters and physical constants
//! - [`BodyConfig`]       – initial state for each explicitly placed body
//! - [`ScatterConfig`]    – optional randomly placed population
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! An example scenario YAML matching these types:
//!
//! ```yaml
//! world:
//!   width: 1000.0           # left/right edges are identified
//!   height: 1000.0          # top/bottom edges are identified
//!
//! parameters:
//!   t_end: 120.0            # total simulation time
//!   h0: 0.1                 # fixed step size
//!   G: 9.8                  # gravitational constant
//!   softening: 0.1          # softening added to squared separation
//!   trail_cap: 120          # max recorded trail entries per body
//!   seed: 42                # deterministic seed for the scatter
//!
//! bodies:
//!   - x: [ -50.0, 0.0 ]
//!     v: [ 0.0, 0.0 ]
//!     m: 100.0
//!   - x: [ 50.0, 0.0 ]
//!     v: [ 0.0, 0.0 ]
//!     m: 100.0
//!
//! scatter:
//!   count: 24               # extra bodies layered over the explicit list
//!   mass: 100.0
//!   max_speed: 1.0
//! ```
//!
//! Bodies carry no radius: the engine derives it from mass, always.

use serde::Deserialize;

/// Toroidal world extent.
#[derive(Deserialize, Debug, Clone)]
pub struct WorldConfig {
    pub width: f64, // world width
    pub height: f64, // world height
}

/// Global numerical and physical parameters for a scenario.
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    pub t_end: f64,     // headless run duration
    pub h0: f64,        // fixed step size
    pub G: f64,         // gravitational constant
    pub softening: f64, // softening - bounds forces at very small separations
    #[serde(default = "default_trail_cap")]
    pub trail_cap: usize, // max trail entries per body, sentinels included
    #[serde(default)]
    pub seed: u64, // deterministic seed to make scatter runs reproducible
}

fn default_trail_cap() -> usize {
    120
}

/// Configuration for a single body's initial state.
#[derive(Deserialize, Debug)]
pub struct BodyConfig {
    pub x: [f64; 2], // initial position in simulation units
    pub v: [f64; 2], // initial velocity in simulation units per time unit
    pub m: f64,      // mass of the body; the radius is derived from it
}

/// Extra randomly placed bodies layered over the explicit list.
#[derive(Deserialize, Debug)]
pub struct ScatterConfig {
    pub count: usize, // how many bodies to scatter
    pub mass: f64,    // mass given to each scattered body
    #[serde(default = "default_max_speed")]
    pub max_speed: f64, // velocity components drawn from [-max_speed, max_speed]
}

fn default_max_speed() -> f64 {
    1.0
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug)]
pub struct ScenarioConfig {
    pub world: WorldConfig, // toroidal world extent
    pub parameters: ParametersConfig, // numerical parameters and constants
    #[serde(default)]
    pub bodies: Vec<BodyConfig>, // explicitly placed initial bodies
    #[serde(default)]
    pub scatter: Option<ScatterConfig>, // optional random population
}
