pub mod simulation;
pub mod configuration;
pub mod error;
pub mod benchmark;

pub use simulation::states::{Body, BodyView, NVec2, System, TrailSample};
pub use simulation::params::{Parameters, World};
pub use simulation::forces::{AccelSet, Acceleration, NewtonianGravity};
pub use simulation::integrator::leapfrog_step;
pub use simulation::boundary::{wrap_body, wrap_point};
pub use simulation::collisions::merge_overlaps;
pub use simulation::energy::{total_energy, Energy};
pub use simulation::engine::Simulation;
pub use simulation::scenario::build_simulation;

pub use configuration::config::{
    BodyConfig, ParametersConfig, ScatterConfig, ScenarioConfig, WorldConfig,
};

pub use error::{Error, Result};

pub use benchmark::benchmark::{bench_gravity, bench_step};
