//! Build fully-initialized simulations from configuration.
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces a ready
//! [`Simulation`]: world geometry, numerical parameters, the explicitly
//! listed bodies, and an optional deterministic random scatter on top.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::configuration::config::ScenarioConfig;
use crate::error::{Error, Result};
use crate::simulation::engine::Simulation;
use crate::simulation::params::{Parameters, World};

/// Map a scenario configuration into a runnable simulation.
pub fn build_simulation(cfg: &ScenarioConfig) -> Result<Simulation> {
    let world = World::new(cfg.world.width, cfg.world.height)?;

    // Parameters (runtime) from ParametersConfig
    let p_cfg = &cfg.parameters;
    let parameters = Parameters {
        t_end: p_cfg.t_end,
        h0: p_cfg.h0,
        G: p_cfg.G,
        softening: p_cfg.softening,
        trail_cap: p_cfg.trail_cap,
        seed: p_cfg.seed,
    };

    let mut sim = Simulation::new(world, parameters)?;

    // Explicitly listed bodies first, in file order
    for bc in &cfg.bodies {
        sim.create_body(bc.x[0], bc.x[1], bc.v[0], bc.v[1], bc.m)?;
    }

    // Optional scatter: positions uniform over the world, velocity
    // components uniform in [-max_speed, max_speed], reproducible under
    // the configured seed
    if let Some(sc) = &cfg.scatter {
        if !sc.max_speed.is_finite() || sc.max_speed < 0.0 {
            return Err(Error::InvalidConfig(format!(
                "scatter max_speed must be finite and >= 0, got {}",
                sc.max_speed
            )));
        }
        let mut rng = StdRng::seed_from_u64(cfg.parameters.seed);
        for _ in 0..sc.count {
            let x = rng.random_range(-world.width / 2.0..=world.width / 2.0);
            let y = rng.random_range(-world.height / 2.0..=world.height / 2.0);
            let vx = rng.random_range(-sc.max_speed..=sc.max_speed);
            let vy = rng.random_range(-sc.max_speed..=sc.max_speed);
            sim.create_body(x, y, vx, vy, sc.mass)?;
        }
    }

    Ok(sim)
}
