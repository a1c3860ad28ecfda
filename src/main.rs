use gravbox::{bench_gravity, bench_step};
use gravbox::{build_simulation, ScenarioConfig};

use anyhow::Result;
use clap::Parser;
use log::info;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    /// Scenario file under scenarios/
    #[arg(short, default_value = "two_body.yaml")]
    file_name: String,

    /// Run the timing sweeps instead of a scenario
    #[arg(long)]
    bench: bool,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("scenarios")
        .join(file_name);
    let file = File::open(&config_path)?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)?;

    Ok(scenario_cfg)
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    if args.bench {
        bench_gravity();
        bench_step();
        return Ok(());
    }

    let cfg = load_scenario_from_yaml(&args.file_name)?;
    let mut sim = build_simulation(&cfg)?;

    let e0 = sim.energy();
    info!(
        "start: {} bodies, KE={:.3} PE={:.3} TE={:.3}",
        sim.len(),
        e0.kinetic,
        e0.potential,
        e0.total
    );

    let t_end = sim.parameters().t_end;
    let mut steps = 0u64;
    while sim.time() < t_end && !sim.is_empty() {
        sim.step();
        steps += 1;
        if steps % 100 == 0 {
            let e = sim.energy();
            info!(
                "t={:.1}: {} bodies, TE={:.3}",
                sim.time(),
                sim.len(),
                e.total
            );
        }
    }

    let e1 = sim.energy();
    println!("finished at t={:.2} with {} bodies", sim.time(), sim.len());
    println!(
        "KE: {:.3} | PE: {:.3} | TE: {:.3} (drift {:+.3})",
        e1.kinetic,
        e1.potential,
        e1.total,
        e1.total - e0.total
    );

    Ok(())
}
