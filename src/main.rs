use nbody2d::{Scenario, ScenarioConfig};
use nbody2d::{bench_net_forces, bench_step};

use anyhow::Result;
use clap::Parser;

use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    /// Scenario file; bare names are looked up under `scenarios/`
    #[arg(short, default_value = "galaxy.yaml")]
    file_name: String,

    /// Override the number of frames (default: t_end / dt)
    #[arg(long)]
    frames: Option<usize>,

    /// Print a status line every K frames
    #[arg(long, default_value_t = 10)]
    report_every: usize,

    /// Run the force/step benchmarks and exit
    #[arg(long)]
    bench: bool,

    /// Open the Bevy viewer (needs the `viewer` feature)
    #[arg(long)]
    view: bool,

    /// With --view: draw the initial layout without stepping
    #[arg(long = "static")]
    still: bool,
}

fn scenario_path(file_name: &str) -> PathBuf {
    let direct = PathBuf::from(file_name);
    if direct.exists() {
        return direct;
    }
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name)
}

fn report(frame: usize, scenario: &Scenario) {
    let sys = &scenario.system;
    let com = sys.center_of_mass();
    let p = sys.total_momentum();
    println!(
        "frame {:6}  t = {:10.3}  com = ({:12.5}, {:12.5})  p = ({:12.5e}, {:12.5e})",
        frame, sys.t, com.x, com.y, p.x, p.y
    );
}

fn run_headless(mut scenario: Scenario, frames: usize, report_every: usize) {
    let every = report_every.max(1);
    report(0, &scenario);
    for frame in 1..=frames {
        scenario.step();
        if frame % every == 0 || frame == frames {
            report(frame, &scenario);
        }
    }
}

#[cfg(feature = "viewer")]
fn run_view(scenario: Scenario, still: bool) -> Result<()> {
    nbody2d::run_2d(scenario, still);
    Ok(())
}

#[cfg(not(feature = "viewer"))]
fn run_view(_scenario: Scenario, _still: bool) -> Result<()> {
    anyhow::bail!("viewer not available, rebuild with `--features viewer`")
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.bench {
        bench_net_forces();
        bench_step();
        return Ok(());
    }

    let path = scenario_path(&args.file_name);
    let cfg = ScenarioConfig::from_yaml_file(&path)?;
    let scenario = Scenario::build_scenario(cfg)?;

    println!(
        "loaded {} bodies from {} (dt = {}, G = {})",
        scenario.system.bodies.len(),
        path.display(),
        scenario.parameters.dt,
        scenario.parameters.G
    );

    if args.view {
        return run_view(scenario, args.still);
    }

    let frames = args.frames.unwrap_or(scenario.engine.frames);
    run_headless(scenario, frames, args.report_every);

    Ok(())
}
