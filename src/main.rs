use nbsim::{ScenarioConfig, Scenario, Simulation, StepLogger, LogHeader, HeadlessWindow, TickObserver};
use nbsim::{bench_accumulate, bench_euler};

use clap::Parser;
use anyhow::{Context, Result};

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    /// Scenario file; looked up under `scenarios/` when not found as given
    #[arg(short, default_value = "three_body.yaml")]
    file_name: String,

    /// Override the scenario seed
    #[arg(long)]
    seed: Option<u64>,

    /// Stop after this many ticks even without a collision
    #[arg(long)]
    ticks: Option<u64>,

    /// Disable the per-tick sleep
    #[arg(long)]
    no_pace: bool,

    /// Time the force pass instead of running a scenario
    #[arg(long)]
    bench: bool,
}

fn scenario_path(file_name: &str) -> PathBuf {
    let direct = PathBuf::from(file_name);
    if direct.exists() {
        return direct;
    }
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name)
}

// load here to keep main clean
fn load_scenario_from_yaml(args: &Args) -> Result<ScenarioConfig> {
    let config_path = scenario_path(&args.file_name);
    let file = File::open(&config_path)
        .with_context(|| format!("failed to open scenario {}", config_path.display()))?;
    let reader = BufReader::new(file);
    let mut scenario_cfg = ScenarioConfig::from_reader(reader)
        .with_context(|| format!("failed to parse scenario {}", config_path.display()))?;

    if args.seed.is_some() {
        scenario_cfg.engine.seed = args.seed;
    }
    if args.ticks.is_some() {
        scenario_cfg.engine.max_ticks = args.ticks;
    }
    if args.no_pace {
        scenario_cfg.engine.pace_ms = 0.0;
    }

    Ok(scenario_cfg)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    if args.bench {
        bench_accumulate(&[200, 400, 800, 1600, 3200]);
        bench_euler(&[200, 400, 800, 1600], 2);
        return Ok(());
    }

    let scenario_cfg = load_scenario_from_yaml(&args)?;
    let scenario = Scenario::build_scenario(&scenario_cfg).context("invalid scenario")?;

    let header = LogHeader::from(&scenario.parameters);
    let mut logger = StepLogger::create(&scenario_cfg.logging.path, scenario_cfg.logging.max_steps, header);
    let mut window = HeadlessWindow::new(scenario_cfg.engine.max_ticks);

    let mut sim = Simulation::new(scenario);
    log::info!("Simulation started with {} planets", sim.bodies().len());

    let mut observers: [&mut dyn TickObserver; 1] = [&mut logger];
    let summary = sim
        .run(&mut window, &mut observers)
        .with_context(|| format!("failed to write step log {}", scenario_cfg.logging.path))?;
    log::info!("{} ticks, stop reason: {:?}", summary.ticks, summary.reason);

    Ok(())
}
