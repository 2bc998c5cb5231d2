use anyhow::bail;
use icu_eval::scenarios::{ScenarioOutcome, scenario_a, scenario_b, scenario_c};
use icu_eval::{SystemClock, TimeSource};
use log::{info, warn};
use std::path::Path;

type ScenarioRunner = fn(&dyn TimeSource, &Path) -> icu_eval::Result<ScenarioOutcome>;

fn main() -> anyhow::Result<()> {
    // Setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let clock = SystemClock;
    let scenarios: [(&str, ScenarioRunner, &str); 3] = [
        ("Scenario A", scenario_a::run, scenario_a::OUTPUT_PATH),
        ("Scenario B", scenario_b::run, scenario_b::OUTPUT_PATH),
        ("Scenario C", scenario_c::run, scenario_c::OUTPUT_PATH),
    ];

    // Scenarios are independent: a failure in one must not stop the others.
    let mut failures = 0usize;
    for (name, run, output_path) in scenarios {
        info!("Starting {name}");
        match run(&clock, Path::new(output_path)) {
            Ok(_) => info!("{name} completed successfully"),
            Err(e) => {
                warn!("{name} failed: {e}");
                failures += 1;
            }
        }
        println!();
    }

    if failures > 0 {
        bail!("{failures} scenario(s) failed");
    }
    info!("All scenarios completed successfully");
    Ok(())
}
