use anyhow::Context;
use icu_eval::SystemClock;
use icu_eval::scenarios::scenario_b;
use std::path::Path;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    scenario_b::run(&SystemClock, Path::new(scenario_b::OUTPUT_PATH))
        .context("Scenario B failed")?;
    Ok(())
}
