//! Scenario A: LOCF imputation and the TSLO feature
//!
//! Prepares an irregularly sampled heart-rate series the way a decay-aware
//! sequence model (e.g. GRU-D) expects it: missing values carried forward,
//! plus the hours elapsed since the last true observation.

use crate::algorithm::derive_vital_features;
use crate::error::Result;
use crate::models::{VitalSample, VitalSeries};
use crate::report::{CellValue, Column, ReportMetadata, ReportTable, write_report};
use crate::scenarios::ScenarioOutcome;
use crate::utils::TimeSource;
use log::info;
use std::path::Path;

/// Default destination for the Scenario A results file
pub const OUTPUT_PATH: &str = "data/scenario_A_results.csv";

/// The worked five-row heart-rate series: observations at t=0, 3 and 5 hours,
/// missing measurements at t=4 and 6.
pub fn fixture() -> Result<VitalSeries> {
    VitalSeries::new(vec![
        VitalSample::observed(0.0, 95.0),
        VitalSample::observed(3.0, 102.0),
        VitalSample::missing(4.0),
        VitalSample::observed(5.0, 99.0),
        VitalSample::missing(6.0),
    ])
}

/// Derive the imputed and TSLO columns and assemble the report table
pub fn build_table(series: &VitalSeries) -> Result<ReportTable> {
    let mut table = ReportTable::new(vec![
        Column::with_precision("Time (Hours)", 1),
        Column::with_precision("Raw HR", 1),
        Column::with_precision("Imputed HR", 1),
        Column::with_precision("TSLO (Hours)", 1),
    ]);

    for row in derive_vital_features(series) {
        table.push_row(vec![
            CellValue::Float(row.time_hours),
            CellValue::from_option(row.raw),
            CellValue::from_option(row.imputed),
            CellValue::from_option(row.tslo_hours),
        ])?;
    }

    Ok(table)
}

/// Build the `#`-prefixed metadata header for the results file
#[must_use]
pub fn build_metadata(clock: &dyn TimeSource) -> ReportMetadata {
    ReportMetadata::new(
        "Results for Scenario A: LOCF Imputation and TSLO Feature",
        clock.now(),
    )
    .with_line("Task: Impute missing heart rates (LOCF) and compute the Time Since Last Observation.")
    .with_line("ASSUMPTION: The TSLO anchor is the most recent truly observed row; imputed rows do not move it.")
    .with_line("Columns: Raw HR, Imputed HR, and TSLO (hours) per time point.")
}

/// Run the full compute-print-persist sequence for Scenario A
pub fn run(clock: &dyn TimeSource, output_path: &Path) -> Result<ScenarioOutcome> {
    info!("Running Scenario A: time-series imputation");

    let series = fixture()?;
    let table = build_table(&series)?;
    let metadata = build_metadata(clock);

    println!("--- Scenario A: LOCF Imputation and TSLO Feature ---");
    print!("{}", table.render());
    println!("{}", "-".repeat(60));

    write_report(output_path, &metadata, &table)?;
    println!(
        "\nNumerical results successfully saved to: {} (Includes metadata header)",
        output_path.display()
    );

    Ok(ScenarioOutcome {
        metadata,
        table,
        output_path: output_path.to_path_buf(),
    })
}
