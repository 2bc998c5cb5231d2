//! Scenario B: raw and stabilized IPTW weights
//!
//! Calculates the weights for a four-patient cohort under the assumed
//! marginal treatment probability, and reports the cohort sum of stabilized
//! weights as a diagnostic.

use crate::algorithm::{CohortWeights, MARGINAL_TREATMENT_PROBABILITY, weight_cohort};
use crate::error::Result;
use crate::models::PatientRecord;
use crate::report::{CellValue, Column, ReportMetadata, ReportTable, write_report};
use crate::scenarios::ScenarioOutcome;
use crate::utils::TimeSource;
use log::info;
use std::path::Path;

/// Default destination for the Scenario B results file
pub const OUTPUT_PATH: &str = "data/scenario_B_results.csv";

/// The worked four-patient cohort with observed treatment and propensity
pub fn fixture() -> Result<Vec<PatientRecord>> {
    Ok(vec![
        PatientRecord::new(1, true, 0.8)?,
        PatientRecord::new(2, true, 0.4)?,
        PatientRecord::new(3, false, 0.9)?,
        PatientRecord::new(4, false, 0.2)?,
    ])
}

/// Assemble the per-patient weight table, floats fixed to 4 decimals
pub fn build_table(weights: &CohortWeights) -> Result<ReportTable> {
    let mut table = ReportTable::new(vec![
        Column::new("Patient ID"),
        Column::new("A (Treatment)"),
        Column::with_precision("g (Propensity Score)", 4),
        Column::with_precision("Raw IPTW", 4),
        Column::with_precision("Stabilized IPTW", 4),
    ]);

    for row in &weights.rows {
        table.push_row(vec![
            CellValue::Int(i64::from(row.record.patient_id)),
            CellValue::Int(i64::from(row.record.treated)),
            CellValue::Float(row.record.propensity),
            CellValue::Float(row.raw_weight),
            CellValue::Float(row.stabilized_weight),
        ])?;
    }

    Ok(table)
}

/// Build the `#`-prefixed metadata header for the results file
#[must_use]
pub fn build_metadata(clock: &dyn TimeSource) -> ReportMetadata {
    ReportMetadata::new(
        "Results for Scenario B: IPTW and Stabilized IPTW Calculation",
        clock.now(),
    )
    .with_line("Task: Calculate Raw IPTW, Stabilized IPTW, and the Sum of SIPTW.")
    .with_line(format!(
        "ASSUMPTION: Marginal Probability P(A=1) = {MARGINAL_TREATMENT_PROBABILITY}"
    ))
    .with_line("Columns: Raw IPTW and Stabilized IPTW per patient.")
}

/// Run the full compute-print-persist sequence for Scenario B
pub fn run(clock: &dyn TimeSource, output_path: &Path) -> Result<ScenarioOutcome> {
    info!("Running Scenario B: IPTW weight computation");

    let cohort = fixture()?;
    let weights = weight_cohort(&cohort, MARGINAL_TREATMENT_PROBABILITY)?;
    let table = build_table(&weights)?;
    let metadata = build_metadata(clock);

    println!("--- Scenario B: IPTW and SIPTW Results per Patient ---");
    println!("Assumption: Marginal P(A=1) = {MARGINAL_TREATMENT_PROBABILITY}");
    print!("{}", table.render());
    println!("{}", "-".repeat(60));
    println!(
        "Final Sum of Stabilized Weights (Cohort Sum of SIPTW): {:.4}",
        weights.stabilized_sum
    );
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
