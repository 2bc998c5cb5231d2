//! End-to-end scenario runs: exact file contents, idempotence, and the
//! metadata header shape, all with an injected fixed clock.

use chrono::{NaiveDate, NaiveDateTime};
use icu_eval::FixedClock;
use icu_eval::scenarios::{scenario_a, scenario_b, scenario_c};
use std::fs;
use std::path::Path;

fn clock_at(hour: u32) -> FixedClock {
    FixedClock(
        NaiveDate::from_ymd_opt(2026, 8, 23)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap(),
    )
}

fn timestamp(clock: &FixedClock) -> NaiveDateTime {
    clock.0
}

const RULE: &str = "# ------------------------------------------------------------------";

#[test]
fn scenario_a_writes_expected_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("scenario_A_results.csv");
    let clock = clock_at(12);

    scenario_a::run(&clock, &path).unwrap();

    let expected = format!(
        "# Results for Scenario A: LOCF Imputation and TSLO Feature\n\
         {RULE}\n\
         # Task: Impute missing heart rates (LOCF) and compute the Time Since Last Observation.\n\
         # ASSUMPTION: The TSLO anchor is the most recent truly observed row; imputed rows do not move it.\n\
         # Columns: Raw HR, Imputed HR, and TSLO (hours) per time point.\n\
         # Date Generated: {}\n\
         {RULE}\n\
         Time (Hours),Raw HR,Imputed HR,TSLO (Hours)\n\
         0.0,95.0,95.0,0.0\n\
         3.0,102.0,102.0,0.0\n\
         4.0,,102.0,1.0\n\
         5.0,99.0,99.0,0.0\n\
         6.0,,99.0,1.0\n",
        timestamp(&clock).format("%Y-%m-%d %H:%M:%S")
    );
    assert_eq!(fs::read_to_string(&path).unwrap(), expected);
}

#[test]
fn scenario_b_writes_expected_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("scenario_B_results.csv");
    let clock = clock_at(12);

    scenario_b::run(&clock, &path).unwrap();

    let expected = format!(
        "# Results for Scenario B: IPTW and Stabilized IPTW Calculation\n\
         {RULE}\n\
         # Task: Calculate Raw IPTW, Stabilized IPTW, and the Sum of SIPTW.\n\
         # ASSUMPTION: Marginal Probability P(A=1) = 0.5\n\
         # Columns: Raw IPTW and Stabilized IPTW per patient.\n\
         # Date Generated: {}\n\
         {RULE}\n\
         Patient ID,A (Treatment),g (Propensity Score),Raw IPTW,Stabilized IPTW\n\
         1,1,0.8000,1.2500,0.6250\n\
         2,1,0.4000,2.5000,1.2500\n\
         3,0,0.9000,10.0000,5.0000\n\
         4,0,0.2000,1.2500,0.6250\n",
        timestamp(&clock).format("%Y-%m-%d %H:%M:%S")
    );
    assert_eq!(fs::read_to_string(&path).unwrap(), expected);
}

#[test]
fn scenario_c_writes_expected_header_and_rows() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("scenario_C_results.csv");
    let clock = clock_at(12);

    scenario_c::run(&clock, &path).unwrap();

    let contents = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = contents.lines().collect();

    assert_eq!(lines[0], "# Results for Scenario C: Calibration Evaluation");
    assert_eq!(lines[1], RULE);
    assert_eq!(
        lines[2],
        "# Task: Calculate Average Predicted Probability and provide interpretations."
    );
    assert_eq!(lines[3], "# Input Values: CITL Bias=-0.1, Observed Rate=0.1");
    assert_eq!(
        lines[4],
        format!(
            "# Date Generated: {}",
            timestamp(&clock).format("%Y-%m-%d %H:%M:%S")
        )
    );
    assert_eq!(lines[5], RULE);
    assert_eq!(lines[6], "Metric,Result,Calculation/Interpretation Logic");

    // The back-calculated average is exactly zero at default precision.
    assert!(lines[8].starts_with("2. Average Predicted Probability (Calculated),0,"));
    assert!(lines[8].contains("-0.1 + 0.1 = 0.00"));
    // Prose containing commas is double-quote escaped.
    assert!(lines[8].contains(",\"Logic:"));
    assert!(lines[9].starts_with("3. Clinical Implication (Slope 0.70),N/A,\""));
}

#[test]
fn reruns_with_same_clock_are_byte_identical() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.csv");
    let clock = clock_at(12);

    scenario_b::run(&clock, &path).unwrap();
    let first = fs::read(&path).unwrap();
    scenario_b::run(&clock, &path).unwrap();
    let second = fs::read(&path).unwrap();

    assert_eq!(first, second);
}

#[test]
fn reruns_differ_only_in_the_timestamp_line() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.csv");

    scenario_b::run(&clock_at(12), &path).unwrap();
    let first = fs::read_to_string(&path).unwrap();
    scenario_b::run(&clock_at(13), &path).unwrap();
    let second = fs::read_to_string(&path).unwrap();

    assert_ne!(first, second);
    for (a, b) in first.lines().zip(second.lines()) {
        if a != b {
            assert!(a.starts_with("# Date Generated: "));
            assert!(b.starts_with("# Date Generated: "));
        }
    }
    assert_eq!(first.lines().count(), second.lines().count());
}

#[test]
fn writer_creates_missing_directories() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data").join("nested").join("out.csv");
    assert!(!path.parent().unwrap().exists());

    scenario_a::run(&clock_at(12), &path).unwrap();

    assert!(path.exists());
}

#[test]
fn default_output_paths_are_under_data() {
    assert_eq!(
        Path::new(scenario_a::OUTPUT_PATH),
        Path::new("data/scenario_A_results.csv")
    );
    assert_eq!(
        Path::new(scenario_b::OUTPUT_PATH),
        Path::new("data/scenario_B_results.csv")
    );
    assert_eq!(
        Path::new(scenario_c::OUTPUT_PATH),
        Path::new("data/scenario_C_results.csv")
    );
}
