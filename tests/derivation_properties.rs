//! Randomized-input checks of the derivation invariants, on generated series
//! and cohorts rather than only the worked fixtures.

use approx::assert_relative_eq;
use icu_eval::algorithm::{
    MARGINAL_TREATMENT_PROBABILITY, impute_locf, time_since_last_observation, weight_cohort,
};
use icu_eval::{PatientRecord, VitalSample, VitalSeries};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_series(rng: &mut StdRng, rows: usize, missing_probability: f64) -> VitalSeries {
    let mut time = 0.0;
    let samples = (0..rows)
        .map(|_| {
            time += rng.random_range(0.25..4.0);
            if rng.random_bool(missing_probability) {
                VitalSample::missing(time)
            } else {
                VitalSample::observed(time, rng.random_range(40.0..180.0))
            }
        })
        .collect();
    VitalSeries::new(samples).unwrap()
}

#[test]
fn locf_is_identity_on_fully_observed_series() {
    let mut rng = StdRng::seed_from_u64(1);
    for _ in 0..50 {
        let series = random_series(&mut rng, 20, 0.0);
        let imputed = impute_locf(&series);
        let raw: Vec<Option<f64>> = series.samples().iter().map(|s| s.heart_rate).collect();
        assert_eq!(imputed, raw);
    }
}

#[test]
fn locf_fills_with_nearest_preceding_observation() {
    let mut rng = StdRng::seed_from_u64(2);
    for _ in 0..50 {
        let series = random_series(&mut rng, 30, 0.5);
        let imputed = impute_locf(&series);

        let mut last_seen: Option<f64> = None;
        for (sample, value) in series.samples().iter().zip(&imputed) {
            if sample.heart_rate.is_some() {
                last_seen = sample.heart_rate;
            }
            assert_eq!(*value, last_seen);
        }
    }
}

#[test]
fn tslo_is_zero_at_observed_rows_and_undefined_before_the_first() {
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..50 {
        let series = random_series(&mut rng, 30, 0.6);
        let tslo = time_since_last_observation(&series);

        let mut seen_observation = false;
        for (sample, value) in series.samples().iter().zip(&tslo) {
            if sample.heart_rate.is_some() {
                seen_observation = true;
                assert_eq!(*value, Some(0.0));
            } else if !seen_observation {
                assert_eq!(*value, None);
            }
        }
    }
}

#[test]
fn tslo_increases_within_a_gap_and_resets_at_observations() {
    let mut rng = StdRng::seed_from_u64(4);
    for _ in 0..50 {
        let series = random_series(&mut rng, 30, 0.6);
        let tslo = time_since_last_observation(&series);

        for index in 1..series.len() {
            let sample = &series.samples()[index];
            if sample.heart_rate.is_some() {
                continue;
            }
            // Inside a gap, TSLO strictly grows row over row once defined.
            if let (Some(previous), Some(current)) = (tslo[index - 1], tslo[index]) {
                assert!(current > previous);
            }
        }
    }
}

fn random_cohort(rng: &mut StdRng, rows: usize) -> Vec<PatientRecord> {
    (0..rows)
        .map(|i| {
            PatientRecord::new(
                i as u32 + 1,
                rng.random_bool(0.5),
                rng.random_range(0.01..0.99),
            )
            .unwrap()
        })
        .collect()
}

#[test]
fn stabilized_weight_is_raw_times_marginal() {
    let mut rng = StdRng::seed_from_u64(5);
    for _ in 0..50 {
        let cohort = random_cohort(&mut rng, 25);
        let weights = weight_cohort(&cohort, MARGINAL_TREATMENT_PROBABILITY).unwrap();
        for row in &weights.rows {
            assert_relative_eq!(
                row.stabilized_weight,
                row.raw_weight * row.marginal_probability,
                max_relative = 1e-12
            );
        }
    }
}

#[test]
fn weights_are_finite_and_positive() {
    let mut rng = StdRng::seed_from_u64(6);
    for _ in 0..50 {
        let cohort = random_cohort(&mut rng, 25);
        let weights = weight_cohort(&cohort, MARGINAL_TREATMENT_PROBABILITY).unwrap();
        for row in &weights.rows {
            assert!(row.raw_weight.is_finite() && row.raw_weight > 0.0);
            assert!(row.stabilized_weight.is_finite() && row.stabilized_weight > 0.0);
        }
        assert!(weights.stabilized_sum.is_finite() && weights.stabilized_sum > 0.0);
    }
}

#[test]
fn cohort_sum_matches_row_sum() {
    let mut rng = StdRng::seed_from_u64(7);
    let cohort = random_cohort(&mut rng, 40);
    let weights = weight_cohort(&cohort, MARGINAL_TREATMENT_PROBABILITY).unwrap();
    let manual: f64 = weights.rows.iter().map(|row| row.stabilized_weight).sum();
    assert_relative_eq!(weights.stabilized_sum, manual, max_relative = 1e-12);
}
