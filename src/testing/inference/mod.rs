//! Test selection and dispatch: the single entry point the surrounding
//! application calls with a [`SampleSet`] and a [`TestMethod`].

use rayon::prelude::*;

use crate::error::{Result, StatsError};
use crate::sample::SampleSet;
use crate::testing::{TestMethod, TestResult};

pub mod nonparametric;
pub mod parametric;

/// Run the requested test over a sample set.
///
/// Validates the significance level and group arity, dispatches to the test
/// implementation, and returns the uniform [`TestResult`] shape with
/// test-specific context in `extra`, so downstream reporting needs no
/// per-test branching.
pub fn run_test(set: &SampleSet, method: TestMethod, alpha: f64) -> Result<TestResult> {
    check_alpha(alpha)?;
    match method {
        TestMethod::OneSampleT { mu0 } => {
            expect_groups(set, 1)?;
            parametric::one_sample_t_test(&set.samples()[0], mu0, alpha)
        }
        TestMethod::TwoSampleT(test_type) => {
            expect_groups(set, 2)?;
            parametric::two_sample_t_test(&set.samples()[0], &set.samples()[1], test_type, alpha)
        }
        TestMethod::PairedT => {
            expect_groups(set, 2)?;
            parametric::paired_t_test(&set.samples()[0], &set.samples()[1], alpha)
        }
        TestMethod::OneWayAnova => parametric::one_way_anova(set, alpha),
        TestMethod::KruskalWallis => nonparametric::kruskal_wallis(set, alpha),
    }
}

/// Run the same test over many independent experiments in parallel.
///
/// Invocations share no state; the result order matches the input order and
/// each entry succeeds or fails on its own.
pub fn run_batch(sets: &[SampleSet], method: TestMethod, alpha: f64) -> Vec<Result<TestResult>> {
    sets.par_iter()
        .map(|set| run_test(set, method, alpha))
        .collect()
}

fn check_alpha(alpha: f64) -> Result<()> {
    if !(alpha > 0.0 && alpha < 1.0) {
        return Err(StatsError::invalid_parameter(
            "alpha",
            format!("significance level must lie in (0, 1), got {alpha}"),
        ));
    }
    Ok(())
}

fn expect_groups(set: &SampleSet, expected: usize) -> Result<()> {
    if set.n_groups() != expected {
        return Err(StatsError::invalid_parameter(
            "samples",
            format!("{} group(s) required, got {}", expected, set.n_groups()),
        ));
    }
    Ok(())
}
