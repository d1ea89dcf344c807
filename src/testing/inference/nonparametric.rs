//! Non-parametric (rank-based) hypothesis tests.

use std::cmp::Ordering;

use crate::distribution::p_value_from_chi_square;
use crate::error::{Result, StatsError};
use crate::sample::SampleSet;
use crate::summary;
use crate::testing::effect;
use crate::testing::{DegreesOfFreedom, TestResult};

/// Kruskal-Wallis rank test across k ≥ 2 groups.
///
/// All observations are ranked jointly with mid-rank tie handling, then
/// H = (12 / N(N+1)) Σ R_i²/n_i − 3(N+1), divided by the tie correction
/// 1 − Σ(t³−t)/(N³−N), with the p-value from the chi-square upper tail on
/// k−1 degrees of freedom. Groups of size 1 are valid here: ranking needs
/// no within-group variance.
pub fn kruskal_wallis(set: &SampleSet, alpha: f64) -> Result<TestResult> {
    let k = set.n_groups();
    if k < 2 {
        return Err(StatsError::invalid_parameter(
            "samples",
            format!("the Kruskal-Wallis test requires at least 2 groups, got {k}"),
        ));
    }

    let total_n = set.total_observations();
    let nf = total_n as f64;

    // pool observations, remembering which group each came from
    let mut pooled = Vec::with_capacity(total_n);
    let mut group_of = Vec::with_capacity(total_n);
    for (gi, sample) in set.samples().iter().enumerate() {
        for &v in sample.values() {
            pooled.push(v);
            group_of.push(gi);
        }
    }
    let ranks = summary::rank(&pooled);

    let mut rank_sums = vec![0.0; k];
    for (&gi, &r) in group_of.iter().zip(ranks.iter()) {
        rank_sums[gi] += r;
    }

    let mut h = 0.0;
    for (gi, sample) in set.samples().iter().enumerate() {
        let n_i = sample.len() as f64;
        h += rank_sums[gi] * rank_sums[gi] / n_i;
    }
    h = 12.0 / (nf * (nf + 1.0)) * h - 3.0 * (nf + 1.0);
    // rounding can push an all-equal-rank H a hair below zero
    h = h.max(0.0);

    let tie_sum = tie_adjustment(&pooled);
    let divisor = 1.0 - tie_sum / (nf * nf * nf - nf);
    if divisor > 0.0 {
        h /= divisor;
    } else {
        // every observation tied: the ranks carry no information
        h = 0.0;
    }

    let df = (k - 1) as f64;
    let p = p_value_from_chi_square(h, df)?;

    let mut result = TestResult::new("Kruskal-Wallis", h, DegreesOfFreedom::Single(df), p, alpha)
        .with_metadata("n_total", nf)
        .with_metadata("tie_correction", divisor.max(0.0))
        .with_effect_size(effect::epsilon_squared(h, total_n));
    for (gi, sample) in set.samples().iter().enumerate() {
        result = result.with_metadata(&format!("rank_sum_{}", sample.label()), rank_sums[gi]);
    }
    Ok(result)
}

// Σ(t³ − t) over runs of equal values.
fn tie_adjustment(values: &[f64]) -> f64 {
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));

    let mut sum = 0.0;
    let mut i = 0;
    while i < sorted.len() {
        let mut j = i + 1;
        while j < sorted.len() && sorted[j] == sorted[i] {
            j += 1;
        }
        let t = (j - i) as f64;
        if t > 1.0 {
            sum += t * t * t - t;
        }
        i = j;
    }
    sum
}
