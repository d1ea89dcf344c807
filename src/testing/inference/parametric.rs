//! Parametric hypothesis tests: the t-test family and one-way ANOVA.
//!
//! Each test validates its minimum-size invariants up front (naming the
//! offending group), computes the statistic and degrees of freedom, and maps
//! the statistic to a p-value through the t or F distribution. Zero-variance
//! inputs resolve to explicit statistics (0 or ±∞), never NaN.

use crate::distribution::{p_value_from_f, p_value_from_t};
use crate::error::{Result, StatsError};
use crate::sample::{Sample, SampleSet};
use crate::summary;
use crate::testing::effect;
use crate::testing::{DegreesOfFreedom, TTestType, TestResult};

/// One-sample t-test of H0: mu = `mu0`.
///
/// statistic = (mean − mu0) / standard error, df = n − 1.
pub fn one_sample_t_test(sample: &Sample, mu0: f64, alpha: f64) -> Result<TestResult> {
    if !mu0.is_finite() {
        return Err(StatsError::invalid_parameter(
            "mu0",
            format!("hypothesized mean must be finite, got {mu0}"),
        ));
    }
    sample.require_len(2)?;

    let n = sample.len() as f64;
    let mean = sample.mean();
    let sd = sample.std_dev()?;
    let df = n - 1.0;
    let (t, p) = t_statistic(mean - mu0, sd / n.sqrt(), df)?;

    let mut result = TestResult::new("one-sample t-test", t, DegreesOfFreedom::Single(df), p, alpha)
        .with_metadata("mean", mean)
        .with_metadata("mu0", mu0)
        .with_metadata("n", n);
    if sd > 0.0 {
        result = result.with_effect_size((mean - mu0) / sd);
    }
    Ok(result)
}

/// Two-sample t-test comparing independent groups.
///
/// Student's variant pools the two variances (df = nA + nB − 2); Welch's
/// keeps them separate and corrects the degrees of freedom with the
/// Welch–Satterthwaite approximation.
pub fn two_sample_t_test(
    a: &Sample,
    b: &Sample,
    test_type: TTestType,
    alpha: f64,
) -> Result<TestResult> {
    a.require_len(2)?;
    b.require_len(2)?;

    let na = a.len() as f64;
    let nb = b.len() as f64;
    let mean_a = a.mean();
    let mean_b = b.mean();
    let var_a = a.variance()?;
    let var_b = b.variance()?;

    let (test_name, std_err, df) = match test_type {
        TTestType::Student => {
            let pooled = ((na - 1.0) * var_a + (nb - 1.0) * var_b) / (na + nb - 2.0);
            (
                "Student t-test",
                (pooled * (1.0 / na + 1.0 / nb)).sqrt(),
                na + nb - 2.0,
            )
        }
        TTestType::Welch => {
            let term_a = var_a / na;
            let term_b = var_b / nb;
            let combined = term_a + term_b;
            // Welch–Satterthwaite equation; a fully degenerate (zero-variance)
            // pair falls back to the pooled df so df stays positive
            let df = if combined == 0.0 {
                na + nb - 2.0
            } else {
                combined * combined
                    / (term_a * term_a / (na - 1.0) + term_b * term_b / (nb - 1.0))
            };
            ("Welch t-test", combined.sqrt(), df)
        }
    };

    let (t, p) = t_statistic(mean_a - mean_b, std_err, df)?;

    let mut result = TestResult::new(test_name, t, DegreesOfFreedom::Single(df), p, alpha)
        .with_metadata(&format!("mean_{}", a.label()), mean_a)
        .with_metadata(&format!("mean_{}", b.label()), mean_b)
        .with_metadata(&format!("var_{}", a.label()), var_a)
        .with_metadata(&format!("var_{}", b.label()), var_b)
        .with_metadata(&format!("n_{}", a.label()), na)
        .with_metadata(&format!("n_{}", b.label()), nb);
    let d = effect::cohens_d(a, b)?;
    if d.is_finite() {
        result = result.with_effect_size(d);
    }
    Ok(result)
}

/// Paired t-test on index-aligned observations: a one-sample t-test of the
/// elementwise differences against zero.
pub fn paired_t_test(a: &Sample, b: &Sample, alpha: f64) -> Result<TestResult> {
    if a.len() != b.len() {
        return Err(StatsError::DimensionMismatch {
            left: a.len(),
            right: b.len(),
        });
    }
    a.require_len(2)?;

    let diffs: Vec<f64> = a
        .values()
        .iter()
        .zip(b.values())
        .map(|(x, y)| x - y)
        .collect();
    let n = diffs.len() as f64;
    let mean_d = diffs.iter().sum::<f64>() / n;
    let sd_d = summary::std_dev(&diffs, 1).ok_or_else(|| StatsError::InsufficientData {
        group: a.label().to_string(),
        required: 2,
        actual: a.len(),
    })?;
    let df = n - 1.0;
    let (t, p) = t_statistic(mean_d, sd_d / n.sqrt(), df)?;

    let mut result = TestResult::new("paired t-test", t, DegreesOfFreedom::Single(df), p, alpha)
        .with_metadata("mean_difference", mean_d)
        .with_metadata("n", n);
    if sd_d > 0.0 {
        result = result.with_effect_size(mean_d / sd_d);
    }
    Ok(result)
}

/// One-way analysis of variance across k ≥ 2 groups.
///
/// F = (SSB/(k−1)) / (SSW/(N−k)) with df = (k−1, N−k), p-value from the
/// upper tail of the F distribution.
pub fn one_way_anova(set: &SampleSet, alpha: f64) -> Result<TestResult> {
    let k = set.n_groups();
    if k < 2 {
        return Err(StatsError::invalid_parameter(
            "samples",
            format!("analysis of variance requires at least 2 groups, got {k}"),
        ));
    }
    for sample in set.samples() {
        sample.require_len(2)?;
    }

    let total_n = set.total_observations() as f64;
    let grand_sum: f64 = set
        .samples()
        .iter()
        .map(|s| s.values().iter().sum::<f64>())
        .sum();
    let grand_mean = grand_sum / total_n;

    let mut ss_between = 0.0;
    let mut ss_within = 0.0;
    for sample in set.samples() {
        let n_i = sample.len() as f64;
        let mean_i = sample.mean();
        ss_between += n_i * (mean_i - grand_mean).powi(2);
        ss_within += sample
            .values()
            .iter()
            .map(|&x| (x - mean_i).powi(2))
            .sum::<f64>();
    }

    let df_between = (k - 1) as f64;
    let df_within = total_n - k as f64;
    let ms_between = ss_between / df_between;
    let ms_within = ss_within / df_within;

    // no between-group spread gives F = 0 whatever the noise level; a
    // noiseless separation is infinitely significant
    let (f, p) = if ms_between == 0.0 {
        (0.0, 1.0)
    } else if ms_within == 0.0 {
        (f64::INFINITY, 0.0)
    } else {
        let f = ms_between / ms_within;
        (f, p_value_from_f(f, df_between, df_within)?)
    };

    let mut result = TestResult::new(
        "one-way ANOVA",
        f,
        DegreesOfFreedom::Ratio {
            numerator: df_between,
            denominator: df_within,
        },
        p,
        alpha,
    )
    .with_metadata("ss_between", ss_between)
    .with_metadata("ss_within", ss_within)
    .with_metadata("ms_between", ms_between)
    .with_metadata("ms_within", ms_within)
    .with_metadata("grand_mean", grand_mean);
    for sample in set.samples() {
        result = result.with_metadata(&format!("mean_{}", sample.label()), sample.mean());
    }
    let ss_total = ss_between + ss_within;
    if ss_total > 0.0 {
        result = result.with_effect_size(effect::eta_squared(ss_between, ss_total));
    }
    Ok(result)
}

// Map a mean difference and its standard error to (statistic, p-value),
// keeping the zero-variance paths NaN-free.
fn t_statistic(diff: f64, std_err: f64, df: f64) -> Result<(f64, f64)> {
    if std_err == 0.0 {
        return Ok(if diff == 0.0 {
            (0.0, 1.0)
        } else {
            (diff.signum() * f64::INFINITY, 0.0)
        });
    }
    let t = diff / std_err;
    let p = p_value_from_t(t, df)?;
    Ok((t, p))
}
