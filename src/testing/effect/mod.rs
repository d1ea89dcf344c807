//! Effect size measures attached to test results.

use crate::error::Result;
use crate::sample::Sample;

/// Cohen's d between two independent samples, standardized by the pooled
/// standard deviation.
///
/// May be infinite (or NaN for identical constant groups) when both samples
/// have zero variance; callers deciding whether to report an effect size
/// should check finiteness.
pub fn cohens_d(a: &Sample, b: &Sample) -> Result<f64> {
    a.require_len(2)?;
    b.require_len(2)?;

    let na = a.len() as f64;
    let nb = b.len() as f64;
    let var_a = a.variance()?;
    let var_b = b.variance()?;

    let pooled_sd = (((na - 1.0) * var_a + (nb - 1.0) * var_b) / (na + nb - 2.0)).sqrt();
    Ok((a.mean() - b.mean()) / pooled_sd)
}

/// Hedges' g: Cohen's d with the small-sample correction factor J.
pub fn hedges_g(a: &Sample, b: &Sample) -> Result<f64> {
    let d = cohens_d(a, b)?;
    let n = (a.len() + b.len()) as f64;
    let j = 1.0 - 3.0 / (4.0 * (n - 2.0) - 1.0);
    Ok(j * d)
}

/// Eta squared: the share of total variability explained by group membership.
pub fn eta_squared(ss_between: f64, ss_total: f64) -> f64 {
    if ss_total <= 0.0 {
        0.0
    } else {
        (ss_between / ss_total).clamp(0.0, 1.0)
    }
}

/// Epsilon squared, the rank-based counterpart of eta squared for the
/// Kruskal-Wallis H statistic.
pub fn epsilon_squared(h: f64, n_total: usize) -> f64 {
    (h / (n_total as f64 - 1.0)).clamp(0.0, 1.0)
}
