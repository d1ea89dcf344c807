//! Numeric summary primitives shared by every test.
//!
//! The slice-level functions are generic over [`Float`] and return `None`
//! when a slice is too small for the statistic; labeled error surfaces live
//! on [`Sample`](crate::sample::Sample) and the test layer.

use std::cmp::Ordering;

use num_traits::Float;

use crate::sample::SampleSet;

/// Arithmetic mean, or `None` for an empty slice.
pub fn mean<T: Float>(values: &[T]) -> Option<T> {
    if values.is_empty() {
        return None;
    }
    let sum = values.iter().fold(T::zero(), |acc, &v| acc + v);
    Some(sum / T::from(values.len()).unwrap())
}

/// Variance about the mean with `ddof` delta degrees of freedom.
///
/// `ddof = 1` (the sample variance) is used for all inferential work;
/// `ddof = 0` gives the population variance. `None` when `n <= ddof`.
pub fn variance<T: Float>(values: &[T], ddof: usize) -> Option<T> {
    let n = values.len();
    if n <= ddof {
        return None;
    }
    let m = mean(values)?;
    let ss = values.iter().fold(T::zero(), |acc, &v| {
        let d = v - m;
        acc + d * d
    });
    Some(ss / T::from(n - ddof).unwrap())
}

pub fn std_dev<T: Float>(values: &[T], ddof: usize) -> Option<T> {
    variance(values, ddof).map(Float::sqrt)
}

/// Standard error of the mean (n−1 variance).
pub fn standard_error<T: Float>(values: &[T]) -> Option<T> {
    let n = T::from(values.len()).unwrap();
    std_dev(values, 1).map(|sd| sd / n.sqrt())
}

/// Mid-rank transform: ranks 1..=n aligned with the input order, tied values
/// sharing the average of the ranks they would occupy if untied.
pub fn rank(values: &[f64]) -> Vec<f64> {
    let n = values.len();
    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by(|&a, &b| values[a].partial_cmp(&values[b]).unwrap_or(Ordering::Equal));

    let mut ranks = vec![0.0; n];
    let mut i = 0;
    while i < n {
        let mut j = i + 1;
        while j < n && values[order[j]] == values[order[i]] {
            j += 1;
        }
        // positions i..j hold tied values; their shared rank averages i+1..=j
        let shared = (i + j + 1) as f64 / 2.0;
        for &idx in &order[i..j] {
            ranks[idx] = shared;
        }
        i = j;
    }
    ranks
}

/// Descriptive summary of one group.
///
/// Spread fields are `None` for singleton groups rather than NaN.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupSummary {
    pub label: String,
    pub n: usize,
    pub mean: f64,
    pub std_dev: Option<f64>,
    pub sem: Option<f64>,
    /// 95% normal-approximation confidence interval for the mean.
    pub ci95: Option<(f64, f64)>,
}

/// z multiplier for a two-sided 95% normal interval.
const Z_95: f64 = 1.96;

/// Per-group descriptives: observation count, mean, standard deviation,
/// standard error, and a 95% confidence interval for the mean.
pub fn describe(set: &SampleSet) -> Vec<GroupSummary> {
    set.samples()
        .iter()
        .map(|s| {
            let mean = s.mean();
            let sd = std_dev(s.values(), 1);
            let sem = standard_error(s.values());
            GroupSummary {
                label: s.label().to_string(),
                n: s.len(),
                mean,
                std_dev: sd,
                sem,
                ci95: sem.map(|se| (mean - Z_95 * se, mean + Z_95 * se)),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn mean_and_variance() {
        let data = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert_abs_diff_eq!(mean(&data).unwrap(), 5.0);
        assert_abs_diff_eq!(variance(&data, 0).unwrap(), 4.0);
        assert_abs_diff_eq!(variance(&data, 1).unwrap(), 32.0 / 7.0);
        assert_abs_diff_eq!(std_dev(&data, 0).unwrap(), 2.0);
    }

    #[test]
    fn variance_needs_enough_observations() {
        assert!(mean::<f64>(&[]).is_none());
        assert!(variance(&[1.0], 1).is_none());
        assert!(standard_error(&[1.0]).is_none());
    }

    #[test]
    fn variance_is_non_negative_and_zero_for_constant() {
        let constant = [3.5; 6];
        assert_abs_diff_eq!(variance(&constant, 1).unwrap(), 0.0);
        let noisy = [1.0, -2.0, 0.5, 3.0];
        assert!(variance(&noisy, 1).unwrap() >= 0.0);
    }

    #[test]
    fn works_for_f32_slices() {
        let data: [f32; 4] = [1.0, 2.0, 3.0, 4.0];
        assert_abs_diff_eq!(mean(&data).unwrap(), 2.5f32);
    }

    #[test]
    fn mid_rank_averages_ties() {
        assert_eq!(rank(&[3.0, 1.0, 4.0, 1.0, 5.0]), vec![3.0, 1.5, 4.0, 1.5, 5.0]);
        assert_eq!(rank(&[10.0, 20.0, 30.0]), vec![1.0, 2.0, 3.0]);
        // all tied: everyone gets the middle rank
        assert_eq!(rank(&[2.0, 2.0, 2.0]), vec![2.0, 2.0, 2.0]);
    }

    #[test]
    fn describe_reports_group_descriptives() {
        let set = crate::sample::SampleSet::from_groups([
            ("control", vec![1.0, 2.0, 3.0, 4.0, 5.0]),
            ("solo", vec![9.0]),
        ])
        .unwrap();
        let summaries = describe(&set);
        assert_eq!(summaries.len(), 2);

        let control = &summaries[0];
        assert_eq!(control.n, 5);
        assert_abs_diff_eq!(control.mean, 3.0);
        assert_abs_diff_eq!(control.std_dev.unwrap(), 2.5f64.sqrt(), epsilon = 1e-12);
        let sem = control.sem.unwrap();
        assert_abs_diff_eq!(sem, (2.5f64 / 5.0).sqrt(), epsilon = 1e-12);
        let (lo, hi) = control.ci95.unwrap();
        assert_abs_diff_eq!(lo, 3.0 - 1.96 * sem, epsilon = 1e-12);
        assert_abs_diff_eq!(hi, 3.0 + 1.96 * sem, epsilon = 1e-12);

        let solo = &summaries[1];
        assert_eq!(solo.n, 1);
        assert_abs_diff_eq!(solo.mean, 9.0);
        assert!(solo.std_dev.is_none());
        assert!(solo.ci95.is_none());
    }
}
