use std::collections::HashMap;

pub mod effect;
pub mod inference;

/// Significance threshold used when the caller does not supply one.
pub const DEFAULT_ALPHA: f64 = 0.05;

/// Which hypothesis test to run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TestMethod {
    /// One-sample t-test against the hypothesized mean `mu0`.
    OneSampleT { mu0: f64 },
    /// Two-sample t-test on independent groups.
    TwoSampleT(TTestType),
    /// Paired t-test on index-aligned observations.
    PairedT,
    /// One-way analysis of variance.
    OneWayAnova,
    /// Kruskal-Wallis rank test.
    KruskalWallis,
}

/// Variance assumption for the two-sample t-test. Welch is the safer default
/// when group variances may differ.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TTestType {
    Student, // Equal variance
    #[default]
    Welch, // Unequal variance
}

/// Degrees of freedom attached to a test statistic.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DegreesOfFreedom {
    /// A single value; fractional under the Welch approximation.
    Single(f64),
    /// Numerator/denominator pair for F-based tests.
    Ratio { numerator: f64, denominator: f64 },
}

/// Uniform result shape shared by every test.
#[derive(Debug, Clone, PartialEq)]
pub struct TestResult {
    /// Human-readable test name (e.g. "Welch t-test").
    pub test_name: &'static str,
    /// The test statistic (t, F, or H).
    pub statistic: f64,
    /// Degrees of freedom of the reference distribution.
    pub degrees_of_freedom: DegreesOfFreedom,
    /// The p-value of the test, always in [0, 1].
    pub p_value: f64,
    /// Significance threshold the result was evaluated against.
    pub alpha: f64,
    /// Whether `p_value < alpha`.
    pub is_significant: bool,
    /// Effect size measurement, where one is defined for the test.
    pub effect_size: Option<f64>,
    /// Additional test-specific context (group means, rank sums, ...).
    pub extra: HashMap<String, f64>,
}

impl TestResult {
    /// Create a new test result; the significance flag is derived from the
    /// p-value and alpha, never set directly.
    pub fn new(
        test_name: &'static str,
        statistic: f64,
        degrees_of_freedom: DegreesOfFreedom,
        p_value: f64,
        alpha: f64,
    ) -> Self {
        let p_value = p_value.clamp(0.0, 1.0);
        TestResult {
            test_name,
            statistic,
            degrees_of_freedom,
            p_value,
            alpha,
            is_significant: p_value < alpha,
            effect_size: None,
            extra: HashMap::new(),
        }
    }

    /// Add an effect size to the result
    pub fn with_effect_size(mut self, effect_size: f64) -> Self {
        self.effect_size = Some(effect_size);
        self
    }

    /// Add additional metadata
    pub fn with_metadata(mut self, key: &str, value: f64) -> Self {
        self.extra.insert(key.to_string(), value);
        self
    }

    /// Check significance at a threshold other than the one the result
    /// was computed with.
    pub fn is_significant_at(&self, alpha: f64) -> bool {
        self.p_value < alpha
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn significance_is_derived() {
        let r = TestResult::new("t", 2.0, DegreesOfFreedom::Single(9.0), 0.03, 0.05);
        assert!(r.is_significant);
        assert!(!r.is_significant_at(0.01));

        let r = TestResult::new("t", 0.1, DegreesOfFreedom::Single(9.0), 0.8, 0.05);
        assert!(!r.is_significant);
    }

    #[test]
    fn p_value_is_clamped() {
        let r = TestResult::new("t", 0.0, DegreesOfFreedom::Single(1.0), 1.0 + 1e-12, 0.05);
        assert_eq!(r.p_value, 1.0);
        let r = TestResult::new("t", 9.0, DegreesOfFreedom::Single(1.0), -1e-12, 0.05);
        assert_eq!(r.p_value, 0.0);
    }

    #[test]
    fn welch_is_the_default_variant() {
        assert_eq!(TTestType::default(), TTestType::Welch);
    }
}
