//! The data model accepted by the engine: labeled observation groups.

use crate::error::{Result, StatsError};

/// A labeled group of observations (e.g. "control", "treatment-A").
///
/// Immutable once constructed; the engine never mutates, re-orders, or drops
/// the values it is given. Construction enforces the data-model invariants:
/// at least one observation, every observation finite.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    label: String,
    values: Vec<f64>,
}

impl Sample {
    pub fn new(label: impl Into<String>, values: Vec<f64>) -> Result<Self> {
        let label = label.into();
        if values.is_empty() {
            return Err(StatsError::InsufficientData {
                group: label,
                required: 1,
                actual: 0,
            });
        }
        if let Some(idx) = values.iter().position(|v| !v.is_finite()) {
            return Err(StatsError::invalid_parameter(
                "values",
                format!("group '{label}' contains a non-finite value at index {idx}"),
            ));
        }
        Ok(Sample { label, values })
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Number of observations; at least 1 by construction.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Arithmetic mean. Infallible: samples are never empty.
    pub fn mean(&self) -> f64 {
        self.values.iter().sum::<f64>() / self.len() as f64
    }

    /// Sample variance (n−1 denominator).
    pub fn variance(&self) -> Result<f64> {
        crate::summary::variance(&self.values, 1).ok_or_else(|| self.too_small(2))
    }

    /// Sample standard deviation (n−1 denominator).
    pub fn std_dev(&self) -> Result<f64> {
        self.variance().map(f64::sqrt)
    }

    /// Standard error of the mean.
    pub fn standard_error(&self) -> Result<f64> {
        self.std_dev().map(|sd| sd / (self.len() as f64).sqrt())
    }

    /// Check a minimum-size invariant, naming this group on failure.
    pub(crate) fn require_len(&self, required: usize) -> Result<()> {
        if self.len() < required {
            Err(self.too_small(required))
        } else {
            Ok(())
        }
    }

    fn too_small(&self, required: usize) -> StatsError {
        StatsError::InsufficientData {
            group: self.label.clone(),
            required,
            actual: self.len(),
        }
    }
}

/// An insertion-ordered collection of uniquely-labeled samples.
///
/// Used by tests over two or more groups (two-sample t-tests, ANOVA,
/// Kruskal-Wallis); one-sample tests take a [`Sample`] directly.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleSet {
    samples: Vec<Sample>,
}

impl SampleSet {
    pub fn new(samples: Vec<Sample>) -> Result<Self> {
        if samples.is_empty() {
            return Err(StatsError::invalid_parameter(
                "samples",
                "a sample set needs at least one group",
            ));
        }
        for (i, sample) in samples.iter().enumerate() {
            if samples[..i].iter().any(|other| other.label == sample.label) {
                return Err(StatsError::invalid_parameter(
                    "samples",
                    format!("duplicate group label '{}'", sample.label),
                ));
            }
        }
        Ok(SampleSet { samples })
    }

    /// Build a set directly from `(label, values)` pairs.
    pub fn from_groups<I, L>(groups: I) -> Result<Self>
    where
        I: IntoIterator<Item = (L, Vec<f64>)>,
        L: Into<String>,
    {
        let samples = groups
            .into_iter()
            .map(|(label, values)| Sample::new(label, values))
            .collect::<Result<Vec<_>>>()?;
        SampleSet::new(samples)
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn get(&self, label: &str) -> Option<&Sample> {
        self.samples.iter().find(|s| s.label == label)
    }

    pub fn n_groups(&self) -> usize {
        self.samples.len()
    }

    pub fn total_observations(&self) -> usize {
        self.samples.iter().map(Sample::len).sum()
    }
}
