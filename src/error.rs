use thiserror::Error;

/// Errors surfaced by the analysis engine.
///
/// Every variant carries enough context to render a user-facing message
/// (offending group label, required minimum, actual size). Errors are
/// returned synchronously and never retried internally; no failure is ever
/// converted into a NaN or placeholder result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StatsError {
    /// A group is below the minimum size for the requested operation.
    #[error("group '{group}' has {actual} observation(s) but at least {required} are required")]
    InsufficientData {
        group: String,
        required: usize,
        actual: usize,
    },

    /// Paired samples with unequal lengths.
    #[error("paired samples must have equal lengths (got {left} and {right})")]
    DimensionMismatch { left: usize, right: usize },

    /// A parameter outside its valid domain.
    #[error("invalid parameter '{name}': {reason}")]
    InvalidParameter { name: String, reason: String },
}

impl StatsError {
    pub(crate) fn invalid_parameter(name: &str, reason: impl Into<String>) -> Self {
        StatsError::InvalidParameter {
            name: name.to_string(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, StatsError>;
