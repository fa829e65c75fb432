//! Temporal pattern engine error types

use chrono::{DateTime, Utc};
use thiserror::Error;

/// Errors that can occur during temporal pattern analysis
#[derive(Error, Debug)]
pub enum TemporalError {
    /// Sequences that have no defined correlation (constant, mismatched or too short)
    #[error("Degenerate input: {reason}")]
    DegenerateInput { reason: String },

    /// Insufficient data points for the operation
    #[error("Insufficient data: need at least {required} points, got {actual}")]
    InsufficientData { required: usize, actual: usize },

    /// Zoom window selected no bars
    #[error("No data in window [{start}, {end}]")]
    NoDataInWindow {
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },

    /// Bar series construction invariant violated
    #[error("Invalid series: {0}")]
    InvalidSeries(String),

    /// Invalid parameter value
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter { name: String, reason: String },

    /// A bounded scan ran out of budget or was cancelled
    #[error("Scan aborted after {comparisons} comparisons: {reason}")]
    ScanAborted { comparisons: usize, reason: String },

    /// Catalog load/save failure
    #[error("Persistence error: {0}")]
    Persistence(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl TemporalError {
    /// Build a degenerate input error.
    pub fn degenerate(reason: impl Into<String>) -> Self {
        Self::DegenerateInput {
            reason: reason.into(),
        }
    }

    /// Build an invalid parameter error.
    pub fn invalid_parameter(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// True for correlation inputs the caller should skip.
    pub fn is_degenerate(&self) -> bool {
        matches!(self, Self::DegenerateInput { .. })
    }

    /// True when the region or window was too small for the analysis.
    pub fn is_insufficient_data(&self) -> bool {
        matches!(
            self,
            Self::InsufficientData { .. } | Self::NoDataInWindow { .. }
        )
    }

    /// True for catalog load/save failures.
    pub fn is_persistence(&self) -> bool {
        matches!(self, Self::Persistence(_) | Self::Io(_) | Self::Json(_))
    }
}

/// Result type for temporal pattern operations
pub type Result<T> = std::result::Result<T, TemporalError>;
