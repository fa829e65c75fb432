//! Outcome of dominant-period estimation.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Dominant periodicity of a region.
///
/// Every variant is a normal outcome; none of them is an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Periodicity {
    /// Region too short to estimate a period
    InsufficientData { required: usize, actual: usize },
    /// No autocorrelation peak cleared the height threshold
    NoResonantPeriod,
    /// Lag, in bars, of the first qualifying autocorrelation peak
    Dominant { period: usize },
}

impl Periodicity {
    /// Period in bars, if one was found.
    pub fn period(&self) -> Option<usize> {
        match self {
            Self::Dominant { period } => Some(*period),
            _ => None,
        }
    }

    /// Human-readable description for reports.
    pub fn describe(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Periodicity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InsufficientData { required, actual } => write!(
                f,
                "Insufficient data for periodicity analysis ({} bars, need {})",
                actual, required
            ),
            Self::NoResonantPeriod => write!(f, "No resonant period detected"),
            Self::Dominant { period } => write!(f, "Dominant period: {} bars", period),
        }
    }
}
