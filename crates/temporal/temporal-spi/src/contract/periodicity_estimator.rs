//! Trait for dominant-period estimation

use crate::model::Periodicity;

/// Estimates the dominant period of a close-price region.
pub trait PeriodicityEstimator: Send + Sync {
    /// Dominant period of `closes`, or an explicit non-numeric outcome.
    fn dominant_period(&self, closes: &[f64]) -> Periodicity;
}
