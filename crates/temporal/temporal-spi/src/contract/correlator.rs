//! Segment correlation trait.

use crate::error::Result;
use crate::model::Correlation;

/// Correlates two equal-length numeric subsequences.
///
/// Implementations must be pure and deterministic; scanners call this in
/// their innermost loop.
pub trait Correlator: Send + Sync {
    /// Correlate `a` with `b`.
    ///
    /// Fails with `DegenerateInput` when the lengths differ, when fewer than
    /// two points are given, or when either side is constant.
    fn correlate(&self, a: &[f64], b: &[f64]) -> Result<Correlation>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TemporalError;

    /// Sign agreement ratio, enough to exercise the contract.
    struct SignCorrelator;

    impl Correlator for SignCorrelator {
        fn correlate(&self, a: &[f64], b: &[f64]) -> Result<Correlation> {
            if a.len() != b.len() || a.len() < 2 {
                return Err(TemporalError::degenerate("length mismatch"));
            }
            let agree = a
                .windows(2)
                .zip(b.windows(2))
                .filter(|(x, y)| (x[1] - x[0]).signum() == (y[1] - y[0]).signum())
                .count();
            let r = 2.0 * agree as f64 / (a.len() - 1) as f64 - 1.0;
            Ok(Correlation::new(r, 1.0 - r.abs()))
        }
    }

    #[test]
    fn test_trait_object() {
        let correlator: Box<dyn Correlator> = Box::new(SignCorrelator);
        let c = correlator
            .correlate(&[1.0, 2.0, 3.0], &[2.0, 4.0, 9.0])
            .unwrap();
        assert_eq!(c.r, 1.0);
        assert!(c.is_significant(0.7, 0.05));
    }

    #[test]
    fn test_mismatched_lengths_are_degenerate() {
        let err = SignCorrelator.correlate(&[1.0, 2.0], &[1.0]).unwrap_err();
        assert!(err.is_degenerate());
    }

    #[test]
    fn test_correlator_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SignCorrelator>();
    }
}
