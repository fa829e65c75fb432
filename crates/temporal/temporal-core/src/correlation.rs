//! Pearson segment correlation.
//!
//! This is the innermost routine of every scan, so it works on borrowed
//! slices and never allocates.

use statrs::function::beta::beta_reg;
use temporal_spi::{Correlation, Correlator, Result, TemporalError};

/// Pearson product-moment correlation with a two-sided p-value.
///
/// The p-value comes from the t distribution with `n - 2` degrees of
/// freedom, expressed through the regularized incomplete beta function.
#[derive(Debug, Clone, Copy, Default)]
pub struct PearsonCorrelator;

impl PearsonCorrelator {
    pub fn new() -> Self {
        Self
    }
}

impl Correlator for PearsonCorrelator {
    fn correlate(&self, a: &[f64], b: &[f64]) -> Result<Correlation> {
        pearson(a, b)
    }
}

/// Correlate two equal-length, non-constant sequences.
pub fn pearson(a: &[f64], b: &[f64]) -> Result<Correlation> {
    if a.len() != b.len() {
        return Err(TemporalError::degenerate(format!(
            "length mismatch: {} vs {}",
            a.len(),
            b.len()
        )));
    }
    let n = a.len();
    if n < 2 {
        return Err(TemporalError::degenerate(format!(
            "need at least 2 points, got {}",
            n
        )));
    }
    if is_constant(a) || is_constant(b) {
        return Err(TemporalError::degenerate("constant sequence"));
    }

    let len = n as f64;
    let mean_a = a.iter().sum::<f64>() / len;
    let mean_b = b.iter().sum::<f64>() / len;

    let (mut sab, mut saa, mut sbb) = (0.0, 0.0, 0.0);
    for (x, y) in a.iter().zip(b) {
        let dx = x - mean_a;
        let dy = y - mean_b;
        sab += dx * dy;
        saa += dx * dx;
        sbb += dy * dy;
    }

    if saa == 0.0 || sbb == 0.0 || !(saa.is_finite() && sbb.is_finite()) {
        return Err(TemporalError::degenerate("zero or non-finite variance"));
    }

    let r = (sab / (saa.sqrt() * sbb.sqrt())).clamp(-1.0, 1.0);
    Ok(Correlation::new(r, p_value(r, n)))
}

/// Two-sided p-value for correlation `r` over `n` points.
fn p_value(r: f64, n: usize) -> f64 {
    if n <= 2 {
        return 1.0;
    }
    let df = (n - 2) as f64;
    let x = (1.0 - r * r).clamp(0.0, 1.0);
    beta_reg(df / 2.0, 0.5, x).clamp(0.0, 1.0)
}

fn is_constant(values: &[f64]) -> bool {
    let first = values[0];
    values.iter().all(|v| *v == first)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_perfect_positive() {
        let a = [1.0, 2.0, 3.0, 4.0, 5.0];
        let b = [2.0, 4.0, 6.0, 8.0, 10.0];
        let c = pearson(&a, &b).unwrap();
        assert!((c.r - 1.0).abs() < 1e-12);
        assert!(c.p_value < 1e-10);
    }

    #[test]
    fn test_perfect_negative() {
        let a = [1.0, 2.0, 3.0, 4.0, 5.0];
        let b = [5.0, 4.0, 3.0, 2.0, 1.0];
        let c = pearson(&a, &b).unwrap();
        assert!((c.r + 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_known_value() {
        // r = 0.90303 over 10 points: t = 5.9457 with 8 df
        let a = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0];
        let b = [2.0, 1.0, 4.0, 3.0, 7.0, 5.0, 6.0, 9.0, 10.0, 8.0];
        let c = pearson(&a, &b).unwrap();
        assert!((c.r - 0.9030303030303031).abs() < 1e-9, "r = {}", c.r);
        assert!((c.p_value - 0.000343612).abs() < 1e-7, "p = {}", c.p_value);
    }

    #[test]
    fn test_two_points_has_unit_p_value() {
        let c = pearson(&[1.0, 2.0], &[3.0, 5.0]).unwrap();
        assert!((c.r - 1.0).abs() < 1e-12);
        assert_eq!(c.p_value, 1.0);
    }

    #[test]
    fn test_degenerate_inputs() {
        assert!(pearson(&[1.0, 1.0, 1.0], &[1.0, 2.0, 3.0])
            .unwrap_err()
            .is_degenerate());
        assert!(pearson(&[1.0, 2.0], &[1.0, 2.0, 3.0])
            .unwrap_err()
            .is_degenerate());
        assert!(pearson(&[1.0], &[2.0]).unwrap_err().is_degenerate());
        assert!(pearson(&[], &[]).unwrap_err().is_degenerate());
    }

    #[test]
    fn test_correlator_trait() {
        let correlator: &dyn Correlator = &PearsonCorrelator::new();
        let c = correlator.correlate(&[1.0, 3.0, 2.0], &[1.0, 3.0, 2.0]).unwrap();
        assert!((c.r - 1.0).abs() < 1e-12);
    }

    fn non_constant() -> impl Strategy<Value = Vec<f64>> {
        prop::collection::vec(-1000i32..1000, 3..60)
            .prop_filter("non-constant", |v| v.iter().any(|x| *x != v[0]))
            .prop_map(|v| v.into_iter().map(f64::from).collect())
    }

    proptest! {
        #[test]
        fn prop_self_correlation_is_one(a in non_constant()) {
            let c = pearson(&a, &a).unwrap();
            prop_assert!((c.r - 1.0).abs() < 1e-9);
            prop_assert!(c.p_value < 1e-6);
        }

        #[test]
        fn prop_symmetric(
            (a, b) in (3usize..60).prop_flat_map(|n| (
                prop::collection::vec(-1000i32..1000, n),
                prop::collection::vec(-1000i32..1000, n),
            ))
        ) {
            let a: Vec<f64> = a.into_iter().map(f64::from).collect();
            let b: Vec<f64> = b.into_iter().map(f64::from).collect();
            match (pearson(&a, &b), pearson(&b, &a)) {
                (Ok(ab), Ok(ba)) => {
                    prop_assert_eq!(ab.r, ba.r);
                    prop_assert_eq!(ab.p_value, ba.p_value);
                    prop_assert!((-1.0..=1.0).contains(&ab.r));
                    prop_assert!((0.0..=1.0).contains(&ab.p_value));
                }
                (Err(e1), Err(e2)) => {
                    prop_assert!(e1.is_degenerate() && e2.is_degenerate());
                }
                _ => prop_assert!(false, "asymmetric outcome"),
            }
        }
    }
}
