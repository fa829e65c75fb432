//! Property tests for the temporal pattern components

use chrono::{Duration, TimeZone, Utc};
use proptest::prelude::*;
use temporal_facade::{
    pearson, AnalogueSearch, AutocorrelationPeriodicity, Bar, BarSeries, FractalAnalyzer,
    FractalConfig, Periodicity, PeriodicityEstimator,
};

fn series_from(closes: &[f64]) -> BarSeries {
    let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    BarSeries::new(
        closes
            .iter()
            .enumerate()
            .map(|(i, c)| Bar::from_close(start + Duration::minutes(i as i64), *c, 100.0))
            .collect(),
    )
    .unwrap()
}

fn int_sequence(len: std::ops::Range<usize>) -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(1i32..10_000, len).prop_map(|v| v.into_iter().map(f64::from).collect())
}

proptest! {
    #[test]
    fn correlation_of_sequence_with_itself_is_one(a in int_sequence(2..80)) {
        prop_assume!(a.iter().any(|x| *x != a[0]));
        let c = pearson(&a, &a).unwrap();
        prop_assert!((c.r - 1.0).abs() < 1e-9);
        if a.len() > 2 {
            prop_assert!(c.p_value < 1e-6);
        }
    }

    #[test]
    fn correlation_is_symmetric(
        (a, b) in (2usize..80).prop_flat_map(|n| (
            prop::collection::vec(1i32..10_000, n),
            prop::collection::vec(1i32..10_000, n),
        ))
    ) {
        let a: Vec<f64> = a.into_iter().map(f64::from).collect();
        let b: Vec<f64> = b.into_iter().map(f64::from).collect();
        match (pearson(&a, &b), pearson(&b, &a)) {
            (Ok(ab), Ok(ba)) => prop_assert_eq!(ab, ba),
            (Err(x), Err(y)) => prop_assert!(x.is_degenerate() && y.is_degenerate()),
            _ => prop_assert!(false, "one direction failed"),
        }
    }

    #[test]
    fn analogues_are_bounded_and_within_margin(
        closes in prop::collection::vec(1.0f64..1_000.0, 1..200),
        query in 1.0f64..1_000.0,
        margin in 0.0f64..300.0,
    ) {
        let series = series_from(&closes);
        let events = AnalogueSearch::default().find_with_margin(&series, query, margin);
        prop_assert!(events.len() <= 10);
        for e in &events {
            prop_assert!((e.price - query).abs() <= margin);
        }
    }

    #[test]
    fn short_regions_have_no_period(closes in int_sequence(0..50)) {
        let result = AutocorrelationPeriodicity::default().dominant_period(&closes);
        let is_insufficient = matches!(result, Periodicity::InsufficientData { required: 50, .. });
        prop_assert!(is_insufficient);
        prop_assert_eq!(result.period(), None);
    }

    #[test]
    fn fractal_scales_longer_than_a_third_are_omitted(closes in int_sequence(0..200)) {
        let config = FractalConfig::default().with_min_mean_similarity(-1.0);
        let results = FractalAnalyzer::new(config).detect(&closes).unwrap();
        for r in &results {
            prop_assert!(closes.len() >= 3 * r.scale);
        }
    }
}

#[test]
fn every_scale_is_omitted_below_three_lengths() {
    let closes: Vec<f64> = (0..149).map(|i| 100.0 + i as f64).collect();
    let results = FractalAnalyzer::default().detect(&closes).unwrap();
    let scales: Vec<usize> = results.iter().map(|r| r.scale).collect();
    assert_eq!(scales, vec![5, 10, 20]);

    let results = FractalAnalyzer::default().detect(&closes[..14]).unwrap();
    assert!(results.is_empty());
}
