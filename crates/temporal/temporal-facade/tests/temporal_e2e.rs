//! End-to-end scenarios for the temporal pattern engine

use chrono::{DateTime, Duration, TimeZone, Utc};
use temporal_facade::{
    AnalogueConfig, Bar, BarSeries, EngineConfig, IndicatorPreprocessor, IntensityBand,
    Recommendation, SimilarityPolicy, TemporalEngine, Trend,
};

fn start() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 9, 1, 0, 0, 0).unwrap()
}

fn build(closes: &[f64], volume: f64) -> BarSeries {
    BarSeries::new(
        closes
            .iter()
            .enumerate()
            .map(|(i, c)| Bar::from_close(start() + Duration::hours(i as i64), *c, volume))
            .collect(),
    )
    .unwrap()
}

// ============================================================================
// Monotonic series
// ============================================================================

#[test]
fn e2e_monotonic_series_trend_and_intensity() {
    let closes: Vec<f64> = (0..200).map(|i| 100.0 + i as f64).collect();
    let series = build(&closes, 5_000.0);
    let engine = TemporalEngine::in_memory(EngineConfig::default()).unwrap();

    // constant score keeps chronological order, so the first ten bars win
    // and sit too close to the start to carry a context
    let analogues = engine.find_analogues_with_margin(&series, 200.0, 100.0);
    assert_eq!(analogues.len(), 10);
    assert_eq!(analogues[0].price, 100.0);
    assert_eq!(analogues[9].price, 109.0);
    assert!(analogues.iter().all(|a| a.context.is_none()));

    // every 40-bar context window of a rising series is ascending
    let analogues = engine.find_analogues_with_margin(&series, 140.0, 20.0);
    assert_eq!(analogues.len(), 10);
    assert_eq!(analogues[0].price, 120.0);
    for a in &analogues {
        let ctx = a.context.as_ref().expect("context inside the series");
        assert_eq!(ctx.medium_trend, Trend::Ascending);
        assert_eq!(ctx.short_trend, Trend::Ascending);
        assert!(ctx.volatility < 0.001);
        assert_eq!(ctx.price_range, 39.0);
        assert_eq!(ctx.mean_volume, 5_000.0);
    }

    // density-less intensity is dominated by the volume term (5000 / 1000)
    let intensity = engine.magnetic_intensity(&series);
    assert!(intensity >= 5.0);
    assert!(intensity - 5.0 < 5.0, "intensity {}", intensity);
}

#[test]
fn e2e_monotonic_series_context_ranking() {
    let closes: Vec<f64> = (0..200).map(|i| 100.0 + i as f64).collect();
    let series = build(&closes, 5_000.0);
    let config = EngineConfig {
        analogue: AnalogueConfig::default().with_similarity(SimilarityPolicy::context_distance()),
        ..EngineConfig::default()
    };
    let engine = TemporalEngine::in_memory(config).unwrap();

    let analogues = engine.find_analogues_with_margin(&series, 200.0, 100.0);
    assert_eq!(analogues.len(), 10);
    // contextual analogues nearest the query price rank first
    assert_eq!(analogues[0].price, 200.0);
    assert!(analogues.iter().all(|a| a.context.is_some()));
    assert!(analogues
        .windows(2)
        .all(|w| w[0].similarity_score >= w[1].similarity_score));
}

// ============================================================================
// Repeated pattern
// ============================================================================

#[test]
fn e2e_repeated_pattern_resonates() {
    let pattern = [210.0, 214.0, 211.0, 219.0, 216.0, 223.0, 218.0, 226.0, 221.0, 229.0];
    let mut closes = pattern.to_vec();
    closes.extend((0..25).map(|i| 205.0 + ((i * 7) % 5) as f64 * 0.1));
    closes.extend_from_slice(&pattern);
    closes.extend((0..10).map(|i| 205.0 + (i % 2) as f64 * 0.1));
    let series = build(&closes, 800.0);

    let engine = TemporalEngine::in_memory(EngineConfig::default()).unwrap();
    let matches = engine.resonances(&series).unwrap();
    let hit = matches
        .iter()
        .find(|m| m.pattern_start == 0 && m.repeat_start == 35)
        .expect("second occurrence matched");
    assert!(hit.correlation > 0.8);
    assert!((hit.mean_price - 218.7).abs() < 1e-9);

    // the zoom over the whole series reports it too
    let center = series.get(27).unwrap().timestamp;
    let outcome = engine.zoom_with_radius(&series, center, 48).unwrap();
    assert_eq!(outcome.result.bar_count, closes.len());
    assert!(outcome.result.resonance_count >= 1);
    assert_eq!(engine.active_resonances(), outcome.result.resonance_count);
}

// ============================================================================
// Full pipeline
// ============================================================================

#[test]
fn e2e_preprocessed_series_report() {
    let bars: Vec<Bar> = (0..240)
        .map(|i| {
            let t = i as f64;
            let close = 100.0 + 50.0 * (t * std::f64::consts::TAU / 30.0).sin();
            Bar::from_close(start() + Duration::hours(i), close, 2_000.0)
        })
        .collect();
    let series = IndicatorPreprocessor::default().prepare(bars).unwrap();
    assert_eq!(series.densities().len(), 240 - 19);

    let dir = tempfile::tempdir().unwrap();
    let engine = TemporalEngine::new(
        EngineConfig::default().with_catalog_path(dir.path().join("catalog.json")),
    )
    .unwrap();

    let center = series.get(120).unwrap().timestamp;
    let zoom = engine.zoom_with_radius(&series, center, 60).unwrap().result;
    assert_eq!(zoom.bar_count, 121);
    // the uncentered autocorrelation tapers with lag, pulling the first
    // peak slightly below the true period of 30
    let period = zoom.dominant_period.period().expect("periodic region");
    assert!((25..=30).contains(&period), "period {}", period);
    assert_eq!(
        zoom.dominant_period_description,
        format!("Dominant period: {} bars", period)
    );
    assert!(zoom.magnetic_intensity > 0.0);
    assert_eq!(zoom.intensity_band, IntensityBand::classify(zoom.magnetic_intensity));

    let report = engine.report_at(&series, start() + Duration::days(30)).unwrap();
    assert_eq!(report.total_bars, 240);
    assert_eq!(report.period.as_ref().unwrap().start, start());
    assert!(report.new_cycles > 0);
    assert_eq!(report.cycles_detected, report.new_cycles);
    assert_eq!(report.active_resonances, zoom.resonance_count);
    assert_eq!(
        report.active_fractal_scales,
        engine.fractal_scales(&series).unwrap().len()
    );
    assert!(matches!(
        report.recommendations.first(),
        Some(Recommendation::ActiveCycles { .. })
    ));
    assert_eq!(
        report
            .recommendations
            .iter()
            .any(|r| matches!(r, Recommendation::FractalScales { .. })),
        report.active_fractal_scales > 0
    );

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["recommendations"][0]["kind"], "active_cycles");
}
