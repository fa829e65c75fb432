//! Basic example running the temporal pattern engine on a synthetic series
//!
//! Run with: cargo run --example basic -p temporal-facade

use chrono::{Duration, TimeZone, Utc};
use temporal_facade::{
    init_tracing, Bar, EngineConfig, IndicatorPreprocessor, LoggingConfig, SeriesSnapshot,
    TemporalEngine,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing(&LoggingConfig::default())?;
    println!("=== temporal pattern engine ===\n");

    // 300 hourly bars: slow drift plus a 24-bar cycle
    let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let bars: Vec<Bar> = (0..300)
        .map(|i| {
            let t = i as f64;
            let close = 42_000.0 + 2.0 * t + 300.0 * (t * std::f64::consts::TAU / 24.0).sin();
            Bar::from_close(start + Duration::hours(i), close, 1_500.0 + 10.0 * (t * 0.3).cos())
        })
        .collect();
    let snapshot = SeriesSnapshot::new(IndicatorPreprocessor::default().prepare(bars)?);

    let dir = std::env::temp_dir().join("temporal-example");
    let config = EngineConfig::default().with_catalog_path(dir.join("cycle_catalog.json"));
    let engine = TemporalEngine::new(config)?;

    let series = snapshot.current();

    // 1. Cycle detection
    let cycles = engine.detect_cycles(&series)?;
    println!("1. Cycles: {} new, {} in catalog", cycles.len(), engine.catalog_len());

    // 2. Zoom
    let center = series.get(150).map(|b| b.timestamp).unwrap_or(start);
    let outcome = engine.zoom(&series, center)?;
    let zoom = &outcome.result;
    println!(
        "2. Zoom around {}: {} bars, intensity {:.2} ({:?}), {} resonances",
        zoom.center, zoom.bar_count, zoom.magnetic_intensity, zoom.intensity_band, zoom.resonance_count
    );
    println!("   {}", zoom.dominant_period_description);
    for f in &zoom.fractal_patterns {
        println!("   scale {:>2}: mean similarity {:.3}", f.scale, f.mean_similarity);
    }

    // 3. Analogues of the latest price
    let latest = series.last().map(|b| b.close).unwrap_or_default();
    let analogues = engine.find_analogues(&series, latest);
    println!("\n3. {} analogues of {:.1}", analogues.len(), latest);
    for a in analogues.iter().take(3) {
        println!("   {} close {:.1} delta {:+.1}", a.timestamp, a.price, a.price_delta);
    }

    // 4. Report
    let report = engine.report(&series)?;
    println!("\n4. Report: {} cycles catalogued", report.cycles_detected);
    for message in report.recommendation_messages() {
        println!("   - {}", message);
    }

    Ok(())
}
