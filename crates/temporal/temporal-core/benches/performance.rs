//! Performance benchmarks for the temporal pattern scans

use std::time::Instant;

use chrono::{Duration, TimeZone, Utc};
use temporal_api::EngineConfig;
use temporal_core::{
    pearson, AnalogueSearch, CycleDetector, FractalAnalyzer, IndicatorPreprocessor,
    ResonanceDetector, TemporalEngine,
};
use temporal_spi::{Bar, BarSeries};

fn generate_series(n: usize) -> BarSeries {
    let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let bars = (0..n)
        .map(|i| {
            let t = i as f64;
            let close = 30_000.0 + t * 0.5 + 150.0 * (t * 0.1).sin() + 40.0 * (t * 0.37).cos();
            Bar::from_close(start + Duration::minutes(i as i64), close, 1_000.0 + (t * 0.2).sin() * 200.0)
        })
        .collect();
    IndicatorPreprocessor::default().prepare(bars).unwrap()
}

fn bench<F>(name: &str, iterations: u32, mut f: F)
where
    F: FnMut(),
{
    // Warmup
    for _ in 0..3 {
        f();
    }

    let start = Instant::now();
    for _ in 0..iterations {
        f();
    }
    let elapsed = start.elapsed();
    let per_iter = elapsed / iterations;

    println!(
        "{:30} {:>10.2?} total, {:>10.2?}/iter ({} iters)",
        name, elapsed, per_iter, iterations
    );
}

fn main() {
    println!("=== temporal pattern engine benchmarks ===\n");

    let series_500 = generate_series(500);
    let series_1k = generate_series(1_000);
    let closes_500 = series_500.closes();
    let closes_1k = series_1k.closes();
    let now = Utc::now();

    println!("--- Correlation ---");
    let a: Vec<f64> = closes_1k[..50].to_vec();
    let b: Vec<f64> = closes_1k[50..100].to_vec();
    bench("pearson(50)", 100_000, || {
        let _ = pearson(&a, &b);
    });

    println!("\n--- Scans ---");
    let cycles = CycleDetector::default();
    bench("cycles(500)", 20, || {
        let _ = cycles.detect_closes(&closes_500, 10, 100, now);
    });
    bench("cycles(1000)", 10, || {
        let _ = cycles.detect_closes(&closes_1k, 10, 100, now);
    });

    let resonance = ResonanceDetector::default();
    bench("resonance(500)", 5, || {
        let _ = resonance.detect_region(&closes_500);
    });

    let fractal = FractalAnalyzer::default();
    bench("fractal(500)", 10, || {
        let _ = fractal.detect(&closes_500);
    });

    let analogues = AnalogueSearch::default();
    let query = closes_1k[closes_1k.len() - 1];
    bench("analogues(1000)", 200, || {
        let _ = analogues.find_analogues(&series_1k, query);
    });

    println!("\n--- Engine ---");
    let engine = TemporalEngine::in_memory(EngineConfig::default()).unwrap();
    let center = series_1k.get(500).unwrap().timestamp;
    bench("zoom(1000, 24h)", 10, || {
        let _ = engine.zoom(&series_1k, center);
    });
    bench("indicators(1000)", 200, || {
        let _ = IndicatorPreprocessor::default().refresh(&series_1k);
    });
}
