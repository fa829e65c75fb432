//! Indicator preprocessor: fast/slow EMA, SMA baseline and density.

use temporal_api::IndicatorConfig;
use temporal_spi::{Bar, BarSeries, Result};

/// Attaches `ema_fast`, `ema_slow`, `sma_baseline` and `density` to bars.
#[derive(Debug, Clone, Default)]
pub struct IndicatorPreprocessor {
    config: IndicatorConfig,
}

impl IndicatorPreprocessor {
    pub fn new(config: IndicatorConfig) -> Self {
        Self { config }
    }

    /// Compute indicators over `bars` and build a validated series.
    ///
    /// Existing indicator values are overwritten.
    pub fn prepare(&self, mut bars: Vec<Bar>) -> Result<BarSeries> {
        let closes: Vec<f64> = bars.iter().map(|b| b.close).collect();
        let fast = ema(&closes, self.config.ema_fast_span);
        let slow = ema(&closes, self.config.ema_slow_span);
        let baseline = sma(&closes, self.config.sma_window);

        for (i, bar) in bars.iter_mut().enumerate() {
            bar.ema_fast = Some(fast[i]);
            bar.ema_slow = Some(slow[i]);
            bar.sma_baseline = baseline[i];
            bar.density = baseline[i].map(|base| {
                1.0 / ((fast[i] - slow[i]).abs() + (slow[i] - base).abs() + self.config.density_epsilon)
            });
        }

        BarSeries::new(bars)
    }

    /// Recompute indicators for an existing series.
    pub fn refresh(&self, series: &BarSeries) -> Result<BarSeries> {
        self.prepare(series.bars().to_vec())
    }
}

/// Exponential moving average with adjusted weights, `alpha = 2 / (span + 1)`.
///
/// Each output is the weighted mean of all inputs so far with weights
/// `(1 - alpha)^age`, so it is defined from the first value.
pub fn ema(values: &[f64], span: usize) -> Vec<f64> {
    let alpha = 2.0 / (span.max(1) as f64 + 1.0);
    let decay = 1.0 - alpha;
    let (mut num, mut den) = (0.0, 0.0);

    values
        .iter()
        .map(|v| {
            num = v + decay * num;
            den = 1.0 + decay * den;
            num / den
        })
        .collect()
}

/// Trailing simple moving average, `None` for the first `window - 1` values.
pub fn sma(values: &[f64], window: usize) -> Vec<Option<f64>> {
    let window = window.max(1);
    let mut sum = 0.0;
    values
        .iter()
        .enumerate()
        .map(|(i, v)| {
            sum += v;
            if i >= window {
                sum -= values[i - window];
            }
            (i + 1 >= window).then(|| sum / window as f64)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};

    #[test]
    fn test_ema_adjusted_weights() {
        // span 3: alpha 0.5, second value = (2 + 0.5 * 1) / 1.5
        let out = ema(&[1.0, 2.0, 3.0], 3);
        assert_eq!(out[0], 1.0);
        assert!((out[1] - 2.5 / 1.5).abs() < 1e-12);
        assert!((out[2] - 4.25 / 1.75).abs() < 1e-12);
    }

    #[test]
    fn test_ema_of_constant() {
        assert!(ema(&[5.0; 30], 8).iter().all(|v| (v - 5.0).abs() < 1e-12));
    }

    #[test]
    fn test_sma() {
        let out = sma(&[1.0, 2.0, 3.0, 4.0], 3);
        assert_eq!(out[0], None);
        assert_eq!(out[1], None);
        assert!((out[2].unwrap() - 2.0).abs() < 1e-12);
        assert!((out[3].unwrap() - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_prepare_populates_fields() {
        let start = Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap();
        let bars: Vec<Bar> = (0..30)
            .map(|i| Bar::from_close(start + Duration::minutes(i), 100.0 + i as f64, 10.0))
            .collect();
        let series = IndicatorPreprocessor::default().prepare(bars).unwrap();

        let early = series.get(18).unwrap();
        assert!(early.ema_fast.is_some() && early.ema_slow.is_some());
        assert_eq!(early.sma_baseline, None);
        assert_eq!(early.density, None);

        let late = series.get(19).unwrap();
        assert!((late.sma_baseline.unwrap() - 109.5).abs() < 1e-9);
        assert!(late.density.unwrap() > 0.0);
        assert_eq!(series.densities().len(), 11);
    }

    #[test]
    fn test_flat_prices_have_large_density() {
        let start = Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap();
        let bars: Vec<Bar> = (0..25)
            .map(|i| Bar::from_close(start + Duration::minutes(i), 50.0, 10.0))
            .collect();
        let series = IndicatorPreprocessor::default().prepare(bars).unwrap();
        let density = series.last().unwrap().density.unwrap();
        assert!((density - 1e6).abs() < 1.0);
    }
}
