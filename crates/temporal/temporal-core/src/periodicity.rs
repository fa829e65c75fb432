//! Autocorrelation-based dominant period estimation.

use temporal_api::PeriodicityConfig;
use temporal_spi::{Periodicity, PeriodicityEstimator};

/// Estimates the dominant period of a close-price region.
///
/// Uses the raw (uncentered) autocorrelation normalized by its zero-lag
/// value, searches lags `[0, n / 2)` for local maxima at or above the peak
/// height, and reports the smallest such lag.
#[derive(Debug, Clone, Default)]
pub struct AutocorrelationPeriodicity {
    config: PeriodicityConfig,
}

impl AutocorrelationPeriodicity {
    pub fn new(config: PeriodicityConfig) -> Self {
        Self { config }
    }
}

impl PeriodicityEstimator for AutocorrelationPeriodicity {
    fn dominant_period(&self, closes: &[f64]) -> Periodicity {
        if closes.len() < self.config.min_bars {
            return Periodicity::InsufficientData {
                required: self.config.min_bars,
                actual: closes.len(),
            };
        }

        let acf = normalized_autocorrelation(closes, closes.len() / 2);
        if acf.is_empty() {
            return Periodicity::NoResonantPeriod;
        }

        local_maxima(&acf)
            .into_iter()
            .find(|&lag| acf[lag] >= self.config.peak_height)
            .map(|period| Periodicity::Dominant { period })
            .unwrap_or(Periodicity::NoResonantPeriod)
    }
}

/// `sum x[i] * x[i + k]` for `k` in `0..max_lag`, divided by the lag-0 value.
///
/// Empty when the lag-0 value is zero or non-finite.
pub fn normalized_autocorrelation(data: &[f64], max_lag: usize) -> Vec<f64> {
    let zero: f64 = data.iter().map(|x| x * x).sum();
    if zero == 0.0 || !zero.is_finite() {
        return Vec::new();
    }

    (0..max_lag.min(data.len()))
        .map(|k| {
            data.iter()
                .zip(&data[k..])
                .map(|(a, b)| a * b)
                .sum::<f64>()
                / zero
        })
        .collect()
}

/// Indices of local maxima, excluding both endpoints.
///
/// A flat peak reports its middle sample (rounded down).
pub fn local_maxima(x: &[f64]) -> Vec<usize> {
    let mut peaks = Vec::new();
    if x.len() < 3 {
        return peaks;
    }

    let last = x.len() - 1;
    let mut i = 1;
    while i < last {
        if x[i - 1] < x[i] {
            let mut ahead = i + 1;
            while ahead < last && x[ahead] == x[i] {
                ahead += 1;
            }
            if x[ahead] < x[i] {
                peaks.push((i + ahead - 1) / 2);
                i = ahead;
                continue;
            }
        }
        i += 1;
    }
    peaks
}
