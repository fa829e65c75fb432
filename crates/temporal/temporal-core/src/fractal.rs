//! Multiscale self-similarity.

use temporal_api::FractalConfig;
use temporal_spi::{Correlator, FractalScaleResult, Result};
use tracing::debug;

use crate::correlation::PearsonCorrelator;
use crate::segments::{stride_for, ScanGuard, Segments};

/// Scores how similar a region is to itself at several segment lengths.
///
/// A scale is reported when the mean correlation over every unordered pair
/// of its segments exceeds the configured threshold. Scales longer than a
/// third of the region are skipped.
pub struct FractalAnalyzer<C: Correlator = PearsonCorrelator> {
    config: FractalConfig,
    correlator: C,
}

impl FractalAnalyzer {
    pub fn new(config: FractalConfig) -> Self {
        Self::with_correlator(config, PearsonCorrelator)
    }
}

impl Default for FractalAnalyzer {
    fn default() -> Self {
        Self::new(FractalConfig::default())
    }
}

impl<C: Correlator> FractalAnalyzer<C> {
    pub fn with_correlator(config: FractalConfig, correlator: C) -> Self {
        Self { config, correlator }
    }

    pub fn config(&self) -> &FractalConfig {
        &self.config
    }

    pub fn detect(&self, closes: &[f64]) -> Result<Vec<FractalScaleResult>> {
        let mut guard = ScanGuard::new("fractal", &self.config.budget);
        let mut results = Vec::new();

        for &scale in &self.config.scales {
            if closes.len() < scale.saturating_mul(self.config.min_length_factor) {
                continue;
            }

            let segments = Segments::new(closes, scale, stride_for(scale, self.config.stride_divisor));
            if segments.count() < 2 {
                continue;
            }

            // Degenerate pairs (flat segments) are left out of the mean.
            let (mut sum, mut pairs) = (0.0, 0usize);
            for i in 0..segments.count() {
                for j in (i + 1)..segments.count() {
                    guard.tick()?;
                    match self.correlator.correlate(segments.get(i), segments.get(j)) {
                        Ok(c) => {
                            sum += c.r;
                            pairs += 1;
                        }
                        Err(e) if e.is_degenerate() => {}
                        Err(e) => return Err(e),
                    }
                }
            }

            if pairs == 0 {
                continue;
            }
            let mean_similarity = sum / pairs as f64;
            debug!(scale, segments = segments.count(), pairs, mean_similarity, "fractal scale scored");

            if mean_similarity > self.config.min_mean_similarity {
                results.push(FractalScaleResult {
                    scale,
                    mean_similarity,
                    segments_compared: segments.count(),
                });
            }
        }

        Ok(results)
    }
}
