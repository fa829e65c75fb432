//! Intra-region repetition search.

use temporal_api::ResonanceConfig;
use temporal_spi::{Correlator, ResonanceMatch, Result};
use tracing::debug;

use crate::correlation::PearsonCorrelator;
use crate::segments::{ScanGuard, Segments};
use crate::stats;

/// Brute-force search for sub-windows that repeat later in the same region.
///
/// Every pattern starting at `i < len - min_separation` is compared with
/// every candidate of the same length starting at
/// `i + min_separation <= j < len - pattern_len`.
pub struct ResonanceDetector<C: Correlator = PearsonCorrelator> {
    config: ResonanceConfig,
    correlator: C,
}

impl ResonanceDetector {
    pub fn new(config: ResonanceConfig) -> Self {
        Self::with_correlator(config, PearsonCorrelator)
    }
}

impl Default for ResonanceDetector {
    fn default() -> Self {
        Self::new(ResonanceConfig::default())
    }
}

impl<C: Correlator> ResonanceDetector<C> {
    pub fn with_correlator(config: ResonanceConfig, correlator: C) -> Self {
        Self { config, correlator }
    }

    pub fn config(&self) -> &ResonanceConfig {
        &self.config
    }

    /// All pattern/candidate pairs with correlation above the threshold.
    ///
    /// An empty result is normal. Fails only when the scan budget runs out.
    pub fn detect_region(&self, closes: &[f64]) -> Result<Vec<ResonanceMatch>> {
        let windows = Segments::sliding(closes, self.config.pattern_len);
        let separation = self.config.min_separation;
        let pattern_count = closes.len().saturating_sub(separation).min(windows.count());

        let mut guard = ScanGuard::new("resonance", &self.config.budget);
        let mut matches = Vec::new();

        for i in 0..pattern_count {
            let pattern = windows.get(i);
            let mut mean_price = None;

            for j in (i + separation)..windows.count() {
                guard.tick()?;
                let corr = match self.correlator.correlate(pattern, windows.get(j)) {
                    Ok(c) => c,
                    Err(e) if e.is_degenerate() => continue,
                    Err(e) => return Err(e),
                };

                if corr.r > self.config.min_correlation {
                    let mean_price =
                        *mean_price.get_or_insert_with(|| stats::mean(pattern).unwrap_or(0.0));
                    matches.push(ResonanceMatch {
                        pattern_start: windows.start(i),
                        repeat_start: windows.start(j),
                        correlation: corr.r,
                        mean_price,
                    });
                }
            }
        }

        debug!(
            bars = closes.len(),
            comparisons = guard.comparisons(),
            found = matches.len(),
            "resonance scan complete"
        );

        Ok(matches)
    }
}
