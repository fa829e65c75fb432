//! Cycle detection over adjacent segment pairs.

use chrono::{DateTime, Utc};
use temporal_api::CycleConfig;
use temporal_spi::{BarSeries, Correlator, CycleEvent, Result};
use tracing::debug;

use crate::correlation::PearsonCorrelator;
use crate::segments::{stride_for, ScanGuard, Segments};

/// Finds significantly correlated adjacent segments at every window size.
///
/// For each window `w` in `[window_min, min(window_max, len / 2))` the
/// series is cut into segments of `w` bars with stride `w / 2`, and each
/// segment is compared only with its successor. Output order is window size
/// ascending, then segment position.
pub struct CycleDetector<C: Correlator = PearsonCorrelator> {
    config: CycleConfig,
    correlator: C,
}

impl CycleDetector {
    pub fn new(config: CycleConfig) -> Self {
        Self::with_correlator(config, PearsonCorrelator)
    }
}

impl Default for CycleDetector {
    fn default() -> Self {
        Self::new(CycleConfig::default())
    }
}

impl<C: Correlator> CycleDetector<C> {
    pub fn with_correlator(config: CycleConfig, correlator: C) -> Self {
        Self { config, correlator }
    }

    pub fn config(&self) -> &CycleConfig {
        &self.config
    }

    /// Detect cycles in the close prices of `series` using the configured
    /// window bounds.
    pub fn detect(&self, series: &BarSeries, detected_at: DateTime<Utc>) -> Result<Vec<CycleEvent>> {
        self.detect_closes(
            &series.closes(),
            self.config.window_min,
            self.config.window_max,
            detected_at,
        )
    }

    /// Detect cycles in `closes` for windows in `[window_min, min(window_max, len / 2))`.
    pub fn detect_closes(
        &self,
        closes: &[f64],
        window_min: usize,
        window_max: usize,
        detected_at: DateTime<Utc>,
    ) -> Result<Vec<CycleEvent>> {
        let upper = window_max.min(closes.len() / 2);
        let mut guard = ScanGuard::new("cycles", &self.config.budget);
        let mut events = Vec::new();
        let mut skipped = 0usize;

        for window in window_min.max(2)..upper {
            let segments = Segments::new(closes, window, stride_for(window, self.config.stride_divisor));

            for i in 1..segments.count() {
                guard.tick()?;
                let corr = match self.correlator.correlate(segments.get(i - 1), segments.get(i)) {
                    Ok(c) => c,
                    Err(e) if e.is_degenerate() => {
                        skipped += 1;
                        continue;
                    }
                    Err(e) => return Err(e),
                };

                if corr.r > self.config.min_correlation && corr.p_value < self.config.max_p_value {
                    events.push(CycleEvent {
                        window_size: window,
                        correlation: corr.r,
                        p_value: corr.p_value,
                        first_segment_start: segments.start(i - 1),
                        second_segment_start: segments.start(i),
                        detected_at,
                    });
                }
            }
        }

        debug!(
            bars = closes.len(),
            window_min,
            window_max = upper,
            comparisons = guard.comparisons(),
            skipped,
            found = events.len(),
            "cycle scan complete"
        );

        Ok(events)
    }
}
