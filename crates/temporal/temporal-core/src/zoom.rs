//! Zoom query: composite analysis around a center timestamp.

use chrono::{DateTime, Duration, Utc};
use temporal_api::EngineConfig;
use temporal_spi::{
    BarSeries, PeriodicityEstimator, Result, TemporalError, ZoomOutcome, ZoomResult,
};
use tracing::debug;

use crate::fractal::FractalAnalyzer;
use crate::intensity::MagneticIntensity;
use crate::periodicity::AutocorrelationPeriodicity;
use crate::resonance::ResonanceDetector;

/// Slices a series around a timestamp and runs the region analyses on it.
pub struct ZoomQuery {
    default_radius_hours: i64,
    intensity: MagneticIntensity,
    resonance: ResonanceDetector,
    periodicity: Box<dyn PeriodicityEstimator>,
    fractal: FractalAnalyzer,
}

impl ZoomQuery {
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            default_radius_hours: config.zoom.radius_hours,
            intensity: MagneticIntensity::new(config.intensity.clone()),
            resonance: ResonanceDetector::new(config.resonance.clone()),
            periodicity: Box::new(AutocorrelationPeriodicity::new(config.periodicity.clone())),
            fractal: FractalAnalyzer::new(config.fractal.clone()),
        }
    }

    /// Replace the periodicity estimator.
    pub fn with_periodicity(mut self, estimator: Box<dyn PeriodicityEstimator>) -> Self {
        self.periodicity = estimator;
        self
    }

    pub fn default_radius_hours(&self) -> i64 {
        self.default_radius_hours
    }

    pub fn intensity(&self) -> &MagneticIntensity {
        &self.intensity
    }

    pub fn resonance(&self) -> &ResonanceDetector {
        &self.resonance
    }

    pub fn periodicity(&self) -> &dyn PeriodicityEstimator {
        self.periodicity.as_ref()
    }

    pub fn fractal(&self) -> &FractalAnalyzer {
        &self.fractal
    }

    /// Zoom with the configured radius.
    pub fn zoom(&self, series: &BarSeries, center: DateTime<Utc>) -> Result<ZoomOutcome> {
        self.zoom_with_radius(series, center, self.default_radius_hours)
    }

    /// Analyse bars with `center - radius <= timestamp <= center + radius`.
    ///
    /// An empty window fails with [`TemporalError::NoDataInWindow`].
    pub fn zoom_with_radius(
        &self,
        series: &BarSeries,
        center: DateTime<Utc>,
        radius_hours: i64,
    ) -> Result<ZoomOutcome> {
        if radius_hours < 0 {
            return Err(TemporalError::invalid_parameter(
                "radius_hours",
                format!("must be non-negative, got {}", radius_hours),
            ));
        }
        let radius = Duration::try_hours(radius_hours).ok_or_else(|| {
            TemporalError::invalid_parameter("radius_hours", "out of range")
        })?;
        let start = center.checked_sub_signed(radius).unwrap_or(DateTime::<Utc>::MIN_UTC);
        let end = center.checked_add_signed(radius).unwrap_or(DateTime::<Utc>::MAX_UTC);

        let region = series.window(start, end);
        if region.is_empty() {
            return Err(TemporalError::NoDataInWindow { start, end });
        }

        let closes = region.closes();
        let (magnetic_intensity, intensity_band) = self.intensity.band(&region);
        let resonance_count = self.resonance.detect_region(&closes)?.len();
        let dominant_period = self.periodicity.dominant_period(&closes);
        let fractal_patterns = self.fractal.detect(&closes)?;

        debug!(
            center = %center,
            radius_hours,
            bars = region.len(),
            magnetic_intensity,
            resonance_count,
            fractal_scales = fractal_patterns.len(),
            "zoom complete"
        );

        let result = ZoomResult {
            center,
            radius_hours,
            bar_count: region.len(),
            magnetic_intensity,
            intensity_band,
            resonance_count,
            dominant_period_description: dominant_period.describe(),
            dominant_period,
            fractal_patterns,
        };

        Ok(ZoomOutcome { region, result })
    }
}

impl Default for ZoomQuery {
    fn default() -> Self {
        Self::new(&EngineConfig::default())
    }
}
