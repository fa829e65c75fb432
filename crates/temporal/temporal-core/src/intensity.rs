//! Magnetic intensity of a region.

use temporal_api::IntensityConfig;
use temporal_spi::{BarSeries, IntensityBand};

use crate::stats;

/// Scores how active a region is.
///
/// When any bar carries a density value the intensity is the mean of the
/// available densities. Otherwise it falls back to
/// `min(volatility * volatility_scale + mean_volume / volume_scale, cap)`,
/// where volatility is the sample standard deviation of bar-to-bar
/// percentage changes and counts as zero when fewer than two changes exist.
#[derive(Debug, Clone, Default)]
pub struct MagneticIntensity {
    config: IntensityConfig,
}

impl MagneticIntensity {
    pub fn new(config: IntensityConfig) -> Self {
        Self { config }
    }

    pub fn measure(&self, region: &BarSeries) -> f64 {
        match stats::mean(&region.densities()) {
            Some(density) => density,
            None => self.fallback(region),
        }
    }

    pub fn band(&self, region: &BarSeries) -> (f64, IntensityBand) {
        let intensity = self.measure(region);
        (intensity, IntensityBand::classify(intensity))
    }

    /// Volatility/volume blend used when no density is available.
    pub fn fallback(&self, region: &BarSeries) -> f64 {
        let volatility = stats::volatility(&region.closes()).unwrap_or(0.0);
        let mean_volume = stats::mean(&region.volumes()).unwrap_or(0.0);
        let blended = volatility * self.config.volatility_scale + mean_volume / self.config.volume_scale;
        blended.min(self.config.cap)
    }
}
