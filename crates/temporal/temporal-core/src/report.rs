//! Temporal report assembly.

use chrono::{DateTime, Utc};
use temporal_api::ReportConfig;
use temporal_spi::{AnalysedPeriod, BarSeries, Recommendation, ResonanceStrength, TemporalReport};

/// Figures gathered by the engine for one report.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportInputs {
    pub generated_at: DateTime<Utc>,
    /// Catalog size after the report's detection run
    pub cycles_detected: usize,
    pub new_cycles: usize,
    pub active_resonances: usize,
    pub overall_intensity: f64,
    pub active_fractal_scales: usize,
}

/// Turns report figures into a [`TemporalReport`] with recommendations.
#[derive(Debug, Clone, Default)]
pub struct ReportBuilder {
    config: ReportConfig,
}

impl ReportBuilder {
    pub fn new(config: ReportConfig) -> Self {
        Self { config }
    }

    pub fn build(&self, series: &BarSeries, inputs: ReportInputs) -> TemporalReport {
        let period = match (series.first(), series.last()) {
            (Some(first), Some(last)) => Some(AnalysedPeriod {
                start: first.timestamp,
                end: last.timestamp,
            }),
            _ => None,
        };

        TemporalReport {
            generated_at: inputs.generated_at,
            total_bars: series.len(),
            period,
            cycles_detected: inputs.cycles_detected,
            new_cycles: inputs.new_cycles,
            active_resonances: inputs.active_resonances,
            overall_intensity: inputs.overall_intensity,
            active_fractal_scales: inputs.active_fractal_scales,
            recommendations: self.recommend(&inputs),
        }
    }

    /// Recommendations in a fixed order: cycles, intensity, fractal scales,
    /// resonances.
    pub fn recommend(&self, inputs: &ReportInputs) -> Vec<Recommendation> {
        let mut out = Vec::new();

        if inputs.new_cycles > 0 {
            out.push(Recommendation::ActiveCycles {
                count: inputs.new_cycles,
            });
        }

        let intensity = inputs.overall_intensity;
        if intensity > self.config.high_intensity {
            out.push(Recommendation::HighIntensity { intensity });
        } else if intensity < self.config.low_intensity {
            out.push(Recommendation::LowIntensity { intensity });
        }

        if inputs.active_fractal_scales > 0 {
            out.push(Recommendation::FractalScales {
                count: inputs.active_fractal_scales,
            });
        }

        if inputs.active_resonances > 0 {
            out.push(Recommendation::ActiveResonances {
                count: inputs.active_resonances,
                strength: ResonanceStrength::classify(inputs.active_resonances),
            });
        }

        out
    }
}
