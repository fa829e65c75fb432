//! Aggregate temporal report.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// How strongly a set of repeats/analogues suggests a recurring pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResonanceStrength {
    Light,
    Significant,
    Multiple,
}

impl ResonanceStrength {
    pub fn classify(count: usize) -> Self {
        if count > 5 {
            Self::Multiple
        } else if count > 2 {
            Self::Significant
        } else {
            Self::Light
        }
    }
}

/// Recommendation categories the report can emit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Recommendation {
    ActiveCycles { count: usize },
    HighIntensity { intensity: f64 },
    LowIntensity { intensity: f64 },
    FractalScales { count: usize },
    ActiveResonances { count: usize, strength: ResonanceStrength },
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ActiveCycles { count } => {
                write!(f, "Detected {} active fractal cycles", count)
            }
            Self::HighIntensity { .. } => {
                write!(f, "High magnetic intensity - period of high activity expected")
            }
            Self::LowIntensity { .. } => {
                write!(f, "Low magnetic intensity - consolidation period")
            }
            Self::FractalScales { count } => {
                write!(f, "Fractal patterns detected at {} scales", count)
            }
            Self::ActiveResonances { count, strength } => {
                let label = match strength {
                    ResonanceStrength::Multiple => "multiple resonance",
                    ResonanceStrength::Significant => "significant resonance",
                    ResonanceStrength::Light => "light resonance",
                };
                write!(f, "{} active resonances ({})", count, label)
            }
        }
    }
}

/// First and last timestamps covered by a report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysedPeriod {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

/// Summary of the engine's state against one series snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemporalReport {
    pub generated_at: DateTime<Utc>,
    pub total_bars: usize,
    /// `None` for an empty series
    pub period: Option<AnalysedPeriod>,
    /// Catalog size after this report's detection run
    pub cycles_detected: usize,
    /// Cycles found by this report's detection run
    pub new_cycles: usize,
    pub active_resonances: usize,
    pub overall_intensity: f64,
    pub active_fractal_scales: usize,
    pub recommendations: Vec<Recommendation>,
}

impl TemporalReport {
    /// Recommendation texts in emission order.
    pub fn recommendation_messages(&self) -> Vec<String> {
        self.recommendations.iter().map(|r| r.to_string()).collect()
    }
}
