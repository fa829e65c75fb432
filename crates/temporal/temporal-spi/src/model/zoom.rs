//! Zoom query results.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::{BarSeries, FractalScaleResult, Periodicity};

/// Activity classification of a magnetic intensity value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IntensityBand {
    Mild,
    Moderate,
    Strong,
    Extreme,
}

impl IntensityBand {
    pub fn classify(intensity: f64) -> Self {
        if intensity > 80.0 {
            Self::Extreme
        } else if intensity > 50.0 {
            Self::Strong
        } else if intensity > 20.0 {
            Self::Moderate
        } else {
            Self::Mild
        }
    }
}

/// Composite analysis of the bars around a center timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoomResult {
    pub center: DateTime<Utc>,
    pub radius_hours: i64,
    pub bar_count: usize,
    pub magnetic_intensity: f64,
    pub intensity_band: IntensityBand,
    pub resonance_count: usize,
    pub dominant_period: Periodicity,
    pub dominant_period_description: String,
    pub fractal_patterns: Vec<FractalScaleResult>,
}

/// The sliced region together with its analysis.
#[derive(Debug, Clone, PartialEq)]
pub struct ZoomOutcome {
    pub region: BarSeries,
    pub result: ZoomResult,
}
