//! Historical analogues of a query price.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Direction of a least-squares fit over close prices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Ascending,
    Descending,
    Lateral,
}

impl Trend {
    /// Classify a slope against a symmetric dead band.
    pub fn from_slope(slope: f64, threshold: f64) -> Self {
        if slope > threshold {
            Self::Ascending
        } else if slope < -threshold {
            Self::Descending
        } else {
            Self::Lateral
        }
    }
}

/// Local features around a historical bar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalogueContext {
    pub short_trend: Trend,
    pub medium_trend: Trend,
    /// Sample standard deviation of bar-to-bar percentage change
    pub volatility: f64,
    pub mean_volume: f64,
    /// Max close minus min close over the context window
    pub price_range: f64,
}

/// A historical bar whose close was near the query price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalogueEvent {
    pub timestamp: DateTime<Utc>,
    pub price: f64,
    /// `price - query_price`
    pub price_delta: f64,
    /// `None` when the bar is too close to either end of the series
    pub context: Option<AnalogueContext>,
    pub similarity_score: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trend_from_slope() {
        assert_eq!(Trend::from_slope(0.5, 0.01), Trend::Ascending);
        assert_eq!(Trend::from_slope(-0.5, 0.01), Trend::Descending);
        assert_eq!(Trend::from_slope(0.01, 0.01), Trend::Lateral);
        assert_eq!(Trend::from_slope(-0.01, 0.01), Trend::Lateral);
    }

    #[test]
    fn test_trend_serializes_lowercase() {
        assert_eq!(
            serde_json::to_value(Trend::Ascending).unwrap(),
            serde_json::json!("ascending")
        );
    }
}
