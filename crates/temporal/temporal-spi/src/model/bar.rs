//! OHLCV bar with derived indicator fields.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single OHLCV sample plus the indicators the preprocessor attaches.
///
/// Indicator fields are `None` until the rolling computation that produces
/// them has enough history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    /// Bar open time
    pub timestamp: DateTime<Utc>,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
    /// Number of trades in the interval
    pub trades: u64,
    #[serde(default)]
    pub ema_fast: Option<f64>,
    #[serde(default)]
    pub ema_slow: Option<f64>,
    #[serde(default)]
    pub sma_baseline: Option<f64>,
    #[serde(default)]
    pub density: Option<f64>,
}

impl Bar {
    /// Create a bar without indicator values.
    pub fn new(
        timestamp: DateTime<Utc>,
        open: f64,
        high: f64,
        low: f64,
        close: f64,
        volume: f64,
        trades: u64,
    ) -> Self {
        Self {
            timestamp,
            open,
            high,
            low,
            close,
            volume,
            trades,
            ema_fast: None,
            ema_slow: None,
            sma_baseline: None,
            density: None,
        }
    }

    /// Bar whose OHLC collapse onto a single close price.
    pub fn from_close(timestamp: DateTime<Utc>, close: f64, volume: f64) -> Self {
        Self::new(timestamp, close, close, close, close, volume, 0)
    }

    /// Attach a density value.
    pub fn with_density(mut self, density: f64) -> Self {
        self.density = Some(density);
        self
    }

    /// True when every price and volume field is finite and close is positive.
    pub fn is_well_formed(&self) -> bool {
        let required = [self.open, self.high, self.low, self.close, self.volume];
        let optional = [self.ema_fast, self.ema_slow, self.sma_baseline, self.density];

        required.iter().all(|v| v.is_finite())
            && optional.iter().flatten().all(|v| v.is_finite())
            && self.close > 0.0
    }
}
