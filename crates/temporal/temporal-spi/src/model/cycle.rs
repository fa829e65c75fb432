//! Detected cycles and the persisted catalog that accumulates them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A pair of adjacent same-length segments found to be significantly correlated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CycleEvent {
    /// Segment length in bars
    pub window_size: usize,
    /// Pearson correlation between the two segments
    pub correlation: f64,
    /// Two-sided p-value of the correlation
    pub p_value: f64,
    /// Series index where the first segment starts
    pub first_segment_start: usize,
    /// Series index where the second segment starts
    pub second_segment_start: usize,
    pub detected_at: DateTime<Utc>,
}

/// Durable record of everything the cycle detector has found.
///
/// `fractals` and `resonances` are part of the persisted document but are
/// not produced by detection; they are carried through unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CycleCatalog {
    #[serde(default)]
    pub cycles: Vec<CycleEvent>,
    #[serde(default)]
    pub fractals: Vec<serde_json::Value>,
    #[serde(default)]
    pub resonances: Vec<serde_json::Value>,
}

impl CycleCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of recorded cycles.
    pub fn len(&self) -> usize {
        self.cycles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cycles.is_empty()
    }

    /// Append newly detected cycles. Existing entries are never touched.
    pub fn append(&mut self, events: &[CycleEvent]) {
        self.cycles.extend_from_slice(events);
    }
}
