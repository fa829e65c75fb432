//! Immutable, time-ordered bar series.

use std::ops::Range;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Result, TemporalError};
use crate::model::Bar;

/// Ordered snapshot of bars for one instrument.
///
/// Timestamps are strictly ascending. Once built the series is never
/// mutated; a refresh produces a new series.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Bar>", into = "Vec<Bar>")]
pub struct BarSeries {
    bars: Vec<Bar>,
}

impl BarSeries {
    /// Build a series, validating ordering and bar values.
    pub fn new(bars: Vec<Bar>) -> Result<Self> {
        for (i, bar) in bars.iter().enumerate() {
            if !bar.is_well_formed() {
                return Err(TemporalError::InvalidSeries(format!(
                    "bar {} at {} has non-finite values or non-positive close",
                    i, bar.timestamp
                )));
            }
        }

        if let Some(i) = bars
            .windows(2)
            .position(|w| w[1].timestamp <= w[0].timestamp)
        {
            return Err(TemporalError::InvalidSeries(format!(
                "timestamps not strictly ascending at index {} ({} -> {})",
                i + 1,
                bars[i].timestamp,
                bars[i + 1].timestamp
            )));
        }

        Ok(Self { bars })
    }

    /// Empty series.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    pub fn bars(&self) -> &[Bar] {
        &self.bars
    }

    pub fn get(&self, index: usize) -> Option<&Bar> {
        self.bars.get(index)
    }

    pub fn first(&self) -> Option<&Bar> {
        self.bars.first()
    }

    pub fn last(&self) -> Option<&Bar> {
        self.bars.last()
    }

    /// Close prices in series order.
    pub fn closes(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.close).collect()
    }

    /// Volumes in series order.
    pub fn volumes(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.volume).collect()
    }

    /// Density values that are available, skipping undefined ones.
    pub fn densities(&self) -> Vec<f64> {
        self.bars.iter().filter_map(|b| b.density).collect()
    }

    /// Index range of bars with `start <= timestamp <= end`.
    pub fn index_range(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> Range<usize> {
        let lo = self.bars.partition_point(|b| b.timestamp < start);
        let hi = self.bars.partition_point(|b| b.timestamp <= end);
        lo..hi.max(lo)
    }

    /// Sub-series of bars with `start <= timestamp <= end`.
    pub fn window(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> BarSeries {
        let range = self.index_range(start, end);
        Self {
            bars: self.bars[range].to_vec(),
        }
    }
}

impl TryFrom<Vec<Bar>> for BarSeries {
    type Error = TemporalError;

    fn try_from(bars: Vec<Bar>) -> Result<Self> {
        Self::new(bars)
    }
}

impl From<BarSeries> for Vec<Bar> {
    fn from(series: BarSeries) -> Self {
        series.bars
    }
}
