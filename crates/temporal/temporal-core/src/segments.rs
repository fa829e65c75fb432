//! Precomputed segment lists and the scan budget guard.

use std::time::{Duration, Instant};

use temporal_api::ScanBudget;
use temporal_spi::{Result, TemporalError};
use tracing::warn;

/// Fixed-length, evenly strided views over a price sequence.
///
/// Starts run `0, stride, 2 * stride, ...` while `start + len < data.len()`;
/// a window that would end exactly at the last element is not generated.
#[derive(Debug, Clone)]
pub struct Segments<'a> {
    data: &'a [f64],
    len: usize,
    starts: Vec<usize>,
}

impl<'a> Segments<'a> {
    /// `stride` of zero is treated as one.
    pub fn new(data: &'a [f64], len: usize, stride: usize) -> Self {
        let starts = if len == 0 {
            Vec::new()
        } else {
            (0..data.len().saturating_sub(len))
                .step_by(stride.max(1))
                .collect()
        };
        Self { data, len, starts }
    }

    /// Every window of `len` whose start is below `data.len() - len`.
    pub fn sliding(data: &'a [f64], len: usize) -> Self {
        Self::new(data, len, 1)
    }

    pub fn count(&self) -> usize {
        self.starts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.starts.is_empty()
    }

    pub fn segment_len(&self) -> usize {
        self.len
    }

    /// Series index where segment `i` starts.
    pub fn start(&self, i: usize) -> usize {
        self.starts[i]
    }

    pub fn get(&self, i: usize) -> &'a [f64] {
        let start = self.starts[i];
        &self.data[start..start + self.len]
    }
}

/// Stride for a window: `window / divisor`, at least one.
pub fn stride_for(window: usize, divisor: usize) -> usize {
    (window / divisor.max(1)).max(1)
}

/// Counts comparisons of one scan against its [`ScanBudget`].
pub struct ScanGuard<'a> {
    scan: &'static str,
    budget: &'a ScanBudget,
    started: Instant,
    deadline: Option<Duration>,
    comparisons: usize,
}

impl<'a> ScanGuard<'a> {
    /// Deadline checks happen every this many comparisons.
    const CLOCK_INTERVAL: usize = 64;

    pub fn new(scan: &'static str, budget: &'a ScanBudget) -> Self {
        Self {
            scan,
            budget,
            started: Instant::now(),
            deadline: budget.max_duration_ms.map(Duration::from_millis),
            comparisons: 0,
        }
    }

    /// Account for one comparison, failing if the budget is spent.
    pub fn tick(&mut self) -> Result<()> {
        if let Some(max) = self.budget.max_comparisons {
            if self.comparisons >= max {
                return Err(self.abort(format!("comparison limit {} reached", max)));
            }
        }
        if let Some(flag) = &self.budget.cancel {
            if flag.is_cancelled() {
                return Err(self.abort("cancelled".to_string()));
            }
        }
        if let Some(deadline) = self.deadline {
            if self.comparisons % Self::CLOCK_INTERVAL == 0 && self.started.elapsed() >= deadline {
                return Err(self.abort(format!(
                    "deadline of {} ms exceeded",
                    deadline.as_millis()
                )));
            }
        }
        self.comparisons += 1;
        Ok(())
    }

    pub fn comparisons(&self) -> usize {
        self.comparisons
    }

    fn abort(&self, reason: String) -> TemporalError {
        warn!(
            scan = self.scan,
            comparisons = self.comparisons,
            reason = %reason,
            "scan aborted"
        );
        TemporalError::ScanAborted {
            comparisons: self.comparisons,
            reason: format!("{}: {}", self.scan, reason),
        }
    }
}
