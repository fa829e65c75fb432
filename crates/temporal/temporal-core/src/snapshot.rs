//! Atomically replaceable series snapshot.

use std::sync::{Arc, RwLock};

use temporal_spi::BarSeries;

/// Shared cell holding the current [`BarSeries`].
///
/// Readers take an `Arc` to the series and keep analysing it even after a
/// refresh has swapped in a newer one.
#[derive(Debug, Default)]
pub struct SeriesSnapshot {
    inner: RwLock<Arc<BarSeries>>,
}

impl SeriesSnapshot {
    pub fn new(series: BarSeries) -> Self {
        Self {
            inner: RwLock::new(Arc::new(series)),
        }
    }

    /// The series as of now.
    pub fn current(&self) -> Arc<BarSeries> {
        let guard = self.inner.read().unwrap_or_else(|p| p.into_inner());
        Arc::clone(&guard)
    }

    /// Swap in a new series and return the previous one.
    pub fn replace(&self, series: BarSeries) -> Arc<BarSeries> {
        let mut guard = self.inner.write().unwrap_or_else(|p| p.into_inner());
        std::mem::replace(&mut *guard, Arc::new(series))
    }
}
