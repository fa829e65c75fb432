//! Work limits for the quadratic scans.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Shared flag a caller can set to stop a running scan.
#[derive(Debug, Clone, Default)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Upper bounds on a scan. Unset limits mean unbounded.
///
/// Limits never change which results a completed scan returns; an
/// exhausted budget aborts the scan instead.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanBudget {
    /// Maximum number of segment correlations
    pub max_comparisons: Option<usize>,
    /// Wall-clock limit in milliseconds
    pub max_duration_ms: Option<u64>,
    #[serde(skip)]
    pub cancel: Option<CancelFlag>,
}

impl ScanBudget {
    /// No limits.
    pub fn unbounded() -> Self {
        Self::default()
    }

    pub fn with_max_comparisons(mut self, max: usize) -> Self {
        self.max_comparisons = Some(max);
        self
    }

    pub fn with_max_duration_ms(mut self, ms: u64) -> Self {
        self.max_duration_ms = Some(ms);
        self
    }

    pub fn with_cancel(mut self, flag: CancelFlag) -> Self {
        self.cancel = Some(flag);
        self
    }

    pub fn is_unbounded(&self) -> bool {
        self.max_comparisons.is_none() && self.max_duration_ms.is_none() && self.cancel.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_unbounded() {
        assert!(ScanBudget::default().is_unbounded());
        assert!(!ScanBudget::default().with_max_comparisons(10).is_unbounded());
    }

    #[test]
    fn test_cancel_flag_is_shared() {
        let flag = CancelFlag::new();
        let budget = ScanBudget::unbounded().with_cancel(flag.clone());
        flag.cancel();
        assert!(budget.cancel.as_ref().map(|f| f.is_cancelled()).unwrap_or(false));
    }

    #[test]
    fn test_cancel_flag_not_serialized() {
        let budget = ScanBudget::unbounded()
            .with_max_duration_ms(250)
            .with_cancel(CancelFlag::new());
        let json = serde_json::to_value(&budget).unwrap();
        assert_eq!(json["max_duration_ms"], 250);
        assert!(json.get("cancel").is_none());
    }
}
