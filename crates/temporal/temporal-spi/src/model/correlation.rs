//! Correlation coefficient with its significance.

use serde::{Deserialize, Serialize};

/// Pearson correlation and its two-sided p-value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Correlation {
    pub r: f64,
    pub p_value: f64,
}

impl Correlation {
    pub fn new(r: f64, p_value: f64) -> Self {
        Self { r, p_value }
    }

    /// True when `r > min_r` and `p_value < max_p`.
    pub fn is_significant(&self, min_r: f64, max_p: f64) -> bool {
        self.r > min_r && self.p_value < max_p
    }
}
