//! Intra-region repetition matches.

use serde::{Deserialize, Serialize};

/// A fixed-length pattern that recurs later in the same region.
///
/// Indices are relative to the region the detector scanned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResonanceMatch {
    pub pattern_start: usize,
    pub repeat_start: usize,
    pub correlation: f64,
    /// Mean close price over the first occurrence
    pub mean_price: f64,
}
