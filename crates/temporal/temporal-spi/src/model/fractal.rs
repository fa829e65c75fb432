//! Self-similarity results per segment scale.

use serde::{Deserialize, Serialize};

/// Mean pairwise similarity of the segments at one scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FractalScaleResult {
    /// Segment length in bars
    pub scale: usize,
    pub mean_similarity: f64,
    /// Number of segments the region was cut into at this scale
    pub segments_compared: usize,
}
