//! Ranking score for historical analogues.

use crate::model::AnalogueContext;

/// Scores how closely a historical bar resembles the present.
///
/// Higher is more similar. `context` is `None` for bars too close to the
/// series edges to have one.
pub trait SimilarityScorer: Send + Sync {
    /// `price_delta` is the analogue's close minus the query price and
    /// `price_margin` the search margin it satisfied.
    fn score(
        &self,
        context: Option<&AnalogueContext>,
        price_delta: f64,
        price_margin: f64,
    ) -> f64;
}
