//! Analogue similarity scorers.

use temporal_api::{ContextWeights, SimilarityPolicy};
use temporal_spi::{AnalogueContext, SimilarityScorer};

/// Gives every analogue the same score.
///
/// The default policy. Ranking by a constant leaves the
/// analogues in series order, so the first matches in time win.
#[derive(Debug, Clone, Copy)]
pub struct ConstantSimilarity {
    score: f64,
}

impl ConstantSimilarity {
    pub fn new(score: f64) -> Self {
        Self { score }
    }
}

impl Default for ConstantSimilarity {
    fn default() -> Self {
        Self::new(SimilarityPolicy::PLACEHOLDER_SCORE)
    }
}

impl SimilarityScorer for ConstantSimilarity {
    fn score(&self, _context: Option<&AnalogueContext>, _price_delta: f64, _price_margin: f64) -> f64 {
        self.score
    }
}

/// Weighted agreement between an analogue's context and a reference context.
///
/// Components, each in `[0, 1]`:
/// - price: `1 - |delta| / margin`
/// - short and medium trend: 1 when equal to the reference, else 0
/// - volatility: `min / max` of the two volatilities (1 when both are zero)
///
/// The score is the weighted mean. Context components score 0 when either
/// side has no context.
#[derive(Debug, Clone)]
pub struct ContextDistanceSimilarity {
    reference: Option<AnalogueContext>,
    weights: ContextWeights,
}

impl ContextDistanceSimilarity {
    pub fn new(reference: Option<AnalogueContext>, weights: ContextWeights) -> Self {
        Self { reference, weights }
    }
}

impl SimilarityScorer for ContextDistanceSimilarity {
    fn score(&self, context: Option<&AnalogueContext>, price_delta: f64, price_margin: f64) -> f64 {
        let w = &self.weights;
        let total = w.price + w.short_trend + w.medium_trend + w.volatility;
        if total <= 0.0 {
            return 0.0;
        }

        let price = if price_margin > 0.0 {
            (1.0 - price_delta.abs() / price_margin).clamp(0.0, 1.0)
        } else if price_delta == 0.0 {
            1.0
        } else {
            0.0
        };

        let mut score = w.price * price;
        if let (Some(ctx), Some(reference)) = (context, self.reference.as_ref()) {
            if ctx.short_trend == reference.short_trend {
                score += w.short_trend;
            }
            if ctx.medium_trend == reference.medium_trend {
                score += w.medium_trend;
            }
            score += w.volatility * volatility_agreement(ctx.volatility, reference.volatility);
        }

        score / total
    }
}

fn volatility_agreement(a: f64, b: f64) -> f64 {
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    if hi <= 0.0 {
        1.0
    } else {
        (lo.max(0.0) / hi).clamp(0.0, 1.0)
    }
}
