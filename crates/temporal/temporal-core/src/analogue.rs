//! Historical analogue search.

use temporal_api::{AnalogueConfig, SimilarityPolicy};
use temporal_spi::{AnalogueContext, AnalogueEvent, Bar, BarSeries, SimilarityScorer, Trend};
use tracing::debug;

use crate::similarity::{ConstantSimilarity, ContextDistanceSimilarity};
use crate::stats;

/// Finds bars whose close is within a margin of a query price.
///
/// Each analogue carries the local context of the bars around it when it
/// sits at least `context_radius` bars away from both ends of the series.
#[derive(Debug, Clone, Default)]
pub struct AnalogueSearch {
    config: AnalogueConfig,
}

impl AnalogueSearch {
    pub fn new(config: AnalogueConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AnalogueConfig {
        &self.config
    }

    /// Search with the configured price margin and similarity policy.
    pub fn find_analogues(&self, series: &BarSeries, query_price: f64) -> Vec<AnalogueEvent> {
        self.find_with_margin(series, query_price, self.config.price_margin)
    }

    /// Search with an explicit price margin.
    pub fn find_with_margin(
        &self,
        series: &BarSeries,
        query_price: f64,
        price_margin: f64,
    ) -> Vec<AnalogueEvent> {
        let scorer = self.scorer_for(series);
        self.find_scored(series, query_price, price_margin, scorer.as_ref())
    }

    /// Search ranking with a caller-supplied scorer.
    pub fn find_scored(
        &self,
        series: &BarSeries,
        query_price: f64,
        price_margin: f64,
        scorer: &dyn SimilarityScorer,
    ) -> Vec<AnalogueEvent> {
        let bars = series.bars();
        let mut events: Vec<AnalogueEvent> = bars
            .iter()
            .enumerate()
            .filter(|(_, bar)| (bar.close - query_price).abs() <= price_margin)
            .map(|(i, bar)| {
                let price_delta = bar.close - query_price;
                let context = self.context_at(bars, i);
                let similarity_score = scorer.score(context.as_ref(), price_delta, price_margin);
                AnalogueEvent {
                    timestamp: bar.timestamp,
                    price: bar.close,
                    price_delta,
                    context,
                    similarity_score,
                }
            })
            .collect();

        let qualifying = events.len();
        // Stable: equal scores keep series order.
        events.sort_by(|a, b| b.similarity_score.total_cmp(&a.similarity_score));
        events.truncate(self.config.max_results);

        debug!(
            query_price,
            price_margin,
            qualifying,
            returned = events.len(),
            "analogue search complete"
        );
        events
    }

    /// Context of the bar at `index`, `None` within `context_radius` of either end.
    pub fn context_at(&self, bars: &[Bar], index: usize) -> Option<AnalogueContext> {
        let radius = self.config.context_radius;
        match index.checked_add(radius) {
            Some(end) if index >= radius && end < bars.len() => {}
            _ => return None,
        }
        Some(self.window_context(&bars[index - radius..index + radius]))
    }

    /// Context of the most recent `2 * context_radius` bars.
    pub fn latest_context(&self, bars: &[Bar]) -> Option<AnalogueContext> {
        let width = self.config.context_radius.saturating_mul(2);
        if bars.len() < width {
            return None;
        }
        Some(self.window_context(&bars[bars.len() - width..]))
    }

    fn window_context(&self, window: &[Bar]) -> AnalogueContext {
        let closes: Vec<f64> = window.iter().map(|b| b.close).collect();
        let volumes: Vec<f64> = window.iter().map(|b| b.volume).collect();
        let short_len = self.config.short_trend_len.min(closes.len());

        AnalogueContext {
            short_trend: self.trend(&closes[..short_len]),
            medium_trend: self.trend(&closes),
            volatility: stats::volatility(&closes).unwrap_or(0.0),
            mean_volume: stats::mean(&volumes).unwrap_or(0.0),
            price_range: stats::range(&closes),
        }
    }

    fn trend(&self, closes: &[f64]) -> Trend {
        let slope = stats::linear_slope(closes).unwrap_or(0.0);
        Trend::from_slope(slope, self.config.slope_threshold)
    }

    fn scorer_for(&self, series: &BarSeries) -> Box<dyn SimilarityScorer> {
        match &self.config.similarity {
            SimilarityPolicy::Constant { score } => Box::new(ConstantSimilarity::new(*score)),
            SimilarityPolicy::ContextDistance { weights } => Box::new(
                ContextDistanceSimilarity::new(self.latest_context(series.bars()), weights.clone()),
            ),
        }
    }
}
