//! Per-component configuration.
//!
//! Every section deserialises with defaults for missing fields.

use serde::{Deserialize, Serialize};

use crate::budget::ScanBudget;

// ============================================================================
// Cycle detection
// ============================================================================

/// Cycle detector configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CycleConfig {
    /// Smallest window size tried (inclusive)
    pub window_min: usize,
    /// Largest window size bound (exclusive, also capped at half the series)
    pub window_max: usize,
    /// Segment stride is `window / stride_divisor`
    pub stride_divisor: usize,
    /// Correlation must exceed this
    pub min_correlation: f64,
    /// p-value must be below this
    pub max_p_value: f64,
    pub budget: ScanBudget,
}

impl Default for CycleConfig {
    fn default() -> Self {
        Self {
            window_min: 10,
            window_max: 100,
            stride_divisor: 2,
            min_correlation: 0.7,
            max_p_value: 0.05,
            budget: ScanBudget::default(),
        }
    }
}

impl CycleConfig {
    pub fn new(window_min: usize, window_max: usize) -> Self {
        Self {
            window_min,
            window_max,
            ..Self::default()
        }
    }

    pub fn with_budget(mut self, budget: ScanBudget) -> Self {
        self.budget = budget;
        self
    }

    pub(crate) fn check(&self, errors: &mut Vec<String>) {
        if self.window_min < 3 {
            errors.push(format!("cycles.window_min must be at least 3, got {}", self.window_min));
        }
        if self.window_max <= self.window_min {
            errors.push(format!(
                "cycles.window_max ({}) must exceed window_min ({})",
                self.window_max, self.window_min
            ));
        }
        if self.stride_divisor == 0 {
            errors.push("cycles.stride_divisor must be positive".into());
        }
        check_unit_interval("cycles.min_correlation", self.min_correlation, errors);
        check_unit_interval("cycles.max_p_value", self.max_p_value, errors);
    }
}

// ============================================================================
// Resonance detection
// ============================================================================

/// Resonance detector configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ResonanceConfig {
    /// Length of the pattern and of each candidate
    pub pattern_len: usize,
    /// Minimum distance between pattern start and candidate start
    pub min_separation: usize,
    pub min_correlation: f64,
    pub budget: ScanBudget,
}

impl Default for ResonanceConfig {
    fn default() -> Self {
        Self {
            pattern_len: 10,
            min_separation: 20,
            min_correlation: 0.8,
            budget: ScanBudget::default(),
        }
    }
}

impl ResonanceConfig {
    pub fn with_budget(mut self, budget: ScanBudget) -> Self {
        self.budget = budget;
        self
    }

    pub(crate) fn check(&self, errors: &mut Vec<String>) {
        if self.pattern_len < 3 {
            errors.push(format!(
                "resonance.pattern_len must be at least 3, got {}",
                self.pattern_len
            ));
        }
        if self.min_separation < self.pattern_len {
            errors.push(format!(
                "resonance.min_separation ({}) must be at least pattern_len ({})",
                self.min_separation, self.pattern_len
            ));
        }
        check_unit_interval("resonance.min_correlation", self.min_correlation, errors);
    }
}

// ============================================================================
// Fractal scales
// ============================================================================

/// Fractal scale analyzer configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FractalConfig {
    /// Segment lengths to test
    pub scales: Vec<usize>,
    /// A scale is tested only when the region holds `factor * scale` bars
    pub min_length_factor: usize,
    pub stride_divisor: usize,
    /// Mean pairwise correlation must exceed this
    pub min_mean_similarity: f64,
    pub budget: ScanBudget,
}

impl Default for FractalConfig {
    fn default() -> Self {
        Self {
            scales: vec![5, 10, 20, 50],
            min_length_factor: 3,
            stride_divisor: 2,
            min_mean_similarity: 0.6,
            budget: ScanBudget::default(),
        }
    }
}

impl FractalConfig {
    pub fn with_scales(mut self, scales: Vec<usize>) -> Self {
        self.scales = scales;
        self
    }

    pub fn with_min_mean_similarity(mut self, threshold: f64) -> Self {
        self.min_mean_similarity = threshold;
        self
    }

    pub fn with_budget(mut self, budget: ScanBudget) -> Self {
        self.budget = budget;
        self
    }

    pub(crate) fn check(&self, errors: &mut Vec<String>) {
        if let Some(&bad) = self.scales.iter().find(|&&s| s < 3) {
            errors.push(format!("fractal.scales entries must be at least 3, got {}", bad));
        }
        if self.min_length_factor == 0 {
            errors.push("fractal.min_length_factor must be positive".into());
        }
        if self.stride_divisor == 0 {
            errors.push("fractal.stride_divisor must be positive".into());
        }
        check_correlation_bound("fractal.min_mean_similarity", self.min_mean_similarity, errors);
    }
}

// ============================================================================
// Periodicity
// ============================================================================

/// Periodicity analyzer configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PeriodicityConfig {
    /// Regions shorter than this report insufficient data
    pub min_bars: usize,
    /// Minimum normalized autocorrelation for a peak
    pub peak_height: f64,
}

impl Default for PeriodicityConfig {
    fn default() -> Self {
        Self {
            min_bars: 50,
            peak_height: 0.5,
        }
    }
}

impl PeriodicityConfig {
    pub(crate) fn check(&self, errors: &mut Vec<String>) {
        if self.min_bars < 4 {
            errors.push(format!("periodicity.min_bars must be at least 4, got {}", self.min_bars));
        }
        check_correlation_bound("periodicity.peak_height", self.peak_height, errors);
    }
}

// ============================================================================
// Analogues
// ============================================================================

/// Weights for the context-distance similarity metric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContextWeights {
    pub price: f64,
    pub short_trend: f64,
    pub medium_trend: f64,
    pub volatility: f64,
}

impl Default for ContextWeights {
    fn default() -> Self {
        Self {
            price: 0.4,
            short_trend: 0.2,
            medium_trend: 0.2,
            volatility: 0.2,
        }
    }
}

/// How analogue events are scored for ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "policy", rename_all = "snake_case")]
pub enum SimilarityPolicy {
    /// Every analogue receives the same score, so ranking keeps series order.
    Constant { score: f64 },
    /// Compare each analogue's context with the context of the latest bars.
    ContextDistance { weights: ContextWeights },
}

impl SimilarityPolicy {
    /// Score given by the default constant policy.
    pub const PLACEHOLDER_SCORE: f64 = 0.5;

    pub fn context_distance() -> Self {
        Self::ContextDistance {
            weights: ContextWeights::default(),
        }
    }
}

impl Default for SimilarityPolicy {
    fn default() -> Self {
        Self::Constant {
            score: Self::PLACEHOLDER_SCORE,
        }
    }
}

/// Historical analogue search configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalogueConfig {
    /// Absolute price distance a bar may be from the query
    pub price_margin: f64,
    /// Bars on each side of an analogue used for its context
    pub context_radius: usize,
    /// Leading bars of the context window used for the short trend
    pub short_trend_len: usize,
    /// Slope dead band for trend classification
    pub slope_threshold: f64,
    pub max_results: usize,
    pub similarity: SimilarityPolicy,
}

impl Default for AnalogueConfig {
    fn default() -> Self {
        Self {
            price_margin: 100.0,
            context_radius: 20,
            short_trend_len: 10,
            slope_threshold: 0.01,
            max_results: 10,
            similarity: SimilarityPolicy::default(),
        }
    }
}

impl AnalogueConfig {
    pub fn with_price_margin(mut self, margin: f64) -> Self {
        self.price_margin = margin;
        self
    }

    pub fn with_similarity(mut self, policy: SimilarityPolicy) -> Self {
        self.similarity = policy;
        self
    }

    pub(crate) fn check(&self, errors: &mut Vec<String>) {
        if !(self.price_margin.is_finite() && self.price_margin >= 0.0) {
            errors.push(format!(
                "analogue.price_margin must be finite and non-negative, got {}",
                self.price_margin
            ));
        }
        if self.context_radius < 2 {
            errors.push(format!(
                "analogue.context_radius must be at least 2, got {}",
                self.context_radius
            ));
        }
        let width = self.context_radius.saturating_mul(2);
        if self.short_trend_len < 2 || self.short_trend_len > width {
            errors.push(format!(
                "analogue.short_trend_len must be in [2, {}], got {}",
                width,
                self.short_trend_len
            ));
        }
        if !(self.slope_threshold >= 0.0) {
            errors.push("analogue.slope_threshold must be non-negative".into());
        }
        if self.max_results == 0 {
            errors.push("analogue.max_results must be positive".into());
        }
        if let SimilarityPolicy::ContextDistance { weights } = &self.similarity {
            let all = [
                weights.price,
                weights.short_trend,
                weights.medium_trend,
                weights.volatility,
            ];
            if all.iter().any(|w| !(w.is_finite() && *w >= 0.0)) {
                errors.push("analogue.similarity weights must be finite and non-negative".into());
            }
        }
    }
}

// ============================================================================
// Zoom, intensity and report
// ============================================================================

/// Zoom query configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ZoomConfig {
    /// Half-width of the zoom window in hours
    pub radius_hours: i64,
}

impl Default for ZoomConfig {
    fn default() -> Self {
        Self { radius_hours: 24 }
    }
}

/// Magnetic intensity configuration.
///
/// When no bar carries a density value, intensity falls back to
/// `volatility * volatility_scale + mean_volume / volume_scale`, capped.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct IntensityConfig {
    pub volatility_scale: f64,
    pub volume_scale: f64,
    pub cap: f64,
}

impl Default for IntensityConfig {
    fn default() -> Self {
        Self {
            volatility_scale: 1000.0,
            volume_scale: 1000.0,
            cap: 100.0,
        }
    }
}

impl IntensityConfig {
    pub(crate) fn check(&self, errors: &mut Vec<String>) {
        if !(self.volume_scale > 0.0) {
            errors.push("intensity.volume_scale must be positive".into());
        }
        if !(self.volatility_scale >= 0.0) {
            errors.push("intensity.volatility_scale must be non-negative".into());
        }
        if !(self.cap > 0.0) {
            errors.push("intensity.cap must be positive".into());
        }
    }
}

/// Report thresholds.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Intensity above this emits a high-activity recommendation
    pub high_intensity: f64,
    /// Intensity below this emits a consolidation recommendation
    pub low_intensity: f64,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            high_intensity: 70.0,
            low_intensity: 30.0,
        }
    }
}

impl ReportConfig {
    pub(crate) fn check(&self, errors: &mut Vec<String>) {
        if self.low_intensity > self.high_intensity {
            errors.push(format!(
                "report.low_intensity ({}) must not exceed high_intensity ({})",
                self.low_intensity, self.high_intensity
            ));
        }
    }
}

/// Indicator preprocessor configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct IndicatorConfig {
    pub ema_fast_span: usize,
    pub ema_slow_span: usize,
    pub sma_window: usize,
    /// Added to the density denominator to keep it finite
    pub density_epsilon: f64,
}

impl Default for IndicatorConfig {
    fn default() -> Self {
        Self {
            ema_fast_span: 8,
            ema_slow_span: 21,
            sma_window: 20,
            density_epsilon: 1e-6,
        }
    }
}

impl IndicatorConfig {
    pub(crate) fn check(&self, errors: &mut Vec<String>) {
        if self.ema_fast_span == 0 || self.ema_slow_span == 0 || self.sma_window == 0 {
            errors.push("indicators spans and windows must be positive".into());
        }
        if !(self.density_epsilon > 0.0) {
            errors.push("indicators.density_epsilon must be positive".into());
        }
    }
}

fn check_unit_interval(name: &str, value: f64, errors: &mut Vec<String>) {
    if !(0.0..=1.0).contains(&value) {
        errors.push(format!("{} must be in [0, 1], got {}", name, value));
    }
}

fn check_correlation_bound(name: &str, value: f64, errors: &mut Vec<String>) {
    if !(-1.0..=1.0).contains(&value) {
        errors.push(format!("{} must be in [-1, 1], got {}", name, value));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn errors_of(f: impl FnOnce(&mut Vec<String>)) -> Vec<String> {
        let mut errors = Vec::new();
        f(&mut errors);
        errors
    }

    #[test]
    fn test_defaults_are_valid() {
        assert!(errors_of(|e| CycleConfig::default().check(e)).is_empty());
        assert!(errors_of(|e| ResonanceConfig::default().check(e)).is_empty());
        assert!(errors_of(|e| FractalConfig::default().check(e)).is_empty());
        assert!(errors_of(|e| PeriodicityConfig::default().check(e)).is_empty());
        assert!(errors_of(|e| AnalogueConfig::default().check(e)).is_empty());
        assert!(errors_of(|e| IntensityConfig::default().check(e)).is_empty());
        assert!(errors_of(|e| ReportConfig::default().check(e)).is_empty());
        assert!(errors_of(|e| IndicatorConfig::default().check(e)).is_empty());
    }

    #[test]
    fn test_cycle_window_bounds() {
        let errors = errors_of(|e| CycleConfig::new(20, 20).check(e));
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("window_max"));

        let errors = errors_of(|e| CycleConfig::new(1, 20).check(e));
        assert!(errors[0].contains("window_min"));
    }

    #[test]
    fn test_resonance_separation_must_cover_pattern() {
        let config = ResonanceConfig {
            pattern_len: 10,
            min_separation: 5,
            ..ResonanceConfig::default()
        };
        let errors = errors_of(|e| config.check(e));
        assert!(errors[0].contains("min_separation"));
    }

    #[test]
    fn test_fractal_rejects_tiny_scale() {
        let config = FractalConfig::default().with_scales(vec![5, 2]);
        let errors = errors_of(|e| config.check(e));
        assert!(errors[0].contains("got 2"));
    }

    #[test]
    fn test_analogue_rejects_negative_margin() {
        let config = AnalogueConfig::default().with_price_margin(-1.0);
        let errors = errors_of(|e| config.check(e));
        assert!(errors[0].contains("price_margin"));
    }

    #[test]
    fn test_analogue_huge_radius_does_not_overflow() {
        let config = AnalogueConfig {
            context_radius: usize::MAX,
            ..AnalogueConfig::default()
        };
        assert!(errors_of(|e| config.check(e)).is_empty());
    }

    #[test]
    fn test_similarity_policy_default_is_placeholder() {
        assert_eq!(
            SimilarityPolicy::default(),
            SimilarityPolicy::Constant { score: 0.5 }
        );
    }

    #[test]
    fn test_similarity_policy_serde() {
        let json = serde_json::to_value(SimilarityPolicy::context_distance()).unwrap();
        assert_eq!(json["policy"], "context_distance");
        assert_eq!(json["weights"]["price"], 0.4);

        let parsed: SimilarityPolicy =
            serde_json::from_str(r#"{"policy": "constant", "score": 0.25}"#).unwrap();
        assert_eq!(parsed, SimilarityPolicy::Constant { score: 0.25 });
    }

    #[test]
    fn test_partial_section_uses_defaults() {
        let config: CycleConfig = serde_json::from_str(r#"{"window_max": 40}"#).unwrap();
        assert_eq!(config.window_max, 40);
        assert_eq!(config.window_min, 10);
        assert_eq!(config.stride_divisor, 2);
    }
}
