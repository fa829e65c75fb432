//! Temporal Pattern Service Provider Interface
//!
//! Defines the bar series data model, the error taxonomy, and the traits
//! for correlation, periodicity estimation, analogue scoring and catalog
//! persistence.

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::{CatalogStore, Correlator, PeriodicityEstimator, SimilarityScorer};
pub use error::{Result, TemporalError};
pub use model::{
    AnalogueContext, AnalogueEvent, AnalysedPeriod, Bar, BarSeries, Correlation, CycleCatalog,
    CycleEvent, FractalScaleResult, IntensityBand, Periodicity, Recommendation,
    ResonanceMatch, ResonanceStrength, TemporalReport, Trend, ZoomOutcome, ZoomResult,
};
