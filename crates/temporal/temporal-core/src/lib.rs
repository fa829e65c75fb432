//! Temporal Pattern Core
//!
//! Core implementations for cycle detection, periodicity estimation,
//! resonance and fractal scanning, historical analogue search, the zoom
//! query and the temporal report.

pub mod analogue;
pub mod catalog;
pub mod correlation;
pub mod cycles;
pub mod engine;
pub mod fractal;
pub mod indicators;
pub mod intensity;
pub mod periodicity;
pub mod report;
pub mod resonance;
pub mod segments;
pub mod similarity;
pub mod snapshot;
pub mod stats;
pub mod zoom;

// Re-export SPI traits for implementations
pub use temporal_spi::{
    CatalogStore, Correlator, PeriodicityEstimator, Result, SimilarityScorer, TemporalError,
};

// Re-export main types
pub use analogue::AnalogueSearch;
pub use catalog::{load_or_empty, JsonFileStore, MemoryStore};
pub use correlation::{pearson, PearsonCorrelator};
pub use cycles::CycleDetector;
pub use engine::TemporalEngine;
pub use fractal::FractalAnalyzer;
pub use indicators::IndicatorPreprocessor;
pub use intensity::MagneticIntensity;
pub use periodicity::AutocorrelationPeriodicity;
pub use report::{ReportBuilder, ReportInputs};
pub use resonance::ResonanceDetector;
pub use segments::{ScanGuard, Segments};
pub use similarity::{ConstantSimilarity, ContextDistanceSimilarity};
pub use snapshot::SeriesSnapshot;
pub use zoom::ZoomQuery;
