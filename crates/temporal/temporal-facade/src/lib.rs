//! Temporal Pattern Facade
//!
//! High-level API for the temporal pattern engine. Re-exports all public
//! types from the temporal stack and sets up logging.

pub mod logging;

// Re-export everything from API (which includes SPI)
pub use temporal_api::*;

// Explicit re-exports for documentation
pub use temporal_api::prelude;

// Re-export core modules for direct access
pub use temporal_core::{
    analogue, catalog, correlation, cycles, engine, fractal, indicators, intensity, periodicity,
    report, resonance, segments, similarity, snapshot, stats, zoom,
};

// Re-export core types at root
pub use temporal_core::{
    load_or_empty, pearson, AnalogueSearch, AutocorrelationPeriodicity, ConstantSimilarity,
    ContextDistanceSimilarity, CycleDetector, FractalAnalyzer, IndicatorPreprocessor,
    JsonFileStore, MagneticIntensity, MemoryStore, PearsonCorrelator, ReportBuilder,
    ReportInputs, ResonanceDetector, ScanGuard, Segments, SeriesSnapshot, TemporalEngine,
    ZoomQuery,
};

pub use logging::init_tracing;
