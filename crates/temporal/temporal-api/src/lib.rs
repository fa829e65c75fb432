//! Temporal Pattern Consumer API
//!
//! Configuration types for the temporal pattern engine.
//!
//! This crate provides:
//! - Per-component configuration with defaults and validation
//! - Scan budgets for the quadratic searches
//! - The aggregated [`EngineConfig`] document with environment overrides
//! - Re-exports from SPI for convenience

pub mod budget;
pub mod config;
pub mod engine;

pub use budget::{CancelFlag, ScanBudget};
pub use config::{
    AnalogueConfig, ContextWeights, CycleConfig, FractalConfig, IndicatorConfig,
    IntensityConfig, PeriodicityConfig, ReportConfig, ResonanceConfig, SimilarityPolicy,
    ZoomConfig,
};
pub use engine::{EngineConfig, LoggingConfig, CATALOG_PATH_ENV, DEFAULT_CATALOG_PATH};

// Re-export from SPI
pub use temporal_spi::*;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{
        AnalogueConfig, CycleConfig, EngineConfig, FractalConfig, ResonanceConfig, ScanBudget,
        SimilarityPolicy,
    };
    pub use temporal_spi::{Bar, BarSeries, Result, TemporalError};
}
