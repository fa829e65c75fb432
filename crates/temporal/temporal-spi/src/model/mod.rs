//! Data models for temporal pattern analysis.
//!
//! Transient results own their data and hold no references into the series
//! they were computed from.

mod analogue;
mod bar;
mod correlation;
mod cycle;
mod fractal;
mod periodicity;
mod report;
mod resonance;
mod series;
mod zoom;

pub use analogue::{AnalogueContext, AnalogueEvent, Trend};
pub use bar::Bar;
pub use correlation::Correlation;
pub use cycle::{CycleCatalog, CycleEvent};
pub use fractal::FractalScaleResult;
pub use periodicity::Periodicity;
pub use report::{AnalysedPeriod, Recommendation, ResonanceStrength, TemporalReport};
pub use resonance::ResonanceMatch;
pub use series::BarSeries;
pub use zoom::{IntensityBand, ZoomOutcome, ZoomResult};
