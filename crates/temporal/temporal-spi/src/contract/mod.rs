//! Contract definitions for temporal pattern analysis.
//!
//! This module contains trait definitions that providers must implement.

mod catalog_store;
mod correlator;
mod periodicity_estimator;
mod similarity_scorer;

pub use catalog_store::CatalogStore;
pub use correlator::Correlator;
pub use periodicity_estimator::PeriodicityEstimator;
pub use similarity_scorer::SimilarityScorer;
