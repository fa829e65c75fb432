//! Durable storage for the cycle catalog.

use crate::error::Result;
use crate::model::CycleCatalog;

/// Loads and replaces the persisted catalog document.
///
/// `save` must replace the stored document as a whole: a failed save leaves
/// the previous document intact.
pub trait CatalogStore: Send + Sync {
    /// Load the stored catalog. A store with nothing saved yet returns the
    /// empty catalog.
    fn load(&self) -> Result<CycleCatalog>;

    /// Replace the stored catalog with `catalog`.
    fn save(&self, catalog: &CycleCatalog) -> Result<()>;

    /// Short description for log lines.
    fn describe(&self) -> String;
}
