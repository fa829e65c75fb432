//! Cycle catalog stores.

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use temporal_spi::{CatalogStore, CycleCatalog, Result, TemporalError};
use tracing::{info, warn};

/// Catalog persisted as one pretty-printed JSON document.
///
/// Saves write a temporary file beside the target and rename it into
/// place, so readers see either the old or the new document.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CatalogStore for JsonFileStore {
    /// A missing file is an empty catalog.
    fn load(&self) -> Result<CycleCatalog> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(CycleCatalog::new()),
            Err(e) => return Err(e.into()),
        };
        let catalog: CycleCatalog = serde_json::from_str(&contents)?;
        Ok(catalog)
    }

    fn save(&self, catalog: &CycleCatalog) -> Result<()> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        fs::create_dir_all(&dir)?;

        let mut tmp = tempfile::NamedTempFile::new_in(&dir)?;
        serde_json::to_writer_pretty(&mut tmp, catalog)?;
        tmp.write_all(b"\n")?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path).map_err(|e| {
            TemporalError::Persistence(format!(
                "failed to replace {}: {}",
                self.path.display(),
                e.error
            ))
        })?;
        Ok(())
    }

    fn describe(&self) -> String {
        format!("json file {}", self.path.display())
    }
}

/// In-process catalog store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    catalog: Mutex<CycleCatalog>,
    fail_saves: Mutex<Option<String>>,
    saves: Mutex<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with `catalog`.
    pub fn with_catalog(catalog: CycleCatalog) -> Self {
        Self {
            catalog: Mutex::new(catalog),
            ..Self::default()
        }
    }

    /// Make every later save fail with `reason`, or succeed again with `None`.
    pub fn fail_saves(&self, reason: Option<&str>) {
        *lock(&self.fail_saves) = reason.map(str::to_string);
    }

    /// Last successfully saved catalog.
    pub fn snapshot(&self) -> CycleCatalog {
        lock(&self.catalog).clone()
    }

    /// Number of successful saves.
    pub fn save_count(&self) -> usize {
        *lock(&self.saves)
    }
}

impl CatalogStore for MemoryStore {
    fn load(&self) -> Result<CycleCatalog> {
        Ok(self.snapshot())
    }

    fn save(&self, catalog: &CycleCatalog) -> Result<()> {
        if let Some(reason) = lock(&self.fail_saves).as_ref() {
            return Err(TemporalError::Persistence(reason.clone()));
        }
        *lock(&self.catalog) = catalog.clone();
        *lock(&self.saves) += 1;
        Ok(())
    }

    fn describe(&self) -> String {
        "memory".to_string()
    }
}

/// Load a catalog, falling back to an empty one on any failure.
pub fn load_or_empty(store: &dyn CatalogStore) -> CycleCatalog {
    match store.load() {
        Ok(catalog) => {
            info!(store = %store.describe(), cycles = catalog.len(), "cycle catalog loaded");
            catalog
        }
        Err(e) => {
            warn!(store = %store.describe(), error = %e, "cycle catalog unreadable, starting empty");
            CycleCatalog::new()
        }
    }
}

// A poisoned lock still holds a consistent catalog value.
fn lock<T>(m: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    m.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
