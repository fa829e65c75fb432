//! Engine-wide configuration document.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use temporal_spi::{Result, TemporalError};
use tracing::info;

use crate::config::{
    AnalogueConfig, CycleConfig, FractalConfig, IndicatorConfig, IntensityConfig,
    PeriodicityConfig, ReportConfig, ResonanceConfig, ZoomConfig,
};

/// Environment variable that replaces `catalog_path`.
pub const CATALOG_PATH_ENV: &str = "TEMPORAL_CATALOG_PATH";

/// Default catalog file name.
pub const DEFAULT_CATALOG_PATH: &str = "cycle_catalog.json";

/// Tracing subscriber settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset
    pub filter: String,
    /// Emit JSON lines instead of compact text
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "temporal=info".to_string(),
            json: false,
        }
    }
}

/// Every component's configuration plus the catalog location.
///
/// All sections are optional in the JSON document:
///
/// ```json
/// {
///   "catalog_path": "data/cycle_catalog.json",
///   "cycles": { "window_max": 60 },
///   "analogue": { "similarity": { "policy": "context_distance", "weights": {} } }
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub catalog_path: PathBuf,
    pub cycles: CycleConfig,
    pub resonance: ResonanceConfig,
    pub fractal: FractalConfig,
    pub periodicity: PeriodicityConfig,
    pub analogue: AnalogueConfig,
    pub zoom: ZoomConfig,
    pub intensity: IntensityConfig,
    pub report: ReportConfig,
    pub indicators: IndicatorConfig,
    pub logging: LoggingConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            catalog_path: PathBuf::from(DEFAULT_CATALOG_PATH),
            cycles: CycleConfig::default(),
            resonance: ResonanceConfig::default(),
            fractal: FractalConfig::default(),
            periodicity: PeriodicityConfig::default(),
            analogue: AnalogueConfig::default(),
            zoom: ZoomConfig::default(),
            intensity: IntensityConfig::default(),
            report: ReportConfig::default(),
            indicators: IndicatorConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl EngineConfig {
    /// Parse and validate a JSON document. No environment overrides.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read a JSON file, apply environment overrides, then validate.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            TemporalError::Persistence(format!(
                "failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;
        let mut config: Self = serde_json::from_str(&contents)?;
        config.apply_env_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    pub fn with_catalog_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.catalog_path = path.into();
        self
    }

    /// Apply overrides from `lookup`. Empty values are ignored.
    pub fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = lookup(CATALOG_PATH_ENV).filter(|v| !v.trim().is_empty()) {
            info!(path = %path, "env override: {}", CATALOG_PATH_ENV);
            self.catalog_path = PathBuf::from(path);
        }
    }

    /// Check every section and report all violations in one error.
    pub fn validate(&self) -> Result<()> {
        let mut errors: Vec<String> = Vec::new();

        if self.catalog_path.as_os_str().is_empty() {
            errors.push("catalog_path is empty".into());
        }
        self.cycles.check(&mut errors);
        self.resonance.check(&mut errors);
        self.fractal.check(&mut errors);
        self.periodicity.check(&mut errors);
        self.analogue.check(&mut errors);
        if self.zoom.radius_hours < 0 {
            errors.push(format!(
                "zoom.radius_hours must be non-negative, got {}",
                self.zoom.radius_hours
            ));
        }
        self.intensity.check(&mut errors);
        self.report.check(&mut errors);
        self.indicators.check(&mut errors);

        if errors.is_empty() {
            Ok(())
        } else {
            Err(TemporalError::invalid_parameter(
                "config",
                format!(
                    "validation failed ({} error{}): {}",
                    errors.len(),
                    if errors.len() == 1 { "" } else { "s" },
                    errors.join("; ")
                ),
            ))
        }
    }
}
