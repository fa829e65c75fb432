//! Engine handle tying the components to one cycle catalog.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use chrono::{DateTime, Utc};
use temporal_api::EngineConfig;
use temporal_spi::{
    AnalogueEvent, BarSeries, CatalogStore, CycleCatalog, CycleEvent, FractalScaleResult,
    Periodicity, ResonanceMatch, Result, TemporalReport, ZoomOutcome,
};
use tracing::{error, info};

use crate::analogue::AnalogueSearch;
use crate::catalog::{load_or_empty, JsonFileStore, MemoryStore};
use crate::cycles::CycleDetector;
use crate::report::{ReportBuilder, ReportInputs};
use crate::zoom::ZoomQuery;

/// Temporal pattern engine.
///
/// Owns the cycle catalog behind a single-writer lock. Every analysis takes
/// `&self` and a borrowed series snapshot, so one engine can serve
/// concurrent callers.
pub struct TemporalEngine {
    config: EngineConfig,
    store: Box<dyn CatalogStore>,
    catalog: Mutex<CycleCatalog>,
    cycles: CycleDetector,
    analogues: AnalogueSearch,
    zoom: ZoomQuery,
    report: ReportBuilder,
    active_resonances: AtomicUsize,
}

impl TemporalEngine {
    /// Engine persisting its catalog to `config.catalog_path`.
    pub fn new(config: EngineConfig) -> Result<Self> {
        let store = JsonFileStore::new(config.catalog_path.clone());
        Self::with_store(config, Box::new(store))
    }

    /// Engine with an in-memory catalog.
    pub fn in_memory(config: EngineConfig) -> Result<Self> {
        Self::with_store(config, Box::new(MemoryStore::new()))
    }

    /// Engine over an arbitrary store. The catalog is loaded once here; an
    /// unreadable catalog starts empty.
    pub fn with_store(config: EngineConfig, store: Box<dyn CatalogStore>) -> Result<Self> {
        config.validate()?;
        let catalog = load_or_empty(store.as_ref());

        Ok(Self {
            cycles: CycleDetector::new(config.cycles.clone()),
            analogues: AnalogueSearch::new(config.analogue.clone()),
            zoom: ZoomQuery::new(&config),
            report: ReportBuilder::new(config.report.clone()),
            config,
            store,
            catalog: Mutex::new(catalog),
            active_resonances: AtomicUsize::new(0),
        })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Copy of the in-memory catalog.
    pub fn catalog(&self) -> CycleCatalog {
        self.lock_catalog().clone()
    }

    pub fn catalog_len(&self) -> usize {
        self.lock_catalog().len()
    }

    /// Resonance count of the most recent successful zoom.
    pub fn active_resonances(&self) -> usize {
        self.active_resonances.load(Ordering::Relaxed)
    }

    // ------------------------------------------------------------------
    // Cycle detection
    // ------------------------------------------------------------------

    pub fn detect_cycles(&self, series: &BarSeries) -> Result<Vec<CycleEvent>> {
        self.detect_cycles_at(series, Utc::now())
    }

    /// Detect cycles, append them to the catalog and persist it.
    ///
    /// A failed save is returned as an error; the events stay in the
    /// in-memory catalog and are written by the next successful save.
    pub fn detect_cycles_at(
        &self,
        series: &BarSeries,
        detected_at: DateTime<Utc>,
    ) -> Result<Vec<CycleEvent>> {
        let events = self.cycles.detect(series, detected_at)?;
        self.record(&events)?;
        Ok(events)
    }

    /// Detect with explicit window bounds instead of the configured ones.
    pub fn detect_cycles_in_range(
        &self,
        series: &BarSeries,
        window_min: usize,
        window_max: usize,
        detected_at: DateTime<Utc>,
    ) -> Result<Vec<CycleEvent>> {
        let closes = series.closes();
        let events = self
            .cycles
            .detect_closes(&closes, window_min, window_max, detected_at)?;
        self.record(&events)?;
        Ok(events)
    }

    fn record(&self, events: &[CycleEvent]) -> Result<()> {
        let mut catalog = self.lock_catalog();
        catalog.append(events);

        match self.store.save(&catalog) {
            Ok(()) => {
                info!(
                    new = events.len(),
                    total = catalog.len(),
                    store = %self.store.describe(),
                    "cycle catalog saved"
                );
                Ok(())
            }
            Err(e) => {
                error!(
                    new = events.len(),
                    total = catalog.len(),
                    store = %self.store.describe(),
                    error = %e,
                    "cycle catalog save failed"
                );
                Err(e)
            }
        }
    }

    // ------------------------------------------------------------------
    // Region analyses
    // ------------------------------------------------------------------

    /// Zoom with the configured radius.
    pub fn zoom(&self, series: &BarSeries, center: DateTime<Utc>) -> Result<ZoomOutcome> {
        self.zoom_with_radius(series, center, self.zoom.default_radius_hours())
    }

    pub fn zoom_with_radius(
        &self,
        series: &BarSeries,
        center: DateTime<Utc>,
        radius_hours: i64,
    ) -> Result<ZoomOutcome> {
        let outcome = self.zoom.zoom_with_radius(series, center, radius_hours)?;
        self.active_resonances
            .store(outcome.result.resonance_count, Ordering::Relaxed);
        Ok(outcome)
    }

    pub fn find_analogues(&self, series: &BarSeries, query_price: f64) -> Vec<AnalogueEvent> {
        self.analogues.find_analogues(series, query_price)
    }

    pub fn find_analogues_with_margin(
        &self,
        series: &BarSeries,
        query_price: f64,
        price_margin: f64,
    ) -> Vec<AnalogueEvent> {
        self.analogues.find_with_margin(series, query_price, price_margin)
    }

    pub fn dominant_period(&self, region: &BarSeries) -> Periodicity {
        self.zoom.periodicity().dominant_period(&region.closes())
    }

    pub fn resonances(&self, region: &BarSeries) -> Result<Vec<ResonanceMatch>> {
        self.zoom.resonance().detect_region(&region.closes())
    }

    pub fn fractal_scales(&self, region: &BarSeries) -> Result<Vec<FractalScaleResult>> {
        self.zoom.fractal().detect(&region.closes())
    }

    pub fn magnetic_intensity(&self, region: &BarSeries) -> f64 {
        self.zoom.intensity().measure(region)
    }

    // ------------------------------------------------------------------
    // Report
    // ------------------------------------------------------------------

    pub fn report(&self, series: &BarSeries) -> Result<TemporalReport> {
        self.report_at(series, Utc::now())
    }

    /// Run cycle detection, then summarise the series and engine state.
    pub fn report_at(&self, series: &BarSeries, now: DateTime<Utc>) -> Result<TemporalReport> {
        let new_cycles = self.detect_cycles_at(series, now)?.len();
        let inputs = ReportInputs {
            generated_at: now,
            cycles_detected: self.catalog_len(),
            new_cycles,
            active_resonances: self.active_resonances(),
            overall_intensity: self.magnetic_intensity(series),
            active_fractal_scales: self.fractal_scales(series)?.len(),
        };
        Ok(self.report.build(series, inputs))
    }

    fn lock_catalog(&self) -> std::sync::MutexGuard<'_, CycleCatalog> {
        self.catalog.lock().unwrap_or_else(|p| p.into_inner())
    }
}
