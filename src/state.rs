use crate::config::Settings;
use crate::data::cache::DatasetCache;
use crate::data::loader;
use crate::data::model::{DataSource, SeaLevelDataset};
use crate::error::DataError;
use crate::i18n::Language;
use crate::trend::{compare, fit_trends, ProjectionComparison, TrendModels};

// ---------------------------------------------------------------------------
// Load phase
// ---------------------------------------------------------------------------

/// Loading is split over two frames so the "loading" message is painted
/// before the blocking fetch starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadPhase {
    Idle,
    Requested,
    Announced,
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    pub settings: Settings,

    /// Display language for every label. Never touches the numbers.
    pub language: Language,

    /// Where the current dataset comes from.
    pub source: DataSource,

    /// Loaded dataset (None until the first successful load).
    pub dataset: Option<SeaLevelDataset>,

    /// Long-term and recent fits of `dataset`.
    pub models: Option<TrendModels>,

    /// Year chosen on the simulator slider.
    pub selected_year: i32,

    /// Last load or fit failure, shown page-wide.
    pub error: Option<DataError>,

    pub phase: LoadPhase,

    cache: DatasetCache,
}

impl AppState {
    /// Fresh state with the first load already requested.
    pub fn new(settings: Settings) -> Self {
        Self {
            language: settings.language,
            source: settings.source.clone(),
            selected_year: settings.default_year(),
            settings,
            dataset: None,
            models: None,
            error: None,
            phase: LoadPhase::Requested,
            cache: DatasetCache::new(),
        }
    }

    pub fn is_loading(&self) -> bool {
        self.phase != LoadPhase::Idle
    }

    /// Advance the load phase by one frame. Returns true while another
    /// frame is needed.
    pub fn poll_load(&mut self) -> bool {
        self.poll_load_with(loader::load)
    }

    pub fn poll_load_with<F>(&mut self, load: F) -> bool
    where
        F: FnOnce(&DataSource) -> Result<SeaLevelDataset, DataError>,
    {
        match self.phase {
            LoadPhase::Idle => false,
            LoadPhase::Requested => {
                self.phase = LoadPhase::Announced;
                true
            }
            LoadPhase::Announced => {
                self.load_with(load);
                self.phase = LoadPhase::Idle;
                false
            }
        }
    }

    /// Load (or reuse) the dataset for `source` and fit both trends.
    fn load_with<F>(&mut self, load: F)
    where
        F: FnOnce(&DataSource) -> Result<SeaLevelDataset, DataError>,
    {
        let result = self
            .cache
            .get_or_load_with(&self.source, load)
            .cloned()
            .and_then(|dataset| {
                let models = fit_trends(&dataset, self.settings.recent_from)?;
                Ok((dataset, models))
            });

        match result {
            Ok((dataset, models)) => {
                self.dataset = Some(dataset);
                self.models = Some(models);
                self.error = None;
            }
            Err(e) => {
                log::error!("{e}");
                self.dataset = None;
                self.models = None;
                self.error = Some(e);
            }
        }
    }

    /// Forget the cached copy of the current source and fetch it again.
    pub fn reload(&mut self) {
        self.cache.invalidate(&self.source);
        self.phase = LoadPhase::Requested;
    }

    /// Switch to another source, e.g. a CSV picked from disk.
    pub fn open_source(&mut self, source: DataSource) {
        log::info!("Switching data source to {source}");
        self.source = source;
        self.phase = LoadPhase::Requested;
    }

    pub fn toggle_language(&mut self) {
        self.language = self.language.toggled();
    }

    /// Move the slider, kept inside the allowed range.
    pub fn set_selected_year(&mut self, year: i32) {
        let range = self.settings.slider_range();
        self.selected_year = year.clamp(*range.start(), *range.end());
    }

    /// Both projections at the selected year.
    pub fn comparison(&self) -> Option<ProjectionComparison> {
        self.models
            .as_ref()
            .map(|models| compare(models, self.selected_year))
    }
}
