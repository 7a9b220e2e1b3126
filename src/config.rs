use std::ops::RangeInclusive;
use std::path::PathBuf;

use crate::data::model::DataSource;
use crate::i18n::Language;

/// Public EPA sea level series (CSIRO adjusted, inches).
pub const DEFAULT_DATA_URL: &str =
    "https://raw.githubusercontent.com/freeCodeCamp/boilerplate-sea-level-predictor/master/epa-sea-level.csv";

/// First year of the "recent" trend subset.
pub const DEFAULT_RECENT_FROM: i32 = 2000;

/// First year drawn for the long-term trend line.
pub const CHART_FIRST_YEAR: i32 = 1880;

/// Last year of the chart and of the simulator slider.
pub const LAST_PROJECTION_YEAR: i32 = 2100;

/// Year the simulator starts on.
pub const DEFAULT_SELECTED_YEAR: i32 = 2050;

pub const ENV_DATA_URL: &str = "SEA_LEVEL_DATA_URL";
pub const ENV_DATA_FILE: &str = "SEA_LEVEL_DATA_FILE";
pub const ENV_LANG: &str = "SEA_LEVEL_LANG";

// ---------------------------------------------------------------------------
// Settings – built-in defaults, optionally overridden from the environment
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub source: DataSource,
    pub recent_from: i32,
    pub language: Language,
    /// Lower slider bound: the year the application runs in.
    pub current_year: i32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            source: DataSource::Remote(DEFAULT_DATA_URL.to_string()),
            recent_from: DEFAULT_RECENT_FROM,
            language: Language::default(),
            current_year: current_year(),
        }
    }
}

impl Settings {
    /// Defaults plus `SEA_LEVEL_DATA_FILE`, `SEA_LEVEL_DATA_URL` and
    /// `SEA_LEVEL_LANG` from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an explicit variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = Self::default();

        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(path) = non_empty(ENV_DATA_FILE) {
            settings.source = DataSource::File(PathBuf::from(path));
        } else if let Some(url) = non_empty(ENV_DATA_URL) {
            settings.source = DataSource::Remote(url);
        }

        if let Some(code) = non_empty(ENV_LANG) {
            match Language::from_code(&code) {
                Some(lang) => settings.language = lang,
                None => log::warn!("Ignoring unknown {ENV_LANG}={code:?}, expected 'es' or 'en'"),
            }
        }

        settings
    }

    /// Years the simulator slider can select.
    pub fn slider_range(&self) -> RangeInclusive<i32> {
        let low = self.current_year.min(LAST_PROJECTION_YEAR);
        low..=LAST_PROJECTION_YEAR
    }

    /// Initial slider value, kept inside [`slider_range`](Self::slider_range).
    pub fn default_year(&self) -> i32 {
        let range = self.slider_range();
        DEFAULT_SELECTED_YEAR.clamp(*range.start(), *range.end())
    }
}

fn current_year() -> i32 {
    time::OffsetDateTime::now_utc().year()
}
