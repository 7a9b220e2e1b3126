use thiserror::Error;

// ---------------------------------------------------------------------------
// DataError – everything that can go wrong between the CSV and the fit
// ---------------------------------------------------------------------------

#[derive(Error, Debug)]
pub enum DataError {
    /// The dataset could not be fetched, read or parsed.
    #[error("sea level data unavailable from {source_name}: {reason}")]
    DataUnavailable { source_name: String, reason: String },

    /// A regression subset has fewer than two distinct years.
    #[error("not enough data to fit '{label}': {distinct_years} distinct year(s), need at least 2")]
    InsufficientData { label: String, distinct_years: usize },
}

impl DataError {
    /// Wrap an `anyhow` chain from the loader, keeping every context layer.
    pub fn unavailable(source_name: impl Into<String>, err: &anyhow::Error) -> Self {
        DataError::DataUnavailable {
            source_name: source_name.into(),
            reason: format!("{err:#}"),
        }
    }
}
