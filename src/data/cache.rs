use std::collections::HashMap;

use super::model::{DataSource, SeaLevelDataset};
use crate::error::DataError;

// ---------------------------------------------------------------------------
// DatasetCache – memoized loads keyed by source identity
// ---------------------------------------------------------------------------

/// Keeps every successfully loaded dataset for the session.
/// Failures are not cached, so the next request tries again.
#[derive(Debug, Default)]
pub struct DatasetCache {
    entries: HashMap<DataSource, SeaLevelDataset>,
}

impl DatasetCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached dataset for `source`, running `load` on a miss.
    pub fn get_or_load_with<F>(
        &mut self,
        source: &DataSource,
        load: F,
    ) -> Result<&SeaLevelDataset, DataError>
    where
        F: FnOnce(&DataSource) -> Result<SeaLevelDataset, DataError>,
    {
        if !self.entries.contains_key(source) {
            let dataset = load(source)?;
            log::info!(
                "Loaded {} observations from {source}{}",
                dataset.len(),
                dataset
                    .year_span()
                    .map(|span| format!(" ({}-{})", span.start(), span.end()))
                    .unwrap_or_default()
            );
            self.entries.insert(source.clone(), dataset);
        } else {
            log::debug!("Dataset cache hit for {source}");
        }

        // Present: inserted above or already cached.
        self.entries.get(source).ok_or_else(|| DataError::DataUnavailable {
            source_name: source.to_string(),
            reason: "dataset missing from cache".into(),
        })
    }

    /// Drop the cached dataset for `source`; the next get refetches it.
    pub fn invalidate(&mut self, source: &DataSource) -> bool {
        self.entries.remove(source).is_some()
    }

    #[cfg(test)]
    pub fn contains(&self, source: &DataSource) -> bool {
        self.entries.contains_key(source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Observation;
    use std::cell::Cell;

    fn source() -> DataSource {
        DataSource::Remote("http://example.invalid/epa-sea-level.csv".into())
    }

    fn fake_load(calls: &Cell<usize>) -> impl Fn(&DataSource) -> Result<SeaLevelDataset, DataError> + '_ {
        move |src| {
            calls.set(calls.get() + 1);
            Ok(SeaLevelDataset::new(
                vec![Observation::new(2000, 1.0), Observation::new(2001, 2.0)],
                src.clone(),
            ))
        }
    }

    #[test]
    fn second_get_is_served_from_cache() {
        let calls = Cell::new(0);
        let mut cache = DatasetCache::new();

        cache.get_or_load_with(&source(), fake_load(&calls)).unwrap();
        cache.get_or_load_with(&source(), fake_load(&calls)).unwrap();

        assert_eq!(calls.get(), 1);
        assert!(cache.contains(&source()));
    }

    #[test]
    fn invalidate_forces_a_refetch() {
        let calls = Cell::new(0);
        let mut cache = DatasetCache::new();

        cache.get_or_load_with(&source(), fake_load(&calls)).unwrap();
        assert!(cache.invalidate(&source()));
        cache.get_or_load_with(&source(), fake_load(&calls)).unwrap();

        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn failures_are_not_cached() {
        let mut cache = DatasetCache::new();
        let err = cache
            .get_or_load_with(&source(), |src| {
                Err(DataError::DataUnavailable {
                    source_name: src.to_string(),
                    reason: "offline".into(),
                })
            })
            .unwrap_err();

        assert!(matches!(err, DataError::DataUnavailable { .. }));
        assert!(!cache.contains(&source()));
    }
}
