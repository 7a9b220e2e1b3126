use std::fmt;
use std::ops::RangeInclusive;
use std::path::PathBuf;

use serde::Deserialize;

// ---------------------------------------------------------------------------
// Observation – one row of the CSV
// ---------------------------------------------------------------------------

/// A single yearly measurement: adjusted sea level in inches.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Observation {
    pub year: i32,
    pub sea_level: f64,
}

impl Observation {
    pub fn new(year: i32, sea_level: f64) -> Self {
        Self { year, sea_level }
    }
}

/// Raw CSV record. Only the two columns we fit on are read; the error bounds
/// and the NOAA column are ignored. An empty level cell deserialises to `None`.
#[derive(Debug, Deserialize)]
pub(crate) struct RawRecord {
    #[serde(rename = "Year")]
    pub year: i32,
    #[serde(rename = "CSIRO Adjusted Sea Level")]
    pub sea_level: Option<f64>,
}

// ---------------------------------------------------------------------------
// DataSource – where a dataset comes from, doubles as the cache key
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DataSource {
    /// CSV fetched over HTTP(S).
    Remote(String),
    /// CSV read from disk.
    File(PathBuf),
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataSource::Remote(url) => write!(f, "{url}"),
            DataSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

// ---------------------------------------------------------------------------
// SeaLevelDataset – the complete loaded dataset
// ---------------------------------------------------------------------------

/// Ordered observations, one per recorded year, in file order.
#[derive(Debug, Clone)]
pub struct SeaLevelDataset {
    pub observations: Vec<Observation>,
    pub source: DataSource,
}

impl SeaLevelDataset {
    pub fn new(observations: Vec<Observation>, source: DataSource) -> Self {
        Self {
            observations,
            source,
        }
    }

    /// Number of observations.
    pub fn len(&self) -> usize {
        self.observations.len()
    }

    /// First and last recorded year, `None` for an empty dataset.
    pub fn year_span(&self) -> Option<RangeInclusive<i32>> {
        let first = self.observations.iter().map(|o| o.year).min()?;
        let last = self.observations.iter().map(|o| o.year).max()?;
        Some(first..=last)
    }

    /// Observations recorded in `from` or later.
    pub fn since(&self, from: i32) -> Vec<Observation> {
        self.observations
            .iter()
            .filter(|o| o.year >= from)
            .copied()
            .collect()
    }

    /// Scatter points for the chart.
    pub fn points(&self) -> Vec<[f64; 2]> {
        self.observations
            .iter()
            .map(|o| [o.year as f64, o.sea_level])
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dataset() -> SeaLevelDataset {
        SeaLevelDataset::new(
            vec![
                Observation::new(1998, 7.5),
                Observation::new(1999, 7.6),
                Observation::new(2000, 7.9),
                Observation::new(2001, 8.0),
            ],
            DataSource::Remote("http://example.invalid/data.csv".into()),
        )
    }

    #[test]
    fn since_keeps_the_cutoff_year() {
        let recent = dataset().since(2000);
        assert_eq!(
            recent.iter().map(|o| o.year).collect::<Vec<_>>(),
            vec![2000, 2001]
        );
    }

    #[test]
    fn year_span_covers_all_rows() {
        assert_eq!(dataset().year_span(), Some(1998..=2001));
        let empty = SeaLevelDataset::new(Vec::new(), DataSource::File("x.csv".into()));
        assert_eq!(empty.year_span(), None);
        assert_eq!(empty.len(), 0);
    }
}
