use std::io::Read;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result, bail};

use super::model::{DataSource, Observation, RawRecord, SeaLevelDataset};
use crate::error::DataError;

/// Column holding the integer year.
pub const YEAR_COLUMN: &str = "Year";
/// Column holding the adjusted sea level in inches.
pub const LEVEL_COLUMN: &str = "CSIRO Adjusted Sea Level";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load the sea level dataset from `source`. Dispatch by source kind.
///
/// One attempt only: a failed fetch is reported, never retried.
pub fn load(source: &DataSource) -> Result<SeaLevelDataset, DataError> {
    let observations = match source {
        DataSource::Remote(url) => fetch_remote(url),
        DataSource::File(path) => read_file(path),
    }
    .map_err(|e| DataError::unavailable(source.to_string(), &e))?;

    Ok(SeaLevelDataset::new(observations, source.clone()))
}

// ---------------------------------------------------------------------------
// Remote loader
// ---------------------------------------------------------------------------

fn fetch_remote(url: &str) -> Result<Vec<Observation>> {
    let client = reqwest::blocking::Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .build()
        .context("building HTTP client")?;

    log::debug!("GET {url}");
    let response = client
        .get(url)
        .send()
        .with_context(|| format!("requesting {url}"))?;

    let status = response.status();
    if !status.is_success() {
        bail!("server answered {status}");
    }

    let body = response.text().context("reading response body")?;
    parse_csv(body.as_bytes())
}

// ---------------------------------------------------------------------------
// Local file loader
// ---------------------------------------------------------------------------

fn read_file(path: &Path) -> Result<Vec<Observation>> {
    let file = std::fs::File::open(path).context("opening CSV file")?;
    parse_csv(file)
}

// ---------------------------------------------------------------------------
// CSV parsing
// ---------------------------------------------------------------------------

/// CSV layout: header row with at least `Year` and `CSIRO Adjusted Sea Level`.
/// Other columns (error bounds, NOAA level) are ignored.
///
/// Rows with an empty sea level cell are skipped with a warning; the public
/// file ends with a year that has only a NOAA reading.
pub fn parse_csv<R: Read>(input: R) -> Result<Vec<Observation>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::Headers)
        .from_reader(input);
    let headers = reader.headers().context("reading CSV headers")?.clone();

    for required in [YEAR_COLUMN, LEVEL_COLUMN] {
        if !headers.iter().any(|h| h == required) {
            bail!("CSV missing '{required}' column");
        }
    }

    let mut observations = Vec::new();

    for (row_no, result) in reader.deserialize::<RawRecord>().enumerate() {
        let record = result.with_context(|| format!("CSV row {row_no}"))?;
        match record.sea_level {
            Some(level) if level.is_finite() => {
                observations.push(Observation::new(record.year, level));
            }
            _ => {
                log::warn!(
                    "CSV row {row_no}: year {} has no {LEVEL_COLUMN} value, skipped",
                    record.year
                );
            }
        }
    }

    if observations.is_empty() {
        bail!("CSV contains no usable rows");
    }

    Ok(observations)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = "\
Year,CSIRO Adjusted Sea Level,Lower Error Bound,Upper Error Bound,NOAA Adjusted Sea Level
1880,0.0,-0.95,0.95,
1900,2.0,1.1,2.9,
2000,8.0,7.8,8.2,7.6
2010,9.0,8.8,9.2,8.5
2014,,,,8.6
";

    #[test]
    fn parses_required_columns_and_skips_empty_levels() {
        let obs = parse_csv(SAMPLE.as_bytes()).unwrap();
        assert_eq!(
            obs,
            vec![
                Observation::new(1880, 0.0),
                Observation::new(1900, 2.0),
                Observation::new(2000, 8.0),
                Observation::new(2010, 9.0),
            ]
        );
    }

    #[test]
    fn missing_level_column_is_rejected() {
        let err = parse_csv("Year,NOAA Adjusted Sea Level\n2000,1.0\n".as_bytes()).unwrap_err();
        assert!(format!("{err:#}").contains(LEVEL_COLUMN));
    }

    #[test]
    fn padded_headers_still_match_the_record_fields() {
        let csv = " Year , CSIRO Adjusted Sea Level\n2000,7.9\n2001,8.0\n";
        let obs = parse_csv(csv.as_bytes()).unwrap();
        assert_eq!(
            obs,
            vec![Observation::new(2000, 7.9), Observation::new(2001, 8.0)]
        );
    }

    #[test]
    fn malformed_year_is_rejected() {
        let csv = "Year,CSIRO Adjusted Sea Level\nabc,1.0\n";
        assert!(parse_csv(csv.as_bytes()).is_err());
    }

    #[test]
    fn header_only_file_is_rejected() {
        let csv = "Year,CSIRO Adjusted Sea Level\n";
        let err = parse_csv(csv.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("no usable rows"));
    }

    #[test]
    fn remote_source_is_fetched_once_over_http() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", "/epa-sea-level.csv")
            .with_status(200)
            .with_header("content-type", "text/csv")
            .with_body(SAMPLE)
            .expect(1)
            .create();

        let source = DataSource::Remote(format!("{}/epa-sea-level.csv", server.url()));
        let dataset = load(&source).unwrap();

        assert_eq!(dataset.len(), 4);
        assert_eq!(dataset.source, source);
        mock.assert();
    }

    #[test]
    fn http_error_status_is_data_unavailable() {
        let mut server = mockito::Server::new();
        let _mock = server
            .mock("GET", "/epa-sea-level.csv")
            .with_status(404)
            .create();

        let source = DataSource::Remote(format!("{}/epa-sea-level.csv", server.url()));
        match load(&source) {
            Err(DataError::DataUnavailable { reason, .. }) => assert!(reason.contains("404")),
            other => panic!("expected DataUnavailable, got {other:?}"),
        }
    }

    #[test]
    fn unreachable_host_is_data_unavailable() {
        // Port 1 on loopback refuses connections.
        let source = DataSource::Remote("http://127.0.0.1:1/epa-sea-level.csv".into());
        assert!(matches!(
            load(&source),
            Err(DataError::DataUnavailable { .. })
        ));
    }

    #[test]
    fn local_file_source_uses_the_same_parser() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let dataset = load(&DataSource::File(file.path().to_path_buf())).unwrap();
        assert_eq!(dataset.year_span(), Some(1880..=2010));
    }

    #[test]
    fn missing_file_is_data_unavailable() {
        let source = DataSource::File("/definitely/not/here.csv".into());
        assert!(matches!(
            load(&source),
            Err(DataError::DataUnavailable { .. })
        ));
    }
}
