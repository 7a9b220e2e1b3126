use std::collections::BTreeSet;
use std::fmt;

use crate::data::model::{Observation, SeaLevelDataset};
use crate::error::DataError;

// ---------------------------------------------------------------------------
// FitDomain – which years a model was fitted on
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FitDomain {
    pub label: String,
    pub first_year: i32,
    pub last_year: i32,
}

impl FitDomain {
    /// True when every year of `other` lies inside this domain.
    pub fn covers(&self, other: &FitDomain) -> bool {
        self.first_year <= other.first_year && other.last_year <= self.last_year
    }
}

impl fmt::Display for FitDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.first_year, self.last_year)
    }
}

// ---------------------------------------------------------------------------
// RegressionModel – a fitted line `level = intercept + slope * year`
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct RegressionModel {
    /// Inches per year.
    pub slope: f64,
    /// Level at year 0; only meaningful together with `slope`.
    pub intercept: f64,
    pub domain: FitDomain,
    /// Pearson correlation coefficient between year and level.
    pub r_value: f64,
    pub n_observations: usize,
}

impl RegressionModel {
    /// Coefficient of determination.
    pub fn r_squared(&self) -> f64 {
        self.r_value * self.r_value
    }
}

/// Ordinary least squares over `(year, sea_level)`.
///
/// `slope = cov(year, level) / var(year)` and
/// `intercept = mean(level) - slope * mean(year)`.
/// Needs at least two distinct years, otherwise the slope is undefined.
pub fn fit(observations: &[Observation], label: &str) -> Result<RegressionModel, DataError> {
    let distinct_years: BTreeSet<i32> = observations.iter().map(|o| o.year).collect();
    let (Some(&first_year), Some(&last_year)) = (distinct_years.first(), distinct_years.last())
    else {
        return Err(DataError::InsufficientData {
            label: label.to_string(),
            distinct_years: 0,
        });
    };
    if distinct_years.len() < 2 {
        return Err(DataError::InsufficientData {
            label: label.to_string(),
            distinct_years: distinct_years.len(),
        });
    }

    let n = observations.len() as f64;
    let mean_x = observations.iter().map(|o| o.year as f64).sum::<f64>() / n;
    let mean_y = observations.iter().map(|o| o.sea_level).sum::<f64>() / n;

    let (mut sxx, mut sxy, mut syy) = (0.0, 0.0, 0.0);
    for o in observations {
        let dx = o.year as f64 - mean_x;
        let dy = o.sea_level - mean_y;
        sxx += dx * dx;
        sxy += dx * dy;
        syy += dy * dy;
    }

    let slope = sxy / sxx;
    let intercept = mean_y - slope * mean_x;
    // A flat series has no correlation to speak of.
    let r_value = if syy > 0.0 {
        (sxy / (sxx * syy).sqrt()).clamp(-1.0, 1.0)
    } else {
        0.0
    };

    Ok(RegressionModel {
        slope,
        intercept,
        domain: FitDomain {
            label: label.to_string(),
            first_year,
            last_year,
        },
        r_value,
        n_observations: observations.len(),
    })
}

// ---------------------------------------------------------------------------
// TrendModels – the long-term and the recent fit of one dataset
// ---------------------------------------------------------------------------

pub const FULL_LABEL: &str = "full";
pub const RECENT_LABEL: &str = "recent";

#[derive(Debug, Clone, PartialEq)]
pub struct TrendModels {
    /// Fitted on every observation.
    pub full: RegressionModel,
    /// Fitted on observations from `recent_from` onwards.
    pub recent: RegressionModel,
}

/// Fit both trend lines of `dataset`.
pub fn fit_trends(dataset: &SeaLevelDataset, recent_from: i32) -> Result<TrendModels, DataError> {
    let full = fit(&dataset.observations, FULL_LABEL)?;
    let recent = fit(&dataset.since(recent_from), RECENT_LABEL)?;
    debug_assert!(full.domain.covers(&recent.domain));

    for model in [&full, &recent] {
        log::info!(
            "Fitted {} trend over {} ({} rows): {:.4} in/yr, r={:.3}",
            model.domain.label,
            model.domain,
            model.n_observations,
            model.slope,
            model.r_value
        );
    }

    Ok(TrendModels { full, recent })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::DataSource;

    fn fixture() -> Vec<Observation> {
        vec![
            Observation::new(1880, 0.0),
            Observation::new(1900, 2.0),
            Observation::new(2000, 8.0),
            Observation::new(2010, 9.0),
        ]
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
    }

    #[test]
    fn fixture_matches_hand_computed_ols() {
        // mean year 1947.5, mean level 4.75, Sxy 887.5, Sxx 13475
        let model = fit(&fixture(), FULL_LABEL).unwrap();
        assert!(close(model.slope, 887.5 / 13475.0));
        assert!(close(model.slope, 0.06586270871985157));
        assert!(close(model.intercept, -123.51762523191093));
        assert_eq!(model.n_observations, 4);
        assert_eq!(model.domain.to_string(), "1880-2010");
        assert!(model.r_value > 0.99 && model.r_value <= 1.0);
    }

    #[test]
    fn refitting_is_deterministic() {
        let dataset = SeaLevelDataset::new(fixture(), DataSource::File("fixture.csv".into()));
        let first = fit_trends(&dataset, 1900).unwrap();
        let second = fit_trends(&dataset, 1900).unwrap();
        assert_eq!(first.full.slope.to_bits(), second.full.slope.to_bits());
        assert_eq!(first.full.intercept.to_bits(), second.full.intercept.to_bits());
        assert_eq!(first.recent.slope.to_bits(), second.recent.slope.to_bits());
        assert_eq!(first.recent.intercept.to_bits(), second.recent.intercept.to_bits());
    }

    #[test]
    fn recent_domain_is_inside_full_domain() {
        let dataset = SeaLevelDataset::new(fixture(), DataSource::File("fixture.csv".into()));
        let models = fit_trends(&dataset, 2000).unwrap();
        assert!(models.full.domain.covers(&models.recent.domain));
        assert_eq!(models.recent.domain.first_year, 2000);
        assert!(close(models.recent.slope, 0.1));
    }

    #[test]
    fn single_distinct_year_is_insufficient() {
        let obs = vec![Observation::new(2005, 1.0), Observation::new(2005, 1.2)];
        match fit(&obs, RECENT_LABEL) {
            Err(DataError::InsufficientData {
                label,
                distinct_years,
            }) => {
                assert_eq!(label, RECENT_LABEL);
                assert_eq!(distinct_years, 1);
            }
            other => panic!("expected InsufficientData, got {other:?}"),
        }
    }

    #[test]
    fn empty_subset_is_insufficient() {
        let dataset = SeaLevelDataset::new(fixture(), DataSource::File("fixture.csv".into()));
        let err = fit_trends(&dataset, 2050).unwrap_err();
        assert!(matches!(
            err,
            DataError::InsufficientData {
                distinct_years: 0,
                ..
            }
        ));
    }

    #[test]
    fn flat_series_has_zero_slope_and_correlation() {
        let obs = vec![Observation::new(2000, 3.0), Observation::new(2001, 3.0)];
        let model = fit(&obs, FULL_LABEL).unwrap();
        assert_eq!(model.slope, 0.0);
        assert_eq!(model.r_value, 0.0);
        assert!(close(model.intercept, 3.0));
    }

    #[test]
    fn recent_trend_is_steeper_when_the_series_accelerates() {
        // 0.06 in/yr up to 2000, 0.12 in/yr afterwards, shape of the EPA record.
        let observations = (1880..=2013)
            .map(|year| {
                let level = if year <= 2000 {
                    0.06 * f64::from(year - 1880)
                } else {
                    7.2 + 0.12 * f64::from(year - 2000)
                };
                Observation::new(year, level)
            })
            .collect();
        let dataset = SeaLevelDataset::new(observations, DataSource::File("rise.csv".into()));

        let models = fit_trends(&dataset, crate::config::DEFAULT_RECENT_FROM).unwrap();
        assert!(models.recent.slope >= models.full.slope);
        assert!(close(models.recent.slope, 0.12));
        assert_eq!(models.recent.n_observations, 14);
    }

    #[test]
    #[ignore = "fetches the public EPA dataset over the network"]
    fn recent_trend_is_steeper_on_the_published_dataset() {
        let source = DataSource::Remote(crate::config::DEFAULT_DATA_URL.to_string());
        let dataset = crate::data::loader::load(&source).unwrap();
        let models = fit_trends(&dataset, crate::config::DEFAULT_RECENT_FROM).unwrap();
        assert!(models.recent.slope >= models.full.slope);
    }
}
