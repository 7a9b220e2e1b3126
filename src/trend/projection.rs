use std::ops::RangeInclusive;

use super::fit::{RegressionModel, TrendModels};

/// A fitted line evaluated at one year.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    pub year: i32,
    /// Inches.
    pub predicted_level: f64,
}

/// Evaluate `model` at `year`. Extrapolation is unbounded on purpose:
/// years far outside the fitted domain are what the simulator is for.
pub fn project(model: &RegressionModel, year: i32) -> f64 {
    model.intercept + model.slope * year as f64
}

impl RegressionModel {
    pub fn projection(&self, year: i32) -> Projection {
        Projection {
            year,
            predicted_level: project(self, year),
        }
    }
}

/// Points of `model` for every year in `years`, ready for a plot line.
pub fn trend_line(model: &RegressionModel, years: RangeInclusive<i32>) -> Vec<[f64; 2]> {
    years
        .map(|year| [year as f64, project(model, year)])
        .collect()
}

// ---------------------------------------------------------------------------
// ProjectionComparison – both models at the selected year
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectionComparison {
    pub year: i32,
    pub full: Projection,
    pub recent: Projection,
    /// `recent - full`, positive when the recent trend predicts a higher sea.
    pub difference: f64,
}

pub fn compare(models: &TrendModels, year: i32) -> ProjectionComparison {
    let full = models.full.projection(year);
    let recent = models.recent.projection(year);
    ProjectionComparison {
        year,
        full,
        recent,
        difference: recent.predicted_level - full.predicted_level,
    }
}
