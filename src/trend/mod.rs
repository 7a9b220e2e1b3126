/// Trend layer: OLS fitting and projection.
///
/// ```text
///   SeaLevelDataset
///        │
///        ├── all years ─────► fit ──► full   ┐
///        └── year >= 2000 ──► fit ──► recent ┴► TrendModels
///                                                   │
///                                                   ▼
///                                   project / trend_line / compare
/// ```

pub mod fit;
pub mod projection;

pub use fit::{fit_trends, RegressionModel, TrendModels};
pub use projection::{compare, trend_line, ProjectionComparison};
