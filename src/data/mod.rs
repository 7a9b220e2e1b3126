/// Data layer: core types, loading, and caching.
///
/// Architecture:
/// ```text
///  epa-sea-level.csv (HTTP or local file)
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse CSV → SeaLevelDataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  cache    │  one dataset per DataSource, until invalidated
///   └──────────┘
///        │
///        ▼
///   ┌────────────────┐
///   │ SeaLevelDataset │  Vec<Observation> → trend fitting
///   └────────────────┘
/// ```

pub mod cache;
pub mod loader;
pub mod model;
