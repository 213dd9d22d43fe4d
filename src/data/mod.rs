/// Data layer: core types, loading, and averaging.
///
/// Architecture:
/// ```text
///  data.json / trends.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file, parse Week dates → Dataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  Dataset  │  Vec<Record>, file order
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  stats    │  per-series rounded means → SeriesAverages
///   └──────────┘
/// ```

pub mod loader;
pub mod model;
pub mod stats;
