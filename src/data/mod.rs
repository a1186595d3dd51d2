/// Data layer: core types, loading, and filtering.
///
/// Architecture:
/// ```text
///  .csv / .json / .parquet
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → Dataset (validated rows)
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  Dataset  │  Vec<LaunchRecord>, payload bounds, categories
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  site + exclusive payload window → matching records
///   └──────────┘
/// ```

pub mod filter;
pub mod loader;
pub mod model;
