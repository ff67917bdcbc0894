/// Data layer: loading, cleaning, filtering and summarising price tables.
///
/// Architecture:
/// ```text
///   region descriptor + CSV file
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  header offset, date column → RawDataset
///   └──────────┘
///        │
///        ▼
///   ┌───────────┐
///   │ normalize  │  trim names, parse dates, drop, sort → CanonicalSeries
///   └───────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  inclusive year range → &[CanonicalRow]
///   └──────────┘
///        │
///        ▼
///   ┌───────────┐     ┌─────────┐
///   │ commodity  │ ──▶ │  stats   │  per-commodity summary
///   └───────────┘     └─────────┘
/// ```

pub mod commodity;
pub mod filter;
pub mod loader;
pub mod model;
pub mod normalize;
pub mod pipeline;
pub mod region;
pub mod stats;
