/// Data layer: core types, loading, and searching.
///
/// Architecture:
/// ```text
///  folder/*price*.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  scan folder, normalize headers → Catalog
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ Catalog   │  Vec<PriceRecord>, unit price precomputed
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  name substring match → indices sorted by unit price
///   └──────────┘
/// ```

pub mod loader;
pub mod model;
pub mod filter;
