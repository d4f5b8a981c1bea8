/// Data layer: core types and dataset loading.
///
/// Architecture:
/// ```text
///      .csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → IrisDataset
///   └──────────┘
///        │
///        ▼
///   ┌─────────────┐
///   │ IrisDataset  │  Vec<Record>, cached DomainBounds
///   └─────────────┘
/// ```

pub mod loader;
pub mod model;
