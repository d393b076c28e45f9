//! Data layer: tabular model, loading, and standardization.
//!
//! Architecture:
//! ```text
//!  .parquet / .json / .csv
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  loader   │  parse file → Dataset
//!   └──────────┘
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  Dataset  │  ordered named f64 columns, equal length
//!   └──────────┘
//!        │
//!        ▼
//!   ┌─────────────┐
//!   │ standardize  │  selected columns → zero mean, unit variance
//!   └─────────────┘
//! ```

pub mod loader;
pub mod model;
pub mod standardize;
