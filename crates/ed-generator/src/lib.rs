//! Synthetic ED visit generator.
//!
//! This crate provides the `VisitGenerator` which produces deterministic
//! emergency-department visit records. The generator uses a seeded RNG so the
//! same seed and configuration always produce the same records.
//!
//! # Architecture
//!
//! ```text
//! GeneratorConfig (defaults or YAML)
//!        │
//!        ▼
//! ┌──────────────────┐
//! │  VisitGenerator  │
//! │                  │
//! │  - rng (StdRng)  │
//! │  - index         │
//! │  - weight tables │
//! └────────┬─────────┘
//!          │
//!          ▼
//!    EdVisit { patient_id, arrival_time, ... }
//! ```
//!
//! # Example
//!
//! ```rust
//! use ed_generator::{GeneratorConfig, VisitGenerator};
//!
//! let mut generator = VisitGenerator::new(GeneratorConfig::default()).unwrap();
//! let visits = generator.generate_sorted();
//! assert_eq!(visits.len(), 300);
//! ```
//!
//! # Field generators
//!
//! - `categorical` - weighted draw over a fixed label table (acuity, age group, complaint)
//! - `numeric` - uniform integer ranges and hundredth-rounded decimal ranges
//! - `timestamp` - base date plus a random day/hour/minute offset

pub mod config;
pub mod generator;
pub mod generators;
pub mod summary;

// Re-exports for convenience
pub use config::{ConfigError, DecimalRange, GeneratorConfig, IntRange};
pub use generator::{VisitGenerator, VisitIterator};
pub use summary::DatasetSummary;
