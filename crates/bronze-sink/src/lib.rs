//! Bronze table sink abstraction.
//!
//! This crate defines the `BronzeSink` trait that abstracts over the store
//! holding the bronze table. `bronze-postgresql` implements it over
//! tokio-postgres; [`MemorySink`] implements it in memory for dry runs and
//! tests.

mod memory;
mod traits;

pub use memory::MemorySink;
pub use traits::BronzeSink;
