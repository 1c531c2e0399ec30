//! Individual value generators for the ED visit fields.
//!
//! Each generator draws from the shared `StdRng` owned by
//! [`crate::VisitGenerator`]; the draw order per record is fixed so a seed
//! always reproduces the same dataset.

pub mod categorical;
pub mod numeric;
pub mod timestamp;

pub use categorical::Categorical;
