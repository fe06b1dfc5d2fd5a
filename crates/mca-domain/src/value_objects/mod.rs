//! Strong-typed identifiers for domain entities.

mod ids;

pub use ids::JobId;
