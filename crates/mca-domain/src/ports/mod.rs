//! Domain Port Interfaces
//!
//! Boundary contracts between the domain and the outer layers. The
//! application layer drives jobs through the lifecycle defined in
//! [`jobs`]; the providers layer implements the analyzer contract in
//! [`processors`].

/// Job taxonomy, lifecycle status and aggregate statistics
mod jobs;
/// The analyzer processor contract
mod processors;

pub use jobs::{JobKind, JobStats, JobStatus};
pub use processors::JobProcessor;
