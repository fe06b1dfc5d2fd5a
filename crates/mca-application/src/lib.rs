//! # Application Layer
//!
//! Use cases orchestrating the job lifecycle: the processor registry
//! resolves which analyzer handles a given job kind, and [`JobService`]
//! admits jobs, runs them on background tasks and exposes their state
//! for polling.
//!
//! This layer never talks to analyzer binaries itself; it dispatches to
//! [`JobProcessor`](mca_domain::JobProcessor) implementations supplied by
//! the providers crate at startup.

/// Processor registration and job construction
pub mod registry;
/// Job management use cases
pub mod use_cases;

pub use registry::ProcessorRegistry;
pub use use_cases::JobService;
