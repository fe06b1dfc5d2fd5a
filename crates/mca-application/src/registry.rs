//! Processor registration and job construction.
//!
//! The registry is the factory seam between the job taxonomy and the
//! concrete analyzers: new kinds plug in by registering a processor,
//! without touching the job manager.

use std::collections::HashMap;
use std::sync::Arc;

use mca_domain::error::{Error, Result};
use mca_domain::{Job, JobKind, JobProcessor};

/// Maps each job kind to the processor that executes it.
///
/// Registration is a startup-time action; the registry is frozen behind
/// an `Arc` once the job service takes ownership.
#[derive(Default)]
pub struct ProcessorRegistry {
    processors: HashMap<JobKind, Arc<dyn JobProcessor>>,
}

impl ProcessorRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a processor for a kind, overwriting any prior registration.
    pub fn register(&mut self, kind: JobKind, processor: Arc<dyn JobProcessor>) {
        self.processors.insert(kind, processor);
    }

    /// Resolve the processor registered for a kind.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoProcessor`] when the kind has no registration.
    pub fn processor(&self, kind: JobKind) -> Result<Arc<dyn JobProcessor>> {
        self.processors
            .get(&kind)
            .map(Arc::clone)
            .ok_or(Error::NoProcessor { kind })
    }

    /// Create a new `Pending` job of the requested kind with a fresh id.
    pub fn create_job(&self, kind: JobKind, code: impl Into<String>) -> Job {
        Job::new(kind, code)
    }
}
