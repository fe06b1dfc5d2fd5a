//! Asynchronous job management.
//!
//! # Overview
//! `JobService` admits heterogeneous analysis jobs, runs each on its own
//! background task and keeps their state observable until process exit.
//!
//! # Responsibilities
//! - **Admission**: construct the job via the registry and return it to
//!   the caller immediately; submission never blocks on analyzer work.
//! - **Execution**: spawn one tokio task per job that dispatches to the
//!   kind's registered processor.
//! - **Safety net**: translate processor panics into `Failed` and force
//!   any job left non-terminal after processor return into `Failed`, so
//!   the status machine invariants hold regardless of processor bugs.
//! - **Bookkeeping**: retain every job in the live table for queries and
//!   append terminal jobs to a bounded FIFO history ring.

use std::collections::VecDeque;
use std::panic::AssertUnwindSafe;
use std::sync::{Arc, Mutex, PoisonError};

use dashmap::DashMap;
use futures::FutureExt;
use mca_domain::constants::JOB_HISTORY_CAPACITY;
use mca_domain::error::Result;
use mca_domain::{Job, JobId, JobKind, JobProcessor, JobStats, JobSummary, SharedJob};
use tokio::task::JoinHandle;
use tracing::{debug, error, info, warn};

use crate::registry::ProcessorRegistry;

/// Manages asynchronous jobs of any registered kind.
///
/// Cheap to clone: all state is `Arc`-shared, so the service can be
/// handed to request handlers and background tasks alike. The tables are
/// only ever locked across pure map operations, never across analyzer
/// work.
#[derive(Clone)]
pub struct JobService {
    registry: Arc<ProcessorRegistry>,
    jobs: Arc<DashMap<JobId, SharedJob>>,
    history: Arc<Mutex<VecDeque<SharedJob>>>,
    active: Arc<DashMap<JobId, JoinHandle<()>>>,
    max_history: usize,
}

impl JobService {
    /// Create a job service with the default history capacity.
    pub fn new(registry: ProcessorRegistry) -> Self {
        Self::with_history_capacity(registry, JOB_HISTORY_CAPACITY)
    }

    /// Create a job service retaining at most `max_history` terminal jobs.
    pub fn with_history_capacity(registry: ProcessorRegistry, max_history: usize) -> Self {
        Self {
            registry: Arc::new(registry),
            jobs: Arc::new(DashMap::new()),
            history: Arc::new(Mutex::new(VecDeque::with_capacity(max_history))),
            active: Arc::new(DashMap::new()),
            max_history,
        }
    }

    /// Submit a new job for processing.
    ///
    /// Creates the job, stores it in the live table, spawns its
    /// background task and returns a snapshot — usually still `Pending`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoProcessor`](mca_domain::Error::NoProcessor)
    /// when no processor is registered for `kind`; no job is created in
    /// that case.
    pub fn submit(&self, kind: JobKind, code: impl Into<String>) -> Result<Job> {
        let processor = self.registry.processor(kind)?;

        let job = self.registry.create_job(kind, code);
        let snapshot = job.clone();
        let id = job.id;
        let shared = SharedJob::new(job);
        self.jobs.insert(id, shared.clone());

        info!(job = %id, kind = %kind, bytes = snapshot.code.len(), "submitted new job");

        let service = self.clone();
        let task_job = shared.clone();
        let handle = tokio::spawn(async move {
            service.run_job(id, kind, task_job, processor).await;
        });
        self.active.insert(id, handle);

        // The task may already have finished before its handle was
        // recorded; drop the stale entry so the active table only ever
        // holds non-terminal jobs.
        if shared.snapshot().status.is_terminal() {
            self.active.remove(&id);
        }

        Ok(snapshot)
    }

    /// Get a snapshot of a job by id.
    pub fn get(&self, id: &JobId) -> Option<Job> {
        self.jobs.get(id).map(|entry| entry.snapshot())
    }

    /// List all jobs, optionally filtered by kind.
    pub fn list(&self, kind: Option<JobKind>) -> Vec<JobSummary> {
        self.jobs
            .iter()
            .map(|entry| entry.snapshot())
            .filter(|job| kind.is_none_or(|k| job.kind == k))
            .map(|job| job.summary())
            .collect()
    }

    /// Aggregate job counts by status and kind.
    pub fn stats(&self) -> JobStats {
        let mut stats = JobStats::default();
        for entry in self.jobs.iter() {
            let job = entry.snapshot();
            stats.total_jobs += 1;
            *stats.by_status.entry(job.status.to_string()).or_insert(0) += 1;
            *stats.by_kind.entry(job.kind.to_string()).or_insert(0) += 1;
        }
        stats
    }

    /// Terminal jobs retained in the history ring, oldest first.
    pub fn recent_jobs(&self) -> Vec<JobSummary> {
        self.history
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .map(|job| job.snapshot().summary())
            .collect()
    }

    /// Number of jobs with a live background task.
    pub fn active_tasks(&self) -> usize {
        self.active.len()
    }

    /// Background task body: dispatch to the processor, then enforce the
    /// terminal-state invariants and move the job into history.
    async fn run_job(
        &self,
        id: JobId,
        kind: JobKind,
        job: SharedJob,
        processor: Arc<dyn JobProcessor>,
    ) {
        debug!(job = %id, kind = %kind, "starting background processing");

        let outcome = AssertUnwindSafe(processor.process(&job)).catch_unwind().await;
        if let Err(panic) = outcome {
            let message = panic_message(panic.as_ref());
            error!(job = %id, kind = %kind, panic = %message, "processor panicked");
            job.update(|j| j.fail(format!("Processor panicked: {message}")));
        }

        // A processor is contractually required to finalize its job;
        // defend against one that returned without doing so.
        let finalized = job.update(|j| {
            if j.status.is_terminal() {
                true
            } else {
                j.fail("Processor did not finalize the job");
                false
            }
        });
        if !finalized {
            warn!(job = %id, kind = %kind, "processor returned without finalizing; job marked failed");
        }

        let status = job.snapshot().status;
        info!(job = %id, kind = %kind, status = %status, "job reached terminal state");

        if self.max_history > 0 {
            let mut history = self.history.lock().unwrap_or_else(PoisonError::into_inner);
            while history.len() >= self.max_history {
                history.pop_front();
            }
            history.push_back(job);
        }
        self.active.remove(&id);
    }
}

/// Best-effort extraction of a panic payload message.
fn panic_message(panic: &(dyn std::any::Any + Send)) -> String {
    if let Some(message) = panic.downcast_ref::<&str>() {
        (*message).to_owned()
    } else if let Some(message) = panic.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_owned()
    }
}
