//! The job record and its lifecycle transitions.

use std::sync::{Arc, PoisonError, RwLock};

use serde::{Deserialize, Serialize};

use crate::entities::AnalysisReport;
use crate::ports::{JobKind, JobStatus};
use crate::value_objects::JobId;

/// Current wall-clock instant as Unix-epoch milliseconds.
fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// A unit of analysis work with durable state until process exit.
///
/// `id`, `kind` and `code` are fixed at creation; everything else is
/// mutated only through the transition methods, which keep the status
/// machine `Pending → Running → {Completed, Failed}` monotone. Terminal
/// states are absorbing: once a job completes or fails, later transition
/// calls are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Job {
    /// Unique identifier for the job
    pub id: JobId,
    /// What kind of analysis this job performs
    pub kind: JobKind,
    /// Current lifecycle status
    pub status: JobStatus,
    /// The submitted source text
    pub code: String,
    /// When the job was submitted (Unix epoch milliseconds)
    pub submitted_at: i64,
    /// When the job started running
    pub started_at: Option<i64>,
    /// When the job reached a terminal state
    pub completed_at: Option<i64>,
    /// Findings (populated iff the job completed)
    pub result: Option<AnalysisReport>,
    /// Failure explanation (populated iff the job failed)
    pub error: Option<String>,
}

impl Job {
    /// Create a new job in `Pending` status with a fresh id.
    pub fn new(kind: JobKind, code: impl Into<String>) -> Self {
        Self {
            id: JobId::new(),
            kind,
            status: JobStatus::Pending,
            code: code.into(),
            submitted_at: now_millis(),
            started_at: None,
            completed_at: None,
            result: None,
            error: None,
        }
    }

    /// Transition `Pending → Running` and stamp `started_at`.
    ///
    /// Ignored unless the job is currently `Pending`.
    pub fn mark_running(&mut self) {
        if self.status == JobStatus::Pending {
            self.status = JobStatus::Running;
            self.started_at = Some(now_millis());
        }
    }

    /// Transition to `Completed` with the attached report.
    ///
    /// Ignored when the job is already terminal. Stamps `completed_at`,
    /// backfilling `started_at` for a job that never went through
    /// `mark_running`.
    pub fn complete(&mut self, report: AnalysisReport) {
        if self.status.is_terminal() {
            return;
        }
        let now = now_millis();
        self.started_at.get_or_insert(now);
        self.status = JobStatus::Completed;
        self.result = Some(report);
        self.completed_at = Some(now);
    }

    /// Transition to `Failed` with the attached explanation.
    ///
    /// Ignored when the job is already terminal. A job that failed before
    /// ever starting still ends up with both timestamps set.
    pub fn fail(&mut self, error: impl Into<String>) {
        if self.status.is_terminal() {
            return;
        }
        let now = now_millis();
        self.started_at.get_or_insert(now);
        self.status = JobStatus::Failed;
        self.error = Some(error.into());
        self.completed_at = Some(now);
    }

    /// Wall-clock execution time in seconds, when the job has both run
    /// and terminated.
    pub fn execution_time(&self) -> Option<f64> {
        match (self.started_at, self.completed_at) {
            (Some(started), Some(completed)) => Some((completed - started) as f64 / 1000.0),
            _ => None,
        }
    }

    /// The listing view of this job.
    pub fn summary(&self) -> JobSummary {
        JobSummary {
            job_id: self.id,
            job_type: self.kind,
            status: self.status,
            submitted_at: self.submitted_at,
            started_at: self.started_at,
            completed_at: self.completed_at,
            execution_time: self.execution_time(),
            has_result: self.result.is_some(),
            has_error: self.error.is_some(),
        }
    }
}

/// The per-job view returned by listings: lifecycle fields without the
/// submitted code or the full report payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct JobSummary {
    /// Unique identifier for the job
    pub job_id: JobId,
    /// What kind of analysis the job performs
    pub job_type: JobKind,
    /// Current lifecycle status
    pub status: JobStatus,
    /// When the job was submitted (Unix epoch milliseconds)
    pub submitted_at: i64,
    /// When the job started running
    pub started_at: Option<i64>,
    /// When the job reached a terminal state
    pub completed_at: Option<i64>,
    /// Wall-clock execution time in seconds
    pub execution_time: Option<f64>,
    /// Whether findings are attached
    pub has_result: bool,
    /// Whether a failure explanation is attached
    pub has_error: bool,
}

/// A job shared between the job table and its background task.
///
/// Readers snapshot the record; the owning processor mutates it through
/// short-lived write locks. The lock is only ever held across field
/// updates, never across subprocess or I/O waits, and poisoning is
/// recovered so a panicking task cannot wedge the table.
#[derive(Debug, Clone)]
pub struct SharedJob(Arc<RwLock<Job>>);

impl SharedJob {
    /// Wrap a freshly created job.
    pub fn new(job: Job) -> Self {
        Self(Arc::new(RwLock::new(job)))
    }

    /// Clone the current state of the job.
    pub fn snapshot(&self) -> Job {
        self.0
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Mutate the job under a short-lived write lock.
    pub fn update<R>(&self, f: impl FnOnce(&mut Job) -> R) -> R {
        let mut job = self.0.write().unwrap_or_else(PoisonError::into_inner);
        f(&mut job)
    }
}
