//! Response payload shapes for the tool surface.
//!
//! Every tool responds with one of these envelopes serialized as JSON
//! content. The `status` discriminant tells clients what they got:
//! `accepted` for admissions, a lifecycle status for result polls, and
//! `error` for invalid input or unknown ids.

use mca_domain::{AnalysisReport, Job, JobId, JobKind, JobStats, JobStatus, JobSummary};
use serde::Serialize;

/// A submission was admitted and is processing in the background.
#[derive(Debug, Serialize)]
pub struct SubmissionAccepted {
    /// Always `"accepted"`
    pub status: &'static str,
    /// Id to poll with `get_job_results`
    pub job_id: JobId,
    /// The admitted job's kind
    pub job_type: JobKind,
    /// Human-readable follow-up hint
    pub message: String,
}

impl SubmissionAccepted {
    /// Build the acceptance envelope for a freshly admitted job.
    pub fn new(job: &Job) -> Self {
        Self {
            status: "accepted",
            job_id: job.id,
            job_type: job.kind,
            message: format!(
                "Code submitted for {}. Use get_job_results to check status.",
                job.kind
            ),
        }
    }
}

/// Structured error payload for invalid input or unknown ids.
#[derive(Debug, Serialize)]
pub struct ErrorEnvelope {
    /// Always `"error"`
    pub status: &'static str,
    /// What went wrong
    pub message: String,
}

impl ErrorEnvelope {
    /// Build an error envelope from any displayable failure.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            status: "error",
            message: message.into(),
        }
    }
}

/// Result poll response for a completed job.
#[derive(Debug, Serialize)]
pub struct JobCompleted {
    /// Always `"completed"`
    pub status: &'static str,
    /// The job's kind
    pub job_type: JobKind,
    /// The analyzer's findings
    pub results: AnalysisReport,
    /// Wall-clock execution time in seconds
    pub execution_time: Option<f64>,
}

/// Result poll response for a failed job.
#[derive(Debug, Serialize)]
pub struct JobFailed {
    /// Always `"failed"`
    pub status: &'static str,
    /// The job's kind
    pub job_type: JobKind,
    /// The failure explanation
    pub error: String,
    /// Wall-clock execution time in seconds
    pub execution_time: Option<f64>,
}

/// Result poll response for a job that has not terminated yet.
#[derive(Debug, Serialize)]
pub struct JobInProgress {
    /// The job's current lifecycle status
    pub status: JobStatus,
    /// The job's kind
    pub job_type: JobKind,
    /// Human-readable poll-again hint
    pub message: String,
}

impl JobInProgress {
    /// Build the in-progress envelope for a pending or running job.
    pub fn new(kind: JobKind, status: JobStatus) -> Self {
        Self {
            status,
            job_type: kind,
            message: format!("Job is {status}. Please check again later."),
        }
    }
}

/// Listing response: one summary per job plus aggregate statistics.
#[derive(Debug, Serialize)]
pub struct JobListing {
    /// Per-job summaries
    pub jobs: Vec<JobSummary>,
    /// Aggregate counts
    pub stats: JobStats,
}
