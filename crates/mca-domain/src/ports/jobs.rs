//! Job taxonomy and lifecycle status.
//!
//! Individual analyzers (lint, static type analysis, test execution) map
//! to [`Job`](crate::entities::Job) instances with a specific [`JobKind`];
//! the processor registered for that kind drives the job through the
//! status machine `Pending → Running → {Completed, Failed}`.

use std::collections::HashMap;
use std::str::FromStr;

use derive_more::Display;
use serde::{Deserialize, Serialize};

use crate::error::Error;

// ============================================================================
// Job Kinds & Status
// ============================================================================

/// The kind of analysis a job performs
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Display)]
#[serde(rename_all = "snake_case")]
pub enum JobKind {
    /// pylint lint analysis
    #[display("lint")]
    Lint,
    /// mypy static type analysis
    #[display("static_analysis")]
    StaticAnalysis,
    /// pytest test execution
    #[display("test")]
    Test,
}

impl JobKind {
    /// All supported kinds, in wire order.
    pub const ALL: [Self; 3] = [Self::Lint, Self::StaticAnalysis, Self::Test];
}

impl FromStr for JobKind {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "lint" => Ok(Self::Lint),
            "static_analysis" => Ok(Self::StaticAnalysis),
            "test" => Ok(Self::Test),
            _ => Err(Error::invalid_job_kind(value)),
        }
    }
}

/// Lifecycle status of a job
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Display)]
#[serde(rename_all = "snake_case")]
pub enum JobStatus {
    /// Job is waiting to be picked up by its background task
    #[display("pending")]
    Pending,
    /// Job is currently executing
    #[display("running")]
    Running,
    /// Job completed successfully
    #[display("completed")]
    Completed,
    /// Job terminated with an error
    #[display("failed")]
    Failed,
}

impl JobStatus {
    /// Returns `true` if the job is in a terminal state
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Completed | Self::Failed)
    }

    /// Returns `true` if the job is still moving through the lifecycle
    pub fn is_active(self) -> bool {
        matches!(self, Self::Pending | Self::Running)
    }
}

// ============================================================================
// Aggregate Statistics
// ============================================================================

/// Summary counts of jobs grouped by status and kind
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JobStats {
    /// Number of jobs in the job table
    pub total_jobs: usize,
    /// Job counts keyed by status wire string
    pub by_status: HashMap<String, usize>,
    /// Job counts keyed by kind wire string
    pub by_kind: HashMap<String, usize>,
}
