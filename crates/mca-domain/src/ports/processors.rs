//! The analyzer processor contract.

use std::fmt::Debug;

use async_trait::async_trait;

use crate::entities::SharedJob;

/// Executes one kind of analysis against a job.
///
/// A processor owns the full per-job state machine:
///
/// 1. Transition the job `Pending → Running` and stamp `started_at`.
/// 2. Run the analysis against the job's code.
/// 3. On success, attach the report and transition to `Completed`; on
///    failure, attach the error text and transition to `Failed`. Either
///    way, stamp `completed_at` exactly once.
///
/// Processors must catch every failure internally and translate it into a
/// `Failed` status; `process` itself never returns an error. The job
/// manager still guards against a misbehaving implementation by failing
/// any job left non-terminal after `process` returns.
#[async_trait]
pub trait JobProcessor: Send + Sync + Debug {
    /// Drive `job` to a terminal state.
    async fn process(&self, job: &SharedJob);
}
