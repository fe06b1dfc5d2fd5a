//! Result retrieval handling.

use std::sync::Arc;

use mca_application::JobService;
use mca_domain::error::Error;
use mca_domain::{JobId, JobStatus};
use rmcp::ErrorData;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::CallToolResult;
use tracing::{info, warn};

use crate::args::JobResultsArgs;
use crate::handlers::json_response;
use crate::responses::{ErrorEnvelope, JobCompleted, JobFailed, JobInProgress};

/// Handles the `get_job_results` tool.
#[derive(Clone)]
pub struct ResultsHandler {
    jobs: Arc<JobService>,
}

impl ResultsHandler {
    /// Create a results handler over the shared job service.
    pub fn new(jobs: Arc<JobService>) -> Self {
        Self { jobs }
    }

    /// Look up a job and shape the response after its lifecycle status.
    ///
    /// An id that does not parse is indistinguishable from one that was
    /// never issued: both produce the unknown-job error payload and leave
    /// the job table untouched.
    ///
    /// # Errors
    ///
    /// Only serialization of the response payload can fail.
    pub async fn handle(
        &self,
        Parameters(args): Parameters<JobResultsArgs>,
    ) -> Result<CallToolResult, ErrorData> {
        let job = args
            .job_id
            .parse::<JobId>()
            .ok()
            .and_then(|id| self.jobs.get(&id));
        let Some(job) = job else {
            warn!(job_id = %args.job_id, "requested unknown job");
            return json_response(&ErrorEnvelope::new(
                Error::job_not_found(&args.job_id).to_string(),
            ));
        };

        info!(job = %job.id, status = %job.status, "status check");
        let execution_time = job.execution_time();
        match job.status {
            JobStatus::Completed => match job.result {
                Some(results) => json_response(&JobCompleted {
                    status: "completed",
                    job_type: job.kind,
                    results,
                    execution_time,
                }),
                // complete() always attaches the report; defend anyway.
                None => json_response(&ErrorEnvelope::new(
                    Error::internal("completed job is missing its report").to_string(),
                )),
            },
            JobStatus::Failed => json_response(&JobFailed {
                status: "failed",
                job_type: job.kind,
                error: job
                    .error
                    .unwrap_or_else(|| "unknown failure".to_owned()),
                execution_time,
            }),
            status => json_response(&JobInProgress::new(job.kind, status)),
        }
    }
}
