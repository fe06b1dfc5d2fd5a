//! Job listing and statistics handling.

use std::sync::Arc;

use mca_application::JobService;
use mca_domain::JobKind;
use rmcp::ErrorData;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::CallToolResult;
use tracing::warn;

use crate::args::ListJobsArgs;
use crate::handlers::json_response;
use crate::responses::{ErrorEnvelope, JobListing};

/// Handles the `list_jobs` tool.
#[derive(Clone)]
pub struct ListJobsHandler {
    jobs: Arc<JobService>,
}

impl ListJobsHandler {
    /// Create a listing handler over the shared job service.
    pub fn new(jobs: Arc<JobService>) -> Self {
        Self { jobs }
    }

    /// List jobs with aggregate statistics, optionally filtered by kind.
    ///
    /// # Errors
    ///
    /// Only serialization of the response payload can fail; an invalid
    /// filter value comes back as an `"error"` payload.
    pub async fn handle(
        &self,
        Parameters(args): Parameters<ListJobsArgs>,
    ) -> Result<CallToolResult, ErrorData> {
        let kind = match args.job_type.as_deref() {
            None => None,
            Some(raw) => match raw.parse::<JobKind>() {
                Ok(kind) => Some(kind),
                Err(err) => {
                    warn!(job_type = raw, "rejected listing with invalid job type filter");
                    return json_response(&ErrorEnvelope::new(err.to_string()));
                }
            },
        };

        json_response(&JobListing {
            jobs: self.jobs.list(kind),
            stats: self.jobs.stats(),
        })
    }
}
