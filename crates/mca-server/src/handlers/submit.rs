//! Code submission handling.

use std::sync::Arc;

use mca_application::JobService;
use mca_domain::JobKind;
use rmcp::ErrorData;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::CallToolResult;
use tracing::{info, warn};

use crate::args::SubmitCodeArgs;
use crate::handlers::json_response;
use crate::responses::{ErrorEnvelope, SubmissionAccepted};

/// Handles the `submit_code` family of tools.
#[derive(Clone)]
pub struct SubmitHandler {
    jobs: Arc<JobService>,
}

impl SubmitHandler {
    /// Create a submit handler over the shared job service.
    pub fn new(jobs: Arc<JobService>) -> Self {
        Self { jobs }
    }

    /// Handle the generic tool: validate the kind string, then admit.
    ///
    /// # Errors
    ///
    /// Only serialization of the response payload can fail; invalid job
    /// types come back as an `"error"` payload, not a protocol error.
    pub async fn handle(
        &self,
        Parameters(args): Parameters<SubmitCodeArgs>,
    ) -> Result<CallToolResult, ErrorData> {
        match args.job_type.parse::<JobKind>() {
            Ok(kind) => self.submit(kind, args.code),
            Err(err) => {
                warn!(job_type = %args.job_type, "rejected submission with invalid job type");
                json_response(&ErrorEnvelope::new(err.to_string()))
            }
        }
    }

    /// Admit a job of an already-validated kind.
    ///
    /// # Errors
    ///
    /// Only serialization of the response payload can fail.
    pub fn submit(&self, kind: JobKind, code: String) -> Result<CallToolResult, ErrorData> {
        match self.jobs.submit(kind, code) {
            Ok(job) => {
                info!(job = %job.id, kind = %kind, "accepted submission");
                json_response(&SubmissionAccepted::new(&job))
            }
            Err(err) => {
                warn!(kind = %kind, error = %err, "submission rejected");
                json_response(&ErrorEnvelope::new(err.to_string()))
            }
        }
    }
}
