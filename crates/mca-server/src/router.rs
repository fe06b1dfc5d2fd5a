//! The rmcp tool router.
//!
//! Exposes the six tools of the analysis surface and delegates each to
//! its handler. The router itself holds no job state; everything lives
//! in the shared [`JobService`].

use std::sync::Arc;

use mca_application::JobService;
use mca_domain::JobKind;
use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolResult, Implementation, ServerCapabilities, ServerInfo};
use rmcp::{ErrorData, ServerHandler, tool, tool_handler, tool_router};

use crate::args::{JobResultsArgs, ListJobsArgs, SubmitCodeArgs, SubmitSnippetArgs};
use crate::handlers::{ListJobsHandler, ResultsHandler, SubmitHandler};

/// The MCP Code Auditor tool server.
#[derive(Clone)]
pub struct McaServer {
    submit: SubmitHandler,
    results: ResultsHandler,
    list: ListJobsHandler,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl McaServer {
    /// Assemble the tool surface over a shared job service.
    pub fn new(jobs: Arc<JobService>) -> Self {
        Self {
            submit: SubmitHandler::new(Arc::clone(&jobs)),
            results: ResultsHandler::new(Arc::clone(&jobs)),
            list: ListJobsHandler::new(jobs),
            tool_router: Self::tool_router(),
        }
    }

    #[tool(
        description = "Submit Python code for analysis (job_type: lint, static_analysis or test); returns a job id to poll with get_job_results"
    )]
    async fn submit_code(
        &self,
        params: Parameters<SubmitCodeArgs>,
    ) -> Result<CallToolResult, ErrorData> {
        self.submit.handle(params).await
    }

    #[tool(description = "Submit Python code for pylint linting analysis")]
    async fn submit_code_for_linting(
        &self,
        Parameters(args): Parameters<SubmitSnippetArgs>,
    ) -> Result<CallToolResult, ErrorData> {
        self.submit.submit(JobKind::Lint, args.code)
    }

    #[tool(description = "Submit Python code for mypy static type analysis")]
    async fn submit_code_for_static_analysis(
        &self,
        Parameters(args): Parameters<SubmitSnippetArgs>,
    ) -> Result<CallToolResult, ErrorData> {
        self.submit.submit(JobKind::StaticAnalysis, args.code)
    }

    #[tool(description = "Submit Python code for pytest test execution")]
    async fn submit_code_for_testing(
        &self,
        Parameters(args): Parameters<SubmitSnippetArgs>,
    ) -> Result<CallToolResult, ErrorData> {
        self.submit.submit(JobKind::Test, args.code)
    }

    #[tool(description = "Get the results of a previously submitted job")]
    async fn get_job_results(
        &self,
        params: Parameters<JobResultsArgs>,
    ) -> Result<CallToolResult, ErrorData> {
        self.results.handle(params).await
    }

    #[tool(
        description = "List all jobs and aggregate statistics, optionally filtered by job type"
    )]
    async fn list_jobs(
        &self,
        params: Parameters<ListJobsArgs>,
    ) -> Result<CallToolResult, ErrorData> {
        self.list.handle(params).await
    }
}

#[tool_handler]
impl ServerHandler for McaServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation::from_build_env(),
            instructions: Some(
                "Asynchronous Python code analysis. Submit code with submit_code or one of \
                 the submit_code_for_* tools, then poll get_job_results with the returned \
                 job id; list_jobs enumerates submissions and aggregate statistics."
                    .to_owned(),
            ),
            ..Default::default()
        }
    }
}
