//! MCP tool argument shapes.
//!
//! Kind and id fields arrive as plain strings and are validated at the
//! handler boundary, so a bad value produces a structured error payload
//! instead of a schema rejection.

use schemars::JsonSchema;
use serde::Deserialize;

/// Arguments for the generic `submit_code` tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SubmitCodeArgs {
    /// Type of analysis to perform: "lint", "static_analysis" or "test"
    pub job_type: String,
    /// Python code content to analyze
    pub code: String,
}

/// Arguments for the kind-specific submit tools.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SubmitSnippetArgs {
    /// Python code content to analyze
    pub code: String,
}

/// Arguments for `get_job_results`.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct JobResultsArgs {
    /// Id returned by a prior submission
    pub job_id: String,
}

/// Arguments for `list_jobs`.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct ListJobsArgs {
    /// Optional filter: "lint", "static_analysis" or "test"
    #[serde(default)]
    pub job_type: Option<String>,
}
