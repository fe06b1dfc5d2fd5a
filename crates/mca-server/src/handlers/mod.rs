//! Per-tool request handlers.
//!
//! Each handler owns a clone of the job service and translates one tool
//! call into job-engine operations. They are plain structs so tests can
//! drive them directly, without a transport.

mod list;
mod results;
mod submit;

pub use list::ListJobsHandler;
pub use results::ResultsHandler;
pub use submit::SubmitHandler;

use rmcp::ErrorData;
use rmcp::model::{CallToolResult, Content};
use serde::Serialize;

/// Serialize a payload as the successful JSON content of a tool call.
pub(crate) fn json_response(payload: &impl Serialize) -> Result<CallToolResult, ErrorData> {
    Ok(CallToolResult::success(vec![Content::json(payload)?]))
}
