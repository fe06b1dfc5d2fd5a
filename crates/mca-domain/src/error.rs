//! Error handling types

use thiserror::Error;

use crate::ports::JobKind;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the MCP Code Auditor
#[derive(Error, Debug)]
pub enum Error {
    /// Caller supplied a job type string outside the supported taxonomy
    #[error("Invalid job type: '{value}'. Valid types are: lint, static_analysis, test")]
    InvalidJobKind {
        /// The rejected input value
        value: String,
    },

    /// No processor has been registered for the requested job kind
    #[error("No processor registered for job type: {kind}")]
    NoProcessor {
        /// The kind that failed to resolve
        kind: JobKind,
    },

    /// Lookup named a job id that is not in the job table
    #[error("No job found with ID: {id}")]
    JobNotFound {
        /// The id as supplied by the caller
        id: String,
    },

    /// The analyzer subprocess could not be started
    #[error("Failed to start {tool}: {source}")]
    ToolSpawn {
        /// Analyzer binary name
        tool: &'static str,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The analyzer subprocess exceeded its wall-clock deadline
    #[error("Process timed out after {seconds} seconds")]
    ToolTimeout {
        /// Analyzer binary name
        tool: &'static str,
        /// Configured deadline in seconds
        seconds: u64,
    },

    /// The analyzer subprocess ran but reported a tool-level fault
    #[error("{tool} error: {details}")]
    ToolCrash {
        /// Analyzer binary name
        tool: &'static str,
        /// Diagnostics captured from the tool
        details: String,
    },

    /// Analyzer output could not be interpreted
    #[error("Failed to parse {tool} output: {message}")]
    OutputParse {
        /// Analyzer binary name
        tool: &'static str,
        /// Description of the parse failure
        message: String,
    },

    /// I/O operation error
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error
        #[from]
        source: std::io::Error,
    },

    /// JSON parsing or serialization error
    #[error("JSON parsing error: {source}")]
    Json {
        /// The underlying JSON error
        #[from]
        source: serde_json::Error,
    },

    /// Invariant violation inside the job engine
    #[error("Internal error: {message}")]
    Internal {
        /// Description of the violated invariant
        message: String,
    },
}

impl Error {
    /// Create an invalid-job-kind error from the rejected input
    pub fn invalid_job_kind<S: Into<String>>(value: S) -> Self {
        Self::InvalidJobKind {
            value: value.into(),
        }
    }

    /// Create a missing-processor error
    pub fn no_processor(kind: JobKind) -> Self {
        Self::NoProcessor { kind }
    }

    /// Create an unknown-job error from the caller-supplied id
    pub fn job_not_found<S: Into<String>>(id: S) -> Self {
        Self::JobNotFound { id: id.into() }
    }

    /// Create a spawn-failure error for an analyzer binary
    pub fn tool_spawn(tool: &'static str, source: std::io::Error) -> Self {
        Self::ToolSpawn { tool, source }
    }

    /// Create a timeout error for an analyzer binary
    pub fn tool_timeout(tool: &'static str, seconds: u64) -> Self {
        Self::ToolTimeout { tool, seconds }
    }

    /// Create a tool-fault error carrying the analyzer's diagnostics
    pub fn tool_crash<S: Into<String>>(tool: &'static str, details: S) -> Self {
        Self::ToolCrash {
            tool,
            details: details.into(),
        }
    }

    /// Create an output-parse error for an analyzer binary
    pub fn output_parse<S: Into<String>>(tool: &'static str, message: S) -> Self {
        Self::OutputParse {
            tool,
            message: message.into(),
        }
    }

    /// Create an internal invariant-violation error
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}
