//! # Domain Layer
//!
//! Core types for asynchronous Python code analysis jobs.
//!
//! ## Architecture
//!
//! | Component | Description |
//! |-----------|-------------|
//! | [`entities`] | The job record and analyzer report shapes |
//! | [`value_objects`] | Strong-typed identifiers |
//! | [`ports`] | Contracts implemented by outer layers |
//! | [`constants`] | Domain constants |
//! | [`error`] | Domain error types |
//!
//! The domain holds no runtime state of its own: the job table, history
//! ring and background tasks live in the application layer, and the
//! analyzer subprocess drivers live in the providers layer. Everything
//! they exchange is defined here.

/// Common macros
#[macro_use]
pub mod macros;

/// Domain-level constants
pub mod constants;
/// The job record and analyzer report shapes
pub mod entities;
/// Domain error types
pub mod error;
/// Contracts implemented by outer layers
pub mod ports;
/// Strong-typed identifiers
pub mod value_objects;

pub use entities::{
    AnalysisReport, Job, JobSummary, LintCategory, LintMessage, LintReport, LintSummary, SharedJob,
    TestReport, TypeCheckIssue, TypeCheckReport, TypeCheckSummary,
};
pub use error::{Error, Result};
pub use ports::{JobKind, JobProcessor, JobStats, JobStatus};
pub use value_objects::JobId;
