//! Core business entities.

mod job;
mod report;

pub use job::{Job, JobSummary, SharedJob};
pub use report::{
    AnalysisReport, LintCategory, LintMessage, LintReport, LintSummary, TestReport, TypeCheckIssue,
    TypeCheckReport, TypeCheckSummary,
};
