//! Analyzer report shapes.
//!
//! Each job kind produces its own report; [`AnalysisReport`] is the union
//! attached to a completed job. Serialization is untagged so clients see
//! the per-kind shape directly, and the shapes stay distinguishable at
//! read time through their required fields.

use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Findings attached to a completed job, shaped per job kind
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnalysisReport {
    /// pylint findings
    Lint(LintReport),
    /// mypy findings
    StaticAnalysis(TypeCheckReport),
    /// pytest outcome
    Test(TestReport),
}

// ============================================================================
// Lint
// ============================================================================

/// Severity category of a lint finding, following pylint's taxonomy
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Display)]
#[serde(rename_all = "snake_case")]
pub enum LintCategory {
    /// Probable bug or syntax problem
    #[display("error")]
    Error,
    /// Suspicious construct
    #[display("warning")]
    Warning,
    /// Restructuring suggestion
    #[display("refactor")]
    Refactor,
    /// Style and convention issue
    #[display("convention")]
    Convention,
}

impl LintCategory {
    /// Map a pylint message `type` string onto a category.
    ///
    /// Unknown types fall into [`Convention`](Self::Convention).
    pub fn from_pylint_type(value: &str) -> Self {
        match value {
            "error" => Self::Error,
            "warning" => Self::Warning,
            "refactor" => Self::Refactor,
            _ => Self::Convention,
        }
    }
}

/// A single lint finding
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LintMessage {
    /// Severity category
    pub category: LintCategory,
    /// 1-indexed source line
    pub line: u32,
    /// 0-indexed source column, as reported by pylint
    pub column: u32,
    /// Symbolic check name, e.g. `unused-variable`
    pub symbol: String,
    /// pylint message id, e.g. `W0612`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_id: Option<String>,
    /// Human-readable description
    pub message: String,
    /// The offending source line, when `line` is in range
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_content: Option<String>,
}

/// Per-category counts for a lint run
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct LintSummary {
    /// Number of error-category findings
    pub error_count: usize,
    /// Number of warning-category findings
    pub warning_count: usize,
    /// Number of refactor-category findings
    pub refactor_count: usize,
    /// Number of convention-category findings
    pub convention_count: usize,
    /// Total findings across all categories
    pub total_issues: usize,
}

/// Full pylint report: counts plus findings grouped by category
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LintReport {
    /// Per-category counts
    pub summary: LintSummary,
    /// Error-category findings
    pub errors: Vec<LintMessage>,
    /// Warning-category findings
    pub warnings: Vec<LintMessage>,
    /// Refactor-category findings
    pub refactors: Vec<LintMessage>,
    /// Convention-category findings
    pub conventions: Vec<LintMessage>,
}

impl LintReport {
    /// The report for a clean run: zeroed counts, empty categories.
    pub fn empty() -> Self {
        Self {
            summary: LintSummary::default(),
            errors: Vec::new(),
            warnings: Vec::new(),
            refactors: Vec::new(),
            conventions: Vec::new(),
        }
    }

    /// Group findings by category and total them up.
    pub fn from_messages(messages: Vec<LintMessage>) -> Self {
        let mut report = Self::empty();
        for message in messages {
            match message.category {
                LintCategory::Error => report.errors.push(message),
                LintCategory::Warning => report.warnings.push(message),
                LintCategory::Refactor => report.refactors.push(message),
                LintCategory::Convention => report.conventions.push(message),
            }
        }
        report.summary = LintSummary {
            error_count: report.errors.len(),
            warning_count: report.warnings.len(),
            refactor_count: report.refactors.len(),
            convention_count: report.conventions.len(),
            total_issues: report.errors.len()
                + report.warnings.len()
                + report.refactors.len()
                + report.conventions.len(),
        };
        report
    }
}

// ============================================================================
// Static type analysis
// ============================================================================

/// A single mypy finding
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TypeCheckIssue {
    /// 1-indexed source line
    pub line: u32,
    /// 1-indexed source column
    pub column: u32,
    /// Full mypy message, error code bracket included
    pub message: String,
    /// Error code extracted from a trailing `[code]` bracket
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<String>,
    /// The offending source line, when `line` is in range
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_content: Option<String>,
}

/// Issue count for a type-check run
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TypeCheckSummary {
    /// Total issues reported
    pub issue_count: usize,
}

/// Full mypy report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TypeCheckReport {
    /// Issue count
    pub summary: TypeCheckSummary,
    /// All findings, in tool output order
    pub issues: Vec<TypeCheckIssue>,
}

impl TypeCheckReport {
    /// Build a report from parsed issues.
    pub fn from_issues(issues: Vec<TypeCheckIssue>) -> Self {
        Self {
            summary: TypeCheckSummary {
                issue_count: issues.len(),
            },
            issues,
        }
    }
}

// ============================================================================
// Test execution
// ============================================================================

/// pytest outcome counts
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TestReport {
    /// Number of passing tests
    pub passed: u32,
    /// Number of failing tests
    pub failed: u32,
    /// Parse diagnostic when the pytest summary could not be interpreted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
