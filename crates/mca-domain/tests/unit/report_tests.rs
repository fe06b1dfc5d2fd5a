//! Report shaping and serialization.

use mca_domain::{
    AnalysisReport, LintCategory, LintMessage, LintReport, TestReport, TypeCheckIssue,
    TypeCheckReport,
};

fn message(category: LintCategory, line: u32) -> LintMessage {
    LintMessage {
        category,
        line,
        column: 0,
        symbol: "unused-variable".to_owned(),
        message_id: Some("W0612".to_owned()),
        message: "Unused variable 'x'".to_owned(),
        line_content: None,
    }
}

#[test]
fn empty_lint_report_is_fully_zeroed() {
    let report = LintReport::empty();
    assert_eq!(report.summary.total_issues, 0);
    assert_eq!(report.summary.error_count, 0);
    assert!(report.errors.is_empty());
    assert!(report.warnings.is_empty());
    assert!(report.refactors.is_empty());
    assert!(report.conventions.is_empty());
}

#[test]
fn lint_report_groups_messages_and_counts_them() {
    let report = LintReport::from_messages(vec![
        message(LintCategory::Error, 1),
        message(LintCategory::Warning, 2),
        message(LintCategory::Warning, 3),
        message(LintCategory::Convention, 4),
    ]);

    assert_eq!(report.summary.error_count, 1);
    assert_eq!(report.summary.warning_count, 2);
    assert_eq!(report.summary.refactor_count, 0);
    assert_eq!(report.summary.convention_count, 1);
    assert_eq!(report.summary.total_issues, 4);
    assert_eq!(report.warnings.len(), 2);
}

#[test]
fn unknown_pylint_type_falls_into_convention() {
    assert_eq!(
        LintCategory::from_pylint_type("fatal"),
        LintCategory::Convention
    );
    assert_eq!(
        LintCategory::from_pylint_type("refactor"),
        LintCategory::Refactor
    );
}

#[test]
fn untagged_report_serializes_to_the_per_kind_shape() {
    let lint = AnalysisReport::Lint(LintReport::empty());
    let value = serde_json::to_value(&lint).expect("serialize lint report");
    assert!(value.get("summary").is_some());
    assert_eq!(value["summary"]["total_issues"], 0);
    assert!(value.get("conventions").is_some());

    let test = AnalysisReport::Test(TestReport {
        passed: 2,
        failed: 1,
        error: None,
    });
    let value = serde_json::to_value(&test).expect("serialize test report");
    assert_eq!(value["passed"], 2);
    assert_eq!(value["failed"], 1);
    assert!(value.get("error").is_none());
}

#[test]
fn type_check_report_counts_issues() {
    let report = TypeCheckReport::from_issues(vec![TypeCheckIssue {
        line: 2,
        column: 1,
        message: "Argument 1 has incompatible type \"str\"  [arg-type]".to_owned(),
        error_code: Some("arg-type".to_owned()),
        line_content: Some("f(\"a\")".to_owned()),
    }]);
    assert_eq!(report.summary.issue_count, 1);
    assert_eq!(report.issues[0].line, 2);
}
