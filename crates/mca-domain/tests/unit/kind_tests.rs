//! Job kind and status wire behavior.

use std::str::FromStr;

use mca_domain::{Error, JobKind, JobStatus};
use rstest::rstest;

#[rstest]
#[case("lint", JobKind::Lint)]
#[case("static_analysis", JobKind::StaticAnalysis)]
#[case("test", JobKind::Test)]
#[case("LINT", JobKind::Lint)]
#[case("Test", JobKind::Test)]
fn parses_known_kinds(#[case] input: &str, #[case] expected: JobKind) {
    assert_eq!(JobKind::from_str(input).expect("valid kind"), expected);
}

#[rstest]
#[case("xxx")]
#[case("")]
#[case("lints")]
#[case("static analysis")]
fn rejects_unknown_kinds(#[case] input: &str) {
    let err = JobKind::from_str(input).expect_err("invalid kind");
    assert!(matches!(err, Error::InvalidJobKind { .. }));
    let message = err.to_string();
    assert!(message.contains("Valid types are"), "got: {message}");
}

#[rstest]
#[case(JobKind::Lint, "lint")]
#[case(JobKind::StaticAnalysis, "static_analysis")]
#[case(JobKind::Test, "test")]
fn display_matches_wire_string(#[case] kind: JobKind, #[case] wire: &str) {
    assert_eq!(kind.to_string(), wire);
    let encoded = serde_json::to_string(&kind).expect("serialize kind");
    assert_eq!(encoded, format!("\"{wire}\""));
}

#[test]
fn status_terminality() {
    assert!(JobStatus::Completed.is_terminal());
    assert!(JobStatus::Failed.is_terminal());
    assert!(!JobStatus::Pending.is_terminal());
    assert!(!JobStatus::Running.is_terminal());

    assert!(JobStatus::Pending.is_active());
    assert!(JobStatus::Running.is_active());
    assert!(!JobStatus::Completed.is_active());
}

#[test]
fn all_kinds_cover_the_taxonomy() {
    assert_eq!(JobKind::ALL.len(), 3);
    for kind in JobKind::ALL {
        assert_eq!(JobKind::from_str(&kind.to_string()).expect("round trip"), kind);
    }
}
