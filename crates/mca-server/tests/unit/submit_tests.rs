//! Submission handler tests.

use mca_domain::JobKind;
use mca_server::args::SubmitCodeArgs;
use mca_server::handlers::SubmitHandler;
use rmcp::handler::server::wrapper::Parameters;
use rstest::rstest;
use std::sync::Arc;

use crate::test_utils::{MockProcessor, response_json, service_with_mock};

#[rstest]
#[case("lint", "lint")]
#[case("static_analysis", "static_analysis")]
#[case("test", "test")]
#[tokio::test]
async fn valid_submissions_are_accepted(#[case] job_type: &str, #[case] expected: &str) {
    let service = service_with_mock(MockProcessor::new());
    let handler = SubmitHandler::new(Arc::clone(&service));

    let result = handler
        .handle(Parameters(SubmitCodeArgs {
            job_type: job_type.to_owned(),
            code: "x = 1\n".to_owned(),
        }))
        .await
        .expect("handler succeeds");

    assert!(!result.is_error.unwrap_or(false));
    let payload = response_json(&result);
    assert_eq!(payload["status"], "accepted");
    assert_eq!(payload["job_type"], expected);
    assert!(payload["job_id"].as_str().is_some_and(|id| !id.is_empty()));
    let message = payload["message"].as_str().expect("message present");
    assert!(message.contains("get_job_results"), "got: {message}");
}

#[tokio::test]
async fn invalid_job_type_is_rejected_without_creating_a_job() {
    let service = service_with_mock(MockProcessor::new());
    let handler = SubmitHandler::new(Arc::clone(&service));

    let result = handler
        .handle(Parameters(SubmitCodeArgs {
            job_type: "xxx".to_owned(),
            code: "x = 1\n".to_owned(),
        }))
        .await
        .expect("handler succeeds with an error payload");

    let payload = response_json(&result);
    assert_eq!(payload["status"], "error");
    let message = payload["message"].as_str().expect("message present");
    assert!(message.contains("Invalid job type"), "got: {message}");
    assert!(message.contains("Valid types are"), "got: {message}");

    // No side effects on the job table.
    assert_eq!(service.stats().total_jobs, 0);
}

#[tokio::test]
async fn kind_specific_submission_skips_string_validation() {
    let service = service_with_mock(MockProcessor::new().with_clean_lint_report());
    let handler = SubmitHandler::new(Arc::clone(&service));

    let result = handler
        .submit(JobKind::Lint, "x = 1\n".to_owned())
        .expect("handler succeeds");

    let payload = response_json(&result);
    assert_eq!(payload["status"], "accepted");
    assert_eq!(payload["job_type"], "lint");
    assert_eq!(service.stats().total_jobs, 1);
}
