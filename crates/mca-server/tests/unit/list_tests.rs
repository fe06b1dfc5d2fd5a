//! Listing handler tests.

use std::sync::Arc;
use std::time::Duration;

use mca_domain::JobKind;
use mca_server::args::ListJobsArgs;
use mca_server::handlers::{ListJobsHandler, SubmitHandler};
use rmcp::handler::server::wrapper::Parameters;

use crate::test_utils::{MockProcessor, response_json, service_with_mock};

#[tokio::test]
async fn empty_service_lists_nothing() {
    let service = service_with_mock(MockProcessor::new());
    let handler = ListJobsHandler::new(service);

    let result = handler
        .handle(Parameters(ListJobsArgs::default()))
        .await
        .expect("handler succeeds");

    let payload = response_json(&result);
    assert_eq!(payload["jobs"], serde_json::json!([]));
    assert_eq!(payload["stats"]["total_jobs"], 0);
}

#[tokio::test]
async fn listing_covers_all_jobs_and_supports_kind_filters() {
    let service = service_with_mock(MockProcessor::new());
    let submit = SubmitHandler::new(Arc::clone(&service));
    let handler = ListJobsHandler::new(Arc::clone(&service));

    submit
        .submit(JobKind::Lint, "a = 1\n".to_owned())
        .expect("submission accepted");
    submit
        .submit(JobKind::Lint, "b = 2\n".to_owned())
        .expect("submission accepted");
    submit
        .submit(JobKind::Test, "def test_ok(): pass\n".to_owned())
        .expect("submission accepted");

    let result = handler
        .handle(Parameters(ListJobsArgs::default()))
        .await
        .expect("handler succeeds");
    let payload = response_json(&result);
    assert_eq!(payload["jobs"].as_array().map(Vec::len), Some(3));
    assert_eq!(payload["stats"]["total_jobs"], 3);
    assert_eq!(payload["stats"]["by_kind"]["lint"], 2);
    assert_eq!(payload["stats"]["by_kind"]["test"], 1);

    let result = handler
        .handle(Parameters(ListJobsArgs {
            job_type: Some("lint".to_owned()),
        }))
        .await
        .expect("handler succeeds");
    let payload = response_json(&result);
    let jobs = payload["jobs"].as_array().expect("jobs array");
    assert_eq!(jobs.len(), 2);
    assert!(jobs.iter().all(|job| job["job_type"] == "lint"));
    // Stats stay global even under a filter.
    assert_eq!(payload["stats"]["total_jobs"], 3);
}

#[tokio::test]
async fn listed_summaries_carry_the_lifecycle_fields() {
    let service = service_with_mock(MockProcessor::new());
    let submit = SubmitHandler::new(Arc::clone(&service));
    let handler = ListJobsHandler::new(Arc::clone(&service));

    submit
        .submit(JobKind::Test, String::new())
        .expect("submission accepted");

    // Give the instant mock a moment to finalize.
    for _ in 0..500 {
        if service.stats().by_status.get("completed") == Some(&1) {
            break;
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }

    let result = handler
        .handle(Parameters(ListJobsArgs::default()))
        .await
        .expect("handler succeeds");
    let payload = response_json(&result);
    let job = &payload["jobs"][0];
    assert_eq!(job["status"], "completed");
    assert!(job["submitted_at"].as_i64().is_some());
    assert!(job["started_at"].as_i64().is_some());
    assert!(job["completed_at"].as_i64().is_some());
    assert!(job["execution_time"].as_f64().is_some());
    assert_eq!(job["has_result"], true);
    assert_eq!(job["has_error"], false);
}

#[tokio::test]
async fn invalid_filter_is_rejected_as_an_error_payload() {
    let service = service_with_mock(MockProcessor::new());
    let handler = ListJobsHandler::new(service);

    let result = handler
        .handle(Parameters(ListJobsArgs {
            job_type: Some("everything".to_owned()),
        }))
        .await
        .expect("handler succeeds with an error payload");

    let payload = response_json(&result);
    assert_eq!(payload["status"], "error");
    let message = payload["message"].as_str().expect("message present");
    assert!(message.contains("Invalid job type"), "got: {message}");
}
