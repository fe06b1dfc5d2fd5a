//! Mock processors and response helpers for handler tests.
#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use mca_application::{JobService, ProcessorRegistry};
use mca_domain::{
    AnalysisReport, Job, JobKind, JobProcessor, LintReport, SharedJob, TestReport,
};
use rmcp::model::CallToolResult;

/// Configurable mock processor for driving handlers without analyzers.
#[derive(Debug)]
pub struct MockProcessor {
    report: AnalysisReport,
    failure: Option<String>,
    delay: Option<Duration>,
}

impl MockProcessor {
    /// A processor that instantly completes with a passing test report.
    pub fn new() -> Self {
        Self {
            report: AnalysisReport::Test(TestReport {
                passed: 1,
                failed: 0,
                error: None,
            }),
            failure: None,
            delay: None,
        }
    }

    /// A processor that instantly completes with an empty lint report.
    pub fn with_clean_lint_report(mut self) -> Self {
        self.report = AnalysisReport::Lint(LintReport::empty());
        self
    }

    /// Configure the mock to fail every job with `message`.
    pub fn with_failure(mut self, message: &str) -> Self {
        self.failure = Some(message.to_owned());
        self
    }

    /// Configure the mock to sleep before finalizing, so tests can
    /// observe the pending/running states.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }
}

impl Default for MockProcessor {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl JobProcessor for MockProcessor {
    async fn process(&self, job: &SharedJob) {
        job.update(Job::mark_running);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        match &self.failure {
            Some(message) => job.update(|j| j.fail(message.clone())),
            None => {
                let report = self.report.clone();
                job.update(|j| j.complete(report));
            }
        }
    }
}

/// Build a job service with the same mock registered for every kind.
pub fn service_with_mock(processor: MockProcessor) -> Arc<JobService> {
    let processor: Arc<dyn JobProcessor> = Arc::new(processor);
    let mut registry = ProcessorRegistry::new();
    for kind in JobKind::ALL {
        registry.register(kind, Arc::clone(&processor));
    }
    Arc::new(JobService::new(registry))
}

/// Decode the JSON payload carried in a tool response.
pub fn response_json(result: &CallToolResult) -> serde_json::Value {
    let text = result
        .content
        .iter()
        .filter_map(|content| {
            serde_json::to_value(content)
                .ok()
                .and_then(|value| value.get("text").and_then(|t| t.as_str()).map(String::from))
        })
        .collect::<Vec<_>>()
        .join("");
    serde_json::from_str(&text).expect("tool response carries JSON content")
}
