//! pytest test execution.

use std::ffi::OsString;
use std::sync::LazyLock;

use async_trait::async_trait;
use mca_domain::error::Result;
use mca_domain::{AnalysisReport, JobProcessor, SharedJob, TestReport};
use regex::Regex;
use tracing::{debug, error, info};

use crate::exec::{AnalyzerInvocation, write_source_file};

const PYTEST: &str = "pytest";

static SUMMARY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"=+\s*(.+?)\s+in\s+[\d.]+s\s*=+").expect("pytest summary pattern is valid")
});
static PASSED_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)\s+passed").expect("pytest passed pattern is valid"));
static FAILED_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)\s+failed").expect("pytest failed pattern is valid"));

/// Processor for test jobs backed by the `pytest` binary.
#[derive(Debug, Default, Clone, Copy)]
pub struct PytestProcessor;

#[async_trait]
impl JobProcessor for PytestProcessor {
    async fn process(&self, job: &SharedJob) {
        let (id, code) = job.update(|j| {
            j.mark_running();
            (j.id, j.code.clone())
        });
        info!(job = %id, "starting pytest run");

        match run_pytest(&code).await {
            Ok(report) => {
                info!(
                    job = %id,
                    passed = report.passed,
                    failed = report.failed,
                    "pytest run complete"
                );
                job.update(|j| j.complete(AnalysisReport::Test(report)));
            }
            Err(err) => {
                error!(job = %id, error = %err, "pytest run failed");
                job.update(|j| j.fail(err.to_string()));
            }
        }
    }
}

async fn run_pytest(code: &str) -> Result<TestReport> {
    let source = write_source_file(code)?;
    let args: Vec<OsString> = vec![
        source.path().as_os_str().to_os_string(),
        "--tb=short".into(),
    ];

    let output = AnalyzerInvocation::new(PYTEST).run(&args).await?;
    debug!(exit = ?output.exit_code, "pytest finished");

    // pytest splits its chatter across both streams; the summary line can
    // end up on either, so parse them together.
    let combined = format!("{}\n{}", output.stdout, output.stderr);
    Ok(parse_pytest_output(&combined))
}

/// Extract pass/fail counts from pytest's textual output.
///
/// Prefers the `=== … in X.YZs ===` summary line, then falls back to
/// scanning the whole output. A missing summary is data, not a fault:
/// the parse diagnostic travels in the report's `error` field and the
/// job still completes.
fn parse_pytest_output(output: &str) -> TestReport {
    let mut report = TestReport::default();

    if let Some(summary) = SUMMARY_RE
        .captures(output)
        .and_then(|captures| captures.get(1))
    {
        let summary = summary.as_str();
        let passed = capture_count(&PASSED_RE, summary);
        let failed = capture_count(&FAILED_RE, summary);
        report.passed = passed.unwrap_or(0);
        report.failed = failed.unwrap_or(0);
        if passed.is_none() && failed.is_none() {
            report.error = Some("Summary found, but no pass/failed counts.".to_owned());
        }
    } else {
        let passed = capture_count(&PASSED_RE, output);
        let failed = capture_count(&FAILED_RE, output);
        if passed.is_none() && failed.is_none() {
            report.error = Some("Unable to parse pytest output summary.".to_owned());
        } else {
            report.passed = passed.unwrap_or(0);
            report.failed = failed.unwrap_or(0);
        }
    }

    report
}

fn capture_count(pattern: &Regex, haystack: &str) -> Option<u32> {
    pattern
        .captures(haystack)
        .and_then(|captures| captures.get(1))
        .and_then(|count| count.as_str().parse().ok())
}
