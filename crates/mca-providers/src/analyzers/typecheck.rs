//! mypy static type analysis.

use std::ffi::OsString;

use async_trait::async_trait;
use mca_domain::error::{Error, Result};
use mca_domain::{AnalysisReport, JobProcessor, SharedJob, TypeCheckIssue, TypeCheckReport};
use tracing::{debug, error, info, warn};

use crate::analyzers::source_line;
use crate::exec::{AnalyzerInvocation, write_source_file};

const MYPY: &str = "mypy";

/// Processor for static analysis jobs backed by the `mypy` binary.
#[derive(Debug, Default, Clone, Copy)]
pub struct MypyProcessor;

#[async_trait]
impl JobProcessor for MypyProcessor {
    async fn process(&self, job: &SharedJob) {
        let (id, code) = job.update(|j| {
            j.mark_running();
            (j.id, j.code.clone())
        });
        info!(job = %id, "starting mypy analysis");

        match run_mypy(&code).await {
            Ok(report) => {
                info!(
                    job = %id,
                    issues = report.summary.issue_count,
                    "mypy analysis complete"
                );
                job.update(|j| j.complete(AnalysisReport::StaticAnalysis(report)));
            }
            Err(err) => {
                error!(job = %id, error = %err, "mypy analysis failed");
                job.update(|j| j.fail(err.to_string()));
            }
        }
    }
}

async fn run_mypy(code: &str) -> Result<TypeCheckReport> {
    let source = write_source_file(code)?;
    let args: Vec<OsString> = vec![
        "--no-error-summary".into(),
        "--show-column-numbers".into(),
        "--show-error-codes".into(),
        "--no-pretty".into(),
        source.path().as_os_str().to_os_string(),
    ];

    // mypy exits non-zero when it finds type errors; that is a finding,
    // not a fault. Anything on stderr, however, is a tool failure.
    let output = AnalyzerInvocation::new(MYPY).with_retries().run(&args).await?;
    debug!(exit = ?output.exit_code, "mypy finished");

    let diagnostics = output.stderr.trim();
    if !diagnostics.is_empty() {
        return Err(Error::tool_crash(MYPY, diagnostics));
    }

    Ok(parse_mypy_output(&output.stdout, code))
}

/// Parse mypy's `path:line:column:message` lines.
///
/// Lines whose position fields do not parse as integers are skipped with
/// a warning rather than failing the job.
fn parse_mypy_output(output: &str, code: &str) -> TypeCheckReport {
    let mut issues = Vec::new();
    for raw_line in output.lines() {
        if raw_line.trim().is_empty() {
            continue;
        }
        let mut parts = raw_line.splitn(4, ':');
        let (Some(_path), Some(line), Some(column), Some(message)) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            warn!(line = raw_line, "skipping malformed mypy output line");
            continue;
        };
        let (Ok(line), Ok(column)) = (line.trim().parse::<u32>(), column.trim().parse::<u32>())
        else {
            warn!(line = raw_line, "skipping malformed mypy output line");
            continue;
        };

        let message = message.trim().to_owned();
        issues.push(TypeCheckIssue {
            line,
            column,
            error_code: extract_error_code(&message),
            line_content: source_line(code, line),
            message,
        });
    }
    TypeCheckReport::from_issues(issues)
}

/// Extract a trailing `[code]` bracket from a mypy message.
fn extract_error_code(message: &str) -> Option<String> {
    let trimmed = message.trim_end();
    let rest = trimmed.strip_suffix(']')?;
    let open = rest.rfind('[')?;
    let code = &rest[open + 1..];
    (!code.is_empty()).then(|| code.to_owned())
}
