//! pylint lint analysis.

use std::ffi::OsString;

use async_trait::async_trait;
use mca_domain::error::{Error, Result};
use mca_domain::{AnalysisReport, JobProcessor, LintCategory, LintMessage, LintReport, SharedJob};
use serde::Deserialize;
use tracing::{debug, error, info};

use crate::analyzers::source_line;
use crate::exec::{AnalyzerInvocation, write_source_file};

const PYLINT: &str = "pylint";

/// One message object from pylint's JSON reporter.
///
/// Only the fields this service surfaces are decoded; pylint emits more
/// (module, path, end positions) and serde ignores them.
#[derive(Debug, Deserialize)]
struct RawPylintMessage {
    #[serde(rename = "type", default)]
    kind: String,
    #[serde(default)]
    line: u32,
    #[serde(default)]
    column: u32,
    #[serde(default)]
    symbol: String,
    #[serde(rename = "message-id")]
    message_id: Option<String>,
    #[serde(default)]
    message: String,
}

/// Processor for lint jobs backed by the `pylint` binary.
#[derive(Debug, Default, Clone, Copy)]
pub struct PylintProcessor;

#[async_trait]
impl JobProcessor for PylintProcessor {
    async fn process(&self, job: &SharedJob) {
        let (id, code) = job.update(|j| {
            j.mark_running();
            (j.id, j.code.clone())
        });
        info!(job = %id, "starting pylint analysis");

        match run_pylint(&code).await {
            Ok(report) => {
                info!(
                    job = %id,
                    issues = report.summary.total_issues,
                    "pylint analysis complete"
                );
                job.update(|j| j.complete(AnalysisReport::Lint(report)));
            }
            Err(err) => {
                error!(job = %id, error = %err, "pylint analysis failed");
                job.update(|j| j.fail(err.to_string()));
            }
        }
    }
}

async fn run_pylint(code: &str) -> Result<LintReport> {
    let source = write_source_file(code)?;
    let args: Vec<OsString> = vec![
        "--output-format=json".into(),
        source.path().as_os_str().to_os_string(),
    ];

    // pylint exits non-zero whenever it finds issues, so the exit code
    // carries no failure signal here; the JSON on stdout is the contract.
    let output = AnalyzerInvocation::new(PYLINT).run(&args).await?;
    debug!(exit = ?output.exit_code, stderr = %output.stderr.trim(), "pylint finished");

    parse_pylint_report(&output.stdout, code)
}

/// Parse pylint's JSON report into the grouped lint report.
///
/// Empty output means a clean run. A report that is not valid JSON is a
/// parse failure for the whole job.
fn parse_pylint_report(output: &str, code: &str) -> Result<LintReport> {
    if output.trim().is_empty() {
        return Ok(LintReport::empty());
    }

    let raw: Vec<RawPylintMessage> = serde_json::from_str(output)
        .map_err(|err| Error::output_parse(PYLINT, err.to_string()))?;

    let messages = raw
        .into_iter()
        .map(|message| LintMessage {
            category: LintCategory::from_pylint_type(&message.kind),
            line: message.line,
            column: message.column,
            symbol: message.symbol,
            message_id: message.message_id,
            message: message.message,
            line_content: source_line(code, message.line),
        })
        .collect();

    Ok(LintReport::from_messages(messages))
}
