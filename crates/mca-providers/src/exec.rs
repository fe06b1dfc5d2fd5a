//! Temp-file scoping and analyzer subprocess execution.

use std::ffi::OsStr;
use std::process::Stdio;
use std::time::Duration;

use mca_domain::constants::{
    ANALYZER_BACKOFF_BASE_SECS, ANALYZER_MAX_ATTEMPTS, ANALYZER_TIMEOUT_SECS,
};
use mca_domain::error::{Error, Result};
use tempfile::NamedTempFile;
use tokio::process::Command;
use tracing::warn;

/// Captured output of a finished analyzer invocation.
#[derive(Debug)]
pub(crate) struct AnalyzerOutput {
    /// Captured stdout, lossily decoded
    pub stdout: String,
    /// Captured stderr, lossily decoded
    pub stderr: String,
    /// Process exit code; `None` when terminated by a signal
    pub exit_code: Option<i32>,
}

/// Write the submitted code to a scoped `.py` temp file.
///
/// The file is removed when the returned handle drops, which covers
/// every exit path of the calling processor: success, failure, timeout
/// and panic unwinding alike.
pub(crate) fn write_source_file(code: &str) -> Result<NamedTempFile> {
    let file = tempfile::Builder::new()
        .prefix("mca-")
        .suffix(".py")
        .tempfile()?;
    std::fs::write(file.path(), code)?;
    Ok(file)
}

/// One analyzer invocation: a binary, a wall-clock deadline and an
/// attempt budget for transient spawn/timeout failures.
pub(crate) struct AnalyzerInvocation {
    tool: &'static str,
    timeout: Duration,
    max_attempts: u32,
}

impl AnalyzerInvocation {
    /// Single-shot invocation with the default 30 second deadline.
    pub(crate) fn new(tool: &'static str) -> Self {
        Self {
            tool,
            timeout: Duration::from_secs(ANALYZER_TIMEOUT_SECS),
            max_attempts: 1,
        }
    }

    /// Enable retries: up to three attempts with 2^n-second backoff.
    ///
    /// Retries are per-invocation only; the owning job's state machine
    /// stays single-shot.
    pub(crate) fn with_retries(mut self) -> Self {
        self.max_attempts = ANALYZER_MAX_ATTEMPTS;
        self
    }

    #[cfg(test)]
    fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Run the analyzer, capturing stdout and stderr.
    ///
    /// The subprocess is killed when the deadline elapses. Spawn and
    /// timeout failures are retried within the attempt budget; the final
    /// failure is classified as [`Error::ToolSpawn`] or
    /// [`Error::ToolTimeout`].
    ///
    /// # Errors
    ///
    /// See above; a non-zero exit is not an error at this layer, callers
    /// interpret exit codes per analyzer.
    pub(crate) async fn run<S: AsRef<OsStr>>(&self, args: &[S]) -> Result<AnalyzerOutput> {
        let mut attempt = 1;
        loop {
            let mut command = Command::new(self.tool);
            command
                .args(args)
                .stdin(Stdio::null())
                .stdout(Stdio::piped())
                .stderr(Stdio::piped())
                .kill_on_drop(true);

            let failure = match tokio::time::timeout(self.timeout, command.output()).await {
                Ok(Ok(output)) => {
                    return Ok(AnalyzerOutput {
                        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
                        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
                        exit_code: output.status.code(),
                    });
                }
                Ok(Err(err)) => Error::tool_spawn(self.tool, err),
                Err(_) => Error::tool_timeout(self.tool, self.timeout.as_secs()),
            };

            if attempt >= self.max_attempts {
                return Err(failure);
            }
            let backoff = Duration::from_secs(ANALYZER_BACKOFF_BASE_SECS.pow(attempt));
            warn!(
                tool = self.tool,
                attempt,
                error = %failure,
                "analyzer invocation failed, retrying in {}s",
                backoff.as_secs()
            );
            tokio::time::sleep(backoff).await;
            attempt += 1;
        }
    }
}
