//! MCP Code Auditor server binary.
//!
//! Wires the analyzer processors into the job engine and serves the MCP
//! tool surface over stdio. Logs go to stderr (stdout belongs to the
//! transport) and, when the log directory is writable, to a file as well.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use mca_application::{JobService, ProcessorRegistry};
use mca_domain::JobKind;
use mca_providers::{MypyProcessor, PylintProcessor, PytestProcessor};
use mca_server::McaServer;
use rmcp::ServiceExt;
use rmcp::transport::stdio;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

/// MCP Code Auditor - asynchronous Python code analysis over MCP
#[derive(Parser)]
#[command(name = "mca")]
#[command(about = "MCP Code Auditor - asynchronous Python code analysis over MCP")]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Cli {
    /// Enable debug logging
    #[arg(long)]
    debug: bool,

    /// Directory for persistent log files; file logging is skipped when
    /// the directory cannot be created
    #[arg(long, default_value = "logs")]
    log_dir: PathBuf,
}

/// Install the tracing subscriber: stderr always, a log file when the
/// directory is writable. Returns the appender guard that must stay
/// alive for the process lifetime.
fn init_tracing(debug: bool, log_dir: &Path) -> Option<WorkerGuard> {
    let default_filter = if debug { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let mut file_logging_error = None;
    let file_parts = match std::fs::create_dir_all(log_dir) {
        Ok(()) => {
            let appender = tracing_appender::rolling::never(log_dir, "mca.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            Some((writer, guard))
        }
        Err(err) => {
            file_logging_error = Some(err);
            None
        }
    };
    let (file_writer, guard) = match file_parts {
        Some((writer, guard)) => (Some(writer), Some(guard)),
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(file_writer.map(|writer| fmt::layer().with_writer(writer).with_ansi(false)))
        .init();

    if let Some(err) = file_logging_error {
        warn!(dir = %log_dir.display(), error = %err, "could not create log directory, file logging disabled");
    }
    if debug {
        tracing::debug!("debug logging enabled");
    }

    guard
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let _log_guard = init_tracing(cli.debug, &cli.log_dir);

    let mut registry = ProcessorRegistry::new();
    registry.register(JobKind::Lint, Arc::new(PylintProcessor));
    registry.register(JobKind::StaticAnalysis, Arc::new(MypyProcessor));
    registry.register(JobKind::Test, Arc::new(PytestProcessor));

    let jobs = Arc::new(JobService::new(registry));
    info!("job manager initialized");

    let service = McaServer::new(jobs)
        .serve(stdio())
        .await
        .context("failed to start the MCP stdio transport")?;
    info!("serving MCP tools over stdio");

    service
        .waiting()
        .await
        .context("MCP service terminated abnormally")?;
    info!("shutting down");
    Ok(())
}
