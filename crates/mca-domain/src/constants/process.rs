//! Analyzer subprocess constants.

/// Wall-clock deadline for a single analyzer invocation, in seconds.
pub const ANALYZER_TIMEOUT_SECS: u64 = 30;

/// Maximum invocation attempts for analyzers that retry transient
/// spawn/timeout failures.
pub const ANALYZER_MAX_ATTEMPTS: u32 = 3;

/// Base of the exponential backoff between retry attempts, in seconds.
///
/// Attempt `n` (1-indexed) is preceded by a `BACKOFF_BASE_SECS^n` second
/// sleep, matching a 2s/4s ladder for the default three attempts.
pub const ANALYZER_BACKOFF_BASE_SECS: u64 = 2;
