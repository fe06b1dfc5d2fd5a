//! # Server Layer
//!
//! The MCP tool surface over the job engine. Tool arguments live in
//! [`args`], response payloads in [`responses`], per-tool handlers in
//! [`handlers`] and the rmcp router in [`router`].
//!
//! The adapter is deliberately thin: it validates input at the string
//! boundary, delegates to the application layer's
//! [`JobService`](mca_application::JobService), and serializes job state
//! back out. Invalid input and unknown ids come back as structured error
//! payloads, never as protocol-level failures.

/// MCP tool argument shapes
pub mod args;
/// Per-tool request handlers
pub mod handlers;
/// Response payload shapes
pub mod responses;
/// The rmcp tool router
pub mod router;

pub use router::McaServer;
