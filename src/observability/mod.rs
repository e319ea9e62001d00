//! Observability subsystem.
//!
//! # Design Decisions
//! - Structured logging via `tracing`; per-request events come from the
//!   dispatcher and tower-http's TraceLayer
//! - No metrics layer: the redirector is stateless and the access log is
//!   the whole story

pub mod logging;
