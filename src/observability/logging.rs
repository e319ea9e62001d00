//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the logging subsystem
//! - Honor `RUST_LOG` overrides, with a crate-level default directive

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber. Call once, before anything logs.
pub fn init(default_directive: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_directive.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
