//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! redirector.toml (optional)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → RedirectorConfig (validated, immutable)
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded
//! - All fields have defaults, so a minimal config (or none at all) works
//! - Only the serving shell is configurable; the import domain, remote
//!   repository and docviewer constants are compile-time fixed

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, load_or_default, ConfigError, DEFAULT_CONFIG_PATH};
pub use schema::{ListenerConfig, RedirectorConfig, TimeoutConfig};
