//! Vanity import redirection subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming Request (scheme, method, host, path, query)
//!     → dispatch.rs (ordered guard chain, first handled response wins)
//!     → descriptor.rs (package/remote pair + go-import template)
//! ```
//!
//! # Design Decisions
//! - Guards are a fixed, closed set evaluated in order; no dynamic dispatch
//! - Every request terminates in exactly one of the four responses
//! - The naming constants below are compile-time fixed, not configuration

/// Public import domain this service fronts.
pub const IMPORT_DOMAIN: &str = "go.lattice.dev";

/// Repository prefix that actually hosts the packages.
pub const REMOTE_REPO_BASE: &str = "https://github.com/lattice-systems";

/// Documentation viewer that browser traffic is sent to.
pub const DOCVIEWER_BASE: &str = "https://pkg.go.dev";

pub mod descriptor;
pub mod dispatch;

pub use descriptor::PackageDescriptor;
pub use dispatch::redirect_handler;
