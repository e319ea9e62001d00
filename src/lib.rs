//! Vanity import path redirector.
//!
//! Serves the `go.lattice.dev` package namespace. Package tooling asking with
//! `?go-get=1` receives an HTML document whose `go-import` meta tag points at
//! the backing repository under `github.com/lattice-systems`; everything else
//! is redirected to the documentation viewer.
//!
//! # Architecture Overview
//!
//! ```text
//! Client Request
//!     → http/server.rs (axum setup, middleware, wildcard route)
//!     → redirect/dispatch.rs (ordered guard chain, first handled wins)
//!         1. insecure scheme  → 301 to the https URL
//!         2. method != GET    → 405
//!         3. go-get != "1"    → 307 to the docviewer
//!         4. tool lookup      → 200 with the go-import meta tag
//! ```

pub mod config;
pub mod http;
pub mod observability;
pub mod redirect;

pub use config::RedirectorConfig;
pub use http::HttpServer;
