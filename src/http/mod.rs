//! HTTP serving shell.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (axum setup, middleware, wildcard route)
//!     → redirect::dispatch (guard chain decides the terminal response)
//! ```

pub mod server;

pub use server::HttpServer;
