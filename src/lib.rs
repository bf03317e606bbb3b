//! Mock environment-info API server and the client view that renders it.
//!
//! The info service answers two read-only routes:
//!
//! ```text
//! GET /api/env     -> {"appName": ..., "version": ..., "environment": ...,
//!                      "serverTime": ..., "features": {...}, "config": {...}}
//! GET /api/health  -> {"status":"UP"}
//! ```
//!
//! The client view issues one `GET /api/env` per mount and settles in
//! either the success or the error state.
//!
//! # Modules
//!
//! - [`config`]: Configuration loading from environment
//! - [`error`]: Unified error types
//! - [`api`]: Handlers, routes, and payload types
//! - [`server`]: Service construction and socket binding
//! - [`client`]: Fetch lifecycle, sources, and rendering
//! - [`metrics`]: Prometheus metric names and recording
//! - [`utils`]: Utility functions

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod metrics;
pub mod server;
pub mod utils;

pub use config::Config;
pub use error::{AppError, FetchError, Result};
pub use server::{build_service, serve, start, ServerHandle};
