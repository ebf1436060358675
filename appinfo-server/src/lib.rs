//! appinfo-server: REST CRUD service for application metadata
//!
//! Tracks one record per application (deploy timestamps, SonarQube key,
//! quality grade, coverage) in a single PostgreSQL table and exposes it
//! under `/app`.

pub mod db;
pub mod http;
pub mod tracing_setup;

pub use http::{run_server, ApiError, ServerConfig};
