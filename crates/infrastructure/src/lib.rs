//! Apiprobe Infrastructure - Adapters and implementations
//!
//! This crate provides the reqwest-backed `HttpClient`, base URL
//! configuration and the JSON run report.

pub mod adapters;
pub mod config;
pub mod report;

pub use adapters::ReqwestHttpClient;
pub use config::{BaseUrlSource, ConfigError, EnvFile, ProbeConfig};
pub use report::{ReportError, RunReport};
