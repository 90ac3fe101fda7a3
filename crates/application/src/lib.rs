//! Apiprobe Application - Test runner and ports
//!
//! This crate defines the application layer with:
//! - The `HttpClient` port
//! - The `TestRunner` that executes and records checks
//! - The contact API suite

pub mod contact;
pub mod ports;
pub mod runner;

#[cfg(test)]
mod fake;

pub use contact::{CONTACT_ENDPOINT, ROOT_ENDPOINT, run_contact_suite, sample_submission};
pub use ports::{HttpClient, HttpClientError};
pub use runner::TestRunner;
