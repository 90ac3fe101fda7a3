//! Apiprobe Domain - Core types
//!
//! This crate defines the domain model for the apiprobe smoke-test harness.
//! All types here are pure Rust with no I/O dependencies.

pub mod contact;
pub mod error;
pub mod request;
pub mod response;
pub mod testing;

pub use contact::ContactSubmission;
pub use error::{DomainError, DomainResult};
pub use request::{BaseUrl, HttpMethod, RequestSpec};
pub use response::{ResponseBody, ResponseSpec};
pub use testing::{Outcome, Summary, TestResult, TestStatus};
