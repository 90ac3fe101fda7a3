//! Test outcomes and results.
//!
//! Every executed check produces exactly one [`TestResult`]. Results are
//! immutable once created.

use std::fmt;

use serde::Serialize;

use crate::response::ResponseBody;

/// Classification of one executed test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TestStatus {
    /// Status code matched the expectation.
    Passed,
    /// Status code did not match the expectation.
    Failed,
    /// No response was obtained.
    Error,
}

impl TestStatus {
    /// Returns the status label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Passed => "PASSED",
            Self::Failed => "FAILED",
            Self::Error => "ERROR",
        }
    }

    /// Icon used in the printed summary.
    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Passed => "✅",
            Self::Failed | Self::Error => "❌",
        }
    }
}

impl fmt::Display for TestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What happened when a test ran.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "UPPERCASE")]
pub enum Outcome {
    /// Status matched; body parsed if possible.
    Passed {
        /// Parsed or raw response body.
        response: ResponseBody,
    },
    /// Status mismatch.
    Failed {
        /// Status the test expected.
        expected_status: u16,
        /// Status the service returned.
        actual_status: u16,
        /// Raw response body.
        response: String,
    },
    /// Transport-level failure.
    Error {
        /// Error description.
        error: String,
    },
}

impl Outcome {
    /// Returns the status classification of this outcome.
    #[must_use]
    pub const fn status(&self) -> TestStatus {
        match self {
            Self::Passed { .. } => TestStatus::Passed,
            Self::Failed { .. } => TestStatus::Failed,
            Self::Error { .. } => TestStatus::Error,
        }
    }
}

/// Record of one executed test.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TestResult {
    name: String,
    #[serde(flatten)]
    outcome: Outcome,
}

impl TestResult {
    /// Creates a result record.
    #[must_use]
    pub fn new(name: impl Into<String>, outcome: Outcome) -> Self {
        Self {
            name: name.into(),
            outcome,
        }
    }

    /// Test label.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Recorded outcome.
    #[must_use]
    pub const fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    /// Status classification.
    #[must_use]
    pub const fn status(&self) -> TestStatus {
        self.outcome.status()
    }
}

/// Aggregate counters of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    /// Number of tests executed.
    pub tests_run: usize,
    /// Number of tests that passed.
    pub tests_passed: usize,
}

impl Summary {
    /// Returns true when no executed test failed or errored.
    #[must_use]
    pub const fn all_passed(&self) -> bool {
        self.tests_passed == self.tests_run
    }
}
