//! JSON run report.

use std::io;
use std::path::Path;

use apiprobe_application::{HttpClient, TestRunner};
use apiprobe_domain::{BaseUrl, TestResult};
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

/// Error type for report writing.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    /// JSON serialization failed.
    #[error("JSON serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),

    /// UTF-8 encoding error.
    #[error("UTF-8 encoding error: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    /// IO error.
    #[error("failed to write report: {0}")]
    Io(#[from] io::Error),
}

/// Everything a run recorded, in a machine-readable form.
#[derive(Debug, Serialize)]
pub struct RunReport<'a> {
    /// Service under test.
    pub base_url: &'a BaseUrl,
    /// When the run started.
    pub started_at: DateTime<Utc>,
    /// Number of tests executed.
    pub tests_run: usize,
    /// Number of tests that passed.
    pub tests_passed: usize,
    /// Results in execution order.
    pub results: &'a [TestResult],
}

impl<'a> RunReport<'a> {
    /// Captures the current state of a runner.
    #[must_use]
    pub fn from_runner<C: HttpClient>(runner: &'a TestRunner<C>, started_at: DateTime<Utc>) -> Self {
        let summary = runner.summary();
        Self {
            base_url: runner.base_url(),
            started_at,
            tests_run: summary.tests_run,
            tests_passed: summary.tests_passed,
            results: runner.results(),
        }
    }

    /// Serializes the report with 2-space indentation and a trailing newline.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String, ReportError> {
        let mut buffer = Vec::new();
        let formatter = PrettyFormatter::with_indent(b"  ");
        let mut serializer = Serializer::with_formatter(&mut buffer, formatter);
        self.serialize(&mut serializer)?;

        let mut json = String::from_utf8(buffer)?;
        json.push('\n');
        Ok(json)
    }

    /// Writes the report to `path`, replacing any existing file.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails.
    pub async fn write_to(&self, path: &Path) -> Result<(), ReportError> {
        let json = self.to_json()?;
        tokio::fs::write(path, json).await?;
        tracing::info!(path = %path.display(), "report written");
        Ok(())
    }
}
