//! Test runner implementation.
//!
//! Executes single HTTP checks against the service under test and records
//! one [`TestResult`] per check.

use std::sync::Arc;

use apiprobe_domain::{
    BaseUrl, HttpMethod, Outcome, RequestSpec, ResponseBody, ResponseSpec, Summary, TestResult,
};

use crate::ports::HttpClient;

const RULE_WIDTH: usize = 50;

/// Runs named HTTP checks and keeps their results.
///
/// `tests_passed <= tests_run == results().len()` holds at all times; only
/// [`TestRunner::execute`] mutates the counters and the log.
pub struct TestRunner<C: HttpClient> {
    client: Arc<C>,
    base_url: BaseUrl,
    tests_run: usize,
    tests_passed: usize,
    results: Vec<TestResult>,
}

impl<C: HttpClient> TestRunner<C> {
    /// Creates a runner targeting `base_url`.
    pub const fn new(base_url: BaseUrl, client: Arc<C>) -> Self {
        Self {
            client,
            base_url,
            tests_run: 0,
            tests_passed: 0,
            results: Vec::new(),
        }
    }

    /// Base URL of the service under test.
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Number of tests executed so far.
    pub const fn tests_run(&self) -> usize {
        self.tests_run
    }

    /// Number of tests that passed so far.
    pub const fn tests_passed(&self) -> usize {
        self.tests_passed
    }

    /// Recorded results in execution order.
    pub fn results(&self) -> &[TestResult] {
        &self.results
    }

    /// Snapshot of the counters.
    pub const fn summary(&self) -> Summary {
        Summary {
            tests_run: self.tests_run,
            tests_passed: self.tests_passed,
        }
    }

    /// Sends one request to `{base_url}/{endpoint}` and checks its status.
    ///
    /// The payload is sent as the JSON body for POST and PUT and ignored for
    /// GET. Transport failures are recorded as [`Outcome::Error`] and never
    /// returned. Exactly one result is appended per call.
    ///
    /// Returns whether the test passed, and the parsed-or-raw body when it did.
    pub async fn execute(
        &mut self,
        name: &str,
        method: HttpMethod,
        endpoint: &str,
        expected_status: u16,
        payload: Option<serde_json::Value>,
    ) -> (bool, Option<ResponseBody>) {
        let request = RequestSpec::new(method, self.base_url.join(endpoint)).with_payload(payload);

        self.tests_run += 1;
        println!("\n🔍 Testing {name}...");
        tracing::debug!(%method, url = %request.url, expected_status, "dispatching request");

        let outcome = match self.client.execute(&request).await {
            Ok(response) => classify(expected_status, response),
            Err(e) => {
                tracing::warn!(test = name, error = %e, "request failed");
                Outcome::Error {
                    error: e.to_string(),
                }
            }
        };
        print_outcome(expected_status, &outcome);

        let body = match &outcome {
            Outcome::Passed { response } => {
                self.tests_passed += 1;
                Some(response.clone())
            }
            Outcome::Failed { .. } | Outcome::Error { .. } => None,
        };
        tracing::debug!(test = name, status = %outcome.status(), "test recorded");
        self.results.push(TestResult::new(name, outcome));

        (body.is_some(), body)
    }

    /// Prints every result in order followed by the pass ratio.
    ///
    /// Returns true iff every executed test passed.
    pub fn print_summary(&self) -> bool {
        let rule = "=".repeat(RULE_WIDTH);
        println!("\n{rule}");
        println!(
            "📊 TEST SUMMARY: {}/{} tests passed",
            self.tests_passed, self.tests_run
        );
        println!("{rule}");

        for result in &self.results {
            let status = result.status();
            println!("{} {}: {status}", status.icon(), result.name());
        }

        println!("{rule}");
        self.summary().all_passed()
    }
}

fn classify(expected_status: u16, response: ResponseSpec) -> Outcome {
    if response.status == expected_status {
        Outcome::Passed {
            response: ResponseBody::parse(&response.body),
        }
    } else {
        Outcome::Failed {
            expected_status,
            actual_status: response.status,
            response: response.body,
        }
    }
}

fn print_outcome(expected_status: u16, outcome: &Outcome) {
    match outcome {
        Outcome::Passed { response } => {
            println!("✅ Passed - Status: {expected_status}");
            println!("Response: {response}");
        }
        Outcome::Failed {
            expected_status,
            actual_status,
            response,
        } => {
            println!("❌ Failed - Expected {expected_status}, got {actual_status}");
            println!("Response: {response}");
        }
        Outcome::Error { error } => println!("❌ Failed - Error: {error}"),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::fake::ScriptedHttpClient;
    use crate::ports::HttpClientError;
    use apiprobe_domain::TestStatus;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn runner(client: &Arc<ScriptedHttpClient>) -> TestRunner<ScriptedHttpClient> {
        TestRunner::new(
            BaseUrl::parse("http://service.test").unwrap(),
            Arc::clone(client),
        )
    }

    fn assert_invariant(runner: &TestRunner<ScriptedHttpClient>) {
        assert!(runner.tests_passed() <= runner.tests_run());
        assert_eq!(runner.tests_run(), runner.results().len());
    }

    #[tokio::test]
    async fn test_matching_status_passes_with_parsed_body() {
        let client = Arc::new(ScriptedHttpClient::new([Ok(ResponseSpec::new(
            200,
            r#"{"message": "Hello World"}"#,
        ))]));
        let mut runner = runner(&client);

        let (success, body) = runner
            .execute("Root API Endpoint", HttpMethod::Get, "api", 200, None)
            .await;

        assert!(success);
        assert_eq!(
            body,
            Some(ResponseBody::Structured(json!({"message": "Hello World"})))
        );
        assert_eq!(runner.summary(), Summary { tests_run: 1, tests_passed: 1 });
        assert_eq!(runner.results()[0].status(), TestStatus::Passed);
        assert_invariant(&runner);
    }

    #[tokio::test]
    async fn test_non_json_body_recorded_raw() {
        let client = Arc::new(ScriptedHttpClient::new([Ok(ResponseSpec::new(200, "pong"))]));
        let mut runner = runner(&client);

        let (success, body) = runner
            .execute("Ping", HttpMethod::Get, "ping", 200, None)
            .await;

        assert!(success);
        assert_eq!(body, Some(ResponseBody::Raw("pong".to_string())));
        assert_eq!(
            runner.results()[0].outcome(),
            &Outcome::Passed {
                response: ResponseBody::Raw("pong".to_string())
            }
        );
    }

    #[tokio::test]
    async fn test_status_mismatch_fails() {
        let client = Arc::new(ScriptedHttpClient::new([Ok(ResponseSpec::new(
            404,
            r#"{"detail": "Not Found"}"#,
        ))]));
        let mut runner = runner(&client);

        let (success, body) = runner
            .execute("Missing", HttpMethod::Get, "api/missing", 200, None)
            .await;

        assert!(!success);
        assert_eq!(body, None);
        assert_eq!(runner.summary(), Summary { tests_run: 1, tests_passed: 0 });
        assert_eq!(
            runner.results()[0].outcome(),
            &Outcome::Failed {
                expected_status: 200,
                actual_status: 404,
                response: r#"{"detail": "Not Found"}"#.to_string(),
            }
        );
        assert_invariant(&runner);
    }

    #[tokio::test]
    async fn test_non_200_expectation_can_pass() {
        let client = Arc::new(ScriptedHttpClient::new([Ok(ResponseSpec::new(201, "{}"))]));
        let mut runner = runner(&client);

        let (success, _) = runner
            .execute("Create", HttpMethod::Post, "api/items", 201, Some(json!({})))
            .await;

        assert!(success);
        assert_eq!(runner.tests_passed(), 1);
    }

    #[tokio::test]
    async fn test_transport_failure_records_error() {
        let client = Arc::new(ScriptedHttpClient::new([Err(
            HttpClientError::ConnectionRefused {
                host: "service.test".to_string(),
                port: 80,
            },
        )]));
        let mut runner = runner(&client);

        let (success, body) = runner
            .execute("Root API Endpoint", HttpMethod::Get, "api", 200, None)
            .await;

        assert!(!success);
        assert_eq!(body, None);
        assert_eq!(
            runner.results()[0].outcome(),
            &Outcome::Error {
                error: "connection refused by service.test:80".to_string()
            }
        );
        assert_eq!(runner.summary(), Summary { tests_run: 1, tests_passed: 0 });
        assert_invariant(&runner);
    }

    #[tokio::test]
    async fn test_request_targets_joined_url_and_drops_get_payload() {
        let client = Arc::new(ScriptedHttpClient::new([
            Ok(ResponseSpec::new(200, "[]")),
            Ok(ResponseSpec::new(200, "{}")),
        ]));
        let mut runner = runner(&client);

        runner
            .execute("List", HttpMethod::Get, "api/contact", 200, Some(json!({"x": 1})))
            .await;
        runner
            .execute("Update", HttpMethod::Put, "api/contact", 200, Some(json!({"x": 1})))
            .await;

        let requests = client.requests();
        assert_eq!(requests[0].url, "http://service.test/api/contact");
        assert_eq!(requests[0].body, None);
        assert_eq!(requests[1].method, HttpMethod::Put);
        assert_eq!(requests[1].body, Some(json!({"x": 1})));
    }

    #[tokio::test]
    async fn test_counters_track_mixed_outcomes() {
        let client = Arc::new(ScriptedHttpClient::new([
            Ok(ResponseSpec::new(200, "{}")),
            Ok(ResponseSpec::new(500, "boom")),
            Err(HttpClientError::Timeout),
            Ok(ResponseSpec::new(200, "{}")),
        ]));
        let mut runner = runner(&client);

        for expected_run in 1..=4 {
            runner.execute("step", HttpMethod::Get, "api", 200, None).await;
            assert_eq!(runner.tests_run(), expected_run);
            assert_invariant(&runner);
        }

        let statuses: Vec<_> = runner.results().iter().map(TestResult::status).collect();
        assert_eq!(
            statuses,
            vec![
                TestStatus::Passed,
                TestStatus::Failed,
                TestStatus::Error,
                TestStatus::Passed
            ]
        );
        assert_eq!(runner.tests_passed(), 2);
        assert!(!runner.print_summary());
    }

    #[tokio::test]
    async fn test_print_summary_true_when_all_passed() {
        let client = Arc::new(ScriptedHttpClient::new([Ok(ResponseSpec::new(200, "{}"))]));
        let mut runner = runner(&client);
        assert!(runner.print_summary());

        runner.execute("Root", HttpMethod::Get, "api", 200, None).await;
        assert!(runner.print_summary());
    }
}
