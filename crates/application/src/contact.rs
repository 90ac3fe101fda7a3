//! Contact API checks and the suite that sequences them.

use apiprobe_domain::{ContactSubmission, HttpMethod, ResponseBody};

use crate::ports::HttpClient;
use crate::runner::TestRunner;

/// Root API path.
pub const ROOT_ENDPOINT: &str = "api";
/// Contact submission and listing path.
pub const CONTACT_ENDPOINT: &str = "api/contact";

const EXPECTED_STATUS: u16 = 200;

impl<C: HttpClient> TestRunner<C> {
    /// GET the root API path, expecting 200.
    pub async fn check_root_endpoint(&mut self) -> (bool, Option<ResponseBody>) {
        self.execute(
            "Root API Endpoint",
            HttpMethod::Get,
            ROOT_ENDPOINT,
            EXPECTED_STATUS,
            None,
        )
        .await
    }

    /// POST a contact form `{name, email, message}`, expecting 200.
    pub async fn submit_contact_form(
        &mut self,
        name: &str,
        email: &str,
        message: &str,
    ) -> (bool, Option<ResponseBody>) {
        let submission = ContactSubmission::new(name, email, message);
        self.execute(
            "Submit Contact Form",
            HttpMethod::Post,
            CONTACT_ENDPOINT,
            EXPECTED_STATUS,
            Some(submission.to_payload()),
        )
        .await
    }

    /// GET the stored contact inquiries, expecting 200.
    pub async fn list_contact_inquiries(&mut self) -> (bool, Option<ResponseBody>) {
        self.execute(
            "Get Contact Inquiries",
            HttpMethod::Get,
            CONTACT_ENDPOINT,
            EXPECTED_STATUS,
            None,
        )
        .await
    }
}

/// Submission sent by [`run_contact_suite`].
#[must_use]
pub fn sample_submission() -> ContactSubmission {
    ContactSubmission::new("John Smith", "john@test.com", "I need help with my tablet")
}

/// Runs root check, submission and, only if the submission passed, the
/// listing. Prints the summary and returns true iff every executed test passed.
pub async fn run_contact_suite<C: HttpClient>(runner: &mut TestRunner<C>) -> bool {
    println!("Testing API at: {}", runner.base_url());

    runner.check_root_endpoint().await;

    let submission = sample_submission();
    let (submitted, _) = runner
        .submit_contact_form(&submission.name, &submission.email, &submission.message)
        .await;
    if submitted {
        runner.list_contact_inquiries().await;
    } else {
        tracing::info!("contact submission failed, skipping inquiry listing");
    }

    runner.print_summary()
}
