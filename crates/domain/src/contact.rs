//! Contact form payload.

/// Body of a contact form submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    /// Sender name.
    pub name: String,
    /// Sender email address.
    pub email: String,
    /// Free-form message.
    pub message: String,
}

impl ContactSubmission {
    /// Creates a submission.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    /// JSON payload `{name, email, message}`.
    #[must_use]
    pub fn to_payload(&self) -> serde_json::Value {
        serde_json::json!({
            "name": self.name,
            "email": self.email,
            "message": self.message,
        })
    }
}
