use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::models::domain::ContactSubmission;

/// Contact form payload as posted by the browser
///
/// Absent, `null` and empty fields are all treated as missing.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct ContactRequest {
    #[validate(required, length(min = 1))]
    #[serde(default)]
    pub name: Option<String>,
    #[validate(required, length(min = 1))]
    #[serde(default)]
    pub email: Option<String>,
    #[validate(required, length(min = 1))]
    #[serde(default)]
    pub message: Option<String>,
}

impl ContactRequest {
    pub fn new(name: &str, email: &str, message: &str) -> Self {
        Self {
            name: Some(name.to_string()),
            email: Some(email.to_string()),
            message: Some(message.to_string()),
        }
    }

    /// Which fields were supplied, for logging without the content
    pub fn presence(&self) -> (bool, bool, bool) {
        fn present(field: &Option<String>) -> bool {
            field.as_deref().is_some_and(|v| !v.is_empty())
        }
        (present(&self.name), present(&self.email), present(&self.message))
    }

    /// Validate and convert into a submission, or `None` if a field is missing
    pub fn into_submission(self) -> Option<ContactSubmission> {
        if self.validate().is_err() {
            return None;
        }
        Some(ContactSubmission {
            name: self.name?,
            email: self.email?,
            message: self.message?,
        })
    }
}
