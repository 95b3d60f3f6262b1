use crate::models::ContactRequest;

/// How long the "Message sent!" panel stays up before the form returns
pub const SUCCESS_RESET_MS: u64 = 5000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

/// Toast shown when a submission fails
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub description: String,
}

impl Notification {
    pub fn send_failed(fallback_email: &str) -> Self {
        Self {
            title: "Failed to send message".to_string(),
            description: format!("Please try again or email us directly at {}", fallback_email),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormStatus {
    Editing,
    Submitting,
    Submitted,
    Failed(Notification),
}

/// Client-side contact form state
///
/// The submit control is disabled while a request is in flight; that is the
/// only guard against double submission.
#[derive(Debug, Clone)]
pub struct ContactForm {
    name: String,
    email: String,
    message: String,
    status: FormStatus,
    fallback_email: String,
}

impl ContactForm {
    pub fn new(fallback_email: impl Into<String>) -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            message: String::new(),
            status: FormStatus::Editing,
            fallback_email: fallback_email.into(),
        }
    }

    pub fn status(&self) -> &FormStatus {
        &self.status
    }

    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    #[inline]
    pub fn is_disabled(&self) -> bool {
        self.status == FormStatus::Submitting
    }

    /// Label for the submit button
    pub fn submit_label(&self) -> &'static str {
        if self.is_disabled() { "Sending..." } else { "Send message" }
    }

    /// Returns false if the inputs are disabled
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) -> bool {
        if self.is_disabled() {
            return false;
        }
        let value = value.into();
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Message => self.message = value,
        }
        true
    }

    /// Start a submission and hand back the payload to POST
    ///
    /// `None` while another submission is already in flight.
    pub fn begin_submit(&mut self) -> Option<ContactRequest> {
        if self.is_disabled() {
            return None;
        }
        self.status = FormStatus::Submitting;
        Some(ContactRequest::new(&self.name, &self.email, &self.message))
    }

    /// Record the outcome of the request started by [`begin_submit`](Self::begin_submit)
    pub fn finish_submit<E: std::fmt::Display>(&mut self, result: Result<(), E>) {
        if self.status != FormStatus::Submitting {
            return;
        }
        match result {
            Ok(()) => {
                self.name.clear();
                self.email.clear();
                self.message.clear();
                self.status = FormStatus::Submitted;
            }
            Err(e) => {
                tracing::warn!("Form submission error: {}", e);
                self.status = FormStatus::Failed(Notification::send_failed(&self.fallback_email));
            }
        }
    }

    /// Called [`SUCCESS_RESET_MS`] after a successful send
    pub fn reset_success(&mut self) {
        if self.status == FormStatus::Submitted {
            self.status = FormStatus::Editing;
        }
    }

    /// Dismiss a failure toast and keep editing
    pub fn dismiss_error(&mut self) {
        if matches!(self.status, FormStatus::Failed(_)) {
            self.status = FormStatus::Editing;
        }
    }
}
