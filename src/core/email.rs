use std::borrow::Cow;
use crate::models::{ContactSubmission, OutboundEmail};

/// Build the notification email for a contact submission
///
/// The submitter becomes the reply-to so the studio can answer directly.
pub fn compose_contact_email(
    submission: &ContactSubmission,
    from: &str,
    to: &str,
) -> OutboundEmail {
    let name = escape_html(&submission.name);
    let email = escape_html(&submission.email);
    let message = escape_html(&submission.message);

    let html = format!(
        r#"<div style="font-family: monospace; line-height: 1.6;">
  <p><strong>From:</strong> {email}</p>
  <p><strong>Name:</strong> {name}</p>
  <hr style="border: none; border-top: 1px solid #ccc; margin: 20px 0;" />
  <p><strong>Message:</strong></p>
  <p style="white-space: pre-wrap;">{message}</p>
</div>"#
    );

    OutboundEmail {
        from: from.to_string(),
        to: vec![to.to_string()],
        subject: format!("Contact Form: {}", submission.name),
        reply_to: submission.email.clone(),
        text: format!("From: {}\n\n{}", submission.email, submission.message),
        html,
    }
}

/// Escape text for embedding in HTML element content or attributes
pub fn escape_html(input: &str) -> Cow<'_, str> {
    if !input.contains(|c: char| matches!(c, '&' | '<' | '>' | '"' | '\'')) {
        return Cow::Borrowed(input);
    }

    let mut escaped = String::with_capacity(input.len() + 16);
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}
