use crate::config::MailSettings;
use crate::models::OutboundEmail;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur when talking to the email provider
#[derive(Debug, Error)]
pub enum MailError {
    #[error("Mail provider API key is not configured")]
    MissingApiKey,

    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("API returned {status}: {body}")]
    ApiError { status: StatusCode, body: String },

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}

/// Result of an accepted send
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SentEmail {
    #[serde(default)]
    pub id: Option<String>,
}

/// Transactional email API client (Resend-compatible)
///
/// One attempt per send; the caller decides what a failure means.
pub struct MailClient {
    base_url: String,
    api_key: String,
    client: Client,
}

impl MailClient {
    pub fn new(settings: &MailSettings) -> Result<Self, MailError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()?;

        Ok(Self {
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            api_key: settings.api_key.trim().to_string(),
            client,
        })
    }

    pub fn is_configured(&self) -> bool {
        !self.api_key.is_empty()
    }

    /// Send a single email
    pub async fn send(&self, email: &OutboundEmail) -> Result<SentEmail, MailError> {
        if !self.is_configured() {
            return Err(MailError::MissingApiKey);
        }

        let url = format!("{}/emails", self.base_url);

        tracing::debug!("Sending email via {} to {:?}", url, email.to);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(email)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_else(|_| "Unable to read body".to_string());
            return Err(MailError::ApiError { status, body });
        }

        let body = response.text().await?;
        if body.trim().is_empty() {
            return Ok(SentEmail::default());
        }

        serde_json::from_str(&body)
            .map_err(|e| MailError::InvalidResponse(format!("Failed to parse send response: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(api_key: &str) -> MailSettings {
        MailSettings {
            api_key: api_key.to_string(),
            base_url: "https://mail.test/".to_string(),
            ..MailSettings::default()
        }
    }

    fn email() -> OutboundEmail {
        OutboundEmail {
            from: "Form <form@s.co>".to_string(),
            to: vec!["hello@s.co".to_string()],
            subject: "Contact Form: Jane".to_string(),
            reply_to: "jane@x.com".to_string(),
            text: "From: jane@x.com\n\nHi".to_string(),
            html: "<p>Hi</p>".to_string(),
        }
    }

    #[test]
    fn test_mail_client_creation() {
        let client = MailClient::new(&settings("re_test")).unwrap();
        assert_eq!(client.base_url, "https://mail.test");
        assert!(client.is_configured());
    }

    #[test]
    fn test_missing_key_makes_no_request() {
        let client = MailClient::new(&settings("")).unwrap();
        let result = tokio_test::block_on(client.send(&email()));
        assert!(matches!(result, Err(MailError::MissingApiKey)));
    }

    #[tokio::test]
    async fn test_send_returns_provider_id() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/emails")
            .match_header("authorization", "Bearer re_test")
            .match_body(mockito::Matcher::PartialJson(serde_json::json!({
                "to": ["hello@s.co"],
                "reply_to": "jane@x.com",
                "subject": "Contact Form: Jane",
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"id":"email_123"}"#)
            .create_async()
            .await;

        let client = MailClient::new(&MailSettings {
            api_key: "re_test".to_string(),
            base_url: server.url(),
            ..MailSettings::default()
        })
        .unwrap();

        let sent = client.send(&email()).await.unwrap();
        assert_eq!(sent.id.as_deref(), Some("email_123"));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_provider_error_status() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/emails")
            .with_status(422)
            .with_body(r#"{"name":"validation_error"}"#)
            .create_async()
            .await;

        let client = MailClient::new(&MailSettings {
            api_key: "re_test".to_string(),
            base_url: server.url(),
            ..MailSettings::default()
        })
        .unwrap();

        match client.send(&email()).await {
            Err(MailError::ApiError { status, body }) => {
                assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
                assert!(body.contains("validation_error"));
            }
            other => panic!("expected ApiError, got {:?}", other),
        }
    }
}
