//! HTTP email API mailer

use std::{fmt, time::Duration};

use anyhow::Result;
use async_trait::async_trait;
use clap::Parser;
use reqwest::{
    header::{HeaderMap, HeaderValue, CONTENT_TYPE},
    Client,
};
use serde::Serialize;
use tracing::debug;

use crate::domain::notifications::{Mailer, MailerError, OutboundMessage};

const SEND_EMAIL_PATH: &str = "/emails";

/// Email API configuration
#[derive(Clone, Parser)]
pub struct HttpMailerConfig {
    /// The base URL of the email API
    #[clap(
        long = "email-api-base-url",
        env = "EMAIL_API_BASE_URL",
        default_value = "https://api.resend.com"
    )]
    pub base_url: String,

    /// The email API key
    #[clap(long = "email-api-key", env = "EMAIL_API_KEY", hide_env_values = true)]
    pub api_key: String,

    /// The sender email address
    #[clap(long = "email-sender", env = "EMAIL_SENDER")]
    pub sender: String,

    /// Seconds to wait for the email API before giving up
    #[clap(long = "email-timeout-secs", env = "EMAIL_TIMEOUT_SECS", default_value = "10")]
    pub timeout_secs: u64,
}

impl fmt::Debug for HttpMailerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpMailerConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .field("sender", &self.sender)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

#[derive(Debug, Serialize)]
struct SendEmailRequest<'a> {
    from: &'a str,
    to: &'a str,
    subject: &'a str,
    html: &'a str,
}

/// Mailer that posts messages to a Resend-style JSON email API
#[derive(Debug, Clone)]
pub struct HttpMailer {
    client: Client,
    endpoint: String,
    config: HttpMailerConfig,
}

impl HttpMailer {
    /// Create a new HTTP mailer.
    ///
    /// The underlying client pools connections and is shared by every send.
    pub fn new(config: HttpMailerConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        let endpoint = format!(
            "{}{SEND_EMAIL_PATH}",
            config.base_url.trim_end_matches('/')
        );

        Ok(Self {
            client,
            endpoint,
            config,
        })
    }
}

#[async_trait]
impl Mailer for HttpMailer {
    async fn send_email(&self, message: &OutboundMessage) -> Result<(), MailerError> {
        let request = SendEmailRequest {
            from: message.from.as_deref().unwrap_or(&self.config.sender),
            to: &message.to,
            subject: &message.subject,
            html: &message.html_body,
        };

        debug!(endpoint = %self.endpoint, to = request.to, "posting email");

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.config.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(MailerError::Provider {
                status: status.as_u16(),
                body,
            });
        }

        Ok(())
    }
}

impl From<reqwest::Error> for MailerError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            MailerError::Timeout
        } else {
            MailerError::Transport(format!("{:#}", anyhow::Error::from(err)))
        }
    }
}
