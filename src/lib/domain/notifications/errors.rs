//! Mailer errors

use thiserror::Error;

/// Errors that can occur while handing a message to the email provider
#[derive(Debug, Error)]
pub enum MailerError {
    /// The provider could not be reached
    #[error("could not reach the email provider: {0}")]
    Transport(String),

    /// The provider answered with a non-success status
    #[error("email provider responded with {status}: {body}")]
    Provider {
        /// The HTTP status code
        status: u16,

        /// The raw response body
        body: String,
    },

    /// The provider did not answer in time
    #[error("timed out waiting for the email provider")]
    Timeout,

    /// Unknown error
    #[error(transparent)]
    UnknownError(anyhow::Error),
}

impl From<anyhow::Error> for MailerError {
    fn from(err: anyhow::Error) -> Self {
        MailerError::UnknownError(err)
    }
}
