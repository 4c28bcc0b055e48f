//! Mailer module

use async_trait::async_trait;

#[cfg(test)]
use mockall::mock;

use super::{MailerError, OutboundMessage};

/// Delivers rendered messages to an email provider
#[async_trait]
pub trait Mailer: Clone + Send + Sync + 'static {
    /// Send an email
    ///
    /// # Arguments
    /// * `message` - The rendered [`OutboundMessage`] to deliver.
    ///
    /// # Returns
    /// [`Ok`] once the provider has accepted the message, or an [`Err`] containing a
    /// [`MailerError`] describing why it was not accepted.
    async fn send_email(&self, message: &OutboundMessage) -> Result<(), MailerError>;
}

#[cfg(test)]
mock! {
    pub Mailer {}

    impl Clone for Mailer {
        fn clone(&self) -> Self;
    }

    #[async_trait]
    impl Mailer for Mailer {
        async fn send_email(&self, message: &OutboundMessage) -> Result<(), MailerError>;
    }
}
