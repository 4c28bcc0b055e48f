//! Notification service

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, error};

use super::{compose, Mailer, NotificationKind, Notifier, Recipient};

/// Notification service implementation
#[derive(Debug, Clone)]
pub struct NotificationServiceImpl<M>
where
    M: Mailer,
{
    mailer: Arc<M>,
}

impl<M> NotificationServiceImpl<M>
where
    M: Mailer,
{
    /// Creates a new notification service.
    pub fn new(mailer: Arc<M>) -> Self {
        Self { mailer }
    }

    async fn dispatch(&self, kind: NotificationKind, recipient: &Recipient) {
        let message = compose(kind, recipient);

        // Failures stop here: the caller's operation must not depend on delivery.
        match self.mailer.send_email(&message).await {
            Ok(()) => debug!(%kind, recipient = %recipient.email, "notification email sent"),
            Err(err) => error!(
                %kind,
                recipient = %recipient.email,
                error = %err,
                "failed to send notification email"
            ),
        }
    }
}

#[async_trait]
impl<M> Notifier for NotificationServiceImpl<M>
where
    M: Mailer,
{
    async fn send_registration_verification(&self, recipient: &Recipient) {
        self.dispatch(NotificationKind::RegistrationVerification, recipient)
            .await
    }

    async fn send_password_reset_verification(&self, recipient: &Recipient) {
        self.dispatch(NotificationKind::PasswordResetVerification, recipient)
            .await
    }
}
