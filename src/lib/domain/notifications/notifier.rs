//! Notifier module

use async_trait::async_trait;

use super::Recipient;

/// Sends verification notifications to users.
///
/// Delivery is best effort: implementations report failures through the log and
/// never to the caller, so a failed email cannot fail the operation that
/// triggered it.
#[async_trait]
pub trait Notifier: Clone + Send + Sync + 'static {
    /// Sends the email a user receives after registering, carrying the code that
    /// activates their account.
    async fn send_registration_verification(&self, recipient: &Recipient);

    /// Sends the email a user receives after requesting a password reset,
    /// carrying the code that confirms the request.
    async fn send_password_reset_verification(&self, recipient: &Recipient);
}
