//! Verification notifications module.

mod composer;
mod errors;
mod kind;
mod mailer;
mod message;
mod notifier;
mod recipient;
mod service;

pub use composer::compose;
pub use errors::MailerError;
pub use kind::{NotificationCopy, NotificationKind};
pub use mailer::Mailer;
pub use message::OutboundMessage;
pub use notifier::Notifier;
pub use recipient::Recipient;
pub use service::NotificationServiceImpl;
