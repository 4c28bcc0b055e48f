//! Outbound email message

/// A fully rendered email, built fresh for every send
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutboundMessage {
    /// The sender of the email, or `None` to use the mailer's configured sender
    pub from: Option<String>,

    /// The recipient of the email
    pub to: String,

    /// The subject of the email
    pub subject: String,

    /// The HTML body of the email
    pub html_body: String,
}
