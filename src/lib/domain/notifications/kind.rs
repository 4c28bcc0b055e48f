//! Notification kinds and their copy

use std::fmt;

/// Subject and body copy for one kind of notification
#[derive(Debug, PartialEq, Eq)]
pub struct NotificationCopy {
    /// The subject line
    pub subject: &'static str,

    /// The opening sentence after the greeting
    pub intro: &'static str,

    /// Tells the user what to do with the verification code
    pub instruction: &'static str,
}

const REGISTRATION_VERIFICATION: NotificationCopy = NotificationCopy {
    subject: "Welcome! Please verify your email",
    intro: "Welcome to MyWallet! We're excited to have you join our community.",
    instruction: "To activate your account, please use the verification code below:",
};

const PASSWORD_RESET_VERIFICATION: NotificationCopy = NotificationCopy {
    subject: "Reset your password",
    intro: "We received a request to reset your MyWallet password.",
    instruction: "To continue, please use the verification code below to confirm your request:",
};

/// The kind of verification notification being sent
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NotificationKind {
    /// Sent after a user registers, to verify their email address
    RegistrationVerification,

    /// Sent when a user asks to reset their password
    PasswordResetVerification,
}

impl NotificationKind {
    /// Every notification kind
    pub const ALL: [NotificationKind; 2] = [
        Self::RegistrationVerification,
        Self::PasswordResetVerification,
    ];

    /// Gets the copy used to render this kind of notification
    pub fn copy(&self) -> &'static NotificationCopy {
        match self {
            Self::RegistrationVerification => &REGISTRATION_VERIFICATION,
            Self::PasswordResetVerification => &PASSWORD_RESET_VERIFICATION,
        }
    }

    /// Gets the subject line of this kind of notification
    pub fn subject(&self) -> &'static str {
        self.copy().subject
    }
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RegistrationVerification => write!(f, "registration_verification"),
            Self::PasswordResetVerification => write!(f, "password_reset_verification"),
        }
    }
}
