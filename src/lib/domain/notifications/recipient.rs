//! Notification recipient

/// The user a notification is addressed to.
///
/// A snapshot taken by the caller for a single send; the dispatcher never
/// keeps hold of it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Recipient {
    /// The address the notification is delivered to
    pub email: String,

    /// The name used in the greeting line
    pub display_name: String,

    /// The code the user submits back to confirm the action
    pub verification_code: String,
}

impl Recipient {
    /// Creates a new recipient
    pub fn new(
        email: impl Into<String>,
        display_name: impl Into<String>,
        verification_code: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            display_name: display_name.into(),
            verification_code: verification_code.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_recipient() {
        let recipient = Recipient::new("a@b.com", "Ana", "482913");

        assert_eq!(recipient.email, "a@b.com");
        assert_eq!(recipient.display_name, "Ana");
        assert_eq!(recipient.verification_code, "482913");
    }
}
