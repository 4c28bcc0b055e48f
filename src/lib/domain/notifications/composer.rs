//! Verification email composer

use askama::Template;

use super::{NotificationKind, OutboundMessage, Recipient};

/// Verification email layout.
///
/// Styles are inlined and the layout is a single fixed-width column so it
/// renders the same across email clients.
#[derive(Debug, Template)]
#[template(
    ext = "html",
    source = r##"<html>
  <body style="font-family: Arial, sans-serif; color: #333;">
    <div style="max-width: 600px; margin: auto; padding: 20px; border-radius: 10px; background-color: #fafafa; border: 1px solid #eee;">
      <h2 style="color: #2b6cb0;">MyWallet</h2>
      <p>Hello {{ display_name }},</p>
      <p>{{ intro|safe }}</p>
      <p>{{ instruction|safe }}</p>
      <div style="text-align: center; margin: 20px 0;">
        <p style="font-size: 20px; font-weight: bold; background-color: #2b6cb0; color: #fff; display: inline-block; padding: 10px 20px; border-radius: 6px;">{{ code }}</p>
      </div>
      <p>This code will expire in 15 minutes.</p>
      <p>If you did not request this, you can safely ignore this email.</p>
      <br>
      <p>Warm regards,</p>
      <p><strong>The MyWallet Team</strong><br>
      <a href="https://mywallet.example.com" style="color: #2b6cb0; text-decoration: none;">mywallet.example.com</a></p>
    </div>
  </body>
</html>"##
)]
struct VerificationEmailTemplate<'a> {
    display_name: &'a str,
    intro: &'static str,
    instruction: &'static str,
    code: &'a str,
}

/// Renders the email for a notification of the given kind.
///
/// The returned message has no sender; the mailer fills in its configured one.
/// Recipient values are HTML-escaped and are not otherwise validated.
pub fn compose(kind: NotificationKind, recipient: &Recipient) -> OutboundMessage {
    let copy = kind.copy();

    let template = VerificationEmailTemplate {
        display_name: &recipient.display_name,
        intro: copy.intro,
        instruction: copy.instruction,
        code: &recipient.verification_code,
    };

    OutboundMessage {
        from: None,
        to: recipient.email.clone(),
        subject: copy.subject.to_string(),
        html_body: template.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ana() -> Recipient {
        Recipient::new("a@b.com", "Ana", "482913")
    }

    #[test]
    fn test_compose_registration_verification() {
        let message = compose(NotificationKind::RegistrationVerification, &ana());

        assert_eq!(message.subject, "Welcome! Please verify your email");
        assert_eq!(message.to, "a@b.com");
        assert!(message.from.is_none());
        assert!(message.html_body.contains("Hello Ana,"));
        assert!(message.html_body.contains("482913"));
        assert!(message
            .html_body
            .contains("To activate your account, please use the verification code below:"));
    }

    #[test]
    fn test_compose_password_reset_verification() {
        let message = compose(NotificationKind::PasswordResetVerification, &ana());

        assert_eq!(message.subject, "Reset your password");
        assert!(message
            .html_body
            .contains("We received a request to reset your MyWallet password."));
        assert!(message
            .html_body
            .contains("please use the verification code below to confirm your request:"));
    }

    #[test]
    fn test_compose_substitutes_every_placeholder() {
        for kind in NotificationKind::ALL {
            let message = compose(kind, &ana());

            assert!(message.html_body.contains("Ana"));
            assert!(message.html_body.contains("482913"));
            assert!(!message.html_body.contains("{{"));
            assert!(!message.html_body.contains("}}"));
            assert!(!message.html_body.contains("{%"));
        }
    }

    #[test]
    fn test_compose_includes_fixed_notices() {
        for kind in NotificationKind::ALL {
            let message = compose(kind, &ana());

            assert!(message
                .html_body
                .contains("This code will expire in 15 minutes."));
            assert!(message.html_body.contains("The MyWallet Team"));
            assert!(message.html_body.contains("max-width: 600px"));
        }
    }

    #[test]
    fn test_intro_copy_is_not_escaped() {
        let message = compose(NotificationKind::RegistrationVerification, &ana());

        assert!(message.html_body.contains("We're excited"));
    }

    #[test]
    fn test_compose_escapes_recipient_values() {
        let recipient = Recipient::new("a@b.com", "<script>alert(1)</script>", "12&34");

        let message = compose(NotificationKind::RegistrationVerification, &recipient);

        assert!(!message.html_body.contains("<script>"));
        assert!(message.html_body.contains("&lt;script&gt;"));
        assert!(message.html_body.contains("12&amp;34"));
    }

    #[test]
    fn test_compose_with_empty_fields() {
        let recipient = Recipient::new("a@b.com", "", "");

        let message = compose(NotificationKind::PasswordResetVerification, &recipient);

        assert!(message.html_body.contains("Hello ,"));
        assert_eq!(message.to, "a@b.com");
    }

    #[test]
    fn test_compose_is_deterministic() {
        for kind in NotificationKind::ALL {
            assert_eq!(compose(kind, &ana()), compose(kind, &ana()));
        }
    }

    #[test]
    fn test_subjects_differ_between_kinds() {
        let registration = compose(NotificationKind::RegistrationVerification, &ana());
        let reset = compose(NotificationKind::PasswordResetVerification, &ana());

        assert_ne!(registration.subject, reset.subject);
    }
}
