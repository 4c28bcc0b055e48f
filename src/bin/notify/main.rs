#![warn(
    missing_debug_implementations,
    rust_2018_idioms,
    missing_docs,
    rustdoc::broken_intra_doc_links,
    rustdoc::missing_crate_level_docs
)]

//! Sends a single verification email

use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use notification_dispatch::{
    domain::notifications::{NotificationServiceImpl, Notifier, Recipient},
    infrastructure::email::{HttpMailer, HttpMailerConfig},
};
use tracing::info;

/// The kind of email to send
#[derive(Debug, Clone, Copy, ValueEnum)]
enum Kind {
    /// Account registration verification
    Registration,

    /// Password reset verification
    PasswordReset,
}

/// Command-line arguments / environment variables
#[derive(Debug, Parser)]
pub struct Args {
    /// The email API configuration
    #[clap(flatten)]
    pub mailer: HttpMailerConfig,

    /// The kind of email to send
    #[clap(long, value_enum)]
    kind: Kind,

    /// The recipient's email address
    #[clap(long)]
    to: String,

    /// The recipient's display name
    #[clap(long)]
    name: String,

    /// The verification code to include
    #[clap(long)]
    code: String,
}

#[mutants::skip]
#[tokio::main]
async fn main() -> Result<()> {
    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            eprintln!("Failed to load environment: {}", e);

            return Err(e.into());
        }
    }

    tracing_subscriber::fmt::init();

    let args = Args::parse();

    let notifier = NotificationServiceImpl::new(Arc::new(HttpMailer::new(args.mailer)?));
    let recipient = Recipient::new(args.to, args.name, args.code);

    info!(kind = ?args.kind, recipient = %recipient.email, "sending verification email");

    match args.kind {
        Kind::Registration => notifier.send_registration_verification(&recipient).await,
        Kind::PasswordReset => notifier.send_password_reset_verification(&recipient).await,
    }

    Ok(())
}
