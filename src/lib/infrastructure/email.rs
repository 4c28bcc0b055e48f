//! Email delivery adapters

pub mod http;

pub use http::{HttpMailer, HttpMailerConfig};
