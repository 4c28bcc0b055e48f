//! Domain types and services

pub mod notifications;
