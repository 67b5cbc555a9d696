//! Adapter for the Mailjet v3 send API.
//!
//! Translates a generic [`email::Email`] into a single `POST /send` call and
//! classifies the provider's answer. Stateless: one call, one request, no
//! retries.

pub mod api;
pub mod client;
pub mod config;
pub mod email;
pub mod error;
pub mod request;

pub use client::{Client, Delivery};
pub use config::Config;
pub use error::Error;
