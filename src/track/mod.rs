//! Customer.io tracking API client.
//!
//! This module provides:
//! - Account credentials ([`Credentials`])
//! - Client and per-request options ([`ClientConfig`], [`RequestOptions`])
//! - The API client with its four operations ([`TrackClient`])
//! - Response classification ([`classify`], [`ErrorDetail`])
//! - Payload construction and encoding ([`customer_payload`], [`event_payload`], [`encode_form`])
//! - Default values ([`defaults`])
//!
//! # Precedence
//!
//! Request options are merged in the following order (later wins):
//!
//! 1. **Client defaults** - [`ClientConfig::options`]
//! 2. **Per-call options** - the operation's own headers (e.g. `Content-Type`)
//! 3. **Credentials** - the `Authorization` header is always set last
//!
//! Payload fields follow the same rule: the explicit `email` argument
//! overwrites an `email` key in the attribute map.

mod classify;
mod client;
mod config;
mod credentials;
pub mod defaults;
mod error;
mod payload;

#[cfg(test)]
mod payload_tests;

pub use classify::{ErrorDetail, classify};
pub use client::TrackClient;
pub use config::{ClientConfig, RequestOptions};
pub use credentials::Credentials;
pub use error::TrackError;
pub use payload::{Attributes, customer_payload, encode_form, encode_json, event_payload};
