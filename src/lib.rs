//! Typed Rust client for the SmartPings messaging and verification HTTP API.
//!
//! The crate is split into a domain layer of request/response types, a
//! transport layer for the JSON wire format, and a small client layer that
//! authenticates, sends, and classifies every call.
//!
//! ```rust,no_run
//! use smartpings::{ClientConfig, SendSms, SmartpingsClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), smartpings::SmartpingsError> {
//!     let client = SmartpingsClient::new(ClientConfig::new("client-id", "secret-id"));
//!     let request = SendSms::new("hello", "+15551234567")?;
//!     let _resp = client.send_sms(request).await?;
//!
//!     let status = client.get_contact_verification_status("+15551234567").await?;
//!     println!("verified: {}", status.verified);
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod config;
pub mod domain;
mod transport;

pub use client::{
    ErrorLogger, HttpRequest, HttpResponse, HttpTransport, LogContext, ReqwestTransport,
    SmartpingsClient, SmartpingsClientBuilder, SmartpingsError, TracingLogger,
};
pub use config::{ClientConfig, ConfigError, DEFAULT_API_URL};
pub use domain::{
    ApiResponse, Channel, Recipients, SendSms, ValidationError, VerificationState,
    VerificationStatus, VerifyContact,
};
