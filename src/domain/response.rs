use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;

use crate::domain::value::Channel;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Successful (2xx) SmartPings response.
///
/// The body is kept verbatim; use [`ApiResponse::json`] to decode it.
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    /// Decode the body as JSON into any deserializable type.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_str(&self.body)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerificationState {
    Pending,
    Verified,
    Expired,
    /// Any state this crate does not know about, preserved as sent.
    Other(String),
}

impl VerificationState {
    pub fn from_wire(value: &str) -> Self {
        match value {
            "pending" => Self::Pending,
            "verified" => Self::Verified,
            "expired" => Self::Expired,
            other => Self::Other(other.to_owned()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Pending => "pending",
            Self::Verified => "verified",
            Self::Expired => "expired",
            Self::Other(value) => value,
        }
    }
}

impl PartialEq<&str> for VerificationState {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Verification state of one contact, as reported by SmartPings.
pub struct VerificationStatus {
    pub identifier: String,
    pub contact_type: Channel,
    pub display_name: Option<String>,
    pub status: VerificationState,
    pub verified: bool,
    pub verified_at: Option<DateTime<Utc>>,
    pub expires_at: Option<DateTime<Utc>>,
}
