use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::domain::{Channel, VerificationState, VerificationStatus};

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("invalid JSON response: {0}")]
    Json(#[from] serde_json::Error),

    #[error("response has no `data` object")]
    MissingData,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
enum TransportChannel {
    Phone,
    Email,
}

impl From<TransportChannel> for Channel {
    fn from(value: TransportChannel) -> Self {
        match value {
            TransportChannel::Phone => Channel::Phone,
            TransportChannel::Email => Channel::Email,
        }
    }
}

// `success` and `statusCode` duplicate the HTTP status and are not read.
#[derive(Debug, Clone, Deserialize)]
struct VerificationStatusJsonResponse {
    #[serde(default)]
    data: Option<VerificationStatusJsonData>,
}

#[derive(Debug, Clone, Deserialize)]
struct VerificationStatusJsonData {
    identifier: String,
    contact_type: TransportChannel,
    #[serde(default)]
    name: Option<String>,
    status: String,
    verified: bool,
    #[serde(default)]
    verified_at: Option<DateTime<Utc>>,
    #[serde(default)]
    expires_at: Option<DateTime<Utc>>,
}

pub fn decode_verification_status_response(
    json: &str,
) -> Result<VerificationStatus, TransportError> {
    let parsed: VerificationStatusJsonResponse = serde_json::from_str(json)?;
    let data = parsed.data.ok_or(TransportError::MissingData)?;

    Ok(VerificationStatus {
        identifier: data.identifier,
        contact_type: data.contact_type.into(),
        display_name: data.name,
        status: VerificationState::from_wire(&data.status),
        verified: data.verified,
        verified_at: data.verified_at,
        expires_at: data.expires_at,
    })
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn decode_pending_email_status() {
        let json = r#"
        {
          "success": true,
          "statusCode": 200,
          "data": {
            "identifier": "test@example.com",
            "contact_type": "email",
            "name": "Test User",
            "status": "pending",
            "verified": false,
            "verified_at": null,
            "expires_at": "2024-01-01T12:00:00Z"
          }
        }
        "#;

        let status = decode_verification_status_response(json).unwrap();
        assert_eq!(status.identifier, "test@example.com");
        assert_eq!(status.contact_type, Channel::Email);
        assert_eq!(status.display_name.as_deref(), Some("Test User"));
        assert_eq!(status.status, VerificationState::Pending);
        assert!(!status.verified);
        assert_eq!(status.verified_at, None);
        assert_eq!(
            status.expires_at,
            Some(Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap())
        );
    }

    #[test]
    fn decode_verified_phone_status() {
        let json = r#"
        {
          "success": true,
          "statusCode": 200,
          "data": {
            "identifier": "+15551234567",
            "contact_type": "phone",
            "name": "John Doe",
            "status": "verified",
            "verified": true,
            "verified_at": "2024-01-01T10:00:00Z",
            "expires_at": "2024-01-01T12:00:00Z"
          }
        }
        "#;

        let status = decode_verification_status_response(json).unwrap();
        assert_eq!(status.contact_type, Channel::Phone);
        assert_eq!(status.status, VerificationState::Verified);
        assert!(status.verified);
        assert_eq!(
            status.verified_at,
            Some(Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).unwrap())
        );
    }

    #[test]
    fn decode_tolerates_missing_optional_fields_and_unknown_state() {
        let json = r#"
        {
          "data": {
            "identifier": "x@example.com",
            "contact_type": "email",
            "status": "blocked",
            "verified": false
          }
        }
        "#;

        let status = decode_verification_status_response(json).unwrap();
        assert_eq!(status.display_name, None);
        assert_eq!(status.status, VerificationState::Other("blocked".to_owned()));
        assert_eq!(status.expires_at, None);
    }

    #[test]
    fn decode_errors_without_data() {
        let err = decode_verification_status_response(r#"{"success": false}"#).unwrap_err();
        assert!(matches!(err, TransportError::MissingData));

        let err = decode_verification_status_response("{ not json }").unwrap_err();
        assert!(matches!(err, TransportError::Json(_)));
    }
}
