//! Transport layer: JSON wire-format details (encoding request bodies, decoding responses).

mod send_sms;
mod verification_status;
mod verify;

pub use send_sms::encode_send_sms_body;
pub use verification_status::decode_verification_status_response;
pub use verify::encode_verify_contact_body;
