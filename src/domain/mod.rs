//! Domain layer: request/response types and their invariants (no I/O).

mod request;
mod response;
mod validation;
mod value;

pub use request::{Recipients, SendSms, VerifyContact};
pub use response::{ApiResponse, VerificationState, VerificationStatus};
pub use validation::ValidationError;
pub use value::Channel;
