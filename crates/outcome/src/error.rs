//! Error types for the outcome crate.
//!
//! Only two things can go wrong: a numeric status code that does not name a
//! failure [`crate::Status`], and a serialized outcome whose fields disagree
//! with its status. Business failures are never errors here; they are
//! carried as data inside [`crate::Outcome`].

use thiserror::Error;

/// A numeric code did not correspond to any declared status.
///
/// # Examples
///
/// ```
/// use outcome::{Status, UnknownStatusCode};
///
/// assert_eq!(Status::from_code(9999), Err(UnknownStatusCode { code: 9999 }));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[error("unknown outcome status code: {code}")]
pub struct UnknownStatusCode {
    /// The rejected code.
    pub code: u16,
}

/// Reasons a numeric code cannot resolve to a failure status.
///
/// # Examples
///
/// ```
/// use outcome::{Outcome, StatusCodeError, UnknownStatusCode};
///
/// let unknown = Outcome::<()>::errors_with_code(["?"], 9999);
/// assert_eq!(unknown, Err(StatusCodeError::Unknown(UnknownStatusCode { code: 9999 })));
///
/// let success = Outcome::<()>::errors_with_code(["?"], 200);
/// assert_eq!(success, Err(StatusCodeError::SuccessCode { code: 200 }));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StatusCodeError {
    /// The code is not in the status table.
    #[error(transparent)]
    Unknown(#[from] UnknownStatusCode),

    /// The code maps to `OK`, which has no message channel and needs a
    /// payload.
    #[error("status code {code} is a success code and cannot describe a failure")]
    SuccessCode {
        /// The rejected code.
        code: u16,
    },
}

/// Invariant violations detected while deserializing an outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum OutcomeValidationError {
    /// A payload was supplied alongside a failure status.
    #[error("payload is only allowed on a successful outcome")]
    PayloadWithoutSuccess,

    /// A successful outcome carried no payload.
    #[error("successful outcome is missing its payload")]
    MissingPayload,

    /// A successful outcome carried error messages or findings.
    #[error("successful outcome must not carry messages or findings")]
    FailureChannelOnSuccess,

    /// Findings were supplied for a status other than `INVALID`.
    #[error("findings are only allowed on an invalid outcome")]
    FindingsWithoutInvalid,

    /// A success message was supplied alongside a failure status.
    #[error("success message is only allowed on a successful outcome")]
    SuccessMessageOnFailure,

    /// The serialized `succeeded` flag contradicted the status.
    #[error("succeeded flag does not match status")]
    SucceededMismatch,
}
