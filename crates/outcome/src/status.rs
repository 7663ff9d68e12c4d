//! Closed classification of outcomes and its numeric code table.
//!
//! Codes follow HTTP status semantics so outcomes survive layers that only
//! carry a number. The `match` arms in [`Status::code`] and
//! [`Status::from_code`] are the single source of truth for the mapping.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::UnknownStatusCode;

/// Classification of an [`crate::Outcome`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    /// The operation succeeded.
    Ok,
    /// Generic failure described by a list of messages.
    Error,
    /// One or more field-level validation findings.
    Invalid,
    /// The requested resource does not exist.
    NotFound,
    /// The caller is authenticated but lacks permission.
    Forbidden,
    /// The caller is not authenticated.
    Unauthorized,
    /// The input is malformed.
    BadRequest,
}

impl Status {
    /// Every declared status, in declaration order.
    pub const ALL: [Self; 7] = [
        Self::Ok,
        Self::Error,
        Self::Invalid,
        Self::NotFound,
        Self::Forbidden,
        Self::Unauthorized,
        Self::BadRequest,
    ];

    /// Stable numeric code for this status.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome::Status;
    ///
    /// assert_eq!(Status::NotFound.code(), 404);
    /// ```
    #[must_use]
    pub const fn code(self) -> u16 {
        match self {
            Self::Ok => 200,
            Self::BadRequest => 400,
            Self::Unauthorized => 401,
            Self::Forbidden => 403,
            Self::NotFound => 404,
            Self::Invalid => 422,
            Self::Error => 500,
        }
    }

    /// Resolve a numeric code back to its status.
    ///
    /// # Errors
    ///
    /// Returns [`UnknownStatusCode`] when `code` is not in the table.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome::Status;
    ///
    /// assert_eq!(Status::from_code(403), Ok(Status::Forbidden));
    /// assert!(Status::from_code(418).is_err());
    /// ```
    pub fn from_code(code: u16) -> Result<Self, UnknownStatusCode> {
        match code {
            200 => Ok(Self::Ok),
            400 => Ok(Self::BadRequest),
            401 => Ok(Self::Unauthorized),
            403 => Ok(Self::Forbidden),
            404 => Ok(Self::NotFound),
            422 => Ok(Self::Invalid),
            500 => Ok(Self::Error),
            _ => {
                debug!(code, "rejected unknown outcome status code");
                Err(UnknownStatusCode { code })
            }
        }
    }

    /// `true` only for [`Status::Ok`].
    #[must_use]
    pub const fn is_success(self) -> bool {
        matches!(self, Self::Ok)
    }

    /// Canonical upper-case name, matching the serialized form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ok => "OK",
            Self::Error => "ERROR",
            Self::Invalid => "INVALID",
            Self::NotFound => "NOT_FOUND",
            Self::Forbidden => "FORBIDDEN",
            Self::Unauthorized => "UNAUTHORIZED",
            Self::BadRequest => "BAD_REQUEST",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<u16> for Status {
    type Error = UnknownStatusCode;

    fn try_from(value: u16) -> Result<Self, UnknownStatusCode> {
        Self::from_code(value)
    }
}

impl From<Status> for u16 {
    fn from(value: Status) -> Self {
        value.code()
    }
}
