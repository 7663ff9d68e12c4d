//! Status-tagged outcome envelope for service-layer results.
//!
//! Service code returns an [`Outcome`] instead of raising errors across
//! layer boundaries. Each outcome carries exactly one [`Status`] and the
//! channel that status implies: a payload on success, findings for
//! validation failures, or plain messages for every other failure.
//!
//! # Overview
//!
//! - [`Status`] is a closed taxonomy with a stable numeric code per variant.
//! - [`Finding`] records one field-level validation failure.
//! - [`ValidationFailure`] adapts any validation engine's error type.
//! - [`Failure`] carries the failure channels through `?`.
//!
//! # Example
//!
//! ```
//! use outcome::{Finding, Outcome, Status};
//!
//! fn rename(name: &str) -> Outcome<String> {
//!     if name.trim().is_empty() {
//!         return Outcome::invalid([Finding::new("name", "must not be blank")]);
//!     }
//!     Outcome::success_with_message(name.to_owned(), "renamed")
//! }
//!
//! let ok = rename("Ada");
//! assert!(ok.succeeded());
//! assert_eq!(ok.payload().map(String::as_str), Some("Ada"));
//!
//! let rejected = rename("  ");
//! assert_eq!(rejected.status(), Status::Invalid);
//! assert_eq!(rejected.findings().len(), 1);
//! assert!(rejected.payload().is_none());
//! ```

mod error;
mod finding;
mod outcome;
mod status;

pub use error::{OutcomeValidationError, StatusCodeError, UnknownStatusCode};
pub use finding::{Finding, Severity, ValidationFailure};
pub use outcome::{Failure, Outcome};
pub use status::Status;
