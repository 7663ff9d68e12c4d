//! The outcome envelope and its construction protocol.
//!
//! Outcomes are built only through the named factories below, which all
//! funnel into `Outcome::from_parts`. Fields are private so the status
//! decides the active channel for the whole lifetime of the value:
//!
//! - `OK` carries a payload and, optionally, a success message.
//! - `INVALID` carries findings (and messages when built from a code).
//! - Every other status carries zero or more messages.

mod failure;
mod wire;

use tracing::debug;

use crate::error::{OutcomeValidationError, StatusCodeError};
use crate::finding::{Finding, ValidationFailure};
use crate::status::Status;

pub use failure::Failure;

/// Result of a service-layer operation.
///
/// # Examples
///
/// ```
/// use outcome::{Outcome, Status};
///
/// let found = Outcome::success_with_message(42, "done");
/// assert!(found.succeeded());
/// assert_eq!(found.payload(), Some(&42));
/// assert_eq!(found.success_message(), "done");
///
/// let missing: Outcome<u32> = Outcome::not_found_with_message("no such walk");
/// assert_eq!(missing.status(), Status::NotFound);
/// assert_eq!(missing.messages(), ["no such walk"]);
/// assert!(missing.payload().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use = "an outcome may describe a failure that should be reported"]
pub struct Outcome<T> {
    status: Status,
    payload: Option<T>,
    success_message: String,
    messages: Vec<String>,
    findings: Vec<Finding>,
}

impl<T> Outcome<T> {
    fn from_parts(
        status: Status,
        payload: Option<T>,
        success_message: String,
        messages: Vec<String>,
        findings: Vec<Finding>,
    ) -> Self {
        debug_assert!(
            check_channels(
                status,
                payload.is_some(),
                !messages.is_empty(),
                !findings.is_empty()
            )
            .is_ok(),
            "factories must keep the active channel consistent with {status}"
        );
        Self {
            status,
            payload,
            success_message,
            messages,
            findings,
        }
    }

    fn failed(status: Status, messages: Vec<String>) -> Self {
        Self::from_parts(status, None, String::new(), messages, Vec::new())
    }

    /// Successful outcome carrying `value`.
    pub fn success(value: T) -> Self {
        Self::from_parts(Status::Ok, Some(value), String::new(), Vec::new(), Vec::new())
    }

    /// Successful outcome carrying `value` and a human-readable note.
    pub fn success_with_message(value: T, message: impl Into<String>) -> Self {
        Self::from_parts(
            Status::Ok,
            Some(value),
            message.into(),
            Vec::new(),
            Vec::new(),
        )
    }

    /// Generic failure with `messages`, kept in order and kept even when
    /// empty.
    pub fn errors<I, S>(messages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::failed(Status::Error, collect_messages(messages))
    }

    /// Failure whose status is resolved from a numeric code.
    ///
    /// Only failure statuses can be resolved; `OK` has no message channel.
    ///
    /// # Errors
    ///
    /// Returns [`StatusCodeError::Unknown`] when `code` is not in the status
    /// table and [`StatusCodeError::SuccessCode`] when it maps to `OK`. No
    /// outcome is constructed in either case.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome::{Outcome, Status, StatusCodeError, UnknownStatusCode};
    ///
    /// let outcome = Outcome::<()>::errors_with_code(["gone"], 404).expect("404 is mapped");
    /// assert_eq!(outcome.status(), Status::NotFound);
    ///
    /// let rejected = Outcome::<()>::errors_with_code(["?"], 9999);
    /// assert_eq!(rejected, Err(StatusCodeError::Unknown(UnknownStatusCode { code: 9999 })));
    /// ```
    pub fn errors_with_code<I, S>(messages: I, code: u16) -> Result<Self, StatusCodeError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let status = Status::from_code(code)?;
        if status.is_success() {
            debug!(code, "rejected success code for a failure outcome");
            return Err(StatusCodeError::SuccessCode { code });
        }
        Ok(Self::failed(status, collect_messages(messages)))
    }

    /// Generic failure with a single message.
    pub fn error(message: impl Into<String>) -> Self {
        Self::failed(Status::Error, vec![message.into()])
    }

    /// Validation failure carrying `findings` as given.
    pub fn invalid(findings: impl IntoIterator<Item = Finding>) -> Self {
        Self::from_parts(
            Status::Invalid,
            None,
            String::new(),
            Vec::new(),
            findings.into_iter().collect(),
        )
    }

    /// Validation failure adapted from an external engine's errors.
    ///
    /// Each record becomes one [`Finding`] with its severity unset. An empty
    /// sequence still yields an `INVALID` outcome.
    pub fn invalid_from<I>(failures: I) -> Self
    where
        I: IntoIterator,
        I::Item: ValidationFailure,
    {
        Self::invalid(
            failures
                .into_iter()
                .map(|failure| Finding::from_failure(&failure)),
        )
    }

    /// Malformed-input failure with a single message.
    ///
    /// Despite the name this resolves to [`Status::BadRequest`], not
    /// [`Status::Invalid`]; use [`Outcome::invalid`] for findings.
    pub fn invalid_message(message: impl Into<String>) -> Self {
        Self::failed(Status::BadRequest, vec![message.into()])
    }

    /// Missing resource, without messages.
    pub fn not_found() -> Self {
        Self::failed(Status::NotFound, Vec::new())
    }

    /// Missing resource with a single message.
    pub fn not_found_with_message(message: impl Into<String>) -> Self {
        Self::failed(Status::NotFound, vec![message.into()])
    }

    /// Missing resource with `messages`.
    pub fn not_found_with_messages<I, S>(messages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::failed(Status::NotFound, collect_messages(messages))
    }

    /// Permission denied, without messages.
    pub fn forbidden() -> Self {
        Self::failed(Status::Forbidden, Vec::new())
    }

    /// Permission denied with a single message.
    pub fn forbidden_with_message(message: impl Into<String>) -> Self {
        Self::failed(Status::Forbidden, vec![message.into()])
    }

    /// Caller is not authenticated.
    pub fn unauthorized() -> Self {
        Self::failed(Status::Unauthorized, Vec::new())
    }

    /// Malformed input, without messages.
    pub fn bad_request() -> Self {
        Self::failed(Status::BadRequest, Vec::new())
    }

    /// Classification of this outcome.
    #[must_use]
    pub const fn status(&self) -> Status {
        self.status
    }

    /// `true` exactly when the status is `OK`.
    #[must_use]
    pub const fn succeeded(&self) -> bool {
        self.status.is_success()
    }

    /// Payload of a successful outcome.
    #[must_use]
    pub const fn payload(&self) -> Option<&T> {
        self.payload.as_ref()
    }

    /// Note supplied on the success path; empty otherwise.
    #[must_use]
    pub fn success_message(&self) -> &str {
        &self.success_message
    }

    /// Generic error messages, in the order supplied.
    #[must_use]
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Validation findings, in the order supplied.
    #[must_use]
    pub fn findings(&self) -> &[Finding] {
        &self.findings
    }

    /// Consume the outcome, keeping only the payload.
    #[must_use]
    pub fn into_payload(self) -> Option<T> {
        self.payload
    }

    /// Convert into a standard [`Result`] so `?` can forward failures.
    ///
    /// # Errors
    ///
    /// Returns the [`Failure`] channels when the outcome did not succeed.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome::{Failure, Outcome, Status};
    ///
    /// fn load(id: u32) -> Outcome<String> {
    ///     if id == 7 {
    ///         Outcome::success("route".to_owned())
    ///     } else {
    ///         Outcome::not_found_with_message(format!("route {id} missing"))
    ///     }
    /// }
    ///
    /// fn name_length(id: u32) -> Result<usize, Failure> {
    ///     Ok(load(id).into_result()?.len())
    /// }
    ///
    /// assert_eq!(name_length(7), Ok(5));
    /// let failure = name_length(8).expect_err("route 8 is missing");
    /// assert_eq!(failure.status(), Status::NotFound);
    /// ```
    pub fn into_result(self) -> Result<T, Failure> {
        let Self {
            status,
            payload,
            messages,
            findings,
            ..
        } = self;
        payload.ok_or_else(|| Failure::new(status, messages, findings))
    }

    /// Transform the payload of a successful outcome.
    ///
    /// Failure outcomes keep their status, messages, and findings.
    pub fn map<U, F>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> U,
    {
        Outcome::from_parts(
            self.status,
            self.payload.map(f),
            self.success_message,
            self.messages,
            self.findings,
        )
    }
}

fn collect_messages<I, S>(messages: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    messages.into_iter().map(Into::into).collect()
}

/// Check that the populated channels agree with `status`.
fn check_channels(
    status: Status,
    has_payload: bool,
    has_messages: bool,
    has_findings: bool,
) -> Result<(), OutcomeValidationError> {
    if status.is_success() {
        if !has_payload {
            return Err(OutcomeValidationError::MissingPayload);
        }
        if has_messages || has_findings {
            return Err(OutcomeValidationError::FailureChannelOnSuccess);
        }
        return Ok(());
    }
    if has_payload {
        return Err(OutcomeValidationError::PayloadWithoutSuccess);
    }
    if has_findings && status != Status::Invalid {
        return Err(OutcomeValidationError::FindingsWithoutInvalid);
    }
    Ok(())
}
