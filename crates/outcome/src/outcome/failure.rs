//! Failure channels detached from an unsuccessful outcome.

use std::fmt;

use super::Outcome;
use crate::finding::Finding;
use crate::status::Status;

/// Everything an unsuccessful [`Outcome`] reports, without a payload type.
///
/// Produced by [`Outcome::into_result`] so failures can travel through `?`
/// between service functions with different payload types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    status: Status,
    messages: Vec<String>,
    findings: Vec<Finding>,
}

impl Failure {
    pub(super) const fn new(status: Status, messages: Vec<String>, findings: Vec<Finding>) -> Self {
        Self {
            status,
            messages,
            findings,
        }
    }

    /// Failure classification.
    #[must_use]
    pub const fn status(&self) -> Status {
        self.status
    }

    /// Generic error messages.
    #[must_use]
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Validation findings.
    #[must_use]
    pub fn findings(&self) -> &[Finding] {
        &self.findings
    }

    /// Re-wrap as an outcome for a caller with payload type `U`.
    pub fn into_outcome<U>(self) -> Outcome<U> {
        Outcome::from_parts(
            self.status,
            None,
            String::new(),
            self.messages,
            self.findings,
        )
    }
}

impl<T> From<Failure> for Outcome<T> {
    fn from(value: Failure) -> Self {
        value.into_outcome()
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.status)?;
        let details = self
            .messages
            .iter()
            .map(String::as_str)
            .chain(self.findings.iter().filter_map(Finding::message));
        for (index, detail) in details.enumerate() {
            let separator = if index == 0 { ": " } else { "; " };
            write!(f, "{separator}{detail}")?;
        }
        Ok(())
    }
}

impl std::error::Error for Failure {}
