//! Field-level validation findings and the adapter seam for external
//! validation engines.

use std::fmt;

use serde::{Deserialize, Serialize};

/// How serious a [`Finding`] is.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Severity {
    /// The finding blocks the operation.
    #[default]
    Error,
    /// The finding should be surfaced but does not block.
    Warning,
    /// Informational only.
    Info,
}

impl Severity {
    /// Name used in serialized findings.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Error => "Error",
            Self::Warning => "Warning",
            Self::Info => "Info",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One field- or rule-level validation failure.
///
/// A finding without a message is malformed by convention; see
/// [`Finding::is_well_formed`]. Identifier, code, and severity are metadata
/// and never influence the status of the outcome that carries them.
///
/// # Examples
///
/// ```
/// use outcome::{Finding, Severity};
///
/// let finding = Finding::new("email", "must contain '@'").with_code("invalid_email");
/// assert_eq!(finding.identifier(), Some("email"));
/// assert_eq!(finding.severity(), Some(Severity::Error));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Finding {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    identifier: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    severity: Option<Severity>,
}

impl Finding {
    /// Create a finding for `identifier` with [`Severity::Error`].
    #[must_use]
    pub fn new(identifier: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            identifier: Some(identifier.into()),
            message: Some(message.into()),
            code: None,
            severity: Some(Severity::Error),
        }
    }

    /// Map an externally produced validation failure one-to-one.
    ///
    /// Severity is left unset; external engines do not report one.
    #[must_use]
    pub fn from_failure<F: ValidationFailure + ?Sized>(failure: &F) -> Self {
        Self {
            identifier: Some(failure.field().to_owned()),
            message: Some(failure.message().to_owned()),
            code: Some(failure.code().to_owned()),
            severity: None,
        }
    }

    /// Attach a machine-readable cause.
    #[must_use]
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    /// Override the severity.
    #[must_use]
    pub const fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = Some(severity);
        self
    }

    /// Offending field or subject.
    #[must_use]
    pub fn identifier(&self) -> Option<&str> {
        self.identifier.as_deref()
    }

    /// Human-readable description.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Machine-readable cause.
    #[must_use]
    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    /// Severity, unset for findings adapted from external engines.
    #[must_use]
    pub const fn severity(&self) -> Option<Severity> {
        self.severity
    }

    /// `true` when a message is present.
    #[must_use]
    pub const fn is_well_formed(&self) -> bool {
        self.message.is_some()
    }
}

/// Structural view of a validation error produced by an external engine.
///
/// Implement this for the engine's error type at the call site, then pass a
/// sequence of them to [`crate::Outcome::invalid_from`].
///
/// # Examples
///
/// ```
/// use outcome::{Outcome, Status, ValidationFailure};
///
/// struct RuleViolation {
///     rule: &'static str,
///     text: String,
///     property: &'static str,
/// }
///
/// impl ValidationFailure for RuleViolation {
///     fn code(&self) -> &str { self.rule }
///     fn message(&self) -> &str { &self.text }
///     fn field(&self) -> &str { self.property }
/// }
///
/// let violations = vec![RuleViolation {
///     rule: "not_empty",
///     text: "name is required".to_owned(),
///     property: "name",
/// }];
/// let outcome: Outcome<()> = Outcome::invalid_from(&violations);
/// assert_eq!(outcome.status(), Status::Invalid);
/// assert_eq!(outcome.findings()[0].code(), Some("not_empty"));
/// ```
pub trait ValidationFailure {
    /// Machine-readable cause.
    fn code(&self) -> &str;
    /// Human-readable description.
    fn message(&self) -> &str;
    /// Offending field.
    fn field(&self) -> &str;
}

impl<F: ValidationFailure + ?Sized> ValidationFailure for &F {
    fn code(&self) -> &str {
        (**self).code()
    }

    fn message(&self) -> &str {
        (**self).message()
    }

    fn field(&self) -> &str {
        (**self).field()
    }
}

impl<F: ValidationFailure + ?Sized> From<&F> for Finding {
    fn from(value: &F) -> Self {
        Self::from_failure(value)
    }
}
