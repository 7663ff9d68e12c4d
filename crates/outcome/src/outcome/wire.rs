//! Serialized shape of an outcome.
//!
//! Serialization borrows the outcome and adds the derived `succeeded` flag.
//! Deserialization reads into `RawOutcomeDto`, settles what an explicit
//! `null` payload means for the status, then re-checks the channel
//! invariant on `OutcomeDto` before an [`Outcome`] is built, so a payload
//! can never arrive alongside a failure status.

use std::fmt;
use std::marker::PhantomData;

use serde::de::{self, IntoDeserializer, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::debug;

use super::{Outcome, check_channels};
use crate::error::OutcomeValidationError;
use crate::finding::Finding;
use crate::status::Status;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct OutcomeView<'a, T> {
    status: Status,
    succeeded: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    payload: Option<&'a T>,
    success_message: &'a str,
    messages: &'a [String],
    findings: &'a [Finding],
}

/// The `payload` member as it appeared on the wire.
enum PayloadField<T> {
    Missing,
    Null,
    Present(T),
}

impl<T> Default for PayloadField<T> {
    fn default() -> Self {
        Self::Missing
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for PayloadField<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_option(PayloadVisitor(PhantomData))
    }
}

struct PayloadVisitor<T>(PhantomData<T>);

impl<'de, T: Deserialize<'de>> Visitor<'de> for PayloadVisitor<T> {
    type Value = PayloadField<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("an outcome payload or null")
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(PayloadField::Null)
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(PayloadField::Null)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Self::Value, D::Error> {
        T::deserialize(deserializer).map(PayloadField::Present)
    }
}

impl<T> PayloadField<T> {
    /// `null` is absent on a failure status; on `OK` it is the payload
    /// itself, for payload types that read from `null`.
    fn resolve<'de, E: de::Error>(self, status: Status) -> Result<Option<T>, E>
    where
        T: Deserialize<'de>,
    {
        match self {
            Self::Missing => Ok(None),
            Self::Present(value) => Ok(Some(value)),
            Self::Null if status.is_success() => T::deserialize(().into_deserializer()).map(Some),
            Self::Null => Ok(None),
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
struct RawOutcomeDto<T> {
    status: Status,
    succeeded: Option<bool>,
    #[serde(default)]
    payload: PayloadField<T>,
    #[serde(default)]
    success_message: String,
    #[serde(default)]
    messages: Vec<String>,
    #[serde(default)]
    findings: Vec<Finding>,
}

struct OutcomeDto<T> {
    status: Status,
    succeeded: Option<bool>,
    payload: Option<T>,
    success_message: String,
    messages: Vec<String>,
    findings: Vec<Finding>,
}

impl<T> TryFrom<OutcomeDto<T>> for Outcome<T> {
    type Error = OutcomeValidationError;

    fn try_from(value: OutcomeDto<T>) -> Result<Self, Self::Error> {
        let OutcomeDto {
            status,
            succeeded,
            payload,
            success_message,
            messages,
            findings,
        } = value;

        if succeeded.is_some_and(|flag| flag != status.is_success()) {
            return Err(OutcomeValidationError::SucceededMismatch);
        }
        check_channels(
            status,
            payload.is_some(),
            !messages.is_empty(),
            !findings.is_empty(),
        )?;
        if !status.is_success() && !success_message.is_empty() {
            return Err(OutcomeValidationError::SuccessMessageOnFailure);
        }
        Ok(Self::from_parts(
            status,
            payload,
            success_message,
            messages,
            findings,
        ))
    }
}

impl<T: Serialize> Serialize for Outcome<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        OutcomeView {
            status: self.status,
            succeeded: self.succeeded(),
            payload: self.payload.as_ref(),
            success_message: &self.success_message,
            messages: &self.messages,
            findings: &self.findings,
        }
        .serialize(serializer)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Outcome<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let RawOutcomeDto {
            status,
            succeeded,
            payload,
            success_message,
            messages,
            findings,
        } = RawOutcomeDto::<T>::deserialize(deserializer)?;
        let dto = OutcomeDto {
            status,
            succeeded,
            payload: payload.resolve::<D::Error>(status)?,
            success_message,
            messages,
            findings,
        };
        Self::try_from(dto).map_err(|err| {
            debug!(%status, error = %err, "rejected inconsistent serialized outcome");
            de::Error::custom(err)
        })
    }
}
