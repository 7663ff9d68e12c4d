//! Behavioural tests for outcome construction.
//!
//! These tests exercise the public factories against Gherkin scenarios
//! covering success, numeric status resolution, external validation
//! adaptation, and message-bearing failures.

#![expect(
    clippy::expect_used,
    reason = "test code uses expect for clear failure messages"
)]

use outcome::{Outcome, Status, StatusCodeError, UnknownStatusCode, ValidationFailure};
use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::{ScenarioState, given, scenario, then, when};

// ============================================================================
// Test fixtures
// ============================================================================

/// Validation error shaped like the output of a third-party engine.
#[derive(Debug, Clone)]
struct EngineError {
    field: String,
    code: String,
    message: String,
}

impl ValidationFailure for EngineError {
    fn code(&self) -> &str {
        &self.code
    }

    fn message(&self) -> &str {
        &self.message
    }

    fn field(&self) -> &str {
        &self.field
    }
}

/// Test world holding the scenario inputs and the constructed outcome.
#[derive(Default, ScenarioState)]
struct World {
    payload: Slot<u32>,
    messages: Slot<Vec<String>>,
    engine_errors: Slot<Vec<EngineError>>,
    outcome: Slot<Result<Outcome<u32>, StatusCodeError>>,
}

impl World {
    /// Extracts the successfully constructed outcome.
    fn outcome(&self) -> Outcome<u32> {
        self.outcome
            .get()
            .expect("outcome should be set")
            .expect("outcome construction should succeed")
    }
}

#[fixture]
fn world() -> World {
    World::default()
}

fn parse_status(name: &str) -> Status {
    Status::ALL
        .into_iter()
        .find(|status| status.as_str() == name)
        .expect("feature files use canonical status names")
}

// ============================================================================
// Given steps
// ============================================================================

#[given("a payload of {payload}")]
fn a_payload_of(world: &World, payload: u32) {
    world.payload.set(payload);
}

#[given("the error message \"{message}\"")]
fn the_error_message(world: &World, message: String) {
    world.messages.set(vec![message]);
}

#[given(
    "an external validation error on \"{field}\" with code \"{code}\" and message \"{message}\""
)]
fn an_external_validation_error(world: &World, field: String, code: String, message: String) {
    world.engine_errors.set(vec![EngineError {
        field,
        code,
        message,
    }]);
}

#[given("no external validation errors")]
fn no_external_validation_errors(world: &World) {
    world.engine_errors.set(Vec::new());
}

// ============================================================================
// When steps
// ============================================================================

#[when("the operation succeeds with note \"{note}\"")]
fn the_operation_succeeds_with_note(world: &World, note: String) {
    let payload = world.payload.get().expect("payload should be set");
    world
        .outcome
        .set(Ok(Outcome::success_with_message(payload, note)));
}

#[when("the operation fails with code {code}")]
fn the_operation_fails_with_code(world: &World, code: u16) {
    let messages = world.messages.get().expect("messages should be set");
    world
        .outcome
        .set(Outcome::errors_with_code(messages, code));
}

#[when("the outcome is built from the external errors")]
fn the_outcome_is_built_from_the_external_errors(world: &World) {
    let errors = world
        .engine_errors
        .get()
        .expect("external errors should be set");
    world.outcome.set(Ok(Outcome::invalid_from(&errors)));
}

#[when("access is forbidden with message \"{message}\"")]
fn access_is_forbidden_with_message(world: &World, message: String) {
    world
        .outcome
        .set(Ok(Outcome::forbidden_with_message(message)));
}

// ============================================================================
// Then steps
// ============================================================================

#[then("the outcome succeeded")]
fn the_outcome_succeeded(world: &World) {
    let outcome = world.outcome();
    assert!(outcome.succeeded());
    assert_eq!(outcome.status(), Status::Ok);
}

#[then("the payload is {payload}")]
fn the_payload_is(world: &World, payload: u32) {
    assert_eq!(world.outcome().payload(), Some(&payload));
}

#[then("no payload is present")]
fn no_payload_is_present(world: &World) {
    let outcome = world.outcome();
    assert!(outcome.payload().is_none());
    assert!(!outcome.succeeded());
}

#[then("the success message is \"{note}\"")]
fn the_success_message_is(world: &World, note: String) {
    assert_eq!(world.outcome().success_message(), note);
}

#[then("no messages are reported")]
fn no_messages_are_reported(world: &World) {
    let outcome = world.outcome();
    assert!(outcome.messages().is_empty());
    assert!(outcome.findings().is_empty());
}

#[then("the status is {status}")]
fn the_status_is(world: &World, status: String) {
    assert_eq!(world.outcome().status(), parse_status(&status));
}

#[then("the only message is \"{message}\"")]
fn the_only_message_is(world: &World, message: String) {
    assert_eq!(world.outcome().messages(), [message]);
}

#[then("construction fails with unknown status code {code}")]
fn construction_fails_with_unknown_status_code(world: &World, code: u16) {
    match world.outcome.get().expect("outcome result should be set") {
        Err(err) => assert_eq!(err, StatusCodeError::Unknown(UnknownStatusCode { code })),
        Ok(other) => panic!("Expected UnknownStatusCode, got: {other:?}"),
    }
}

#[then("construction fails because {code} is a success code")]
fn construction_fails_because_of_success_code(world: &World, code: u16) {
    match world.outcome.get().expect("outcome result should be set") {
        Err(err) => assert_eq!(err, StatusCodeError::SuccessCode { code }),
        Ok(other) => panic!("Expected SuccessCode, got: {other:?}"),
    }
}

#[then("the finding count is {count}")]
fn the_finding_count_is(world: &World, count: usize) {
    assert_eq!(world.outcome().findings().len(), count);
}

#[then("the finding for \"{field}\" has code \"{code}\" and message \"{message}\"")]
fn the_finding_has_code_and_message(world: &World, field: String, code: String, message: String) {
    let outcome = world.outcome();
    let finding = outcome
        .findings()
        .iter()
        .find(|finding| finding.identifier() == Some(field.as_str()))
        .expect("finding should exist for the field");
    assert_eq!(finding.code(), Some(code.as_str()));
    assert_eq!(finding.message(), Some(message.as_str()));
    assert_eq!(finding.severity(), None);
}

// ============================================================================
// Scenario bindings
// ============================================================================

#[scenario(
    path = "tests/features/outcome.feature",
    name = "Success carries the payload and a note"
)]
fn success_carries_the_payload_and_a_note(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/outcome.feature",
    name = "A numeric code resolves the failure status"
)]
fn a_numeric_code_resolves_the_failure_status(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/outcome.feature",
    name = "An unmapped numeric code is rejected"
)]
fn an_unmapped_numeric_code_is_rejected(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/outcome.feature",
    name = "The success code cannot describe a failure"
)]
fn the_success_code_cannot_describe_a_failure(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/outcome.feature",
    name = "External validation errors become findings"
)]
fn external_validation_errors_become_findings(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/outcome.feature",
    name = "No external validation errors still yield an invalid outcome"
)]
fn no_external_validation_errors_still_yield_an_invalid_outcome(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/outcome.feature",
    name = "Forbidden access reports its message"
)]
fn forbidden_access_reports_its_message(world: World) {
    let _ = world;
}
