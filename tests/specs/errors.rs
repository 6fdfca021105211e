// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Exit-code-bearing errors and their exported records.

use crate::prelude::*;
use similar_asserts::assert_eq;

#[test]
fn command_error_defaults_to_the_return_code() {
    let failure = ProcessFailure::new(["git", "fetch"], 128);
    let err = CommandError::new(failure.clone());
    assert_eq!(err.exit_code(), 128);

    let err = CommandError::new(failure).with_exit_code(3);
    assert_eq!(err.exit_code(), 3);
}

#[test]
fn command_error_renders_its_failure() {
    let err = CommandError::new(ProcessFailure::new(["git", "fetch"], 1));
    assert_eq!(
        err.to_string(),
        "ProcessFailure: Command 'git fetch' returned non-zero exit status 1."
    );
    assert_eq!(err.cause().unwrap().return_code, 1);
}

#[test]
fn command_error_rejects_a_foreign_chained_cause() {
    let err = CommandError::new(ProcessFailure::new("make", 2))
        .with_cause(std::io::Error::other("boom"));
    let mismatch = err.cause().unwrap_err();
    assert_eq!(mismatch.exit_code(), INVALID_USAGE);
}

#[test]
fn exiting_error_record() {
    let err = ExitingError::new()
        .with_message("could not load profile")
        .with_meta("profile", "dev")
        .with_cause(ProcessFailure::new(["loader"], 7));

    assert_eq!(err.exit_code(), GENERIC_ERR);
    assert_eq!(err.meta("profile"), Some(&serde_json::json!("dev")));

    let record = err.to_record();
    assert_eq!(
        record.to_json(),
        serde_json::json!({
            "type": "ExitingError",
            "message": "ProcessFailure: could not load profile",
            "causeType": "ProcessFailure",
            "causeMessage": "Command 'loader' returned non-zero exit status 7.",
        })
    );
    assert_eq!(serde_json::to_value(&record).unwrap(), record.to_json());
}

#[test]
fn command_error_widens_to_exiting_error() {
    let exiting: ExitingError =
        CommandError::new(ProcessFailure::new(["cargo", "build"], 101)).with_message("build failed").into();
    assert_eq!(exiting.exit_code(), 101);
    assert_eq!(exiting.to_string(), "ProcessFailure: build failed");
    assert!(exiting.cause().unwrap().is::<ProcessFailure>());
}
