// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Type and shape requirements.

use crate::prelude::*;
use similar_asserts::assert_eq;

#[test]
fn require_type_accepts_matching_value() {
    let _guard = trace();
    assert!(require_type::<i64>(&123_i64, "count").is_ok());
}

#[test]
fn require_type_rejects_with_cause() {
    let _guard = trace();
    let err = require_type::<i64>(&"abc", "count").unwrap_err();

    assert_eq!(err.message().as_deref(), Some("'count' must be of type i64"));
    assert!(err.cause().is_some());
    assert_eq!(err.exit_code(), DATA_FORMAT_ERR);
}

#[test]
fn require_iterable_cases() {
    let _guard = trace();
    let ints = IterableShape::new().items::<i64>();
    assert!(require_iterable(&vec![1_i64, 2, 3], "xs", &ints).unwrap());

    let err = require_iterable(&"abc", "xs", &IterableShape::new()).unwrap_err();
    assert_eq!(err.message().as_deref(), Some("'xs' must be an iterable (not a string)"));

    let err = require_iterable(&Vec::<i64>::new(), "xs", &IterableShape::new().require_empty(false))
        .unwrap_err();
    assert_eq!(err.message().as_deref(), Some("'xs' must not be empty"));

    let err =
        require_iterable(&vec![1_i64], "xs", &IterableShape::new().require_empty(true)).unwrap_err();
    assert_eq!(err.message().as_deref(), Some("'xs' must be empty"));
}

#[test]
fn failures_are_attributed_to_the_call_site() {
    let (err, line) = (require_type::<bool>(&1_u8, "flag").unwrap_err(), line!());
    let origin = err.origin().unwrap();
    assert!(origin.file().ends_with("requirements.rs"), "{origin}");
    assert_eq!(origin.line(), line);
}

#[test]
fn json_values_are_inspected_by_shape() {
    let config: serde_json::Value = serde_json::json!({ "paths": ["a", "b"], "name": "x" });

    let requirement = Requirement::new("paths").exit_code(INVALID_USAGE);
    assert!(requirement.iterable::<_, ExitingError>(&config["paths"], &IterableShape::new()).unwrap());

    let err = Requirement::new("name")
        .iterable::<_, ExitingError>(&config["name"], &IterableShape::new())
        .unwrap_err();
    assert_eq!(err.message().as_deref(), Some("'name' must be an iterable (not a string)"));
}
