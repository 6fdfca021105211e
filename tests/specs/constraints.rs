// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Argument constraints.

use crate::prelude::*;
use similar_asserts::assert_eq;

struct Args {
    mirror: Option<String>,
    oops: bool,
    user: Option<String>,
    token: Option<String>,
}

fn check(args: &Args) -> Result<(), ConstraintError> {
    not_allowed_together(&labeled!("mirror" => args.mirror, "oops" => args.oops))?;
    at_least_one_required(&labeled!("user" => args.user, "token" => args.token))?;
    Ok(())
}

#[test]
fn valid_arguments_pass() {
    let args = Args { mirror: None, oops: true, user: None, token: Some("t".into()) };
    assert!(check(&args).is_ok());
}

#[test]
fn false_flag_counts_as_supplied() {
    let args = Args { mirror: Some("origin".into()), oops: false, user: Some("me".into()), token: None };
    let err = check(&args).unwrap_err();
    assert_eq!(err.to_string(), "'mirror' and 'oops' are not allowed together");
}

#[test]
fn violations_are_usage_errors() {
    let args = Args { mirror: None, oops: false, user: None, token: None };
    let err = check(&args).unwrap_err();
    assert_eq!(err.to_string(), "At least one of 'user' or 'token' is required");
    assert_eq!(err.exit_code(), INVALID_USAGE);
}

#[test]
fn strict_truthiness_ignores_falsy_flags() {
    let (mirror, oops) = (Some("origin"), false);
    let strict = Constraints::new().strict_truthy(true);
    assert_eq!(strict.not_allowed_together(&labeled!(mirror, oops)).unwrap(), None);
}

#[test]
fn renamed_labels_read_like_flags() {
    let (mirror, oops) = (Some("origin"), Some(true));
    let constraints = Constraints::new().rename("mirror", "-m/--mirror").rename("oops", "--oops");
    let err = constraints.not_allowed_together(&labeled!(mirror, oops)).unwrap_err();
    assert_eq!(err.to_string(), "'-m/--mirror' and '--oops' are not allowed together");
}
