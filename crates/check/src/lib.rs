// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! errspec-check: runtime requirements and argument constraints
//!
//! Checks return exit-code-bearing errors whose messages are built by
//! [`errspec_core::MessageFormer`].

pub mod constraint;
pub mod inspect;
pub mod presence;
pub mod require;
pub mod value;

pub use constraint::{at_least_one_required, not_allowed_together, ConstraintError, Constraints, Labeled};
pub use inspect::{Elements, Inspect};
pub use presence::Presence;
pub use require::{
    require_iterable, require_type, InvalidValue, IterableShape, RaiseExiting, Requirement, TypeMismatch,
    TypeTag,
};
pub use value::{input_file_help, is_glob_like, not_dash, output_file_help, StrNotIn, ValueRejected};
