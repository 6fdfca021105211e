// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Behavioral specs for errspec, exercised through the public crate APIs.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

#[path = "specs/prelude.rs"]
mod prelude;

#[path = "specs/constraints.rs"]
mod constraints;
#[path = "specs/errors.rs"]
mod errors;
#[path = "specs/messages.rs"]
mod messages;
#[path = "specs/requirements.rs"]
mod requirements;
