// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! errspec-core: exit codes, structured errors and message formation

pub mod macros;

pub mod config;
pub mod error;
pub mod exit_code;
pub mod former;
pub mod process;
pub mod record;
pub mod type_name;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use config::{ConfigurationError, MessageFormerConfig};
pub use error::{Cause, ExitingError, Structured, StructuredError};
pub use exit_code::HasExitCode;
pub use former::{Affix, FormerOverrides, MessageFormer, UnexpectedChoice};
pub use process::{CauseMismatch, CommandError, CommandLine, ProcessFailure};
pub use record::ErrorRecord;
pub use type_name::short_type_name;

/// Metadata value type attached to structured errors.
pub use serde_json::Value as MetaValue;
