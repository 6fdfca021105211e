// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared imports and helpers for specs.

pub use errspec_check::{
    at_least_one_required, labeled, not_allowed_together, require_iterable, require_type,
    ConstraintError, Constraints, IterableShape, Requirement,
};
pub use errspec_core::exit_code::{DATA_FORMAT_ERR, GENERIC_ERR, INVALID_USAGE};
pub use errspec_core::{
    CommandError, ExitingError, FormerOverrides, HasExitCode, MessageFormer, ProcessFailure,
    Structured,
};

/// Former with default configuration (no Oxford comma).
pub fn former() -> MessageFormer {
    MessageFormer::new(Default::default())
}

/// Installs a plain-text subscriber for the current test thread so failures
/// show debug events from the checks.
pub fn trace() -> tracing::subscriber::DefaultGuard {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new("debug"))
        .with_test_writer()
        .finish();
    tracing::subscriber::set_default(subscriber)
}
