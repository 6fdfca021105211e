// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Mutual-exclusion and at-least-one-required checks over labelled arguments.
//!
//! Each argument is passed with the label used in messages. [`labeled!`]
//! builds the pairs from variable names:
//!
//! ```
//! use errspec_check::{labeled, not_allowed_together};
//!
//! let mirror = Some("origin");
//! let oops = Some(true);
//! let err = not_allowed_together(&labeled!(mirror, oops)).unwrap_err();
//! assert_eq!(err.to_string(), "'mirror' and 'oops' are not allowed together");
//! ```
//!
//! [`labeled!`]: crate::labeled

use crate::presence::Presence;
use errspec_core::exit_code::{HasExitCode, INVALID_USAGE};
use errspec_core::{Affix, ConfigurationError, FormerOverrides, MessageFormer};
use std::collections::BTreeMap;
use std::panic::Location;
use std::sync::LazyLock;
use thiserror::Error;

static FORMER: LazyLock<MessageFormer> = LazyLock::new(|| {
    MessageFormer::shared().clone_with(FormerOverrides::default().use_oxford_comma(true))
});

/// A labelled argument.
pub type Labeled<'a> = (&'a str, &'a dyn Presence);

/// Build `[(label, &value as &dyn Presence), ...]` pairs.
///
/// Bare expressions are labelled with their source text; `"label" => expr`
/// sets the label explicitly.
#[macro_export]
macro_rules! labeled {
    ($($label:literal => $value:expr),+ $(,)?) => {
        [$(($label, &$value as &dyn $crate::Presence)),+]
    };
    ($($value:expr),+ $(,)?) => {
        [$((stringify!($value), &$value as &dyn $crate::Presence)),+]
    };
}

/// Violated argument constraints.
#[derive(Debug, Error)]
pub enum ConstraintError {
    #[error("{message}")]
    Violated { message: String },

    #[error(transparent)]
    Config(#[from] ConfigurationError),
}

impl HasExitCode for ConstraintError {
    fn exit_code(&self) -> i32 {
        INVALID_USAGE
    }
}

/// Options for constraint checks.
///
/// Warnings are attributed to the caller of the check. A function that
/// validates its own arguments should be `#[track_caller]` so the warning
/// points at the site that supplied them:
///
/// ```
/// use errspec_check::{labeled, ConstraintError, Constraints};
///
/// #[track_caller]
/// fn configure(mirror: Option<&str>, oops: bool) -> Result<Option<String>, ConstraintError> {
///     Constraints::new().raise_error(false).not_allowed_together(&labeled!(mirror, oops))
/// }
///
/// assert!(configure(Some("origin"), true).unwrap().is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Constraints {
    strict_truthy: bool,
    raise_error: bool,
    warn_format: String,
    name_overrides: BTreeMap<String, String>,
}

impl Default for Constraints {
    fn default() -> Self {
        Self {
            strict_truthy: false,
            raise_error: true,
            warn_format: "{message}".to_string(),
            name_overrides: BTreeMap::new(),
        }
    }
}

impl Constraints {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count a value as supplied only when truthy, instead of when not null.
    pub fn strict_truthy(mut self, strict: bool) -> Self {
        self.strict_truthy = strict;
        self
    }

    /// `false` downgrades violations to a logged warning.
    pub fn raise_error(mut self, raise: bool) -> Self {
        self.raise_error = raise;
        self
    }

    /// Template for warnings; `{message}` is replaced by the violation text.
    pub fn warn_format(mut self, format: impl Into<String>) -> Self {
        self.warn_format = format.into();
        self
    }

    /// Display `label` as `display` in messages.
    pub fn rename(mut self, label: impl Into<String>, display: impl Into<String>) -> Self {
        self.name_overrides.insert(label.into(), display.into());
        self
    }

    /// Fails when every argument is supplied.
    ///
    /// Returns `Ok(None)` when satisfied and `Ok(Some(warning))` when the
    /// violation was downgraded to a warning.
    #[track_caller]
    pub fn not_allowed_together(
        &self,
        values: &[Labeled<'_>],
    ) -> Result<Option<String>, ConstraintError> {
        if values.len() < 2 {
            return Err(ConfigurationError::TooFewLabels { min: 2, got: values.len() }.into());
        }
        if !values.iter().all(|(_, value)| value.is_present(self.strict_truthy)) {
            return Ok(None);
        }
        let names = self.quoted_names(values);
        let message = FORMER
            .not_allowed_together_with(&names, Affix::suffix(" are not allowed together"))?;
        self.violated(message, values, &names)
    }

    /// Fails when no argument is supplied.
    #[track_caller]
    pub fn at_least_one_required(
        &self,
        values: &[Labeled<'_>],
    ) -> Result<Option<String>, ConstraintError> {
        if values.is_empty() {
            return Err(ConfigurationError::TooFewLabels { min: 1, got: 0 }.into());
        }
        if values.iter().any(|(_, value)| value.is_present(self.strict_truthy)) {
            return Ok(None);
        }
        let names = self.quoted_names(values);
        let message = match names.as_slice() {
            [only] => format!("{only} is required"),
            _ => format!("At least one of {} is required", FORMER.join_with_conjunction(&names, "or", "")?),
        };
        self.violated(message, values, &names)
    }

    fn quoted_names(&self, values: &[Labeled<'_>]) -> Vec<String> {
        values
            .iter()
            .map(|(label, _)| {
                let name = self.name_overrides.get(*label).map_or(*label, String::as_str);
                format!("'{name}'")
            })
            .collect()
    }

    #[track_caller]
    fn violated(
        &self,
        message: String,
        values: &[Labeled<'_>],
        names: &[String],
    ) -> Result<Option<String>, ConstraintError> {
        if self.raise_error {
            return Err(ConstraintError::Violated { message });
        }
        let warning = self.warn_format.replace("{message}", &message);
        let labels: Vec<&str> = values.iter().map(|(label, _)| *label).collect();
        tracing::warn!(
            location = %Location::caller(),
            names = ?names,
            labels = ?labels,
            "{warning}"
        );
        Ok(Some(warning))
    }
}

/// [`Constraints::not_allowed_together`] with default options.
#[track_caller]
pub fn not_allowed_together(values: &[Labeled<'_>]) -> Result<Option<String>, ConstraintError> {
    Constraints::default().not_allowed_together(values)
}

/// [`Constraints::at_least_one_required`] with default options.
#[track_caller]
pub fn at_least_one_required(values: &[Labeled<'_>]) -> Result<Option<String>, ConstraintError> {
    Constraints::default().at_least_one_required(values)
}

#[cfg(test)]
#[path = "constraint_tests.rs"]
mod tests;
