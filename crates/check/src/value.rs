// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Validators for single command-line values.

use errspec_core::exit_code::{HasExitCode, INVALID_USAGE};
use thiserror::Error;

/// A command-line value was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValueRejected {
    pub message: String,
}

impl HasExitCode for ValueRejected {
    fn exit_code(&self) -> i32 {
        INVALID_USAGE
    }
}

fn unchanged(value: &str) -> &str {
    value
}

/// Rejects values that, once normalized, equal one of a set of
/// unsupported values.
///
/// ```
/// use errspec_check::StrNotIn;
///
/// let blank = StrNotIn::new([""]).normalized_by(str::trim);
/// assert!(blank.check("   ").is_err());
/// assert_eq!(StrNotIn::new([""]).check("   ").unwrap(), "   ");
/// ```
#[derive(Debug, Clone)]
pub struct StrNotIn {
    unsupported: Vec<String>,
    normalize: fn(&str) -> &str,
}

impl StrNotIn {
    pub fn new<I, S>(unsupported: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { unsupported: unsupported.into_iter().map(Into::into).collect(), normalize: unchanged }
    }

    /// Apply `normalize` before comparing. The original value is still the
    /// one returned and reported.
    pub fn normalized_by(mut self, normalize: fn(&str) -> &str) -> Self {
        self.normalize = normalize;
        self
    }

    pub fn check<'v>(&self, value: &'v str) -> Result<&'v str, ValueRejected> {
        let normalized = (self.normalize)(value);
        if self.unsupported.iter().any(|u| u == normalized) {
            return Err(ValueRejected {
                message: format!(
                    "value must not be '{value}'. {:?} values are not supported.",
                    self.unsupported
                ),
            });
        }
        Ok(value)
    }
}

/// Rejects `-`, which file arguments would otherwise read as stdin or stdout.
pub fn not_dash(value: &str) -> Result<&str, ValueRejected> {
    if value == "-" {
        return Err(ValueRejected { message: "file must not be '-'".to_string() });
    }
    Ok(value)
}

/// Help text for a file argument that is read and whose name is kept.
pub fn input_file_help(name: &str) -> String {
    dash_file_help("stdin", name)
}

/// Help text for a file argument that is written and whose name is kept.
pub fn output_file_help(name: &str) -> String {
    dash_file_help("stdout", name)
}

fn dash_file_help(stream: &str, name: &str) -> String {
    format!(
        "Only readable files will be accepted. Since '-' as a filename opens <{stream}> and because \
         we want to store the {name} for later use hence '-' as a filename is not accepted. \
         Likewise, Directories are also not accepted."
    )
}

/// Whether `pattern` contains POSIX glob metacharacters (`*`, `?`, `[`, `]`).
pub fn is_glob_like(pattern: &str) -> bool {
    pattern.contains(['*', '?', '[', ']'])
}

#[cfg(test)]
#[path = "value_tests.rs"]
mod tests;
