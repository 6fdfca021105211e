// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Structured error hierarchy.
//!
//! [`StructuredError`] carries positional message fragments, metadata and an
//! optional chained [`Cause`]. [`ExitingError`] adds the process exit code an
//! application should terminate with. Both render the same way:
//!
//! | message | cause | rendered                        |
//! |---------|-------|---------------------------------|
//! | no      | no    | (empty)                         |
//! | no      | yes   | `CauseType: cause message`      |
//! | yes     | no    | `message`                       |
//! | yes     | yes   | `CauseType: message`            |
//!
//! A cause that renders empty contributes only its type name.

use crate::exit_code::{HasExitCode, GENERIC_ERR};
use crate::record::ErrorRecord;
use crate::type_name::short_type_name;
use serde_json::Value;
use std::collections::BTreeMap;
use std::error::Error as StdError;
use std::fmt;
use std::panic::Location;

/// The error another error was raised in response to, along with the short
/// type name it is rendered under.
#[derive(Debug)]
pub struct Cause {
    type_name: String,
    error: Box<dyn StdError + Send + Sync + 'static>,
}

impl Cause {
    pub fn new<E>(error: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self { type_name: short_type_name::<E>(), error: Box::new(error) }
    }

    /// Wrap an already boxed error under an explicit type name.
    pub fn from_boxed(
        type_name: impl Into<String>,
        error: Box<dyn StdError + Send + Sync + 'static>,
    ) -> Self {
        Self { type_name: type_name.into(), error }
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Rendered cause message, `None` when the cause renders empty.
    pub fn message(&self) -> Option<String> {
        let rendered = self.error.to_string();
        (!rendered.is_empty()).then_some(rendered)
    }

    pub fn error(&self) -> &(dyn StdError + Send + Sync + 'static) {
        self.error.as_ref()
    }

    pub fn downcast_ref<E: StdError + 'static>(&self) -> Option<&E> {
        self.error.downcast_ref::<E>()
    }

    pub fn is<E: StdError + 'static>(&self) -> bool {
        self.error.is::<E>()
    }
}

/// Base error carrying message fragments, metadata and an optional cause.
#[derive(Debug, Default)]
pub struct StructuredError {
    args: Vec<String>,
    metadata: BTreeMap<String, Value>,
    cause: Option<Cause>,
    origin: Option<&'static Location<'static>>,
}

impl StructuredError {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_message(&mut self, message: impl Into<String>) {
        self.args.push(message.into());
    }

    pub fn insert_meta(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.metadata.insert(key.into(), value.into());
    }

    /// Set the chained cause. Chaining happens once, before the error leaves
    /// the scope that created it; a second call replaces the first cause.
    pub fn set_cause(&mut self, cause: Cause) {
        self.cause = Some(cause);
    }

    pub fn set_origin(&mut self, origin: &'static Location<'static>) {
        self.origin = Some(origin);
    }

    /// Positional message fragments, in the order they were added.
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Direct message: all fragments joined with `", "`.
    pub fn message(&self) -> Option<String> {
        if self.args.is_empty() {
            None
        } else {
            Some(self.args.join(", "))
        }
    }

    pub fn metadata(&self) -> &BTreeMap<String, Value> {
        &self.metadata
    }

    pub fn meta(&self, key: &str) -> Option<&Value> {
        self.metadata.get(key)
    }

    /// Explicitly chained cause, if any.
    pub fn cause(&self) -> Option<&Cause> {
        self.cause.as_ref()
    }

    /// Source location the error is attributed to, if one was recorded.
    pub fn origin(&self) -> Option<&'static Location<'static>> {
        self.origin
    }
}

crate::structured_builders!(StructuredError);

impl fmt::Display for StructuredError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(f, self.message().as_deref(), self.cause.as_ref().map(CauseView::from))
    }
}

impl StdError for StructuredError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.cause.as_ref().map(|cause| cause.error() as &(dyn StdError + 'static))
    }
}

/// Borrowed type name and rendered message of a cause.
pub(crate) struct CauseView<'a> {
    pub(crate) type_name: &'a str,
    pub(crate) message: Option<String>,
}

impl<'a> From<&'a Cause> for CauseView<'a> {
    fn from(cause: &'a Cause) -> Self {
        Self { type_name: cause.type_name(), message: cause.message() }
    }
}

pub(crate) fn render(
    f: &mut fmt::Formatter<'_>,
    message: Option<&str>,
    cause: Option<CauseView<'_>>,
) -> fmt::Result {
    match (message, cause) {
        (None, None) => Ok(()),
        (Some(message), None) => f.write_str(message),
        (Some(message), Some(cause)) => write!(f, "{}: {message}", cause.type_name),
        (None, Some(CauseView { type_name, message: Some(cause_message) })) => {
            write!(f, "{type_name}: {cause_message}")
        }
        (None, Some(CauseView { type_name, message: None })) => f.write_str(type_name),
    }
}

/// Errors that expose their [`StructuredError`] core.
pub trait Structured: fmt::Display {
    /// Name the error is exported under in [`ErrorRecord::error_type`].
    fn type_name(&self) -> &'static str;

    fn structured(&self) -> &StructuredError;

    /// Short type name and rendered message of the cause this error reports.
    fn cause_summary(&self) -> Option<(String, String)> {
        self.structured()
            .cause()
            .map(|cause| (cause.type_name().to_string(), cause.error().to_string()))
    }

    /// Serializable summary for structured logging.
    fn to_record(&self) -> ErrorRecord {
        let (cause_type, cause_message) = match self.cause_summary() {
            Some((cause_type, cause_message)) => (Some(cause_type), Some(cause_message)),
            None => (None, None),
        };
        ErrorRecord {
            error_type: self.type_name().to_string(),
            message: self.to_string(),
            cause_type,
            cause_message,
        }
    }
}

impl Structured for StructuredError {
    fn type_name(&self) -> &'static str {
        "StructuredError"
    }

    fn structured(&self) -> &StructuredError {
        self
    }
}

/// A [`StructuredError`] that also carries a process exit code.
#[derive(Debug)]
pub struct ExitingError {
    base: StructuredError,
    exit_code: i32,
}

impl ExitingError {
    /// New error with the [`GENERIC_ERR`] exit code.
    pub fn new() -> Self {
        Self::coded(GENERIC_ERR)
    }

    /// New error with an explicit exit code.
    pub fn coded(exit_code: i32) -> Self {
        Self { base: StructuredError::new(), exit_code }
    }

    /// Promote a plain structured error, keeping its message, metadata, cause
    /// and origin.
    pub fn from_structured(base: StructuredError, exit_code: i32) -> Self {
        Self { base, exit_code }
    }

    pub fn message(&self) -> Option<String> {
        self.base.message()
    }

    pub fn cause(&self) -> Option<&Cause> {
        self.base.cause()
    }

    pub fn origin(&self) -> Option<&'static Location<'static>> {
        self.base.origin()
    }

    pub fn meta(&self, key: &str) -> Option<&Value> {
        self.base.meta(key)
    }

    pub fn into_structured(self) -> StructuredError {
        self.base
    }
}

impl Default for ExitingError {
    fn default() -> Self {
        Self::new()
    }
}

crate::structured_builders!(ExitingError => base);

impl HasExitCode for ExitingError {
    fn exit_code(&self) -> i32 {
        self.exit_code
    }
}

impl fmt::Display for ExitingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.base, f)
    }
}

impl StdError for ExitingError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.base.source()
    }
}

impl Structured for ExitingError {
    fn type_name(&self) -> &'static str {
        "ExitingError"
    }

    fn structured(&self) -> &StructuredError {
        &self.base
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
