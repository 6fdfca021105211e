// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Type and shape requirements on values.
//!
//! Failed checks are returned as exit-code-bearing errors whose message
//! reads `'label' must be ...`, chained to a [`TypeMismatch`] or
//! [`InvalidValue`] cause. The error's origin is the caller's call site
//! unless attribution to the caller is switched off.
//!
//! ```
//! use errspec_check::{require_iterable, require_type, IterableShape};
//!
//! assert!(require_type::<i64>(&123_i64, "count").is_ok());
//!
//! let err = require_type::<i64>(&"abc", "count").unwrap_err();
//! assert_eq!(err.message().as_deref(), Some("'count' must be of type i64"));
//!
//! assert!(require_iterable(&vec![1_i64, 2, 3], "xs", &IterableShape::new().items::<i64>()).unwrap());
//! ```

use crate::inspect::Inspect;
use errspec_core::exit_code::DATA_FORMAT_ERR;
use errspec_core::{short_type_name, Cause, ExitingError};
use std::any::{Any, TypeId};
use std::error::Error as StdError;
use std::panic::Location;
use thiserror::Error;

/// Cause attached when a value has the wrong type or shape.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct TypeMismatch(pub String);

/// Cause attached when a value has the right type but an unacceptable content.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct InvalidValue(pub String);

/// Error types the requirement helpers can produce.
///
/// Implement this for an application error to have failed checks returned
/// as that type instead of [`ExitingError`].
pub trait RaiseExiting: Sized {
    fn raise(
        message: String,
        exit_code: i32,
        cause: Cause,
        origin: &'static Location<'static>,
    ) -> Self;
}

impl RaiseExiting for ExitingError {
    fn raise(
        message: String,
        exit_code: i32,
        cause: Cause,
        origin: &'static Location<'static>,
    ) -> Self {
        ExitingError::coded(exit_code)
            .with_message(message)
            .with_wrapped_cause(cause)
            .with_origin(origin)
    }
}

/// A type identified at runtime, with the name used in messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeTag {
    id: TypeId,
    name: String,
}

impl TypeTag {
    pub fn of<T: Any>() -> Self {
        Self { id: TypeId::of::<T>(), name: short_type_name::<T>() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    fn matches(&self, value: &dyn Any) -> bool {
        value.type_id() == self.id
    }
}

/// Expected shape for [`Requirement::iterable`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IterableShape {
    item: Option<TypeTag>,
    container: Option<TypeTag>,
    require_empty: Option<bool>,
}

impl IterableShape {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every element must be a `T`.
    ///
    /// Elements are compared by their concrete type. JSON arrays yield
    /// `serde_json::Value` items and objects yield `String` keys, so
    /// `items::<Value>()` is the item type that matches a JSON array.
    pub fn items<T: Any>(mut self) -> Self {
        self.item = Some(TypeTag::of::<T>());
        self
    }

    /// The value itself must be exactly a `C`.
    pub fn container<C: Any>(mut self) -> Self {
        self.container = Some(TypeTag::of::<C>());
        self
    }

    /// `true`: must have no elements. `false`: must have at least one.
    pub fn require_empty(mut self, empty: bool) -> Self {
        self.require_empty = Some(empty);
        self
    }
}

/// Settings shared by every check on one labelled value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Requirement<'a> {
    label: &'a str,
    exit_code: i32,
    prefix: &'a str,
    suffix: &'a str,
    attribute_to_caller: bool,
}

impl<'a> Requirement<'a> {
    /// Defaults: exit code [`DATA_FORMAT_ERR`], no prefix or suffix, errors
    /// attributed to the caller.
    pub fn new(label: &'a str) -> Self {
        Self { label, exit_code: DATA_FORMAT_ERR, prefix: "", suffix: "", attribute_to_caller: true }
    }

    pub fn exit_code(mut self, exit_code: i32) -> Self {
        self.exit_code = exit_code;
        self
    }

    pub fn prefix(mut self, prefix: &'a str) -> Self {
        self.prefix = prefix;
        self
    }

    pub fn suffix(mut self, suffix: &'a str) -> Self {
        self.suffix = suffix;
        self
    }

    /// When off, the error's origin points into this module instead of the
    /// caller. Message and type are unaffected.
    pub fn attribute_to_caller(mut self, enabled: bool) -> Self {
        self.attribute_to_caller = enabled;
        self
    }

    /// Require `value` to be a `T`.
    #[track_caller]
    pub fn of_type<T: Any, E: RaiseExiting>(&self, value: &dyn Any) -> Result<(), E> {
        if value.is::<T>() {
            return Ok(());
        }
        let requirement = format!("must be of type {}", short_type_name::<T>());
        Err(self.fail(&requirement, TypeMismatch))
    }

    /// Require `value` to be a non-text collection matching `shape`.
    ///
    /// Returns `Ok(true)` on success so the call can sit in boolean
    /// expressions.
    #[track_caller]
    pub fn iterable<V: Inspect, E: RaiseExiting>(
        &self,
        value: &V,
        shape: &IterableShape,
    ) -> Result<bool, E> {
        let elements = match value.elements() {
            Some(elements) if !value.is_text() => elements,
            _ => return Err(self.fail("must be an iterable (not a string)", TypeMismatch)),
        };

        if let Some(container) = &shape.container {
            if !container.matches(value) {
                let requirement = format!("must be of type {}", container.name());
                return Err(self.fail(&requirement, TypeMismatch));
            }
        }

        let elements: Vec<&dyn Any> = elements.collect();
        match (shape.require_empty, elements.is_empty()) {
            (Some(true), false) => return Err(self.fail("must be empty", InvalidValue)),
            (Some(false), true) => return Err(self.fail("must not be empty", InvalidValue)),
            _ => {}
        }

        if let Some(item) = &shape.item {
            if !elements.iter().all(|element| item.matches(*element)) {
                let kind = value.kind();
                let requirement = format!("must be {} {kind} of {}", article(&kind), item.name());
                return Err(self.fail(&requirement, TypeMismatch));
            }
        }

        Ok(true)
    }

    #[track_caller]
    fn fail<C, E>(&self, requirement: &str, cause: fn(String) -> C) -> E
    where
        C: StdError + Send + Sync + 'static,
        E: RaiseExiting,
    {
        let message = format!("{}'{}' {requirement}{}", self.prefix, self.label, self.suffix);
        let origin = if self.attribute_to_caller { Location::caller() } else { here() };
        tracing::debug!(
            label = self.label,
            exit_code = self.exit_code,
            origin = %origin,
            "requirement failed: {message}"
        );
        E::raise(message.clone(), self.exit_code, Cause::new(cause(message)), origin)
    }
}

/// Indefinite article for a container descriptor.
fn article(kind: &str) -> &'static str {
    match kind.chars().next() {
        Some(first) if "aeiouAEIOU".contains(first) => "an",
        _ => "a",
    }
}

fn here() -> &'static Location<'static> {
    Location::caller()
}

/// Require `value` to be a `T`, failing with an [`ExitingError`] carrying
/// [`DATA_FORMAT_ERR`].
#[track_caller]
pub fn require_type<T: Any>(value: &dyn Any, label: &str) -> Result<(), ExitingError> {
    Requirement::new(label).of_type::<T, ExitingError>(value)
}

/// Require `value` to be a non-text collection matching `shape`, failing
/// with an [`ExitingError`] carrying [`DATA_FORMAT_ERR`].
#[track_caller]
pub fn require_iterable<V: Inspect>(
    value: &V,
    label: &str,
    shape: &IterableShape,
) -> Result<bool, ExitingError> {
    Requirement::new(label).iterable::<V, ExitingError>(value, shape)
}

#[cfg(test)]
#[path = "require_tests.rs"]
mod tests;
