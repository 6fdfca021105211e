// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Declarative macros for reducing boilerplate.
//!
//! - [`structured_builders!`]: builder methods for error types that wrap a
//!   [`StructuredError`](crate::StructuredError)

/// Generate the shared builder methods for a type embedding a
/// [`StructuredError`](crate::StructuredError).
///
/// The path after `=>` names the embedded field; without it the methods
/// are generated for `StructuredError` itself.
///
/// ```ignore
/// errspec_core::structured_builders!(MyError => base);
/// ```
#[macro_export]
macro_rules! structured_builders {
    ($ty:ty $(=> $($field:ident).+)?) => {
        impl $ty {
            /// Append a positional message fragment.
            pub fn with_message(mut self, message: impl Into<String>) -> Self {
                self$($(.$field)+)?.push_message(message);
                self
            }

            /// Attach an auxiliary metadata entry.
            pub fn with_meta(
                mut self,
                key: impl Into<String>,
                value: impl Into<$crate::MetaValue>,
            ) -> Self {
                self$($(.$field)+)?.insert_meta(key, value);
                self
            }

            /// Chain the error this one is raised in response to.
            pub fn with_cause<E>(mut self, cause: E) -> Self
            where
                E: std::error::Error + Send + Sync + 'static,
            {
                self$($(.$field)+)?.set_cause($crate::Cause::new(cause));
                self
            }

            /// Chain an already wrapped cause.
            pub fn with_wrapped_cause(mut self, cause: $crate::Cause) -> Self {
                self$($(.$field)+)?.set_cause(cause);
                self
            }

            /// Record an explicit origin location.
            pub fn with_origin(mut self, origin: &'static std::panic::Location<'static>) -> Self {
                self$($(.$field)+)?.set_origin(origin);
                self
            }

            /// Record the caller's location as the origin.
            #[track_caller]
            pub fn at_caller(mut self) -> Self {
                self$($(.$field)+)?.set_origin(std::panic::Location::caller());
                self
            }
        }
    };
}
