// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Runtime shape of values checked by [`require_iterable`](crate::require_iterable).
//!
//! Text is never treated as an iterable even though it is sequence-like.
//! Maps iterate over their keys.

use errspec_core::short_type_name;
use serde_json::Value;
use std::any::Any;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, LinkedList, VecDeque};
use std::path::PathBuf;

/// Boxed iterator over the elements of an inspected collection.
pub type Elements<'a> = Box<dyn Iterator<Item = &'a dyn Any> + 'a>;

/// Runtime view of a value's shape.
pub trait Inspect: Any {
    /// Text values are rejected where an iterable is required.
    fn is_text(&self) -> bool {
        false
    }

    /// Elements of a collection; `None` for scalars and text.
    fn elements(&self) -> Option<Elements<'_>> {
        None
    }

    /// Short container descriptor used in messages, e.g. `Vec`.
    fn kind(&self) -> String {
        short_type_name::<Self>()
    }
}

macro_rules! impl_scalar {
    ($($ty:ty),+ $(,)?) => {
        $(impl Inspect for $ty {})+
    };
}

impl_scalar!(
    (), bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
    PathBuf,
);

impl Inspect for String {
    fn is_text(&self) -> bool {
        true
    }
}

impl Inspect for &'static str {
    fn is_text(&self) -> bool {
        true
    }
}

macro_rules! impl_sequence {
    ($($container:ident),+ $(,)?) => {
        $(
            impl<T: Any> Inspect for $container<T> {
                fn elements(&self) -> Option<Elements<'_>> {
                    Some(Box::new(self.iter().map(|item| item as &dyn Any)))
                }

                fn kind(&self) -> String {
                    stringify!($container).to_string()
                }
            }
        )+
    };
}

impl_sequence!(Vec, VecDeque, LinkedList, BTreeSet);

impl<T: Any, const N: usize> Inspect for [T; N] {
    fn elements(&self) -> Option<Elements<'_>> {
        Some(Box::new(self.iter().map(|item| item as &dyn Any)))
    }

    fn kind(&self) -> String {
        "array".to_string()
    }
}

impl<T: Any, S: Any> Inspect for HashSet<T, S> {
    fn elements(&self) -> Option<Elements<'_>> {
        Some(Box::new(self.iter().map(|item| item as &dyn Any)))
    }

    fn kind(&self) -> String {
        "HashSet".to_string()
    }
}

impl<K: Any, V: Any> Inspect for BTreeMap<K, V> {
    fn elements(&self) -> Option<Elements<'_>> {
        Some(Box::new(self.keys().map(|key| key as &dyn Any)))
    }

    fn kind(&self) -> String {
        "BTreeMap".to_string()
    }
}

impl<K: Any, V: Any, S: Any> Inspect for HashMap<K, V, S> {
    fn elements(&self) -> Option<Elements<'_>> {
        Some(Box::new(self.keys().map(|key| key as &dyn Any)))
    }

    fn kind(&self) -> String {
        "HashMap".to_string()
    }
}

/// JSON arrays yield their `Value` items, objects their `String` keys.
impl Inspect for Value {
    fn is_text(&self) -> bool {
        self.is_string()
    }

    fn elements(&self) -> Option<Elements<'_>> {
        match self {
            Value::Array(items) => Some(Box::new(items.iter().map(|item| item as &dyn Any))),
            Value::Object(map) => Some(Box::new(map.keys().map(|key| key as &dyn Any))),
            _ => None,
        }
    }

    fn kind(&self) -> String {
        let kind = match self {
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        };
        kind.to_string()
    }
}

#[cfg(test)]
#[path = "inspect_tests.rs"]
mod tests;
