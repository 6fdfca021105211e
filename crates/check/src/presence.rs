// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Whether an argument counts as supplied.
//!
//! Two predicates are offered: *not null* (the default) and *truthy*
//! (strict). `None` and JSON `null` are the only null values; falsy values
//! are zero, `false`, and empty strings or collections.

use serde_json::Value;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::path::{Path, PathBuf};

/// Presence predicates for constraint checks.
pub trait Presence {
    fn is_null(&self) -> bool {
        false
    }

    fn is_truthy(&self) -> bool;

    /// Supplied under the chosen predicate.
    fn is_present(&self, strict_truthy: bool) -> bool {
        if strict_truthy {
            self.is_truthy()
        } else {
            !self.is_null()
        }
    }
}

impl<T: Presence> Presence for Option<T> {
    fn is_null(&self) -> bool {
        self.is_none()
    }

    fn is_truthy(&self) -> bool {
        self.as_ref().is_some_and(Presence::is_truthy)
    }
}

impl<T: Presence + ?Sized> Presence for &T {
    fn is_null(&self) -> bool {
        (**self).is_null()
    }

    fn is_truthy(&self) -> bool {
        (**self).is_truthy()
    }
}

impl<T: Presence + ?Sized> Presence for Box<T> {
    fn is_null(&self) -> bool {
        (**self).is_null()
    }

    fn is_truthy(&self) -> bool {
        (**self).is_truthy()
    }
}

impl Presence for bool {
    fn is_truthy(&self) -> bool {
        *self
    }
}

macro_rules! impl_numeric {
    ($zero:expr => $($ty:ty),+ $(,)?) => {
        $(
            impl Presence for $ty {
                fn is_truthy(&self) -> bool {
                    *self != $zero
                }
            }
        )+
    };
}

impl_numeric!(0 => i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_numeric!(0.0 => f32, f64);

impl Presence for char {
    fn is_truthy(&self) -> bool {
        true
    }
}

impl Presence for str {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl Presence for String {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl Presence for Path {
    fn is_truthy(&self) -> bool {
        !self.as_os_str().is_empty()
    }
}

impl Presence for PathBuf {
    fn is_truthy(&self) -> bool {
        !self.as_os_str().is_empty()
    }
}

impl<T> Presence for [T] {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

macro_rules! impl_collection {
    ($($container:ty),+ $(,)?) => {
        $(
            impl<T> Presence for $container {
                fn is_truthy(&self) -> bool {
                    !self.is_empty()
                }
            }
        )+
    };
}

impl_collection!(Vec<T>, VecDeque<T>, BTreeSet<T>);

impl<T, S> Presence for HashSet<T, S> {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl<K, V> Presence for BTreeMap<K, V> {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl<K, V, S> Presence for HashMap<K, V, S> {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl Presence for Value {
    fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    fn is_truthy(&self) -> bool {
        match self {
            Value::Null => false,
            Value::Bool(flag) => *flag,
            Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
            Value::String(text) => !text.is_empty(),
            Value::Array(items) => !items.is_empty(),
            Value::Object(map) => !map.is_empty(),
        }
    }
}

#[cfg(test)]
#[path = "presence_tests.rs"]
mod tests;
