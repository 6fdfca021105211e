// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use std::collections::BTreeMap;

#[yare::parameterized(
    plain        = { "i64",                                                   "i64" },
    std_path     = { "alloc::string::String",                                 "String" },
    generic      = { "alloc::vec::Vec<alloc::string::String>",                "Vec<String>" },
    nested       = { "core::option::Option<alloc::vec::Vec<i32>>",            "Option<Vec<i32>>" },
    reference    = { "&str",                                                  "&str" },
    tuple        = { "(i32, alloc::string::String)",                          "(i32, String)" },
    trait_object = { "dyn core::any::Any",                                    "dyn Any" },
)]
fn shorten_strips_module_paths(full: &str, expected: &str) {
    assert_eq!(shorten(full), expected);
}

#[test]
fn short_type_name_of_concrete_types() {
    assert_eq!(short_type_name::<i64>(), "i64");
    assert_eq!(short_type_name::<String>(), "String");
    assert_eq!(short_type_name::<BTreeMap<String, u8>>(), "BTreeMap<String, u8>");
}
