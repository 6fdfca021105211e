// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use serde_json::json;

#[yare::parameterized(
    none          = { &None::<i32>,        false, false },
    some_zero     = { &Some(0),            true,  false },
    some_one      = { &Some(1),            true,  true },
    zero          = { &0_u64,              true,  false },
    negative      = { &-3_i32,             true,  true },
    float_zero    = { &0.0_f64,            true,  false },
    false_flag    = { &false,              true,  false },
    true_flag     = { &true,               true,  true },
    empty_str     = { &"",                 true,  false },
    text          = { &"x",                true,  true },
    empty_string  = { &String::new(),      true,  false },
    empty_vec     = { &Vec::<u8>::new(),   true,  false },
    vec           = { &vec![1],            true,  true },
    empty_map     = { &BTreeMap::<u8, u8>::new(), true, false },
)]
fn present_under_each_predicate(value: &dyn Presence, lenient: bool, strict: bool) {
    assert_eq!(value.is_present(false), lenient);
    assert_eq!(value.is_present(true), strict);
}

#[yare::parameterized(
    null        = { json!(null),  true,  false },
    false_value = { json!(false), false, false },
    zero        = { json!(0),     false, false },
    float       = { json!(0.5),   false, true },
    empty_text  = { json!(""),    false, false },
    array       = { json!([0]),   false, true },
    empty_obj   = { json!({}),    false, false },
)]
fn json_presence(value: Value, null: bool, truthy: bool) {
    assert_eq!(Presence::is_null(&value), null);
    assert_eq!(value.is_truthy(), truthy);
}

#[test]
fn nested_option_is_null_only_at_the_top() {
    let inner_none: Option<Option<i32>> = Some(None);
    assert!(!inner_none.is_null());
    assert!(!inner_none.is_truthy());
}

#[test]
fn path_presence() {
    assert!(!PathBuf::new().is_truthy());
    assert!(Path::new("/etc").is_truthy());
}
