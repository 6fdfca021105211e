// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Message formation.

use crate::prelude::*;
use similar_asserts::assert_eq;

#[test]
fn joins_labels_with_one_conjunction_before_the_last() {
    let former = former();
    for len in 2..8 {
        let labels: Vec<String> = (0..len).map(|i| format!("l{i}")).collect();
        let joined = former.join_with_conjunction(&labels, "and", "").unwrap();

        assert_eq!(joined.matches(" and ").count(), 1);
        assert!(joined.ends_with(&format!(" and l{}", len - 1)), "{joined}");
        assert_eq!(joined.matches(',').count(), len - 2);
    }
}

#[test]
fn oxford_comma_only_affects_three_or_more() {
    let plain = former();
    let oxford = plain.clone_with(FormerOverrides::default().use_oxford_comma(true));

    assert_eq!(
        plain.join_with_conjunction(&["a", "b"], "and", "").unwrap(),
        oxford.join_with_conjunction(&["a", "b"], "and", "").unwrap()
    );
    assert_eq!(oxford.join_with_conjunction(&["a", "b", "c"], "or", "").unwrap(), "a, b, or c");
}

#[test]
fn canned_messages() {
    let former = former();
    assert_eq!(former.not_allowed_together(&["a", "b"]).unwrap(), "a and b are not allowed together.");
    assert_eq!(
        former.not_allowed_together(&["a", "b", "c"]).unwrap(),
        "a, b and c are not allowed together."
    );
    assert_eq!(former.all_required(&["a", "b"]).unwrap(), "Both a and b are required.");
    assert_eq!(former.all_required(&["a", "b", "c"]).unwrap(), "All a, b and c are required.");
    assert_eq!(former.at_least_one_required(&["a", "b"]).unwrap(), "Either a or b is required.");
}

#[test]
fn clone_with_leaves_the_original_untouched() {
    let original = former();
    let before = original.all_required(&["a", "b", "c"]).unwrap();

    let oxford = original.clone_with(FormerOverrides::default().use_oxford_comma(true));
    assert_eq!(oxford.all_required(&["a", "b", "c"]).unwrap(), "All a, b, and c are required.");

    assert_eq!(original.all_required(&["a", "b", "c"]).unwrap(), before);
    assert_eq!(before, "All a, b and c are required.");
}

#[test]
fn former_from_toml() {
    let former = MessageFormer::from_toml_str(
        r#"
use_oxford_comma = true

[conjunctions]
and = "und"
or = "oder"
"#,
    )
    .unwrap();
    assert_eq!(former.all_required(&["a", "b", "c"]).unwrap(), "All a, b, und c are required.");
    assert_eq!(former.at_least_one_required(&["x", "y"]).unwrap(), "Either x oder y is required.");
}
