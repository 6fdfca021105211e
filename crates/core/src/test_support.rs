// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared test helpers for use across crates.
//!
//! Gated behind `#[cfg(any(test, feature = "test-support"))]`.

// ── Proptest strategies ─────────────────────────────────────────────────

/// Proptest strategies for message inputs.
pub mod strategies {
    use proptest::prelude::*;

    /// A label that never contains spaces, commas, quotes or lowercase
    /// conjunction words.
    pub fn arb_label() -> impl Strategy<Value = String> {
        "[A-Z][a-z0-9_]{0,7}"
    }

    /// Between `min` and `max` labels (inclusive).
    pub fn arb_labels(min: usize, max: usize) -> impl Strategy<Value = Vec<String>> {
        prop::collection::vec(arb_label(), min..=max)
    }
}
