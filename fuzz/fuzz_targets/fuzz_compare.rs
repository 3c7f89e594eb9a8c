#![no_main]
// SPDX-License-Identifier: MIT OR Apache-2.0
//! libFuzzer target for structural comparison
//!
//! Tests:
//! - No panics on arbitrary document pairs under every policy
//! - Reflexivity: comparing a document against itself is empty
//! - Side mirroring: swapping the inputs swaps the reported sides

use difir_compare::differences_with;
use difir_core::{ArrayMatch, MatchPolicy, PropertyMatch, Side};
use difir_json::JsonAccess;
use libfuzzer_sys::fuzz_target;
use serde_json::Value;

const POLICIES: [MatchPolicy; 4] = [
    MatchPolicy::new(ArrayMatch::Position, PropertyMatch::Name),
    MatchPolicy::new(ArrayMatch::Position, PropertyMatch::Position),
    MatchPolicy::new(ArrayMatch::Key, PropertyMatch::Name),
    MatchPolicy::new(ArrayMatch::Key, PropertyMatch::Position),
];

fuzz_target!(|data: &[u8]| {
    // Skip overly large inputs
    if data.len() > 50_000 {
        return;
    }

    // Split data into two parts for two JSON inputs
    let mid = data.len() / 2;

    let left: Value = match serde_json::from_slice(&data[..mid]) {
        Ok(value) => value,
        Err(_) => return, // Invalid JSON, skip
    };
    let right: Value = match serde_json::from_slice(&data[mid..]) {
        Ok(value) => value,
        Err(_) => return,
    };

    let access = JsonAccess::shared();
    for policy in POLICIES {
        // Reflexivity
        assert_eq!(
            differences_with(Some(&left), Some(&left), access, policy).count(),
            0,
            "self-comparison must be empty: {left:?} under {policy:?}"
        );

        // Side mirroring between the two parsed documents
        let mut forward: Vec<(String, Side)> =
            differences_with(Some(&left), Some(&right), access, policy)
                .map(|difference| (difference.path().to_owned(), difference.side()))
                .collect();
        let mut backward: Vec<(String, Side)> =
            differences_with(Some(&right), Some(&left), access, policy)
                .map(|difference| {
                    let flipped = match difference.side() {
                        Side::Left => Side::Right,
                        Side::Right => Side::Left,
                    };
                    (difference.path().to_owned(), flipped)
                })
                .collect();
        forward.sort_by(|a, b| (&a.0, a.1 == Side::Left).cmp(&(&b.0, b.1 == Side::Left)));
        backward.sort_by(|a, b| (&a.0, a.1 == Side::Left).cmp(&(&b.0, b.1 == Side::Left)));
        assert_eq!(
            forward, backward,
            "swapped inputs must mirror sides under {policy:?}"
        );
    }
});
