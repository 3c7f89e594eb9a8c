// SPDX-License-Identifier: MIT OR Apache-2.0
//! Shuffled-document matrix: which policy combinations see through
//! reordered object properties and reordered keyed arrays, over both
//! adapters.

use difir::json::{Document, JsonAccess};
use difir::simd::{SimdAccess, SimdDocument};
use difir::{ArrayMatch, MatchPolicy, PropertyMatch, differences_with};

/// Baseline document: keyed arrays, nested objects, mixed scalars.
const ORIGINAL: &str = r#"{
    "service": "ledger",
    "replicas": 3,
    "features": {"gron": true, "diff": true, "crdt": false},
    "endpoints": [
        {"id": "alpha", "port": 8080, "tags": ["a", "b"]},
        {"id": "beta", "port": 8081, "tags": ["c"]},
        {"id": "gamma", "port": 8082, "tags": []}
    ],
    "limits": {"rps": 1000.0, "burst": 2000}
}"#;

/// Same content with object property order permuted everywhere; array
/// order untouched. Number spellings differ but values are equal.
const SHUFFLED_OBJECTS: &str = r#"{
    "limits": {"burst": 2000, "rps": 1e3},
    "endpoints": [
        {"port": 8080, "tags": ["a", "b"], "id": "alpha"},
        {"tags": ["c"], "id": "beta", "port": 8081},
        {"id": "gamma", "tags": [], "port": 8082}
    ],
    "replicas": 3,
    "features": {"crdt": false, "gron": true, "diff": true},
    "service": "ledger"
}"#;

/// Property order permuted and the keyed `endpoints` array reordered.
const SHUFFLED_ARRAYS: &str = r#"{
    "limits": {"burst": 2000, "rps": 1000.0},
    "endpoints": [
        {"id": "gamma", "tags": [], "port": 8082},
        {"port": 8080, "tags": ["a", "b"], "id": "alpha"},
        {"tags": ["c"], "id": "beta", "port": 8081}
    ],
    "replicas": 3,
    "features": {"crdt": false, "gron": true, "diff": true},
    "service": "ledger"
}"#;

fn count_serde(left: &str, right: &str, access: &JsonAccess, policy: MatchPolicy) -> usize {
    let left = Document::parse(left).expect("left document parses");
    let right = Document::parse(right).expect("right document parses");
    differences_with(Some(left.root()), Some(right.root()), access, policy).count()
}

fn policy(arrays: ArrayMatch, properties: PropertyMatch) -> MatchPolicy {
    MatchPolicy::new(arrays, properties)
}

#[test]
fn shuffled_objects_vanish_under_name_matching() {
    let access = JsonAccess::keyed_by_field("id");
    for arrays in [ArrayMatch::Position, ArrayMatch::Key] {
        assert_eq!(
            count_serde(
                ORIGINAL,
                SHUFFLED_OBJECTS,
                &access,
                policy(arrays, PropertyMatch::Name)
            ),
            0,
            "{arrays:?}"
        );
    }
}

#[test]
fn shuffled_objects_persist_under_positional_property_matching() {
    let access = JsonAccess::keyed_by_field("id");
    for arrays in [ArrayMatch::Position, ArrayMatch::Key] {
        assert_ne!(
            count_serde(
                ORIGINAL,
                SHUFFLED_OBJECTS,
                &access,
                policy(arrays, PropertyMatch::Position)
            ),
            0,
            "{arrays:?}"
        );
    }
}

#[test]
fn shuffled_arrays_vanish_only_under_identity_keys() {
    let keyed = JsonAccess::keyed_by_field("id");
    assert_eq!(
        count_serde(
            ORIGINAL,
            SHUFFLED_ARRAYS,
            &keyed,
            policy(ArrayMatch::Key, PropertyMatch::Name)
        ),
        0
    );

    // Positionally the reordering is visible.
    assert_ne!(
        count_serde(
            ORIGINAL,
            SHUFFLED_ARRAYS,
            &keyed,
            policy(ArrayMatch::Position, PropertyMatch::Name)
        ),
        0
    );

    // Synthetic keys encode the original order, so keyed matching without
    // an identity selector sees the reordering too.
    assert_ne!(
        count_serde(
            ORIGINAL,
            SHUFFLED_ARRAYS,
            JsonAccess::shared(),
            policy(ArrayMatch::Key, PropertyMatch::Name)
        ),
        0
    );
}

#[test]
fn simd_adapter_agrees_on_the_shuffle_matrix() {
    let left = SimdDocument::parse(ORIGINAL).expect("left document parses");
    let right = SimdDocument::parse(SHUFFLED_ARRAYS).expect("right document parses");
    let keyed = SimdAccess::keyed_by_field("id");

    let matched = differences_with(
        Some(left.root()),
        Some(right.root()),
        &keyed,
        policy(ArrayMatch::Key, PropertyMatch::Name),
    )
    .count();
    assert_eq!(matched, 0);

    let positional = differences_with(
        Some(left.root()),
        Some(right.root()),
        &keyed,
        policy(ArrayMatch::Position, PropertyMatch::Name),
    )
    .count();
    assert_ne!(positional, 0);

    let reflexive = differences_with(
        Some(left.root()),
        Some(left.root()),
        SimdAccess::shared(),
        MatchPolicy::default(),
    )
    .count();
    assert_eq!(reflexive, 0);
}
