// SPDX-License-Identifier: MIT OR Apache-2.0
//! # difir - where two JSON documents disagree
//!
//! difir compares two parsed JSON trees structurally and reports every
//! disagreement as a [`Difference`]: a JSONPath-style locator, the side
//! (left or right) carrying the extra or disagreeing value, and the node
//! found there. Consumers that only need "are these equal?" can stop at the
//! first yielded record; the traversal is lazy.
//!
//! ```
//! use difir::Side;
//!
//! let left = serde_json::json!({"name": "difir", "tags": ["json"]});
//! let right = serde_json::json!({"name": "difir", "tags": ["json", "diff"]});
//!
//! let reported: Vec<_> = difir::diff(&left, &right).collect();
//! assert_eq!(reported.len(), 1);
//! assert_eq!(reported[0].path(), "$.tags[1]");
//! assert_eq!(reported[0].side(), Side::Right);
//! ```
//!
//! ## Matching policies
//!
//! Array elements pair by position unless the run asks for key-based
//! matching; object properties pair by name unless the run asks for
//! positional matching. Keyed array matching needs an identity-aware
//! adapter:
//!
//! ```
//! use difir::{ArrayMatch, MatchPolicy};
//! use difir::json::JsonAccess;
//!
//! let left = serde_json::json!([{"id": 1, "v": "a"}, {"id": 2, "v": "b"}]);
//! let right = serde_json::json!([{"id": 2, "v": "b"}, {"id": 1, "v": "a"}]);
//!
//! let access = JsonAccess::keyed_by_field("id");
//! let policy = MatchPolicy::default().arrays_by(ArrayMatch::Key);
//! let mut reordered =
//!     difir::differences_with(Some(&left), Some(&right), &access, policy);
//! assert!(reordered.next().is_none());
//! ```

#![deny(missing_docs)]
#![deny(rust_2018_idioms)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]

pub use difir_compare::{
    DiffFormat, Differences, SimpleDiffFormat, differences, differences_with, format_all,
};
pub use difir_core::{
    ArrayMatch, Decimal, Difference, ElementDescriptor, MatchPolicy, NodeAccess, PropertyMatch,
    Side, ValueKind, path,
};
/// The serde_json adapter.
pub use difir_json as json;
/// The simd-json adapter.
pub use difir_simd as simd;

use serde_json::Value;

use crate::json::JsonAccess;

/// Compares two [`serde_json::Value`] trees under the default policy
/// (arrays by position, object properties by name).
pub fn diff<'a>(left: &'a Value, right: &'a Value) -> Differences<'a, Value, JsonAccess> {
    diff_with(left, right, MatchPolicy::default())
}

/// Compares two [`serde_json::Value`] trees under an explicit policy.
pub fn diff_with<'a>(
    left: &'a Value,
    right: &'a Value,
    policy: MatchPolicy,
) -> Differences<'a, Value, JsonAccess> {
    differences_with(Some(left), Some(right), JsonAccess::shared(), policy)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn equal_documents_yield_nothing() {
        let value = json!({"a": [1, 2, {"b": null}]});
        assert_eq!(diff(&value, &value).count(), 0);
    }

    #[test]
    fn default_policy_pairs_properties_by_name() {
        let left = json!({"a": 1, "b": 2});
        let right = json!({"b": 2, "a": 1});
        assert_eq!(diff(&left, &right).count(), 0);
    }
}
