// SPDX-License-Identifier: MIT OR Apache-2.0
//! JSONPath-style locator building.
//!
//! Paths are plain strings grown segment by segment during traversal:
//! `$`, `$.name`, `$[3]`, `$["odd name"]`. Property names and array keys
//! that are not clean identifiers get quoted.

use std::sync::LazyLock;

use regex::Regex;

/// The root locator.
pub const ROOT: &str = "$";

static CLEAN_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("^[A-Za-z_][A-Za-z0-9_]*$").expect("identifier pattern compiles"));

fn is_clean_name(name: &str) -> bool {
    CLEAN_NAME.is_match(name)
}

/// Appends an object property segment: `path.name`, quoting the name when it
/// is not a clean identifier.
#[must_use]
pub fn combine_property_name(path: &str, name: &str) -> String {
    if is_clean_name(name) {
        format!("{path}.{name}")
    } else {
        format!("{path}.\"{name}\"")
    }
}

/// Appends an array index segment: `path[index]`.
#[must_use]
pub fn combine_array_index(path: &str, index: usize) -> String {
    format!("{path}[{index}]")
}

/// Appends a computed array key segment: `path[key]`, quoting the key when it
/// is not a clean identifier.
#[must_use]
pub fn combine_array_key(path: &str, key: &str) -> String {
    if is_clean_name(key) {
        format!("{path}[{key}]")
    } else {
        format!("{path}[\"{key}\"]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_property_names_stay_bare() {
        assert_eq!(combine_property_name(ROOT, "alpha"), "$.alpha");
        assert_eq!(combine_property_name("$.a", "_b2"), "$.a._b2");
    }

    #[test]
    fn odd_property_names_get_quoted() {
        assert_eq!(combine_property_name(ROOT, "odd name"), "$.\"odd name\"");
        assert_eq!(combine_property_name(ROOT, "2nd"), "$.\"2nd\"");
        assert_eq!(combine_property_name(ROOT, ""), "$.\"\"");
        assert_eq!(combine_property_name(ROOT, "dash-ed"), "$.\"dash-ed\"");
    }

    #[test]
    fn array_index_segments() {
        assert_eq!(combine_array_index(ROOT, 0), "$[0]");
        assert_eq!(combine_array_index("$.items", 12), "$.items[12]");
    }

    #[test]
    fn array_key_segments() {
        assert_eq!(combine_array_key(ROOT, "alpha"), "$[alpha]");
        assert_eq!(combine_array_key(ROOT, "element #3"), "$[\"element #3\"]");
        assert_eq!(combine_array_key(ROOT, "42"), "$[\"42\"]");
    }
}
