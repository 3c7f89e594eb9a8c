// SPDX-License-Identifier: MIT OR Apache-2.0
//! Closed classification of JSON value kinds.
//!
//! Every node of a concrete tree maps onto exactly one [`ValueKind`] through
//! its adapter. Tree libraries that expose `true` and `false` as distinct
//! tags collapse both onto [`ValueKind::Boolean`] at the adapter boundary,
//! so the comparator only ever sees the six kinds below.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The kind of JSON value a node represents.
///
/// An absent node classifies as [`ValueKind::Null`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    /// JSON `null`, or an absent node.
    Null,
    /// JSON `true` or `false`.
    Boolean,
    /// A JSON string.
    String,
    /// A JSON number.
    Number,
    /// A JSON array.
    Array,
    /// A JSON object.
    Object,
}

impl ValueKind {
    /// Whether this kind has children (array elements or object properties).
    #[must_use]
    pub const fn is_composite(self) -> bool {
        matches!(self, Self::Array | Self::Object)
    }

    /// Lowercase name of the kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Boolean => "boolean",
            Self::String => "string",
            Self::Number => "number",
            Self::Array => "array",
            Self::Object => "object",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn composite_kinds() {
        assert!(ValueKind::Array.is_composite());
        assert!(ValueKind::Object.is_composite());
        assert!(!ValueKind::Null.is_composite());
        assert!(!ValueKind::Boolean.is_composite());
        assert!(!ValueKind::String.is_composite());
        assert!(!ValueKind::Number.is_composite());
    }

    #[test]
    fn display_names() {
        assert_eq!(ValueKind::Null.to_string(), "null");
        assert_eq!(ValueKind::Object.to_string(), "object");
    }
}
