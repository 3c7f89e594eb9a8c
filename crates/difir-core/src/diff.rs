// SPDX-License-Identifier: MIT OR Apache-2.0
//! Difference records emitted by a comparison.
//!
//! A structural disagreement between two present nodes produces a pair of
//! records at the same path, [`Side::Left`] first. An element with no
//! counterpart on the other side produces a single record for the side that
//! has content. The borrowed node stays readable after emission, so
//! formatters and reporters can render it.

use serde::Serialize;

/// Which input tree a difference record belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// The first tree handed to the comparison.
    Left,
    /// The second tree handed to the comparison.
    Right,
}

/// One reported difference: a path, the side carrying the value, and the
/// node found there (`None` when the side has nothing at that path).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Difference<'a, N> {
    path: String,
    side: Side,
    node: Option<&'a N>,
}

impl<'a, N> Difference<'a, N> {
    /// Builds a difference record.
    #[must_use]
    pub const fn new(path: String, side: Side, node: Option<&'a N>) -> Self {
        Self { path, side, node }
    }

    /// JSONPath-style locator of the disagreeing node.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The side this record reports on.
    #[must_use]
    pub const fn side(&self) -> Side {
        self.side
    }

    /// The node found on [`Self::side`], if any.
    #[must_use]
    pub const fn node(&self) -> Option<&'a N> {
        self.node
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors() {
        let node = 42u32;
        let difference = Difference::new("$.answer".to_owned(), Side::Left, Some(&node));
        assert_eq!(difference.path(), "$.answer");
        assert_eq!(difference.side(), Side::Left);
        assert_eq!(difference.node(), Some(&42));

        let absent: Difference<'_, u32> = Difference::new("$".to_owned(), Side::Right, None);
        assert_eq!(absent.node(), None);
    }
}
