// SPDX-License-Identifier: MIT OR Apache-2.0
//! Matching policy configuration.
//!
//! Two orthogonal choices parameterize a comparison run: how array elements
//! pair up between the two trees, and how object properties do. The policy
//! is fixed for the whole traversal; the only exception is inside a
//! duplicate-key group, where the comparator always falls back to positional
//! pairing because ambiguous keys leave no other consistent order.

use serde::{Deserialize, Serialize};

/// How array elements of the two trees are paired.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArrayMatch {
    /// Pair elements by ordinal position.
    #[default]
    Position,
    /// Pair elements by their computed matching key.
    ///
    /// With the default synthetic keys this degenerates to positional
    /// pairing; adapters supply an identity-derived key to make reordered
    /// arrays compare equal.
    Key,
}

/// How object properties of the two trees are paired.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyMatch {
    /// Pair properties by name.
    #[default]
    Name,
    /// Pair properties by enumeration position.
    Position,
}

/// The matching configuration for one comparison run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MatchPolicy {
    /// Array element pairing strategy.
    pub arrays: ArrayMatch,
    /// Object property pairing strategy.
    pub properties: PropertyMatch,
}

impl MatchPolicy {
    /// Builds a policy from both axes.
    #[must_use]
    pub const fn new(arrays: ArrayMatch, properties: PropertyMatch) -> Self {
        Self { arrays, properties }
    }

    /// Returns the policy with the array axis replaced.
    #[must_use]
    pub const fn arrays_by(mut self, arrays: ArrayMatch) -> Self {
        self.arrays = arrays;
        self
    }

    /// Returns the policy with the object axis replaced.
    #[must_use]
    pub const fn properties_by(mut self, properties: PropertyMatch) -> Self {
        self.properties = properties;
        self
    }
}
