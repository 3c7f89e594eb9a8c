// SPDX-License-Identifier: MIT OR Apache-2.0
//! Node access capability consumed by the comparator.
//!
//! The comparator never constructs or mutates tree nodes; it reads them
//! through a [`NodeAccess`] implementation supplied by an adapter crate.
//! Absent nodes are threaded as `None` and classify as
//! [`ValueKind::Null`], so adapters must accept `None` everywhere.

use std::borrow::Cow;

use crate::kind::ValueKind;
use crate::number::Decimal;

/// One enumerated child of a composite node.
///
/// `index` is the enumeration ordinal, independent of `key`. For object
/// properties `key` is the property name; for array elements it is the
/// computed matching key (synthetic by default).
#[derive(Debug, Clone, PartialEq)]
pub struct ElementDescriptor<'a, N> {
    /// Position within the enumeration, starting at zero.
    pub index: usize,
    /// Matching key used by keyed reconciliation.
    pub key: String,
    /// The child node, if present.
    pub node: Option<&'a N>,
}

impl<'a, N> ElementDescriptor<'a, N> {
    /// Builds a descriptor.
    #[must_use]
    pub const fn new(index: usize, key: String, node: Option<&'a N>) -> Self {
        Self { index, key, node }
    }
}

/// A lazily produced child enumeration.
pub type Elements<'a, N> = Box<dyn Iterator<Item = ElementDescriptor<'a, N>> + 'a>;

/// Read capability over an opaque tree node type.
///
/// Implementations must be pure: repeated calls on the same node return the
/// same answers. Scalar extractors are only defined for nodes of the
/// matching kind — the comparator calls them strictly after classification,
/// and adapters are expected to fail loudly (panic) on any other use rather
/// than coerce.
pub trait NodeAccess<N> {
    /// Classifies a node; absent nodes are [`ValueKind::Null`].
    fn kind(&self, node: Option<&N>) -> ValueKind;

    /// Boolean value of a [`ValueKind::Boolean`] node; `false` when absent.
    fn boolean_value(&self, node: Option<&N>) -> bool;

    /// String value of a [`ValueKind::String`] node; empty when absent.
    fn string_value<'a>(&self, node: Option<&'a N>) -> Cow<'a, str>;

    /// Numeric value of a [`ValueKind::Number`] node; zero when absent.
    fn number_value(&self, node: Option<&N>) -> Decimal;

    /// Enumerates the elements of a [`ValueKind::Array`] node in document
    /// order; empty when absent.
    fn array_elements<'a>(&'a self, node: Option<&'a N>) -> Elements<'a, N>;

    /// Enumerates the properties of a [`ValueKind::Object`] node, `key`
    /// carrying the property name; empty when absent.
    fn object_properties<'a>(&'a self, node: Option<&'a N>) -> Elements<'a, N>;

    /// Computes the matching key for the array element at `index`.
    ///
    /// The default is the synthetic, position-derived `element #<index>`,
    /// which makes keyed matching degenerate to positional matching.
    /// Adapters override this to derive keys from element identity (an `id`
    /// field, say) so keyed matching tolerates reordering.
    fn array_element_key(&self, index: usize, node: Option<&N>) -> String {
        let _ = node;
        format!("element #{index}")
    }
}
