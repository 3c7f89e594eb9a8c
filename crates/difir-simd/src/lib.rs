// SPDX-License-Identifier: MIT OR Apache-2.0
//! [`simd_json::OwnedValue`] adapter for difir.
//!
//! The same capability surface as `difir-json`, over simd-json's owned DOM.
//! simd-json parses numbers into `i64`/`u64`/`f64` tags, so integer
//! comparison is exact and float comparison is exact over what the parser
//! kept; documents whose fidelity matters beyond `f64` belong on the
//! serde_json adapter with `arbitrary_precision`.

#![deny(missing_docs)]
#![deny(rust_2018_idioms)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]

use std::borrow::Cow;
use std::fmt;
use std::iter;
use std::str::FromStr;

use simd_json::prelude::ValueAsScalar;
use simd_json::{OwnedValue, StaticNode};
use thiserror::Error;

use difir_core::access::{ElementDescriptor, Elements, NodeAccess};
use difir_core::kind::ValueKind;
use difir_core::number::Decimal;

/// Computes a matching key for an array element, or `None` to fall back to
/// the synthetic position-derived key.
pub type ArrayKeyFn = Box<dyn Fn(usize, Option<&OwnedValue>) -> Option<String> + Send + Sync>;

/// Node access over [`simd_json::OwnedValue`] trees.
pub struct SimdAccess {
    array_key: Option<ArrayKeyFn>,
}

impl SimdAccess {
    /// Adapter with synthetic array keys.
    #[must_use]
    pub const fn new() -> Self {
        Self { array_key: None }
    }

    /// Shared instance of the default adapter.
    #[must_use]
    pub fn shared() -> &'static Self {
        static SHARED: SimdAccess = SimdAccess::new();
        &SHARED
    }

    /// Adapter with a custom array element key selector.
    #[must_use]
    pub fn with_array_key(
        selector: impl Fn(usize, Option<&OwnedValue>) -> Option<String> + Send + Sync + 'static,
    ) -> Self {
        Self {
            array_key: Some(Box::new(selector)),
        }
    }

    /// Adapter that keys array elements by a scalar identity field.
    #[must_use]
    pub fn keyed_by_field(field: impl Into<String>) -> Self {
        let field = field.into();
        Self::with_array_key(move |_, node| match node {
            Some(OwnedValue::Object(properties)) => scalar_key(properties.get(field.as_str())?),
            _ => None,
        })
    }
}

impl Default for SimdAccess {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for SimdAccess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SimdAccess")
            .field("array_key", &self.array_key.as_ref().map(|_| ".."))
            .finish()
    }
}

fn scalar_key(value: &OwnedValue) -> Option<String> {
    match value {
        OwnedValue::Static(StaticNode::Bool(value)) => Some(value.to_string()),
        OwnedValue::Static(StaticNode::I64(value)) => Some(value.to_string()),
        OwnedValue::Static(StaticNode::U64(value)) => Some(value.to_string()),
        OwnedValue::Static(StaticNode::F64(value)) => Some(value.to_string()),
        OwnedValue::String(value) => Some(value.clone()),
        _ => None,
    }
}

impl NodeAccess<OwnedValue> for SimdAccess {
    fn kind(&self, node: Option<&OwnedValue>) -> ValueKind {
        match node {
            None | Some(OwnedValue::Static(StaticNode::Null)) => ValueKind::Null,
            Some(OwnedValue::Static(StaticNode::Bool(_))) => ValueKind::Boolean,
            Some(OwnedValue::Static(_)) => ValueKind::Number,
            Some(OwnedValue::String(_)) => ValueKind::String,
            Some(OwnedValue::Array(_)) => ValueKind::Array,
            Some(OwnedValue::Object(_)) => ValueKind::Object,
        }
    }

    /// # Panics
    /// When called on a present node that is not a boolean.
    fn boolean_value(&self, node: Option<&OwnedValue>) -> bool {
        match node {
            None => false,
            Some(value) => value
                .as_bool()
                .unwrap_or_else(|| panic!("boolean_value called on non-boolean node: {value:?}")),
        }
    }

    /// # Panics
    /// When called on a present node that is not a string.
    fn string_value<'a>(&self, node: Option<&'a OwnedValue>) -> Cow<'a, str> {
        match node {
            None => Cow::Borrowed(""),
            Some(value) => Cow::Borrowed(
                value
                    .as_str()
                    .unwrap_or_else(|| panic!("string_value called on non-string node: {value:?}")),
            ),
        }
    }

    /// # Panics
    /// When called on a present node that is not a finite number.
    fn number_value(&self, node: Option<&OwnedValue>) -> Decimal {
        match node {
            None => Decimal::ZERO,
            Some(value) => {
                if let Some(int) = value.as_i64() {
                    Decimal::from_i64(int)
                } else if let Some(int) = value.as_u64() {
                    Decimal::from_u64(int)
                } else if let Some(float) = value.as_f64() {
                    Decimal::from_f64(float).unwrap_or_else(|| {
                        panic!("number_value called on non-finite number: {value:?}")
                    })
                } else {
                    panic!("number_value called on non-number node: {value:?}")
                }
            }
        }
    }

    /// # Panics
    /// When called on a present node that is not an array.
    fn array_elements<'a>(&'a self, node: Option<&'a OwnedValue>) -> Elements<'a, OwnedValue> {
        match node {
            None => Box::new(iter::empty()),
            Some(OwnedValue::Array(items)) => {
                Box::new(items.iter().enumerate().map(move |(index, item)| {
                    ElementDescriptor::new(
                        index,
                        self.array_element_key(index, Some(item)),
                        Some(item),
                    )
                }))
            }
            Some(other) => panic!("array_elements called on non-array node: {other:?}"),
        }
    }

    /// # Panics
    /// When called on a present node that is not an object.
    fn object_properties<'a>(&'a self, node: Option<&'a OwnedValue>) -> Elements<'a, OwnedValue> {
        match node {
            None => Box::new(iter::empty()),
            Some(OwnedValue::Object(properties)) => {
                Box::new(properties.iter().enumerate().map(|(index, (name, value))| {
                    ElementDescriptor::new(index, name.clone(), Some(value))
                }))
            }
            Some(other) => panic!("object_properties called on non-object node: {other:?}"),
        }
    }

    fn array_element_key(&self, index: usize, node: Option<&OwnedValue>) -> String {
        self.array_key
            .as_ref()
            .and_then(|selector| selector(index, node))
            .unwrap_or_else(|| format!("element #{index}"))
    }
}

/// Failure to parse a JSON document.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The text is not well-formed JSON.
    #[error("malformed JSON document: {0}")]
    Parse(#[from] simd_json::Error),
}

/// An owned, parsed JSON document.
///
/// simd-json parses in place, so [`SimdDocument::parse`] owns the scratch
/// buffer dance; borrow the [`SimdDocument::root`] of two documents to
/// compare them.
#[derive(Debug, Clone, PartialEq)]
pub struct SimdDocument {
    root: OwnedValue,
}

impl SimdDocument {
    /// Parses a document from JSON text.
    ///
    /// # Errors
    /// Returns [`ParseError`] when the text is not well-formed JSON.
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        let mut buffer = text.as_bytes().to_vec();
        Ok(Self {
            root: simd_json::to_owned_value(&mut buffer)?,
        })
    }

    /// The document's root node.
    #[must_use]
    pub const fn root(&self) -> &OwnedValue {
        &self.root
    }

    /// Consumes the document, returning its root node.
    #[must_use]
    pub fn into_root(self) -> OwnedValue {
        self.root
    }
}

impl FromStr for SimdDocument {
    type Err = ParseError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        Self::parse(text)
    }
}

impl From<OwnedValue> for SimdDocument {
    fn from(root: OwnedValue) -> Self {
        Self { root }
    }
}
