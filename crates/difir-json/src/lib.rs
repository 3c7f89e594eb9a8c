// SPDX-License-Identifier: MIT OR Apache-2.0
//! [`serde_json::Value`] adapter for difir.
//!
//! [`JsonAccess`] implements the node access capability over serde_json
//! trees. The crate enables serde_json's `preserve_order` feature so object
//! properties enumerate in document order, and `arbitrary_precision` so
//! number literals reach the comparator exactly as written instead of
//! through `f64`.
//!
//! Array elements carry the synthetic `element #<index>` matching key by
//! default; build the adapter with [`JsonAccess::keyed_by_field`] (or a
//! custom selector) to match reordered arrays by element identity.

#![deny(missing_docs)]
#![deny(rust_2018_idioms)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]

use std::borrow::Cow;
use std::fmt;
use std::iter;
use std::str::FromStr;

use serde_json::Value;
use thiserror::Error;

use difir_core::access::{ElementDescriptor, Elements, NodeAccess};
use difir_core::kind::ValueKind;
use difir_core::number::Decimal;

/// Computes a matching key for an array element, or `None` to fall back to
/// the synthetic position-derived key.
pub type ArrayKeyFn = Box<dyn Fn(usize, Option<&Value>) -> Option<String> + Send + Sync>;

/// Node access over [`serde_json::Value`] trees.
pub struct JsonAccess {
    array_key: Option<ArrayKeyFn>,
}

impl JsonAccess {
    /// Adapter with synthetic array keys.
    #[must_use]
    pub const fn new() -> Self {
        Self { array_key: None }
    }

    /// Shared instance of the default adapter.
    #[must_use]
    pub fn shared() -> &'static Self {
        static SHARED: JsonAccess = JsonAccess::new();
        &SHARED
    }

    /// Adapter with a custom array element key selector.
    ///
    /// The selector may decline (return `None`) per element; those elements
    /// keep the synthetic key.
    #[must_use]
    pub fn with_array_key(
        selector: impl Fn(usize, Option<&Value>) -> Option<String> + Send + Sync + 'static,
    ) -> Self {
        Self {
            array_key: Some(Box::new(selector)),
        }
    }

    /// Adapter that keys array elements by a scalar identity field.
    ///
    /// Elements that are not objects, lack the field, or hold a composite
    /// or null value there, keep the synthetic key.
    #[must_use]
    pub fn keyed_by_field(field: impl Into<String>) -> Self {
        let field = field.into();
        Self::with_array_key(move |_, node| scalar_key(node?.as_object()?.get(&field)?))
    }
}

impl Default for JsonAccess {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for JsonAccess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JsonAccess")
            .field("array_key", &self.array_key.as_ref().map(|_| ".."))
            .finish()
    }
}

fn scalar_key(value: &Value) -> Option<String> {
    match value {
        Value::Bool(value) => Some(value.to_string()),
        Value::Number(value) => Some(value.to_string()),
        Value::String(value) => Some(value.clone()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

impl NodeAccess<Value> for JsonAccess {
    fn kind(&self, node: Option<&Value>) -> ValueKind {
        match node {
            None | Some(Value::Null) => ValueKind::Null,
            Some(Value::Bool(_)) => ValueKind::Boolean,
            Some(Value::String(_)) => ValueKind::String,
            Some(Value::Number(_)) => ValueKind::Number,
            Some(Value::Array(_)) => ValueKind::Array,
            Some(Value::Object(_)) => ValueKind::Object,
        }
    }

    /// # Panics
    /// When called on a present node that is not a boolean.
    fn boolean_value(&self, node: Option<&Value>) -> bool {
        match node {
            None => false,
            Some(Value::Bool(value)) => *value,
            Some(other) => panic!("boolean_value called on non-boolean node: {other}"),
        }
    }

    /// # Panics
    /// When called on a present node that is not a string.
    fn string_value<'a>(&self, node: Option<&'a Value>) -> Cow<'a, str> {
        match node {
            None => Cow::Borrowed(""),
            Some(Value::String(value)) => Cow::Borrowed(value.as_str()),
            Some(other) => panic!("string_value called on non-string node: {other}"),
        }
    }

    /// # Panics
    /// When called on a present node that is not a number.
    fn number_value(&self, node: Option<&Value>) -> Decimal {
        match node {
            None => Decimal::ZERO,
            Some(Value::Number(value)) => {
                let literal = value.to_string();
                Decimal::parse(&literal)
                    .unwrap_or_else(|| unreachable!("serde_json emitted malformed literal {literal}"))
            }
            Some(other) => panic!("number_value called on non-number node: {other}"),
        }
    }

    /// # Panics
    /// When called on a present node that is not an array.
    fn array_elements<'a>(&'a self, node: Option<&'a Value>) -> Elements<'a, Value> {
        match node {
            None => Box::new(iter::empty()),
            Some(Value::Array(items)) => Box::new(items.iter().enumerate().map(move |(index, item)| {
                ElementDescriptor::new(index, self.array_element_key(index, Some(item)), Some(item))
            })),
            Some(other) => panic!("array_elements called on non-array node: {other}"),
        }
    }

    /// # Panics
    /// When called on a present node that is not an object.
    fn object_properties<'a>(&'a self, node: Option<&'a Value>) -> Elements<'a, Value> {
        match node {
            None => Box::new(iter::empty()),
            Some(Value::Object(properties)) => {
                Box::new(properties.iter().enumerate().map(|(index, (name, value))| {
                    ElementDescriptor::new(index, name.clone(), Some(value))
                }))
            }
            Some(other) => panic!("object_properties called on non-object node: {other}"),
        }
    }

    fn array_element_key(&self, index: usize, node: Option<&Value>) -> String {
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
    Parse(#[from] serde_json::Error),
}

/// An owned, parsed JSON document.
///
/// Convenience for callers starting from text; borrow the [`Document::root`]
/// of two documents to compare them.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    root: Value,
}

impl Document {
    /// Parses a document from JSON text.
    ///
    /// # Errors
    /// Returns [`ParseError`] when the text is not well-formed JSON.
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        Ok(Self {
            root: serde_json::from_str(text)?,
        })
    }

    /// The document's root node.
    #[must_use]
    pub const fn root(&self) -> &Value {
        &self.root
    }

    /// Consumes the document, returning its root node.
    #[must_use]
    pub fn into_root(self) -> Value {
        self.root
    }
}

impl FromStr for Document {
    type Err = ParseError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        Self::parse(text)
    }
}

impl From<Value> for Document {
    fn from(root: Value) -> Self {
        Self { root }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn kinds_classify_including_absent() {
        let access = JsonAccess::shared();
        assert_eq!(access.kind(None), ValueKind::Null);
        assert_eq!(access.kind(Some(&json!(null))), ValueKind::Null);
        assert_eq!(access.kind(Some(&json!(true))), ValueKind::Boolean);
        assert_eq!(access.kind(Some(&json!("s"))), ValueKind::String);
        assert_eq!(access.kind(Some(&json!(1.5))), ValueKind::Number);
        assert_eq!(access.kind(Some(&json!([]))), ValueKind::Array);
        assert_eq!(access.kind(Some(&json!({}))), ValueKind::Object);
    }

    #[test]
    fn absent_scalars_default() {
        let access = JsonAccess::shared();
        assert!(!access.boolean_value(None));
        assert_eq!(access.string_value(None), "");
        assert!(access.number_value(None).is_zero());
        assert_eq!(access.array_elements(None).count(), 0);
        assert_eq!(access.object_properties(None).count(), 0);
    }

    #[test]
    fn numbers_compare_by_value_not_spelling() {
        let access = JsonAccess::shared();
        let one_point_zero: Value = serde_json::from_str("1.0").unwrap();
        let one_point_zero_zero: Value = serde_json::from_str("1.00").unwrap();
        assert_eq!(
            access.number_value(Some(&one_point_zero)),
            access.number_value(Some(&one_point_zero_zero))
        );
    }

    #[test]
    fn object_properties_enumerate_in_document_order() {
        let access = JsonAccess::shared();
        let value: Value = serde_json::from_str(r#"{"z": 1, "a": 2}"#).unwrap();
        let names: Vec<_> = access
            .object_properties(Some(&value))
            .map(|property| property.key)
            .collect();
        assert_eq!(names, vec!["z".to_owned(), "a".to_owned()]);
    }

    #[test]
    fn array_elements_carry_synthetic_keys_and_ordinals() {
        let access = JsonAccess::shared();
        let value = json!(["a", "b"]);
        let elements: Vec<_> = access.array_elements(Some(&value)).collect();
        assert_eq!(elements.len(), 2);
        assert_eq!(elements[0].index, 0);
        assert_eq!(elements[0].key, "element #0");
        assert_eq!(elements[1].key, "element #1");
    }

    #[test]
    fn keyed_by_field_extracts_scalar_identities() {
        let access = JsonAccess::keyed_by_field("id");
        let value = json!([{"id": 7, "v": "x"}, {"id": "a", "v": "y"}, {"v": "z"}, 42]);
        let keys: Vec<_> = access
            .array_elements(Some(&value))
            .map(|element| element.key)
            .collect();
        assert_eq!(
            keys,
            vec![
                "7".to_owned(),
                "a".to_owned(),
                "element #2".to_owned(),
                "element #3".to_owned(),
            ]
        );
    }

    #[test]
    fn documents_parse_and_reject() {
        let document = Document::parse(r#"{"a": 1}"#).unwrap();
        assert_eq!(document.root(), &json!({"a": 1}));
        assert!("[1, 2".parse::<Document>().is_err());
    }

    #[test]
    #[should_panic(expected = "string_value called on non-string node")]
    fn scalar_extraction_on_wrong_kind_panics() {
        let _ = JsonAccess::shared().string_value(Some(&json!(1)));
    }
}
