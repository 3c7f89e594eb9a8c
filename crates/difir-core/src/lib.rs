// SPDX-License-Identifier: MIT OR Apache-2.0
//! Core types for difir structural JSON comparison
//!
//! This crate provides the foundational types shared across the difir
//! ecosystem:
//!
//! - [`kind`] - Closed classification of JSON value kinds
//! - [`diff`] - The difference record and its side tag
//! - [`path`] - JSONPath-style locator building
//! - [`policy`] - Element/property matching configuration
//! - [`number`] - Exact decimal numbers for literal comparison
//! - [`access`] - The capability trait adapters implement over concrete trees

#![deny(missing_docs)]
#![deny(rust_2018_idioms)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
#![deny(clippy::cargo)]

/// Node access capability consumed by the comparator
pub mod access;
/// Difference records emitted by a comparison
pub mod diff;
/// JSON value kind classification
pub mod kind;
/// Exact decimal numbers parsed from JSON literals
pub mod number;
/// JSONPath-style locator building
pub mod path;
/// Matching policy configuration
pub mod policy;
// Re-exports for convenience
pub use access::{ElementDescriptor, Elements, NodeAccess};
pub use diff::{Difference, Side};
pub use kind::ValueKind;
pub use number::Decimal;
pub use policy::{ArrayMatch, MatchPolicy, PropertyMatch};
