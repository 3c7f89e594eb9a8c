// SPDX-License-Identifier: MIT OR Apache-2.0
//! # Structural JSON comparison
//!
//! Walks two parsed JSON trees through a [`difir_core::NodeAccess`] adapter
//! and yields one [`difir_core::Difference`] per structural disagreement,
//! each tagged with the JSONPath-style locator where it occurs and the side
//! carrying the extra or disagreeing value.
//!
//! The walk is lazy: [`differences`] returns an iterator driven by an
//! explicit work stack, so a consumer checking only "are these equal?" can
//! stop at the first yielded record without paying for the full traversal.
//!
//! ## Matching
//!
//! How composite nodes reconcile their children is configured per run with a
//! [`difir_core::MatchPolicy`]: array elements pair by position or by a
//! computed key, object properties by name or by position. Duplicate keys
//! within one keyed group always degrade to positional pairing inside that
//! group.

#![deny(missing_docs)]
#![deny(rust_2018_idioms)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]

mod engine;
mod format;

pub use engine::{Differences, differences, differences_with};
pub use format::{DiffFormat, SimpleDiffFormat, format_all};
