// SPDX-License-Identifier: MIT OR Apache-2.0
//! The comparison engine.
//!
//! Traversal is driven by an explicit work stack instead of recursion: each
//! [`Step`] either visits a node pair, advances a positional zip, or reports
//! an already-discovered difference. Popping steps lazily from the stack
//! gives incremental emission in document order, bounds memory to tree depth
//! plus the width of keyed groups, and keeps deep documents off the call
//! stack.

use std::iter::{Fuse, FusedIterator};
use std::mem;

use ahash::AHashMap;
use smallvec::SmallVec;

use difir_core::access::{ElementDescriptor, Elements, NodeAccess};
use difir_core::diff::{Difference, Side};
use difir_core::kind::ValueKind;
use difir_core::path;
use difir_core::policy::{ArrayMatch, MatchPolicy, PropertyMatch};

/// Nodes grouped under one matching key; almost always a single node.
type KeyGroup<'a, N> = SmallVec<[Option<&'a N>; 1]>;

enum Step<'a, N> {
    Visit {
        path: String,
        left: Option<&'a N>,
        right: Option<&'a N>,
    },
    Zip {
        path: String,
        left: Fuse<Elements<'a, N>>,
        right: Fuse<Elements<'a, N>>,
    },
    Report(Difference<'a, N>),
}

/// Lazy stream of differences between two trees.
///
/// Created by [`differences`] or [`differences_with`]. Yields records in
/// document order; an exhausted stream stays exhausted. Dropping the stream
/// early abandons the rest of the traversal.
pub struct Differences<'a, N, A> {
    access: &'a A,
    policy: MatchPolicy,
    stack: Vec<Step<'a, N>>,
}

/// Compares two trees under the default policy (arrays by position,
/// object properties by name).
pub fn differences<'a, N, A>(
    left: Option<&'a N>,
    right: Option<&'a N>,
    access: &'a A,
) -> Differences<'a, N, A>
where
    A: NodeAccess<N>,
{
    differences_with(left, right, access, MatchPolicy::default())
}

/// Compares two trees under an explicit matching policy.
pub fn differences_with<'a, N, A>(
    left: Option<&'a N>,
    right: Option<&'a N>,
    access: &'a A,
    policy: MatchPolicy,
) -> Differences<'a, N, A>
where
    A: NodeAccess<N>,
{
    Differences {
        access,
        policy,
        stack: vec![Step::Visit {
            path: path::ROOT.to_owned(),
            left,
            right,
        }],
    }
}

impl<'a, N, A> Iterator for Differences<'a, N, A>
where
    A: NodeAccess<N>,
{
    type Item = Difference<'a, N>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(step) = self.stack.pop() {
            match step {
                Step::Report(difference) => return Some(difference),
                Step::Visit { path, left, right } => self.visit(path, left, right),
                Step::Zip { path, left, right } => self.advance_zip(path, left, right),
            }
        }
        None
    }
}

impl<N, A> FusedIterator for Differences<'_, N, A> where A: NodeAccess<N> {}

impl<'a, N, A> Differences<'a, N, A>
where
    A: NodeAccess<N>,
{
    fn visit(&mut self, path: String, left: Option<&'a N>, right: Option<&'a N>) {
        let left_kind = self.access.kind(left);
        let right_kind = self.access.kind(right);

        // A kind mismatch is reported unconditionally, whatever the values.
        if left_kind != right_kind {
            self.push_pair(path, left, right);
            return;
        }

        match left_kind {
            ValueKind::Null => {}
            ValueKind::Boolean => {
                if self.access.boolean_value(left) != self.access.boolean_value(right) {
                    self.push_pair(path, left, right);
                }
            }
            ValueKind::String => {
                if self.access.string_value(left) != self.access.string_value(right) {
                    self.push_pair(path, left, right);
                }
            }
            ValueKind::Number => {
                if self.access.number_value(left) != self.access.number_value(right) {
                    self.push_pair(path, left, right);
                }
            }
            ValueKind::Array => match self.policy.arrays {
                ArrayMatch::Position => {
                    let left_elements = self.access.array_elements(left).fuse();
                    let right_elements = self.access.array_elements(right).fuse();
                    self.stack.push(Step::Zip {
                        path,
                        left: left_elements,
                        right: right_elements,
                    });
                }
                ArrayMatch::Key => {
                    let left_elements: Vec<_> = self.access.array_elements(left).collect();
                    let right_elements: Vec<_> = self.access.array_elements(right).collect();
                    self.join_by_key(path, &left_elements, &right_elements, path::combine_array_key);
                }
            },
            ValueKind::Object => match self.policy.properties {
                PropertyMatch::Position => {
                    let left_properties = self.access.object_properties(left).fuse();
                    let right_properties = self.access.object_properties(right).fuse();
                    self.stack.push(Step::Zip {
                        path,
                        left: left_properties,
                        right: right_properties,
                    });
                }
                PropertyMatch::Name => {
                    let left_properties: Vec<_> = self.access.object_properties(left).collect();
                    let right_properties: Vec<_> = self.access.object_properties(right).collect();
                    self.join_by_key(
                        path,
                        &left_properties,
                        &right_properties,
                        path::combine_property_name,
                    );
                }
            },
        }
    }

    /// Advances a positional zip by one element pair.
    ///
    /// The zip step is re-pushed below the work it produces, so each pair is
    /// fully compared before the next one is pulled. Indices come from the
    /// element descriptors of whichever side still has content.
    fn advance_zip(
        &mut self,
        path: String,
        mut left: Fuse<Elements<'a, N>>,
        mut right: Fuse<Elements<'a, N>>,
    ) {
        match (left.next(), right.next()) {
            (Some(left_element), Some(right_element)) => {
                let element_path = path::combine_array_index(&path, left_element.index);
                self.stack.push(Step::Zip { path, left, right });
                self.stack.push(Step::Visit {
                    path: element_path,
                    left: left_element.node,
                    right: right_element.node,
                });
            }
            (Some(left_element), None) => {
                let element_path = path::combine_array_index(&path, left_element.index);
                self.stack.push(Step::Zip { path, left, right });
                self.stack.push(Step::Report(Difference::new(
                    element_path,
                    Side::Left,
                    left_element.node,
                )));
            }
            (None, Some(right_element)) => {
                let element_path = path::combine_array_index(&path, right_element.index);
                self.stack.push(Step::Zip { path, left, right });
                self.stack.push(Step::Report(Difference::new(
                    element_path,
                    Side::Right,
                    right_element.node,
                )));
            }
            (None, None) => {}
        }
    }

    /// Keyed reconciliation: one-sided elements first (left then right, each
    /// in enumeration order), then joined keys in left first-occurrence
    /// order. A key with more than one element on either side degrades to a
    /// positional zip over the re-indexed group.
    fn join_by_key(
        &mut self,
        path: String,
        left_elements: &[ElementDescriptor<'a, N>],
        right_elements: &[ElementDescriptor<'a, N>],
        combine: fn(&str, &str) -> String,
    ) {
        let left_groups = KeyGroups::build(left_elements);
        let mut right_groups = KeyGroups::build(right_elements);

        let mut pending = Vec::new();

        for element in left_elements {
            if !right_groups.contains(&element.key) {
                pending.push(Step::Report(Difference::new(
                    combine(&path, &element.key),
                    Side::Left,
                    element.node,
                )));
            }
        }
        for element in right_elements {
            if !left_groups.contains(&element.key) {
                pending.push(Step::Report(Difference::new(
                    combine(&path, &element.key),
                    Side::Right,
                    element.node,
                )));
            }
        }

        for (key, left_nodes) in left_groups.order {
            let Some(right_nodes) = right_groups.take(&key) else {
                continue;
            };
            let group_path = combine(&path, &key);
            if left_nodes.len() > 1 || right_nodes.len() > 1 {
                pending.push(Step::Zip {
                    path: group_path,
                    left: reindexed(key.clone(), left_nodes).fuse(),
                    right: reindexed(key, right_nodes).fuse(),
                });
            } else {
                pending.push(Step::Visit {
                    path: group_path,
                    left: left_nodes[0],
                    right: right_nodes[0],
                });
            }
        }

        self.stack.extend(pending.into_iter().rev());
    }

    fn push_pair(&mut self, path: String, left: Option<&'a N>, right: Option<&'a N>) {
        self.stack
            .push(Step::Report(Difference::new(path.clone(), Side::Right, right)));
        self.stack
            .push(Step::Report(Difference::new(path, Side::Left, left)));
    }
}

/// Order-preserving key -> nodes multimap over one side's elements.
struct KeyGroups<'a, N> {
    order: Vec<(String, KeyGroup<'a, N>)>,
    index: AHashMap<String, usize>,
}

impl<'a, N> KeyGroups<'a, N> {
    fn build(elements: &[ElementDescriptor<'a, N>]) -> Self {
        let mut order: Vec<(String, KeyGroup<'a, N>)> = Vec::new();
        let mut index = AHashMap::with_capacity(elements.len());
        for element in elements {
            let slot = *index.entry(element.key.clone()).or_insert_with(|| {
                order.push((element.key.clone(), SmallVec::new()));
                order.len() - 1
            });
            order[slot].1.push(element.node);
        }
        Self { order, index }
    }

    fn contains(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    fn take(&mut self, key: &str) -> Option<KeyGroup<'a, N>> {
        let slot = *self.index.get(key)?;
        Some(mem::take(&mut self.order[slot].1))
    }
}

/// Rewraps a key group as descriptors indexed by ordinal within the group.
fn reindexed<'a, N>(key: String, nodes: KeyGroup<'a, N>) -> Elements<'a, N> {
    Box::new(
        nodes
            .into_iter()
            .enumerate()
            .map(move |(index, node)| ElementDescriptor::new(index, key.clone(), node)),
    )
}
