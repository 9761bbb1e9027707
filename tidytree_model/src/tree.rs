// Copyright 2026 the Tidytree Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The labeled tree type and its structural queries.

use alloc::vec::Vec;

/// A rooted, ordered tree node carrying a label of type `T`.
///
/// Every node owns its children by value, so the structure is acyclic by
/// construction and freed as one unit when the root is dropped. The `children`
/// order is the left-to-right sibling order used by layout and drawing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LabeledTree<T> {
    /// The node's label.
    pub label: T,
    /// Ordered child subtrees, leftmost first. Empty for leaves.
    pub children: Vec<LabeledTree<T>>,
}

impl<T> LabeledTree<T> {
    /// Creates a node with the given label and children.
    #[must_use]
    pub fn new(label: T, children: Vec<Self>) -> Self {
        Self { label, children }
    }

    /// Creates a childless node.
    #[must_use]
    pub fn leaf(label: T) -> Self {
        Self {
            label,
            children: Vec::new(),
        }
    }

    /// Returns `true` if this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Returns the height of this subtree: the number of edges on the longest
    /// root-to-leaf path. A leaf has height 0.
    ///
    /// Callers that request per-depth data (for example an extent overlay at a
    /// chosen level) are expected to clamp their depth against this value.
    pub fn height(&self) -> usize {
        self.children
            .iter()
            .map(|child| child.height() + 1)
            .max()
            .unwrap_or(0)
    }

    /// Returns the total number of nodes in this subtree, including the root.
    pub fn node_count(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(Self::node_count)
            .sum::<usize>()
    }

    /// Returns the structural left-right mirror of this tree.
    ///
    /// This reverses the sibling order at every node; labels are untouched.
    /// It is a *structural* transformation on the input tree, distinct from
    /// the coordinate reflection already implied by laying out under the
    /// opposite packing orientation.
    #[must_use]
    pub fn mirrored(self) -> Self {
        let mut children: Vec<Self> = self
            .children
            .into_iter()
            .map(Self::mirrored)
            .collect();
        children.reverse();
        Self {
            label: self.label,
            children,
        }
    }
}
