// Copyright 2026 the Tidytree Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tidytree Model: the rooted, ordered, labeled tree shared by the tidytree crates.
//!
//! [`LabeledTree`] is a plain value tree: each node owns its label and its
//! ordered children outright, there are no parent or sibling links, and no
//! node is mutated after construction. The notation crate builds these trees
//! from text; the layout crate consumes them and produces positioned trees.
//!
//! Sibling order is semantically significant throughout the workspace: it is
//! the left-to-right order in which subtrees are packed and drawn.
//!
//! ## Minimal example
//!
//! ```rust
//! use tidytree_model::LabeledTree;
//!
//! let tree = LabeledTree::new("a", vec![LabeledTree::leaf("b"), LabeledTree::leaf("c")]);
//! assert_eq!(tree.height(), 1);
//! assert_eq!(tree.node_count(), 3);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod tree;

pub use tree::LabeledTree;
