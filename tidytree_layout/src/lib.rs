// Copyright 2026 the Tidytree Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tidytree Layout: tidy node-link layout for labeled trees.
//!
//! Given a [`tidytree_model::LabeledTree`] of arbitrary shape, [`layout`]
//! assigns every node a horizontal offset relative to its parent such that no
//! two subtree silhouettes overlap at any shared depth, in a single bottom-up
//! pass with no iterative relaxation.
//!
//! The machinery is a small interval arithmetic over subtree silhouettes:
//!
//! - [`Extent`]: one [`Span`] per depth level of a subtree, in a coordinate
//!   frame centered on the subtree's own root. The silhouette of a subtree.
//! - [`Extent::fit`]: the minimum shift that keeps an incoming silhouette
//!   clear of an already-placed one at every shared level.
//! - [`Extent::merged`]: the combined silhouette of two placed siblings.
//! - The [`pack`] module: given sibling silhouettes, compute one offset per
//!   sibling, packed left, right, or centered ([`Orientation`]).
//!
//! Positions are in abstract units: one unit is the minimum separation
//! between node centers at the same depth. Scaling to pixels, and vertical
//! placement per level, is the renderer's concern (see `tidytree_scene`).
//!
//! Because right packing is the exact horizontal mirror of left packing and
//! centering is the per-node mean of the two, the layout inherits the classic
//! tidy-tree properties: subtrees of irregular shape interlock as tightly as
//! legality allows, and symmetric trees come out symmetric.
//!
//! Layout is total: any finite tree has a layout, and a single node yields
//! offset 0 with the one-level extent `(0, 0)`. Each invocation builds a
//! fresh [`PositionedTree`]; nothing is cached or mutated in place.
//!
//! ## Minimal example
//!
//! ```rust
//! use tidytree_model::LabeledTree;
//! use tidytree_layout::{Orientation, layout};
//!
//! let tree = LabeledTree::new("a", vec![LabeledTree::leaf("b"), LabeledTree::leaf("c")]);
//! let positioned = layout(tree, Orientation::Center);
//!
//! // The two children sit half a unit either side of their parent.
//! let offsets: Vec<f64> = positioned.children().iter().map(|c| c.offset()).collect();
//! assert_eq!(offsets, [-0.5, 0.5]);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod build;
mod extent;
pub mod pack;

pub use build::{Orientation, PositionedTree, layout};
pub use extent::{Extent, Span};
