// Copyright 2026 the Tidytree Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The bottom-up layout pass producing positioned trees.

use alloc::vec::Vec;

use tidytree_model::LabeledTree;

use crate::extent::Extent;
use crate::pack::{pack_center, pack_left, pack_right};

/// How siblings are packed around their parent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Pack left to right; slack accumulates on the right.
    Left,
    /// Center each node between its two extreme legal positions.
    #[default]
    Center,
    /// Pack right to left; the exact mirror of [`Orientation::Left`].
    Right,
}

/// A laid-out tree node: the original label, the node's horizontal offset
/// relative to its parent, and the silhouette of its subtree.
///
/// Offsets are per-edge and relative; absolute coordinates are obtained by
/// accumulating offsets along the root-to-node path in a top-down traversal
/// (`tidytree_scene` does this when building render geometry). The root's
/// offset is always 0 in its own frame, and each node's extent is expressed
/// in that node's own local frame.
#[derive(Clone, Debug, PartialEq)]
pub struct PositionedTree<T> {
    label: T,
    offset: f64,
    extent: Extent,
    children: Vec<PositionedTree<T>>,
}

impl<T> PositionedTree<T> {
    /// The node's label.
    pub fn label(&self) -> &T {
        &self.label
    }

    /// Horizontal offset relative to the parent's frame, in layout units.
    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// The silhouette of this subtree, in this node's local frame.
    ///
    /// For the root node this is the extent of the whole diagram; its length
    /// is always `height + 1`.
    pub fn extent(&self) -> &Extent {
        &self.extent
    }

    /// Ordered children, leftmost first.
    pub fn children(&self) -> &[Self] {
        &self.children
    }

    /// Height of this subtree, read off the extent.
    pub fn height(&self) -> usize {
        self.extent.len() - 1
    }
}

/// Lays out a labeled tree, assigning every node a horizontal offset relative
/// to its parent so that sibling subtrees never overlap at any shared depth.
///
/// One bottom-up post-order pass: children are laid out independently in
/// their own frames, packed according to `orientation`, and their shifted
/// silhouettes merged (plus the node's own `(0, 0)` level) into the parent's
/// extent. Total for any finite tree; a single node yields offset 0 and the
/// one-level extent `(0, 0)`. Runs in `O(n · h)` for `n` nodes and height `h`.
#[must_use]
pub fn layout<T>(tree: LabeledTree<T>, orientation: Orientation) -> PositionedTree<T> {
    let LabeledTree { label, children } = tree;
    let mut children: Vec<PositionedTree<T>> = children
        .into_iter()
        .map(|child| layout(child, orientation))
        .collect();

    let extents: Vec<Extent> = children.iter().map(|c| c.extent.clone()).collect();
    let offsets = match orientation {
        Orientation::Left => pack_left(&extents),
        Orientation::Center => pack_center(&extents),
        Orientation::Right => pack_right(&extents),
    };

    let mut merged = Extent::new();
    for (extent, &dx) in extents.iter().zip(offsets.iter()) {
        merged = merged.merged(&extent.translated(dx));
    }
    for (child, &dx) in children.iter_mut().zip(offsets.iter()) {
        child.offset = dx;
    }

    PositionedTree {
        label,
        offset: 0.0,
        extent: merged.with_root_level(),
        children,
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::String;
    use alloc::vec::Vec;

    use tidytree_model::LabeledTree;
    use tidytree_notation::parse;

    use super::{Orientation, PositionedTree, layout};
    use crate::extent::Span;

    const ORIENTATIONS: [Orientation; 3] = [
        Orientation::Left,
        Orientation::Center,
        Orientation::Right,
    ];

    fn tree(text: &str) -> LabeledTree<String> {
        parse(text).unwrap()
    }

    /// An irregular shape: a deep chain, a lone leaf, and a lopsided fork.
    const IRREGULAR: &str =
        "L(a,[L(b,[L(c,[L(d,[])])]),L(e,[]),L(f,[L(g,[]),L(h,[L(i,[])])])])";

    #[test]
    fn leaf_yields_origin_and_unit_extent() {
        for orientation in ORIENTATIONS {
            let positioned = layout(tree("L(X,[])"), orientation);
            assert_eq!(positioned.offset(), 0.0);
            assert_eq!(positioned.extent().levels(), [Span::ZERO]);
            assert_eq!(positioned.height(), 0);
            assert!(positioned.children().is_empty());
        }
    }

    #[test]
    fn two_leaves_center_symmetrically() {
        let positioned = layout(tree("L(A,[L(B,[]),L(C,[])])"), Orientation::Center);
        assert_eq!(positioned.offset(), 0.0);

        let offsets: Vec<f64> = positioned.children().iter().map(|c| c.offset()).collect();
        let k = offsets[1];
        assert!(k > 0.0, "right child must sit right of the parent");
        assert_eq!(offsets[0], -k, "children must be symmetric around 0");
        assert!(
            offsets[1] - offsets[0] >= 1.0,
            "siblings must be at least one separation unit apart"
        );

        // Root extent: own level plus the children's level, spanning exactly
        // from the left child's offset to the right child's.
        assert_eq!(positioned.extent().len(), 2);
        assert_eq!(
            positioned.extent().span_at(1),
            Some(Span {
                left: offsets[0],
                right: offsets[1],
            })
        );
    }

    #[test]
    fn left_packing_starts_at_origin() {
        let positioned = layout(tree("L(A,[L(B,[]),L(C,[]),L(D,[])])"), Orientation::Left);
        let offsets: Vec<f64> = positioned.children().iter().map(|c| c.offset()).collect();
        assert_eq!(offsets, [0.0, 1.0, 2.0]);
    }

    #[test]
    fn extent_length_matches_height_plus_one_everywhere() {
        fn check<T>(node: &PositionedTree<T>) {
            let structural_height = node
                .children()
                .iter()
                .map(|c| c.extent().len())
                .max()
                .unwrap_or(0);
            assert_eq!(
                node.extent().len(),
                structural_height + 1,
                "extent must cover every level of the subtree exactly once"
            );
            for child in node.children() {
                check(child);
            }
        }
        for orientation in ORIENTATIONS {
            check(&layout(tree(IRREGULAR), orientation));
        }
    }

    #[test]
    fn siblings_never_overlap_at_any_shared_depth() {
        fn check<T>(node: &PositionedTree<T>) {
            let placed: Vec<_> = node
                .children()
                .iter()
                .map(|c| c.extent().translated(c.offset()))
                .collect();
            for i in 0..placed.len() {
                for j in (i + 1)..placed.len() {
                    let shared = placed[i].len().min(placed[j].len());
                    for depth in 0..shared {
                        let a = placed[i].span_at(depth).unwrap();
                        let b = placed[j].span_at(depth).unwrap();
                        assert!(
                            a.right < b.left,
                            "sibling {i} must stay left of sibling {j} at depth {depth}"
                        );
                    }
                }
            }
            for child in node.children() {
                check(child);
            }
        }
        for orientation in ORIENTATIONS {
            check(&layout(tree(IRREGULAR), orientation));
            // Wide fan of leaves under one root.
            check(&layout(
                tree("L(r,[L(a,[]),L(b,[]),L(c,[]),L(d,[]),L(e,[])])"),
                orientation,
            ));
        }
    }

    #[test]
    fn right_layout_is_negated_left_layout() {
        fn check<T: PartialEq + core::fmt::Debug>(
            left: &PositionedTree<T>,
            right: &PositionedTree<T>,
        ) {
            assert_eq!(left.label(), right.label());
            assert_eq!(
                left.offset(),
                -right.offset(),
                "mirror law: right offsets are negated left offsets"
            );
            assert_eq!(left.children().len(), right.children().len());
            for (l, r) in left.children().iter().zip(right.children()) {
                check(l, r);
            }
        }
        for text in [IRREGULAR, "L(X,[])", "L(A,[L(B,[]),L(C,[])])"] {
            let left = layout(tree(text), Orientation::Left);
            let right = layout(tree(text), Orientation::Right);
            check(&left, &right);
            // The mirrored silhouettes agree too.
            assert_eq!(left.extent().flipped(), *right.extent());
        }
    }

    #[test]
    fn center_offset_is_mean_of_left_and_right() {
        fn check<T>(
            center: &PositionedTree<T>,
            left: &PositionedTree<T>,
            right: &PositionedTree<T>,
        ) {
            assert_eq!(center.offset(), (left.offset() + right.offset()) / 2.0);
            for ((c, l), r) in center
                .children()
                .iter()
                .zip(left.children())
                .zip(right.children())
            {
                check(c, l, r);
            }
        }
        let center = layout(tree(IRREGULAR), Orientation::Center);
        let left = layout(tree(IRREGULAR), Orientation::Left);
        let right = layout(tree(IRREGULAR), Orientation::Right);
        check(&center, &left, &right);
    }

    #[test]
    fn symmetric_tree_centers_symmetrically_at_every_level() {
        // A full binary tree of height 2; centering must put mirrored nodes
        // at mirrored offsets.
        let text = "L(r,[L(a,[L(b,[]),L(c,[])]),L(d,[L(e,[]),L(f,[])])])";
        let positioned = layout(tree(text), Orientation::Center);
        let children = positioned.children();
        assert_eq!(children[0].offset(), -children[1].offset());
        assert_eq!(
            children[0].children()[0].offset(),
            -children[1].children()[1].offset()
        );
    }

    #[test]
    fn interlocking_subtrees_pack_tighter_than_their_widths() {
        // The left sibling is wide only at depth 1; the right sibling is
        // narrow there (a lone child) and wide only at depth 2. Packing on
        // bounding boxes would need a gap of 2 (half-width + half-width +
        // separation); per-level fitting needs only 1.5.
        let text = "L(r,[L(a,[L(b,[]),L(c,[])]),L(e,[L(f,[L(g,[]),L(h,[])])])])";
        let positioned = layout(tree(text), Orientation::Center);
        let children = positioned.children();
        let gap = children[1].offset() - children[0].offset();
        assert_eq!(gap, 1.5, "irregular silhouettes should interlock");
    }

    #[test]
    fn deep_chain_stays_on_axis() {
        let positioned = layout(tree("L(a,[L(b,[L(c,[L(d,[])])])])"), Orientation::Center);
        let mut node = &positioned;
        while let Some(child) = node.children().first() {
            assert_eq!(child.offset(), 0.0, "an only child sits under its parent");
            node = child;
        }
        assert_eq!(node.extent().levels(), [Span::ZERO]);
    }
}
