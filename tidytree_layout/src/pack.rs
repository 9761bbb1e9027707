// Copyright 2026 the Tidytree Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sibling packing: one horizontal offset per sibling silhouette.
//!
//! All three strategies are legal packings (no two silhouettes overlap at any
//! shared depth) and differ only in which side slack accumulates on:
//!
//! - [`pack_left`] pushes every subtree as far left as its predecessors allow.
//! - [`pack_right`] is the exact horizontal mirror of [`pack_left`].
//! - [`pack_center`] gives each subtree the mean of its two extreme offsets,
//!   centering siblings between their left-tightest and right-tightest legal
//!   positions without any relaxation pass.

use alloc::vec::Vec;

use crate::extent::Extent;

/// Packs sibling silhouettes left to right, each shifted by the minimum
/// amount that keeps it clear of everything already placed.
///
/// Returns one offset per input extent, in input order. Offsets are relative
/// to the shared parent frame; the first subtree always lands at 0.
pub fn pack_left(extents: &[Extent]) -> Vec<f64> {
    let mut frontier = Extent::new();
    let mut offsets = Vec::with_capacity(extents.len());
    for extent in extents {
        let dx = frontier.fit(extent);
        frontier = frontier.merged(&extent.translated(dx));
        offsets.push(dx);
    }
    offsets
}

/// Packs sibling silhouettes right to left: the exact mirror of
/// [`pack_left`] for any input.
///
/// Implemented directly as that mirror: reverse the siblings, flip each
/// silhouette, pack left, then negate and restore order.
pub fn pack_right(extents: &[Extent]) -> Vec<f64> {
    let flipped: Vec<Extent> = extents.iter().rev().map(Extent::flipped).collect();
    let mut offsets = pack_left(&flipped);
    offsets.reverse();
    for dx in &mut offsets {
        *dx = -*dx;
    }
    offsets
}

/// Centers siblings: each offset is the arithmetic mean of its
/// [`pack_left`] and [`pack_right`] offsets.
pub fn pack_center(extents: &[Extent]) -> Vec<f64> {
    let left = pack_left(extents);
    let right = pack_right(extents);
    left.iter()
        .zip(right.iter())
        .map(|(l, r)| (l + r) / 2.0)
        .collect()
}
