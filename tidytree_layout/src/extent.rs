// Copyright 2026 the Tidytree Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Subtree silhouettes: per-depth horizontal spans and their arithmetic.

use smallvec::SmallVec;

/// The horizontal span occupied by a silhouette at one depth level.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Span {
    /// Leftmost node center at this level.
    pub left: f64,
    /// Rightmost node center at this level.
    pub right: f64,
}

impl Span {
    /// The single-point span at the origin.
    pub const ZERO: Self = Self {
        left: 0.0,
        right: 0.0,
    };

    /// Creates a span. `left` must not exceed `right`.
    #[must_use]
    pub fn new(left: f64, right: f64) -> Self {
        debug_assert!(left <= right, "span left bound must not exceed right bound");
        Self { left, right }
    }

    fn translated(self, dx: f64) -> Self {
        Self {
            left: self.left + dx,
            right: self.right + dx,
        }
    }

    fn flipped(self) -> Self {
        Self {
            left: -self.right,
            right: -self.left,
        }
    }
}

// Interactively-sized trees are shallow; eight levels keeps most extents off
// the heap.
type Levels = SmallVec<[Span; 8]>;

/// The silhouette of a subtree: one [`Span`] per depth level, index 0 being
/// the subtree's own root level.
///
/// Extents are expressed in a local frame centered on the subtree root, so a
/// freshly laid out subtree has `(0, 0)` at level 0. An extent produced for a
/// subtree of height `h` has exactly `h + 1` levels.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Extent {
    levels: Levels,
}

impl Extent {
    /// Creates an empty extent (no levels).
    #[must_use]
    pub fn new() -> Self {
        Self {
            levels: Levels::new(),
        }
    }

    /// Creates the extent of a single childless node: one `(0, 0)` level.
    #[must_use]
    pub fn root_only() -> Self {
        let mut levels = Levels::new();
        levels.push(Span::ZERO);
        Self { levels }
    }

    /// Number of depth levels covered.
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    /// Returns `true` if no levels are covered.
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// The spans per level, shallowest first.
    pub fn levels(&self) -> &[Span] {
        &self.levels
    }

    /// The span at `depth`, if this extent reaches that deep.
    pub fn span_at(&self, depth: usize) -> Option<Span> {
        self.levels.get(depth).copied()
    }

    /// Returns this extent shifted horizontally by `dx` at every level.
    #[must_use]
    pub fn translated(&self, dx: f64) -> Self {
        Self {
            levels: self.levels.iter().map(|s| s.translated(dx)).collect(),
        }
    }

    /// Returns the horizontal mirror of this extent: `(l, r)` becomes
    /// `(-r, -l)` at every level.
    #[must_use]
    pub fn flipped(&self) -> Self {
        Self {
            levels: self.levels.iter().map(|s| s.flipped()).collect(),
        }
    }

    /// Combines two silhouettes level by level, taking the left bound from
    /// `self` and the right bound from `other`; whichever extent reaches
    /// deeper contributes its unmatched tail unchanged.
    ///
    /// This models `other` sitting to the right of `self`. Folding it
    /// left-to-right over a sibling list accumulates the packing frontier.
    #[must_use]
    pub fn merged(&self, other: &Self) -> Self {
        let mut levels = Levels::with_capacity(self.len().max(other.len()));
        let shared = self.len().min(other.len());
        for (a, b) in self.levels.iter().zip(other.levels.iter()) {
            levels.push(Span {
                left: a.left,
                right: b.right,
            });
        }
        let tail = if self.len() > shared {
            &self.levels[shared..]
        } else {
            &other.levels[shared..]
        };
        levels.extend_from_slice(tail);
        Self { levels }
    }

    /// The minimum rightward shift of `incoming` that keeps it clear of
    /// `self` at every shared depth level, with one unit of separation
    /// between adjacent node centers.
    ///
    /// Levels where only one silhouette is present impose no constraint; two
    /// silhouettes that share no levels (either empty) fit at shift 0.
    pub fn fit(&self, incoming: &Self) -> f64 {
        self.levels
            .iter()
            .zip(incoming.levels.iter())
            .map(|(a, b)| a.right - b.left + 1.0)
            .fold(0.0, f64::max)
    }

    /// Prepends the root's own `(0, 0)` level, turning a merged child
    /// silhouette into the silhouette of the parent's subtree.
    #[must_use]
    pub(crate) fn with_root_level(mut self) -> Self {
        self.levels.insert(0, Span::ZERO);
        self
    }
}
