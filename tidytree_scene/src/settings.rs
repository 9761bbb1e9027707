// Copyright 2026 the Tidytree Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scene configuration: spacing, edge style, and overlay options.

bitflags::bitflags! {
    /// Optional scene content beyond nodes and edges.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct OverlayFlags: u8 {
        /// Emit a label anchor per node.
        const LABELS      = 0b0000_0001;
        /// Emit extent outline polygons for nodes at
        /// [`SceneSettings::overlay_depth`].
        const EXTENTS     = 0b0000_0010;
        /// Draw extent outlines at the exact silhouette bounds instead of
        /// padding them by the node radius. Only meaningful with
        /// [`OverlayFlags::EXTENTS`].
        const TRUE_EXTENT = 0b0000_0100;
    }
}

impl Default for OverlayFlags {
    fn default() -> Self {
        Self::LABELS
    }
}

/// How a parent connects to its children.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum EdgeStyle {
    /// A straight segment from the parent's rim to the child's rim.
    #[default]
    Direct,
    /// An orthogonal bus: the parent drops half a level, runs horizontally,
    /// and descends into each child.
    Fork,
}

/// Geometry knobs for [`crate::build_scene`].
///
/// Layout offsets are in abstract units; `node_separation` is the pixel
/// width of one unit, so sibling node centers at the same depth are always at
/// least `node_separation` apart. Settings carry no behavior and are simply
/// replaced between calls to change the rendering.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SceneSettings {
    /// Horizontal pixels per layout unit.
    pub node_separation: f64,
    /// Vertical pixels between consecutive depth levels.
    pub level_separation: f64,
    /// Radius of the node circles.
    pub node_radius: f64,
    /// How parent-child edges are shaped.
    pub edge_style: EdgeStyle,
    /// Which optional geometry to emit.
    pub overlay: OverlayFlags,
    /// Depth level whose nodes get extent outlines (0 = the root). Clamp
    /// against the tree height when driving this from UI input.
    pub overlay_depth: usize,
}

impl Default for SceneSettings {
    fn default() -> Self {
        Self {
            node_separation: 40.0,
            level_separation: 60.0,
            node_radius: 16.0,
            edge_style: EdgeStyle::default(),
            overlay: OverlayFlags::default(),
            overlay_depth: 0,
        }
    }
}
