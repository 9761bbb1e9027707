// Copyright 2026 the Tidytree Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scene construction: from relative offsets to absolute kurbo geometry.

use alloc::vec::Vec;
use kurbo::{BezPath, Point, Rect};

use tidytree_layout::{Extent, PositionedTree};

use crate::settings::{EdgeStyle, OverlayFlags, SceneSettings};

/// A node placed at an absolute position.
#[derive(Clone, Copy, Debug)]
pub struct PlacedNode<'a, T> {
    /// The node's label in the source tree.
    pub label: &'a T,
    /// Center of the node circle.
    pub center: Point,
    /// Depth below the root (root = 0).
    pub depth: usize,
}

/// Where a node's label should be drawn.
#[derive(Clone, Copy, Debug)]
pub struct LabelAnchor<'a, T> {
    /// The text to draw.
    pub text: &'a T,
    /// Anchor point; renderers center their text on this.
    pub anchor: Point,
}

/// All geometry needed to draw one laid-out tree.
///
/// Paths and points are in absolute coordinates; the renderer applies style
/// (stroke, fill, font) and nothing else.
#[derive(Clone, Debug)]
pub struct Scene<'a, T> {
    /// One entry per tree node, in depth-first order starting at the root.
    pub nodes: Vec<PlacedNode<'a, T>>,
    /// Edge paths connecting parents to children.
    pub edges: Vec<BezPath>,
    /// Extent outline polygons, when requested via [`OverlayFlags::EXTENTS`].
    pub overlays: Vec<BezPath>,
    /// Label anchors, when requested via [`OverlayFlags::LABELS`].
    pub labels: Vec<LabelAnchor<'a, T>>,
    /// Bounding rectangle of the whole diagram, node radius included.
    pub bounds: Rect,
}

/// Builds the scene for a positioned tree with its root centered at `origin`.
///
/// This performs the top-down accumulation of per-edge offsets into absolute
/// coordinates: a child's center sits `offset × node_separation` right of its
/// parent and one `level_separation` below it.
#[must_use]
pub fn build_scene<'a, T>(
    tree: &'a PositionedTree<T>,
    settings: &SceneSettings,
    origin: Point,
) -> Scene<'a, T> {
    let mut scene = Scene {
        nodes: Vec::new(),
        edges: Vec::new(),
        overlays: Vec::new(),
        labels: Vec::new(),
        bounds: diagram_bounds(tree.extent(), settings, origin),
    };
    place(tree, settings, origin, 0, &mut scene);
    scene
}

fn place<'a, T>(
    node: &'a PositionedTree<T>,
    settings: &SceneSettings,
    center: Point,
    depth: usize,
    scene: &mut Scene<'a, T>,
) {
    scene.nodes.push(PlacedNode {
        label: node.label(),
        center,
        depth,
    });
    if settings.overlay.contains(OverlayFlags::LABELS) {
        scene.labels.push(LabelAnchor {
            text: node.label(),
            anchor: center,
        });
    }
    if settings.overlay.contains(OverlayFlags::EXTENTS) && depth == settings.overlay_depth {
        scene
            .overlays
            .push(extent_outline(node.extent(), center, settings));
    }

    // Under fork edges the parent owns the drop to the bus; emitting it here
    // once keeps children from retracing the same segment.
    if settings.edge_style == EdgeStyle::Fork && !node.children().is_empty() {
        let mut stub = BezPath::new();
        stub.move_to(center);
        stub.line_to((center.x, center.y + settings.level_separation / 2.0));
        scene.edges.push(stub);
    }

    for child in node.children() {
        let child_center = Point::new(
            center.x + child.offset() * settings.node_separation,
            center.y + settings.level_separation,
        );
        scene.edges.push(edge(center, child_center, settings));
        place(child, settings, child_center, depth + 1, scene);
    }
}

fn edge(parent: Point, child: Point, settings: &SceneSettings) -> BezPath {
    let mut path = BezPath::new();
    match settings.edge_style {
        EdgeStyle::Direct => {
            // Rim to rim, so the segment does not pierce the circles.
            path.move_to((parent.x, parent.y + settings.node_radius));
            path.line_to((child.x, child.y - settings.node_radius));
        }
        EdgeStyle::Fork => {
            let bus_y = child.y - settings.level_separation / 2.0;
            path.move_to((parent.x, bus_y));
            path.line_to((child.x, bus_y));
            path.line_to(child);
        }
    }
    path
}

/// Traces a subtree silhouette as a closed polygon: down the left boundary,
/// back up the right, with each level's band extending half a level
/// separation above and below its node centers.
fn extent_outline(extent: &Extent, center: Point, settings: &SceneSettings) -> BezPath {
    let s = settings.node_separation;
    let half = settings.level_separation / 2.0;
    let pad_x = if settings.overlay.contains(OverlayFlags::TRUE_EXTENT) {
        0.0
    } else {
        settings.node_radius
    };

    let mut path = BezPath::new();
    let mut y = center.y;
    for (i, span) in extent.levels().iter().enumerate() {
        let x = center.x + span.left * s - pad_x;
        if i == 0 {
            path.move_to((x, y - half));
        } else {
            path.line_to((x, y - half));
        }
        path.line_to((x, y + half));
        y += settings.level_separation;
    }
    y -= settings.level_separation;
    for span in extent.levels().iter().rev() {
        let x = center.x + span.right * s + pad_x;
        path.line_to((x, y + half));
        path.line_to((x, y - half));
        y -= settings.level_separation;
    }
    path.close_path();
    path
}

fn diagram_bounds(extent: &Extent, settings: &SceneSettings, origin: Point) -> Rect {
    let mut left = 0.0_f64;
    let mut right = 0.0_f64;
    for span in extent.levels() {
        left = left.min(span.left);
        right = right.max(span.right);
    }
    let s = settings.node_separation;
    let r = settings.node_radius;
    let depth = (extent.len().saturating_sub(1)) as f64;
    Rect::new(
        origin.x + left * s - r,
        origin.y - r,
        origin.x + right * s + r,
        origin.y + depth * settings.level_separation + r,
    )
}
