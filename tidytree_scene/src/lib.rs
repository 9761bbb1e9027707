// Copyright 2026 the Tidytree Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tidytree Scene: render geometry for positioned trees.
//!
//! The layout engine (`tidytree_layout`) works in abstract units and
//! per-edge relative offsets. This crate is the boundary a renderer consumes:
//! [`build_scene`] walks a [`tidytree_layout::PositionedTree`] top-down,
//! accumulates the relative offsets into absolute coordinates, scales them by
//! the configured node and level separations, and returns plain [`kurbo`]
//! geometry:
//!
//! - one [`PlacedNode`] per tree node (label reference, center point, depth),
//! - one [`kurbo::BezPath`] per parent-child edge, either as a direct
//!   segment or as a forked bus ([`EdgeStyle`]),
//! - optional extent-outline overlay polygons for the nodes at a chosen
//!   depth, and optional label anchors ([`OverlayFlags`]),
//! - the overall diagram [`kurbo::Rect`] bounds.
//!
//! What to do with the geometry (stroke widths, colors, fonts, the drawing
//! surface itself) is entirely the renderer's business; nothing here touches
//! a canvas. All knobs live in [`SceneSettings`], a plain struct replaced
//! wholesale per call.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Point;
//! use tidytree_layout::{Orientation, layout};
//! use tidytree_model::LabeledTree;
//! use tidytree_scene::{SceneSettings, build_scene};
//!
//! let tree = LabeledTree::new("a", vec![LabeledTree::leaf("b"), LabeledTree::leaf("c")]);
//! let positioned = layout(tree, Orientation::Center);
//! let scene = build_scene(&positioned, &SceneSettings::default(), Point::ZERO);
//!
//! assert_eq!(scene.nodes.len(), 3);
//! assert_eq!(scene.edges.len(), 2);
//! ```
//!
//! This crate is `no_std`; enable the `std` feature (default) or `libm` for
//! kurbo's float support.

#![no_std]

extern crate alloc;

mod scene;
mod settings;

pub use scene::{LabelAnchor, PlacedNode, Scene, build_scene};
pub use settings::{EdgeStyle, OverlayFlags, SceneSettings};
