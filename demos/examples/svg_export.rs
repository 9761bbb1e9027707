// Copyright 2026 the Tidytree Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Render a laid-out tree to SVG on stdout.
//!
//! Shows the full pipeline: notation → `LabeledTree` → `layout` →
//! `build_scene` → plain kurbo geometry, serialized here as SVG elements.
//!
//! Run:
//! - `cargo run -p tidytree_demos --example svg_export > tree.svg`
//! - `cargo run -p tidytree_demos --example svg_export 'L(a,[L(b,[]),L(c,[])])' > tree.svg`

use kurbo::Point;
use tidytree_layout::{Orientation, layout};
use tidytree_notation::parse;
use tidytree_scene::{EdgeStyle, OverlayFlags, SceneSettings, build_scene};

const SAMPLE: &str = "L(root,[L(a,[L(b,[L(c,[])])]),L(d,[]),L(e,[L(f,[]),L(g,[L(h,[])])])])";

fn main() {
    let text = std::env::args().nth(1).unwrap_or_else(|| SAMPLE.to_owned());
    let tree = match parse(&text) {
        Ok(tree) => tree,
        Err(err) => {
            eprintln!("invalid tree notation: {err}");
            std::process::exit(1);
        }
    };

    let settings = SceneSettings {
        edge_style: EdgeStyle::Fork,
        overlay: OverlayFlags::LABELS | OverlayFlags::EXTENTS,
        overlay_depth: 0,
        ..SceneSettings::default()
    };
    let positioned = layout(tree, Orientation::Center);
    let scene = build_scene(&positioned, &settings, Point::ZERO);

    let b = scene.bounds;
    println!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="{} {} {} {}">"#,
        b.x0,
        b.y0,
        b.width(),
        b.height()
    );

    for overlay in &scene.overlays {
        println!(
            r##"  <path d="{}" fill="none" stroke="#c8c8c8" stroke-dasharray="4 4"/>"##,
            overlay.to_svg()
        );
    }
    for edge in &scene.edges {
        println!(r##"  <path d="{}" fill="none" stroke="#333"/>"##, edge.to_svg());
    }
    for node in &scene.nodes {
        println!(
            r##"  <circle cx="{}" cy="{}" r="{}" fill="#fff" stroke="#333"/>"##,
            node.center.x, node.center.y, settings.node_radius
        );
    }
    for label in &scene.labels {
        println!(
            r#"  <text x="{}" y="{}" text-anchor="middle" dominant-baseline="middle">{}</text>"#,
            label.anchor.x, label.anchor.y, label.text
        );
    }

    println!("</svg>");
}
