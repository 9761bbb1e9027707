// Copyright 2026 the Tidytree Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Parse a tree from notation and lay it out in all three orientations.
//!
//! Pass the notation as the first argument, or run without arguments for a
//! built-in sample:
//! - `cargo run -p tidytree_demos --example orientation_gallery`
//! - `cargo run -p tidytree_demos --example orientation_gallery 'L(a,[L(b,[]),L(c,[])])'`

use tidytree_layout::{Orientation, PositionedTree, layout};
use tidytree_notation::{parse, to_notation};

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

    println!("tree:   {}", to_notation(&tree));
    println!("nodes:  {}", tree.node_count());
    println!("height: {}", tree.height());

    for orientation in [Orientation::Left, Orientation::Center, Orientation::Right] {
        let positioned = layout(tree.clone(), orientation);
        println!("\n== {orientation:?} ==");
        print_node(&positioned, 0.0, 0);

        // The root extent is the silhouette of the whole diagram.
        println!("silhouette per level:");
        for (depth, span) in positioned.extent().levels().iter().enumerate() {
            println!("  depth {depth}: [{:+.2}, {:+.2}]", span.left, span.right);
        }
    }
}

/// Prints each node's absolute position, accumulated from per-edge offsets.
fn print_node(node: &PositionedTree<String>, parent_x: f64, depth: usize) {
    let x = parent_x + node.offset();
    println!("{:indent$}{} @ x = {x:+.2}", "", node.label(), indent = depth * 2);
    for child in node.children() {
        print_node(child, x, depth + 1);
    }
}
