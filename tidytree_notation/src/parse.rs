// Copyright 2026 the Tidytree Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Explicit-stack parser for the tree notation.

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use tidytree_model::LabeledTree;

use crate::error::{ParseError, ParseErrorKind};

/// Parses notation text into a labeled tree.
///
/// Whitespace anywhere in the input (spaces, tabs, newlines) is ignored. The
/// whole input must be consumed by exactly one tree; anything left over is a
/// [`ParseErrorKind::TrailingInput`] error.
///
/// The parser runs in one linear pass over the input, keeping a stack of
/// open nodes rather than recursing, so deeply nested input cannot overflow
/// the call stack.
///
/// ## Example
///
/// ```rust
/// use tidytree_notation::parse;
///
/// let tree = parse("L(root,[L(a,[]), L(b,[])])").unwrap();
/// assert_eq!(tree.label, "root");
/// assert_eq!(tree.children.len(), 2);
///
/// assert!(parse("L(root,[").is_err());
/// ```
pub fn parse(text: &str) -> Result<LabeledTree<String>, ParseError> {
    let normalized: String = text.chars().filter(|c| !c.is_whitespace()).collect();
    let src = normalized.as_bytes();
    if src.is_empty() {
        return Err(ParseError::new(ParseErrorKind::EmptyInput, 0));
    }

    // Stack of nodes whose child list is still open: label plus the children
    // parsed so far. The tree is assembled bottom-up as frames close.
    let mut stack: Vec<(String, Vec<LabeledTree<String>>)> = Vec::new();
    let mut i = 0;

    'node: loop {
        // Node header: `L(` Label `,[`.
        let Some(&b) = src.get(i) else {
            return Err(ParseError::new(ParseErrorKind::UnexpectedEnd, i));
        };
        if b != b'L' || src.get(i + 1) != Some(&b'(') {
            return Err(ParseError::new(ParseErrorKind::ExpectedNode, i));
        }
        i += 2;
        let label_start = i;
        while i < src.len() && (src[i].is_ascii_alphanumeric() || src[i] == b'_') {
            i += 1;
        }
        if i == label_start {
            return Err(ParseError::new(ParseErrorKind::ExpectedLabel, i));
        }
        // Label bytes are ASCII, so this slice is on char boundaries.
        let label = normalized[label_start..i].to_string();
        if src.get(i) != Some(&b',') || src.get(i + 1) != Some(&b'[') {
            return Err(ParseError::new(ParseErrorKind::ExpectedChildList, i));
        }
        i += 2;
        stack.push((label, Vec::new()));

        // Close as many open nodes as `])` pairs allow. Each closed node is
        // either the finished root or a child pushed onto the frame below.
        while src.get(i) == Some(&b']') && src.get(i + 1) == Some(&b')') {
            i += 2;
            let Some((label, children)) = stack.pop() else {
                unreachable!("a frame was pushed before entering the closing loop");
            };
            let node = LabeledTree::new(label, children);
            let Some((_, siblings)) = stack.last_mut() else {
                if i != src.len() {
                    return Err(ParseError::new(ParseErrorKind::TrailingInput, i));
                }
                return Ok(node);
            };
            siblings.push(node);
            match src.get(i) {
                // A further sibling follows.
                Some(b',') => {
                    i += 1;
                    continue 'node;
                }
                // The enclosing node closes too; stay in this loop.
                Some(b']') if src.get(i + 1) == Some(&b')') => {}
                _ => return Err(ParseError::new(ParseErrorKind::ExpectedSeparator, i)),
            }
        }
        // Not `])`: the child list must start with a node, checked at 'node.
    }
}
