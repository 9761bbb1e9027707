// Copyright 2026 the Tidytree Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Canonical writer: the inverse of [`crate::parse`].

use alloc::string::{String, ToString};
use core::fmt;

use tidytree_model::LabeledTree;

/// Displays a labeled tree in canonical notation.
///
/// The output carries no whitespace: `L(label,[child,child])` with `[]` for
/// leaves. For trees whose rendered labels match `[A-Za-z0-9_]+` this is the
/// exact inverse of [`crate::parse`].
#[derive(Clone, Copy, Debug)]
pub struct Notation<'a, T>(pub &'a LabeledTree<T>);

impl<T: fmt::Display> fmt::Display for Notation<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "L({},[", self.0.label)?;
        for (i, child) in self.0.children.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{}", Notation(child))?;
        }
        write!(f, "])")
    }
}

/// Renders a labeled tree to a canonical notation string.
///
/// ```rust
/// use tidytree_notation::{parse, to_notation};
///
/// let text = "L(A,[L(B,[]),L(C,[])])";
/// let tree = parse(text).unwrap();
/// assert_eq!(to_notation(&tree), text);
/// ```
#[must_use]
pub fn to_notation<T: fmt::Display>(tree: &LabeledTree<T>) -> String {
    Notation(tree).to_string()
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use tidytree_model::LabeledTree;

    use super::to_notation;
    use crate::parse;

    #[test]
    fn leaf_prints_empty_child_list() {
        assert_eq!(to_notation(&LabeledTree::leaf("X")), "L(X,[])");
    }

    #[test]
    fn children_are_comma_separated() {
        let tree = LabeledTree::new(
            "A",
            vec![
                LabeledTree::leaf("B"),
                LabeledTree::new("C", vec![LabeledTree::leaf("D")]),
            ],
        );
        assert_eq!(to_notation(&tree), "L(A,[L(B,[]),L(C,[L(D,[])])])");
    }

    #[test]
    fn round_trips_through_parse() {
        for text in [
            "L(X,[])",
            "L(A,[L(B,[]),L(C,[])])",
            "L(r,[L(a,[L(b,[L(c,[])])]),L(d,[]),L(e_1,[L(f2,[]),L(g,[])])])",
        ] {
            let tree = parse(text).unwrap();
            assert_eq!(to_notation(&tree), text);
            assert_eq!(parse(&to_notation(&tree)).unwrap(), tree);
        }
    }
}
