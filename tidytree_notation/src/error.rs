// Copyright 2026 the Tidytree Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error type reported by the notation parser.

use core::fmt;

/// The ways notation text can fail to match the grammar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// The input was empty after whitespace stripping.
    EmptyInput,
    /// Expected a node opener `L(`.
    ExpectedNode,
    /// Expected a label of one or more characters from `[A-Za-z0-9_]`.
    ExpectedLabel,
    /// Expected `,[` introducing a child list after a label.
    ExpectedChildList,
    /// Expected `,` before a further sibling or `])` closing the child list.
    ExpectedSeparator,
    /// The input ended before the tree was complete.
    UnexpectedEnd,
    /// A complete tree was parsed but input characters remain.
    TrailingInput,
}

/// A grammar violation at a specific position.
///
/// Positions are byte offsets into the *normalized* input, i.e. the input
/// with all whitespace removed. The parser performs no recovery: a single
/// error aborts the whole parse.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParseError {
    kind: ParseErrorKind,
    position: usize,
}

impl ParseError {
    pub(crate) fn new(kind: ParseErrorKind, position: usize) -> Self {
        Self { kind, position }
    }

    /// Returns what went wrong.
    pub fn kind(&self) -> ParseErrorKind {
        self.kind
    }

    /// Returns the byte offset into the whitespace-stripped input at which
    /// the error was detected.
    pub fn position(&self) -> usize {
        self.position
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ParseErrorKind::EmptyInput => write!(f, "empty input")?,
            ParseErrorKind::ExpectedNode => write!(f, "expected `L(`")?,
            ParseErrorKind::ExpectedLabel => {
                write!(f, "expected a label of `[A-Za-z0-9_]` characters")?;
            }
            ParseErrorKind::ExpectedChildList => write!(f, "expected `,[` after label")?,
            ParseErrorKind::ExpectedSeparator => write!(f, "expected `,` or `])`")?,
            ParseErrorKind::UnexpectedEnd => write!(f, "unexpected end of input")?,
            ParseErrorKind::TrailingInput => write!(f, "trailing input after tree")?,
        }
        write!(f, " at position {}", self.position)
    }
}

impl core::error::Error for ParseError {}
