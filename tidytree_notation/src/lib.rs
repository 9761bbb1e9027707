// Copyright 2026 the Tidytree Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tidytree Notation: the textual tree notation and its parser.
//!
//! The notation is a direct rendering of the labeled-tree constructor:
//! `L(<label>,[<child>,<child>,...])`, recursively, with `[]` for leaves and
//! labels drawn from `[A-Za-z0-9_]+`. Whitespace (including newlines) is
//! insignificant and stripped before parsing. For example:
//!
//! ```text
//! L(A,[L(B,[]),L(C,[L(D,[])])])
//! ```
//!
//! [`parse`] converts notation text into a [`tidytree_model::LabeledTree`] of
//! `String` labels, or fails with a [`ParseError`] carrying an error kind and
//! a position. Parsing is a single linear pass with an explicit frame stack,
//! so input nesting depth does not consume call stack. A failed parse returns
//! nothing but the error: no partially built tree is ever exposed.
//!
//! [`to_notation`] is the canonical writer. It emits exactly the grammar the
//! parser accepts, so `parse(&to_notation(&tree))` reproduces `tree`.
//!
//! The parser is intended to be cheap enough to re-run in full on every edit
//! of its input; it performs no error recovery.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod error;
mod parse;
mod write;

pub use error::{ParseError, ParseErrorKind};
pub use parse::parse;
pub use write::{Notation, to_notation};
