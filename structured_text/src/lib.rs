// Copyright 2026 the Structured Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A structural document model for rich text.
//!
//! - [`Run`]: a styled contiguous span of text, the unit of style uniformity.
//! - [`Block`]: one structural unit (paragraph, heading, list item) holding an
//!   ordered sequence of runs.
//! - [`Document`]: the root, an ordered sequence of blocks.
//! - [`Position`]: a `(block, run, offset)` address with a total order that
//!   defines *document order*.
//! - [`editing`]: the host-adapter boundary: selections and the editor
//!   session that turns them into structural edits.
//!
//! ## Scope
//!
//! This crate is a pure data-structure library: it mutates the tree and hands
//! back caret positions. Translating host input events into positions,
//! rendering the tree, IME handling, undo history, clipboard formats, and
//! persistence all belong to the host.
//!
//! ## Design Intent
//!
//! Ownership is strictly tree-shaped. No node stores a pointer to its parent;
//! any "parent of" or "index within parent" relation is a derived lookup,
//! recomputed on demand. Editing is expressed as structural removal plus
//! boundary fusion (whole blocks and runs are dropped, then the cut edges are
//! truncated and fused back together), never as a flattened-text rewrite, so
//! each operation costs O(elements touched) and style boundaries stay correct.
//!
//! Every public operation validates its preconditions before mutating
//! anything; there are no partial-failure states to recover from.
//!
//! ## Indices
//!
//! All text offsets are **byte indices** into UTF-8 text and must lie on
//! character boundaries. Positions are ephemeral values: any structural
//! mutation invalidates previously derived positions, and callers must
//! re-derive them rather than reuse stale ones.
//!
//! ## Example: Deleting a selection
//!
//! ```
//! use structured_text::{Block, BlockKind, Document, Position, Run, RunStyle};
//!
//! let mut document = Document::with_blocks([
//!     Block::with_runs(BlockKind::Paragraph, [Run::new(RunStyle::Normal, "AB")]),
//!     Block::with_runs(BlockKind::Paragraph, [Run::new(RunStyle::Normal, "CD")]),
//! ]);
//!
//! // Delete from after "A" to after "C": the two blocks coalesce around the cut.
//! let caret = document
//!     .delete_range(Position::new(0, 0, 1), Position::new(1, 0, 1))
//!     .unwrap();
//!
//! assert_eq!(document.len(), 1);
//! assert_eq!(document.block(0).unwrap().text(), "AD");
//! assert_eq!(caret, Position::new(0, 0, 1));
//! ```
// LINEBENDER LINT SET - lib.rs - v3
// See https://linebender.org/wiki/canonical-lints/
// These lints shouldn't apply to examples or tests.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
// These lints shouldn't apply to examples.
#![warn(clippy::print_stdout, clippy::print_stderr)]
// Targeting e.g. 32-bit means structs containing usize can give false positives for 64-bit.
#![cfg_attr(target_pointer_width = "64", warn(clippy::trivially_copy_pass_by_ref))]
// END LINEBENDER LINT SET
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

extern crate alloc;

pub mod editing;

mod block;
mod document;
mod error;
mod position;
mod run;


pub use block::{Block, BlockKind};
pub use document::Document;
pub use error::{BoundaryInfo, Error, ErrorKind};
pub use position::Position;
pub use run::{Run, RunStyle};
