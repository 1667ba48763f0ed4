// Copyright 2026 the Structured Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::editing::Selection;
use crate::{Block, BlockKind, Document, Error, Position, Run, RunStyle};

/// An editing session over a [`Document`].
///
/// This is the single boundary between a host (input handling, rendering,
/// caret display) and the document tree: the host converts its native
/// selection into [`Position`]s or a [`Selection`], invokes one operation,
/// and is handed back the caret position to display. The editor never calls
/// back into the host.
///
/// All operations are synchronous and must be driven one at a time, one per
/// input event. Every mutation invalidates previously derived positions and
/// selections; the host re-derives them from its own selection state before
/// the next operation.
#[derive(Debug, Default)]
pub struct DocumentEditor {
    document: Document,
}

impl DocumentEditor {
    /// Creates an editor over a new document holding one empty paragraph.
    pub fn new() -> Self {
        Self {
            document: Document::new(),
        }
    }

    /// Creates an editor over an existing document.
    pub fn from_document(document: Document) -> Self {
        Self { document }
    }

    /// Borrows the underlying document.
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Mutably borrows the underlying document.
    ///
    /// Any mutation made through this borrow invalidates previously derived
    /// positions, exactly like the editing operations do.
    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.document
    }

    /// Consumes the editor, returning the document.
    pub fn into_document(self) -> Document {
        self.document
    }

    // --- MARK: Edits ---
    /// Deletes everything between `start` and `end` and returns the new
    /// caret.
    ///
    /// The endpoints may be supplied in either order.
    pub fn delete_range(&mut self, start: Position, end: Position) -> Result<Position, Error> {
        self.document.delete_range(start, end)
    }

    /// Splits the block at `caret` in two (the structural half of pressing a
    /// line-break key) and returns the caret at the start of the new block.
    ///
    /// Deleting an active selection first is the caller's responsibility;
    /// [`insert_line_at_selection`](Self::insert_line_at_selection) performs
    /// the full gesture.
    pub fn insert_line(&mut self, caret: Position) -> Result<Position, Error> {
        self.document.split_at(caret)
    }

    /// Deletes the selected range and returns the new caret.
    ///
    /// The selection is normalized to document order first. A collapsed
    /// selection deletes nothing; its position is still validated and handed
    /// back as the caret.
    pub fn delete_selection(&mut self, selection: Selection) -> Result<Position, Error> {
        let (start, end) = selection.normalized();
        self.document.delete_range(start, end)
    }

    /// Deletes the selection, then splits the block at the resulting caret.
    ///
    /// This is the full line-break gesture over an active selection.
    pub fn insert_line_at_selection(&mut self, selection: Selection) -> Result<Position, Error> {
        let caret = self.delete_selection(selection)?;
        self.insert_line(caret)
    }

    // --- MARK: Queries ---
    /// Returns the number of blocks in the document.
    pub fn block_count(&self) -> usize {
        self.document.len()
    }

    /// Returns the kind of the block at `block`.
    pub fn block_kind(&self, block: usize) -> Result<BlockKind, Error> {
        Ok(self.block(block)?.kind())
    }

    /// Returns the number of runs in the block at `block`.
    pub fn run_count(&self, block: usize) -> Result<usize, Error> {
        Ok(self.block(block)?.len())
    }

    /// Returns the text of the run at `(block, run)`.
    pub fn run_text(&self, block: usize, run: usize) -> Result<&str, Error> {
        Ok(self.run(block, run)?.text())
    }

    /// Returns the style of the run at `(block, run)`.
    pub fn run_style(&self, block: usize, run: usize) -> Result<RunStyle, Error> {
        Ok(self.run(block, run)?.style())
    }

    fn block(&self, block: usize) -> Result<&Block, Error> {
        self.document
            .block(block)
            .ok_or_else(|| Error::block_out_of_bounds(block, self.document.len()))
    }

    fn run(&self, block: usize, run: usize) -> Result<&Run, Error> {
        let block = self.block(block)?;
        block
            .run(run)
            .ok_or_else(|| Error::run_out_of_bounds(run, block.len()))
    }
}
