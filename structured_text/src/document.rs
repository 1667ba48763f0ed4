// Copyright 2026 the Structured Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::vec::Vec;

use crate::{Block, BlockKind, Error, Position, Run, RunStyle};

/// The root of the document tree: an ordered sequence of [`Block`]s.
///
/// A document always holds at least one block. Operations that would drain
/// it instead restore a single default paragraph holding one empty
/// [`RunStyle::Normal`] run, so `(0, 0, 0)` stays a valid caret position.
///
/// As with [`Block`], removal primitives over block *indices* clamp and never
/// fail, while operations that address specific tree coordinates
/// ([`delete_range`](Self::delete_range), [`split_at`](Self::split_at))
/// validate them first and fail without mutating.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Document {
    blocks: Vec<Block>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Creates a document holding one empty default paragraph.
    pub fn new() -> Self {
        let mut document = Self { blocks: Vec::new() };
        document.restore_non_empty();
        document
    }

    /// Creates a document from the given blocks.
    ///
    /// An empty iterator yields the same document as [`new`](Self::new).
    pub fn with_blocks(blocks: impl IntoIterator<Item = Block>) -> Self {
        let mut document = Self {
            blocks: blocks.into_iter().collect(),
        };
        document.restore_non_empty();
        document
    }

    /// Returns the number of blocks.
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Returns `true` if there are no blocks.
    ///
    /// This never holds after a public operation completes; it exists for
    /// API symmetry with [`Block`].
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Returns the block at `index`.
    pub fn block(&self, index: usize) -> Option<&Block> {
        self.blocks.get(index)
    }

    /// Returns the block at `index`, mutably.
    pub fn block_mut(&mut self, index: usize) -> Option<&mut Block> {
        self.blocks.get_mut(index)
    }

    /// Returns an iterator over the blocks.
    pub fn blocks(&self) -> impl ExactSizeIterator<Item = &Block> {
        self.blocks.iter()
    }

    /// Appends a block to the document.
    pub fn push(&mut self, block: Block) {
        self.blocks.push(block);
    }

    /// Removes and returns the block at `index`, or `None` if out of bounds.
    ///
    /// Removing the last remaining block restores the default paragraph.
    pub fn remove_block(&mut self, index: usize) -> Option<Block> {
        let removed = (index < self.blocks.len()).then(|| self.blocks.remove(index));
        self.restore_non_empty();
        removed
    }

    /// Removes the blocks before `index`. Indices past the end are clamped.
    pub fn remove_before(&mut self, index: usize) {
        let index = index.min(self.blocks.len());
        self.blocks.drain(..index);
        self.restore_non_empty();
    }

    /// Removes the blocks from `index` to the end. Indices past the end are
    /// clamped.
    pub fn remove_from(&mut self, index: usize) {
        self.blocks.truncate(index);
        self.restore_non_empty();
    }

    /// Removes the blocks in the half-open range `[start, end)`.
    ///
    /// A no-op when `start > end`. Indices past the end are clamped.
    pub fn remove_between(&mut self, start: usize, end: usize) {
        if start > end {
            return;
        }
        let end = end.min(self.blocks.len());
        let start = start.min(end);
        self.blocks.drain(start..end);
        self.restore_non_empty();
    }

    /// Concatenated text of all blocks, one block per line.
    pub fn text(&self) -> String {
        let mut out = String::new();
        for (i, block) in self.blocks.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            out.push_str(&block.text());
        }
        out
    }

    /// Validates `position` against the current tree.
    ///
    /// Checks the block index, the run index within the block, and that the
    /// byte offset is within the run's text and on a UTF-8 character
    /// boundary.
    pub fn validate_position(&self, position: Position) -> Result<(), Error> {
        let block = self
            .blocks
            .get(position.block)
            .ok_or_else(|| Error::block_out_of_bounds(position.block, self.blocks.len()))?;
        let run = block
            .run(position.run)
            .ok_or_else(|| Error::run_out_of_bounds(position.run, block.len()))?;
        run.check_offset(position.offset)
    }

    /// Deletes everything between `start` and `end` and returns the caret
    /// position for the survivor of the cut.
    ///
    /// The endpoints may be supplied in either order; they are normalized to
    /// document order first. Both are validated against the tree before
    /// anything is mutated.
    ///
    /// Deletion is pure structural removal plus boundary fusion: whole blocks
    /// and runs strictly inside the range are dropped, the two boundary runs
    /// are truncated, and the cut edges are stitched back together (blocks
    /// always; runs only when their styles match). The cost is proportional
    /// to the elements touched, not to the document size.
    pub fn delete_range(&mut self, start: Position, end: Position) -> Result<Position, Error> {
        self.validate_position(start)?;
        self.validate_position(end)?;
        let (start, end) = if start <= end { (start, end) } else { (end, start) };

        if start.block != end.block {
            // Drop whole blocks strictly inside the range; the end block
            // slides up to just after the start block.
            self.remove_between(start.block + 1, end.block);
            let end_block = start.block + 1;

            self.blocks[start.block].remove_from(start.run + 1);
            self.blocks[end_block].remove_before(end.run);

            self.blocks[start.block]
                .run_mut(start.run)
                .expect("validated position addresses an existing run")
                .remove_from(start.offset)?;
            self.blocks[end_block]
                .run_mut(0)
                .expect("the end block retains the run its position addressed")
                .remove_before(end.offset)?;

            let merged = self.blocks.remove(end_block);
            self.blocks[start.block].merge(merged);
        } else if start.run != end.run {
            let block = &mut self.blocks[start.block];
            block.remove_between(start.run + 1, end.run);
            let end_run = start.run + 1;

            block
                .run_mut(start.run)
                .expect("validated position addresses an existing run")
                .remove_from(start.offset)?;
            block
                .run_mut(end_run)
                .expect("the block retains the run its position addressed")
                .remove_before(end.offset)?;

            block.fuse_adjacent(start.run);
        } else {
            self.blocks[start.block]
                .run_mut(start.run)
                .expect("validated position addresses an existing run")
                .remove_between(start.offset, end.offset)?;
        }

        self.restore_non_empty();
        Ok(start)
    }

    /// Splits the block at `caret` in two and returns the caret at the start
    /// of the new block.
    ///
    /// The run under the caret is split at the caret's byte offset; the new
    /// block (always a default paragraph) takes the tail run and every run
    /// after it, and is inserted as the immediate next sibling. This is the
    /// structural half of pressing a line-break key; deleting an active
    /// selection first is the caller's responsibility.
    pub fn split_at(&mut self, caret: Position) -> Result<Position, Error> {
        self.validate_position(caret)?;

        let block = &mut self.blocks[caret.block];
        block.split_run(caret.run, caret.offset)?;
        let tail = block.split_off(caret.run + 1)?;
        self.blocks.insert(caret.block + 1, tail);

        Ok(Position::new(caret.block + 1, 0, 0))
    }

    fn restore_non_empty(&mut self) {
        if self.blocks.is_empty() {
            self.blocks.push(Block::with_runs(
                BlockKind::Paragraph,
                [Run::new(RunStyle::Normal, "")],
            ));
        }
    }
}
