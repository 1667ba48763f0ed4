// Copyright 2026 the Structured Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;

use smallvec::SmallVec;

use crate::{Error, Run};

/// The kind of a [`Block`] in a [`Document`](crate::Document).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum BlockKind {
    /// A normal paragraph of text.
    #[default]
    Paragraph,
    /// A top-level heading.
    Heading1,
    /// An item of an unordered list.
    UnorderedListItem,
}

/// A structural unit of the document: an ordered sequence of [`Run`]s.
///
/// Blocks are owned exclusively by their parent
/// [`Document`](crate::Document) and store no reference back to it. A block
/// with zero runs is valid.
///
/// Two families of operations exist. Removal primitives over run *indices*
/// (`remove_before`, `remove_from`, `remove_between`) clamp past-the-end
/// values and never fail. Operations that *address* a specific run
/// ([`split_off`](Self::split_off), [`split_run`](Self::split_run)) reject
/// out-of-bounds indices with an error, before any mutation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Block {
    kind: BlockKind,
    // Most blocks hold one or two runs; style changes inside a block are the
    // exception, not the rule.
    runs: SmallVec<[Run; 2]>,
}

impl Block {
    /// Creates a new empty block of the given kind.
    pub fn new(kind: BlockKind) -> Self {
        Self {
            kind,
            runs: SmallVec::new(),
        }
    }

    /// Creates a new block of the given kind holding the given runs.
    pub fn with_runs(kind: BlockKind, runs: impl IntoIterator<Item = Run>) -> Self {
        Self {
            kind,
            runs: runs.into_iter().collect(),
        }
    }

    /// Returns the kind of the block.
    pub fn kind(&self) -> BlockKind {
        self.kind
    }

    /// Returns the number of runs in the block.
    pub fn len(&self) -> usize {
        self.runs.len()
    }

    /// Returns `true` if the block holds no runs.
    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    /// Returns the run at `index`.
    pub fn run(&self, index: usize) -> Option<&Run> {
        self.runs.get(index)
    }

    /// Returns the run at `index`, mutably.
    pub fn run_mut(&mut self, index: usize) -> Option<&mut Run> {
        self.runs.get_mut(index)
    }

    /// Returns an iterator over the runs.
    pub fn runs(&self) -> impl ExactSizeIterator<Item = &Run> {
        self.runs.iter()
    }

    /// Appends a run to the block.
    pub fn push(&mut self, run: Run) {
        self.runs.push(run);
    }

    /// Removes and returns the run at `index`, or `None` if out of bounds.
    pub fn remove_run(&mut self, index: usize) -> Option<Run> {
        (index < self.runs.len()).then(|| self.runs.remove(index))
    }

    /// Concatenated text of all runs.
    pub fn text(&self) -> String {
        self.runs.iter().map(Run::text).collect()
    }

    /// Splits this block at `run_index`, returning a new block holding the
    /// runs from `run_index` to the end, in order.
    ///
    /// The new block always has the default [`BlockKind::Paragraph`] kind,
    /// whatever the kind of the receiver: breaking a line inside a heading
    /// starts a plain paragraph. The caller inserts the returned block as the
    /// immediate next sibling (see [`Document::split_at`](crate::Document::split_at)).
    pub fn split_off(&mut self, run_index: usize) -> Result<Self, Error> {
        if run_index > self.runs.len() {
            return Err(Error::run_out_of_bounds(run_index, self.runs.len()));
        }
        let tail = self.runs.drain(run_index..).collect();
        Ok(Self {
            kind: BlockKind::Paragraph,
            runs: tail,
        })
    }

    /// Splits the run at `run_index` at byte `offset`, inserting the tail as
    /// the immediate next sibling run.
    pub fn split_run(&mut self, run_index: usize, offset: usize) -> Result<(), Error> {
        let len = self.runs.len();
        let run = self
            .runs
            .get_mut(run_index)
            .ok_or_else(|| Error::run_out_of_bounds(run_index, len))?;
        let tail = run.split_off(offset)?;
        self.runs.insert(run_index + 1, tail);
        Ok(())
    }

    /// Moves all runs of `other` onto the end of this block, fusing the two
    /// runs that become adjacent at the seam when their styles match.
    ///
    /// `other` is consumed; on a style mismatch at the seam both runs are
    /// kept, adjacent.
    pub fn merge(&mut self, other: Self) {
        let seam = self.runs.len();
        self.runs.extend(other.runs);
        if seam > 0 {
            self.fuse_adjacent(seam - 1);
        }
    }

    /// Fuses the run at `index` with its next sibling when their styles
    /// match; keeps both (still adjacent) on a mismatch.
    ///
    /// A no-op when `index + 1` is past the last run.
    pub fn fuse_adjacent(&mut self, index: usize) {
        if index + 1 >= self.runs.len() {
            return;
        }
        let next = self.runs.remove(index + 1);
        if let Some(next) = self.runs[index].fuse(next) {
            self.runs.insert(index + 1, next);
        }
    }

    /// Removes the runs before `index`. Indices past the end are clamped.
    pub fn remove_before(&mut self, index: usize) {
        let index = index.min(self.runs.len());
        self.runs.drain(..index);
    }

    /// Removes the runs from `index` to the end. Indices past the end are
    /// clamped.
    pub fn remove_from(&mut self, index: usize) {
        self.runs.truncate(index);
    }

    /// Removes the runs in the half-open range `[start, end)`.
    ///
    /// A no-op when `start > end`. Indices past the end are clamped.
    pub fn remove_between(&mut self, start: usize, end: usize) {
        if start > end {
            return;
        }
        let end = end.min(self.runs.len());
        let start = start.min(end);
        self.runs.drain(start..end);
    }
}

#[cfg(test)]
mod tests {
    use super::{Block, BlockKind};
    use crate::{ErrorKind, Run, RunStyle};
    use alloc::vec::Vec;

    fn sample() -> Block {
        Block::with_runs(
            BlockKind::Heading1,
            [
                Run::new(RunStyle::Normal, "one"),
                Run::new(RunStyle::Bold, "two"),
                Run::new(RunStyle::Normal, "three"),
            ],
        )
    }

    #[test]
    fn split_off_moves_tail_into_paragraph() {
        let mut block = sample();
        let tail = block.split_off(1).unwrap();
        assert_eq!(block.len(), 1);
        assert_eq!(block.kind(), BlockKind::Heading1);
        assert_eq!(tail.kind(), BlockKind::Paragraph);
        let texts: Vec<_> = tail.runs().map(Run::text).collect();
        assert_eq!(texts, ["two", "three"]);
    }

    #[test]
    fn split_off_at_len_yields_empty_block() {
        let mut block = sample();
        let tail = block.split_off(3).unwrap();
        assert_eq!(block.len(), 3);
        assert!(tail.is_empty());
        assert_eq!(block.split_off(5).unwrap_err().kind(), ErrorKind::RunOutOfBounds);
    }

    #[test]
    fn split_run_inserts_tail_as_next_sibling() {
        let mut block = sample();
        block.split_run(1, 1).unwrap();
        let texts: Vec<_> = block.runs().map(Run::text).collect();
        assert_eq!(texts, ["one", "t", "wo", "three"]);
        assert_eq!(block.run(2).unwrap().style(), RunStyle::Bold);
    }

    #[test]
    fn split_run_then_fuse_adjacent_is_identity() {
        let mut block = sample();
        block.split_run(2, 3).unwrap();
        assert_eq!(block.len(), 4);
        block.fuse_adjacent(2);
        assert_eq!(block.len(), 3);
        let texts: Vec<_> = block.runs().map(Run::text).collect();
        assert_eq!(texts, ["one", "two", "three"]);
    }

    #[test]
    fn merge_fuses_same_style_seam() {
        let mut left = Block::with_runs(BlockKind::Paragraph, [Run::new(RunStyle::Normal, "ab")]);
        let right = Block::with_runs(BlockKind::Paragraph, [Run::new(RunStyle::Normal, "cd")]);
        left.merge(right);
        assert_eq!(left.len(), 1);
        assert_eq!(left.text(), "abcd");
    }

    #[test]
    fn merge_keeps_mismatched_seam_runs() {
        let mut left = Block::with_runs(BlockKind::Paragraph, [Run::new(RunStyle::Normal, "ab")]);
        let right = Block::with_runs(
            BlockKind::Paragraph,
            [Run::new(RunStyle::Bold, "cd"), Run::new(RunStyle::Normal, "ef")],
        );
        left.merge(right);
        assert_eq!(left.len(), 3);
        assert_eq!(left.text(), "abcdef");
        assert_eq!(left.run(1).unwrap().style(), RunStyle::Bold);
    }

    #[test]
    fn merge_into_empty_block() {
        let mut left = Block::new(BlockKind::Paragraph);
        let right = Block::with_runs(BlockKind::Paragraph, [Run::new(RunStyle::Normal, "cd")]);
        left.merge(right);
        assert_eq!(left.len(), 1);
        assert_eq!(left.text(), "cd");
    }

    #[test]
    fn removal_primitives_clamp() {
        let mut block = sample();
        block.remove_between(2, 9);
        assert_eq!(block.len(), 2);
        block.remove_before(9);
        assert!(block.is_empty());

        let mut block = sample();
        block.remove_from(9);
        assert_eq!(block.len(), 3);
        block.remove_between(2, 1);
        assert_eq!(block.len(), 3);
    }
}
