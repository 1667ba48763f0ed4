// Copyright 2026 the Structured Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;

use crate::Error;

/// The style of a [`Run`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum RunStyle {
    /// Unstyled text.
    #[default]
    Normal,
    /// Bold text.
    Bold,
    /// Italic text.
    Italic,
}

/// A styled contiguous span of text: the leaf of the document tree and the
/// unit of style uniformity.
///
/// Runs are owned exclusively by their parent [`Block`](crate::Block) and
/// store no reference back to it. The empty string is a valid run text.
///
/// All offsets are byte offsets into the run's UTF-8 text and must lie on
/// character boundaries. Mutating operations validate every offset before
/// touching the text, so an error always leaves the run unchanged.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Run {
    style: RunStyle,
    text: String,
}

impl Run {
    /// Creates a new run with the given style and text.
    pub fn new(style: RunStyle, text: impl Into<String>) -> Self {
        Self {
            style,
            text: text.into(),
        }
    }

    /// Returns the style of the run.
    pub fn style(&self) -> RunStyle {
        self.style
    }

    /// Borrows the text of the run.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the length of the run's text, in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Returns `true` if the run's text is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Splits this run at `offset`, returning the tail.
    ///
    /// The receiver keeps `text[..offset]`; the returned run has the same
    /// style and holds `text[offset..]`. The caller is responsible for
    /// inserting the tail as the immediate next sibling; in-tree splitting
    /// goes through [`Block::split_run`](crate::Block::split_run), which does
    /// the insertion.
    pub fn split_off(&mut self, offset: usize) -> Result<Self, Error> {
        self.check_offset(offset)?;
        let tail = self.text.split_off(offset);
        Ok(Self {
            style: self.style,
            text: tail,
        })
    }

    /// Removes the text before `offset`.
    pub fn remove_before(&mut self, offset: usize) -> Result<(), Error> {
        self.check_offset(offset)?;
        self.text.replace_range(..offset, "");
        Ok(())
    }

    /// Removes the text from `offset` to the end.
    pub fn remove_from(&mut self, offset: usize) -> Result<(), Error> {
        self.check_offset(offset)?;
        self.text.truncate(offset);
        Ok(())
    }

    /// Removes the text in the half-open byte range `[start, end)`.
    ///
    /// A no-op when `start > end`. Both offsets are validated before the text
    /// is touched.
    pub fn remove_between(&mut self, start: usize, end: usize) -> Result<(), Error> {
        if start > end {
            return Ok(());
        }
        self.check_offset(start)?;
        self.check_offset(end)?;
        self.text.replace_range(start..end, "");
        Ok(())
    }

    /// Fuses `other` into this run when the styles match.
    ///
    /// On a match, `other`'s text is appended to this run's text and `None`
    /// is returned; `other` is gone from the tree. On a style mismatch,
    /// `other` is handed back unchanged so the caller can reinsert it as the
    /// immediate next sibling. No text is lost either way.
    #[must_use = "on a style mismatch the other run is handed back and must be reinserted"]
    pub fn fuse(&mut self, other: Self) -> Option<Self> {
        if self.style == other.style {
            self.text.push_str(&other.text);
            None
        } else {
            Some(other)
        }
    }

    pub(crate) fn check_offset(&self, offset: usize) -> Result<(), Error> {
        if offset > self.text.len() {
            return Err(Error::offset_out_of_bounds(offset, self.text.len()));
        }
        if !self.text.is_char_boundary(offset) {
            return Err(Error::not_on_char_boundary(&self.text, offset));
        }
        Ok(())
    }
}
