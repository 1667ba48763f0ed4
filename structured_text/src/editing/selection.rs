// Copyright 2026 the Structured Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::Position;

/// An anchor/focus pair of [`Position`]s.
///
/// The anchor is where a selection gesture started and the focus is where it
/// currently ends; the focus may precede the anchor in document order.
/// [`normalized`](Self::normalized) orders the pair.
///
/// Like positions, selections are ephemeral values: any structural mutation
/// invalidates them and the host must re-derive its selection afterwards.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Selection {
    anchor: Position,
    focus: Position,
}

impl Selection {
    /// Creates a new selection from the given anchor and focus positions.
    pub fn new(anchor: Position, focus: Position) -> Self {
        Self { anchor, focus }
    }

    /// Returns the anchor of the selection.
    pub fn anchor(&self) -> Position {
        self.anchor
    }

    /// Returns the focus of the selection.
    pub fn focus(&self) -> Position {
        self.focus
    }

    /// Returns `true` if the anchor and focus of the selection are the same.
    pub fn is_collapsed(&self) -> bool {
        self.anchor == self.focus
    }

    /// Returns the endpoints of the selection in document order.
    pub fn normalized(&self) -> (Position, Position) {
        if self.anchor <= self.focus {
            (self.anchor, self.focus)
        } else {
            (self.focus, self.anchor)
        }
    }
}

impl From<Position> for Selection {
    /// Creates a collapsed selection (a caret) at `position`.
    fn from(position: Position) -> Self {
        Self::new(position, position)
    }
}
