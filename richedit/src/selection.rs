// Copyright 2026 the Richedit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::ops::Range;

/// A normalized byte range that an operation targets.
///
/// `start <= end` always holds. An empty selection is a caret.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Selection {
    start: usize,
    end: usize,
}

impl Selection {
    /// Creates a selection from two offsets in either order.
    #[inline]
    pub fn new(start: usize, end: usize) -> Self {
        Self {
            start: start.min(end),
            end: start.max(end),
        }
    }

    /// Creates a selection from an editor's anchor and focus.
    ///
    /// The anchor stays put while the user extends the selection, so it may lie after the focus.
    #[inline]
    pub fn from_anchor_focus(anchor: usize, focus: usize) -> Self {
        Self::new(anchor, focus)
    }

    /// Creates an empty selection at `offset`.
    #[inline]
    pub fn caret(offset: usize) -> Self {
        Self {
            start: offset,
            end: offset,
        }
    }

    /// Selects the whole of a text of `len` bytes.
    #[inline]
    pub fn whole(len: usize) -> Self {
        Self { start: 0, end: len }
    }

    /// Start offset (inclusive).
    #[inline]
    pub fn start(&self) -> usize {
        self.start
    }

    /// End offset (exclusive).
    #[inline]
    pub fn end(&self) -> usize {
        self.end
    }

    /// Returns `true` if the selection is a caret.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Length in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Returns the selection as a `Range<usize>`.
    #[inline]
    pub fn as_range(&self) -> Range<usize> {
        self.start..self.end
    }
}

impl From<Range<usize>> for Selection {
    fn from(range: Range<usize>) -> Self {
        Self::new(range.start, range.end)
    }
}

impl From<Selection> for Range<usize> {
    fn from(selection: Selection) -> Self {
        selection.as_range()
    }
}
