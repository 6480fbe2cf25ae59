// Copyright 2026 the Richedit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::TextStorage;

/// Error returned when a span or edit range is rejected by a span store.
///
/// Carries a non-exhaustive [`ErrorKind`], the [`Operation`] that was attempted, the offending
/// range, and, for boundary failures, the UTF-8 character enclosing the bad index.
#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    kind: ErrorKind,
    operation: Operation,
    start: usize,
    end: usize,
    len: usize,
    boundary: Option<BoundaryInfo>,
}

#[expect(
    clippy::len_without_is_empty,
    reason = "`Error::len` reports the text length at the time of failure, not a collection size."
)]
impl Error {
    /// The machine-readable category for this error.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The operation that was rejected.
    pub fn operation(&self) -> Operation {
        self.operation
    }

    /// The start byte index of the rejected range.
    pub fn start(&self) -> usize {
        self.start
    }

    /// The end byte index (exclusive) of the rejected range.
    pub fn end(&self) -> usize {
        self.end
    }

    /// The length in bytes of the text at the time of the error.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Details for [`ErrorKind::NotOnCharBoundary`] errors.
    pub fn boundary(&self) -> Option<BoundaryInfo> {
        self.boundary
    }

    /// Returns the same error attributed to a different operation.
    pub fn during(mut self, operation: Operation) -> Self {
        self.operation = operation;
        self
    }

    pub(crate) fn new(kind: ErrorKind, start: usize, end: usize, len: usize) -> Self {
        Self {
            kind,
            operation: Operation::Validate,
            start,
            end,
            len,
            boundary: None,
        }
    }

    pub(crate) fn not_on_char_boundary<T: TextStorage + ?Sized>(
        text: &T,
        start: usize,
        end: usize,
        which: Endpoint,
    ) -> Self {
        let index = match which {
            Endpoint::Start => start,
            Endpoint::End => end,
        };
        let (char_start, char_end) = enclosing_char(text, index);
        Self {
            boundary: Some(BoundaryInfo {
                which,
                index,
                char_start,
                char_end,
            }),
            ..Self::new(ErrorKind::NotOnCharBoundary, start, end, text.len())
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} {}..{}: ", self.operation, self.start, self.end)?;
        match (self.kind, self.boundary) {
            (ErrorKind::InvalidBounds, _) => write!(f, "out of bounds for len {}", self.len),
            (ErrorKind::InvalidRange, _) => f.write_str("start > end"),
            (ErrorKind::NotOnCharBoundary, Some(b)) => write!(
                f,
                "{} index {} not on UTF-8 boundary (char {}..{})",
                b.which, b.index, b.char_start, b.char_end
            ),
            (ErrorKind::NotOnCharBoundary, None) => f.write_str("not on UTF-8 boundary"),
        }
    }
}

impl core::error::Error for Error {}

/// The non-exhaustive category of an [`Error`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// An index was past the end of the text.
    InvalidBounds,

    /// The range had `start > end`.
    InvalidRange,

    /// An index split a UTF-8 encoded character.
    NotOnCharBoundary,
}

/// What the caller was doing when an [`Error`] was produced.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum Operation {
    /// Validating a range on its own, e.g. through [`TextRange::new`](crate::TextRange::new).
    Validate,

    /// Attaching a span to the text.
    Install,

    /// Replacing a range of text.
    Replace,

    /// Moving a selection.
    Select,
}

impl core::fmt::Display for Operation {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(match self {
            Self::Validate => "range",
            Self::Install => "span",
            Self::Replace => "replace",
            Self::Select => "selection",
        })
    }
}

/// Which endpoint of a range failed boundary validation.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Endpoint {
    /// The `start` endpoint.
    Start,

    /// The `end` endpoint.
    End,
}

impl core::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(match self {
            Self::Start => "start",
            Self::End => "end",
        })
    }
}

/// The offending index of a [`ErrorKind::NotOnCharBoundary`] error and its enclosing character.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BoundaryInfo {
    /// Which endpoint was invalid.
    pub which: Endpoint,

    /// The offending byte index.
    pub index: usize,

    /// The start byte index of the enclosing character.
    pub char_start: usize,

    /// The end byte index (exclusive) of the enclosing character.
    pub char_end: usize,
}

/// A UTF-8 character is at most 4 bytes, so both boundaries are within 3 bytes of `index`.
fn enclosing_char<T: TextStorage + ?Sized>(text: &T, index: usize) -> (usize, usize) {
    let len = text.len();
    if index >= len || text.is_char_boundary(index) {
        return (index, index);
    }
    let start = (index.saturating_sub(3)..index)
        .rev()
        .find(|&i| text.is_char_boundary(i))
        .unwrap_or(0);
    let end = (index + 1..=(index + 3).min(len))
        .find(|&i| text.is_char_boundary(i))
        .unwrap_or(len);
    (start, end)
}
