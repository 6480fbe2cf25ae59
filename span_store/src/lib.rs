// Copyright 2026 the Richedit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Span Store defines the capability a rich text engine needs from a text buffer: spans of
//! typed attributes attached to half-open byte ranges, queried per span kind.
//!
//! - [`SpanStore`] is the capability itself: query, inspect, remove, and install spans.
//! - [`SpanWatcher`] observes spans being attached and detached.
//! - [`SpannedText`] is an in-memory implementation that can also edit its text.
//! - [`TextRange`] and [`Error`] handle range validation.
//!
//! ## Indices
//!
//! All ranges are **byte indices** into UTF-8 text and must lie on character boundaries.
//!
//! ## Example
//!
//! ```
//! use span_store::{Attribute, SpanStore, SpannedText};
//!
//! #[derive(Debug, PartialEq)]
//! struct Bold;
//!
//! impl Attribute for Bold {
//!     type Kind = ();
//!     fn kind(&self) {}
//! }
//!
//! let mut text = SpannedText::new(String::from("Hello world"));
//! text.install(Bold, 0..5).unwrap();
//! assert_eq!(text.spans_overlapping((), 4..8).len(), 1);
//! assert_eq!(text.spans_overlapping((), 5..8).len(), 0);
//!
//! text.replace_range(0..0, ">> ").unwrap();
//! let (_, range, _) = text.spans_iter().next().unwrap();
//! assert_eq!(range, 3..8);
//! ```
//!
//! ## Features
//!
//! - `std` (enabled by default): This is currently unused and is provided for forward compatibility.
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

mod error;
mod span_store;
mod spanned_text;
mod text_range;
mod text_storage;


pub use crate::error::{BoundaryInfo, Endpoint, Error, ErrorKind, Operation};
pub use crate::span_store::{intersects, Attribute, SpanId, SpanMatches, SpanStore, SpanWatcher};
pub use crate::spanned_text::SpannedText;
pub use crate::text_range::TextRange;
pub use crate::text_storage::{EditableText, TextStorage};
