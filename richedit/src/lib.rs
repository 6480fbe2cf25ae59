// Copyright 2026 the Richedit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rich text effects over a span-annotated buffer.
//!
//! - [`Span`] is the span vocabulary: style markers, typeface, alignment, annotations, images.
//! - [`apply_effect_value`] is the span algebra every effect goes through: it splits, truncates
//!   and recreates overlapping spans so that one value covers the selection while text outside it
//!   keeps its styling.
//! - [`Effect`] describes one styling dimension; [`catalog`] holds the built-in ones.
//! - [`image`] manages inline images and the keys that let them be rebuilt.
//! - [`RichEditor`] ties a buffer, a selection and observers together for a host.
//!
//! The engine works against any [`SpanStore`](span_store::SpanStore); [`RichEditor`] uses the
//! in-memory [`SpannedText`](span_store::SpannedText).
//!
//! ## Indices
//!
//! Selections are **byte indices** into UTF-8 text. An inline image occupies the three bytes of
//! U+FFFC OBJECT REPLACEMENT CHARACTER.
//!
//! ## Overlaps
//!
//! Applying an effect value to a selection replaces that effect in the selection, whatever was
//! there before. A span that sticks out of the selection is cut at the selection boundary and
//! the part outside keeps its value.
//!
//! ## Example
//!
//! ```
//! use richedit::catalog::{BOLD, TYPEFACE};
//! use richedit::{Effect, RichEditor};
//!
//! let mut editor = RichEditor::new("Hello world");
//! editor.select_all();
//! editor.apply_effect(&TYPEFACE, Some("serif".into())).unwrap();
//!
//! editor.select(6, 11).unwrap();
//! editor.toggle_effect(&BOLD).unwrap();
//! editor.apply_effect(&TYPEFACE, Some("monospace".into())).unwrap();
//! assert_eq!(editor.effect_value(&TYPEFACE).as_deref(), Some("monospace"));
//!
//! editor.select(0, 5).unwrap();
//! assert_eq!(editor.effect_value(&TYPEFACE).as_deref(), Some("serif"));
//! assert_eq!(BOLD.value_in_selection(editor.buffer(), editor.selection()), Some(false));
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

mod action;
mod annotation;
mod apply;
pub mod catalog;
mod editor;
mod effect;
pub mod image;
mod iterate;
mod selection;
mod span;

#[cfg(test)]
mod tests;

pub use crate::action::{EditorAction, Shortcut};
pub use crate::annotation::{Annotation, AnnotationKey};
pub use crate::apply::apply_effect_value;
pub use crate::editor::{EditorOptions, RichEditor, SelectionListener};
pub use crate::effect::{AnyEffect, Effect, MarkerEffect, SpanEffect};
pub use crate::image::{ImageSpanWatcher, OBJECT_REPLACEMENT};
pub use crate::iterate::{for_each_matching_span, reduce_matching_spans};
pub use crate::selection::Selection;
pub use crate::span::{Alignment, InlineImage, Span, SpanKind, TextStyle};
