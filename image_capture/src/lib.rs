// Copyright 2026 the Richedit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Image capture for [`richedit`]: one capture at a time, decoded off the owning thread.
//!
//! - [`ImageCapturer`] reserves a file for a camera to write, accepts the outcome of the request,
//!   and decodes the image on a worker thread with bounded memory.
//! - [`ImageLibrary`] hands out the image keys stored in the text and resolves them back to
//!   inline images when a buffer is restored.
//!
//! ## Example
//!
//! ```no_run
//! use image_capture::{CaptureOptions, CaptureResult, ImageCapturer, ImageLibrary};
//! use richedit::RichEditor;
//!
//! let mut editor = RichEditor::new("A photo: ");
//! editor.select(9, 9).unwrap();
//!
//! let mut capturer = ImageCapturer::new(CaptureOptions::default());
//! let mut library = ImageLibrary::new();
//!
//! let target = capturer.await_capture(1).unwrap();
//! // ... hand `target` to the camera, then report back:
//! capturer.on_capture_result(1, CaptureResult::Camera).unwrap();
//! if let Some(Ok(captured)) = capturer.wait().unwrap() {
//!     library.insert_captured(&mut editor, &captured).unwrap();
//! }
//! # let _ = target;
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

mod capturer;
mod decode;
mod error;
mod library;
mod options;


pub use crate::capturer::{CaptureResult, CaptureStatus, ImageCapturer};
pub use crate::decode::{CapturedImage, DecodeResult};
pub use crate::error::{CaptureError, DecodeError, Result};
pub use crate::library::{ImageLibrary, LibraryEntry};
pub use crate::options::CaptureOptions;
