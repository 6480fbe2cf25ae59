// Copyright 2026 the Richedit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::path::PathBuf;

/// Where captures are written and how much decoding may cost.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CaptureOptions {
    /// Directory that receives capture files. Created on demand.
    pub directory: PathBuf,
    /// Prefix of capture file names; a random UUID and `.jpg` follow it.
    pub file_prefix: String,
    /// Upper bound on the memory a single decode may allocate, in bytes.
    pub max_decode_alloc: u64,
    /// Decoded images larger than this in either dimension are scaled down to fit.
    pub max_dimension: u32,
}

impl Default for CaptureOptions {
    fn default() -> Self {
        Self {
            directory: std::env::temp_dir().join("richedit-capture"),
            file_prefix: String::from("richedit-capture-"),
            max_decode_alloc: 256 * 1024 * 1024,
            max_dimension: 2048,
        }
    }
}

impl CaptureOptions {
    /// Creates the default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the capture directory.
    pub fn directory(mut self, directory: impl Into<PathBuf>) -> Self {
        self.directory = directory.into();
        self
    }

    /// Sets the capture file name prefix.
    pub fn file_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.file_prefix = prefix.into();
        self
    }

    /// Sets the decode allocation limit.
    pub fn max_decode_alloc(mut self, bytes: u64) -> Self {
        self.max_decode_alloc = bytes;
        self
    }

    /// Sets the largest decoded dimension.
    pub fn max_dimension(mut self, pixels: u32) -> Self {
        self.max_dimension = pixels;
        self
    }
}
