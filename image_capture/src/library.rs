// Copyright 2026 the Richedit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use richedit::{InlineImage, RichEditor};

use crate::CapturedImage;

/// What the library remembers about one image.
#[derive(Clone, Debug, PartialEq)]
pub struct LibraryEntry {
    /// Where the image can be loaded from again.
    pub source: PathBuf,
    /// Decoded width in pixels.
    pub width: u32,
    /// Decoded height in pixels.
    pub height: u32,
}

/// Image keys handed out to a [`RichEditor`], and the sources behind them.
///
/// Keys are `"1"`, `"2"`, ... in insertion order and are never reused, so a key left behind in a
/// persisted buffer cannot resolve to a different image.
#[derive(Debug)]
pub struct ImageLibrary {
    next_key: u64,
    entries: BTreeMap<u64, LibraryEntry>,
}

impl Default for ImageLibrary {
    fn default() -> Self {
        Self {
            next_key: 1,
            entries: BTreeMap::new(),
        }
    }
}

impl ImageLibrary {
    /// Creates an empty library.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of images remembered.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no images are remembered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Remembers an image and returns its key.
    pub fn add(&mut self, source: impl Into<PathBuf>, width: u32, height: u32) -> String {
        let id = self.next_key;
        self.next_key += 1;
        self.entries.insert(
            id,
            LibraryEntry {
                source: source.into(),
                width,
                height,
            },
        );
        id.to_string()
    }

    /// The entry for `key`.
    pub fn get(&self, key: &str) -> Option<&LibraryEntry> {
        self.entries.get(&key.parse::<u64>().ok()?)
    }

    /// Forgets `key`, typically once its placeholder was deleted from the text.
    pub fn release(&mut self, key: &str) -> Option<LibraryEntry> {
        let entry = self.entries.remove(&key.parse::<u64>().ok()?);
        if let Some(entry) = &entry {
            log::debug!("released image {key} ({})", entry.source.display());
        }
        entry
    }

    /// The inline image to draw for `key`; suitable as a restore resolver.
    pub fn resolve(&self, key: &str) -> Option<InlineImage> {
        let id = key.parse::<u64>().ok()?;
        let entry = self.entries.get(&id)?;
        Some(InlineImage {
            id,
            width: entry.width as f32,
            height: entry.height as f32,
        })
    }

    /// Remembers a decoded capture and inserts it at the editor's selection.
    ///
    /// Returns the key, or `None` if the capture has no source to reload it from.
    pub fn insert_captured(
        &mut self,
        editor: &mut RichEditor,
        image: &CapturedImage,
    ) -> Result<Option<String>, span_store::Error> {
        let Some(source) = image.source() else {
            return Ok(None);
        };
        let key = self.add(source, image.width(), image.height());
        if let Some(inline) = self.resolve(&key) {
            editor.insert_image(&key, inline)?;
        }
        Ok(Some(key))
    }

    /// Recreates every image span in `editor` whose key is still remembered.
    pub fn restore_into(&self, editor: &mut RichEditor) -> Result<usize, span_store::Error> {
        editor.restore_image_spans(|key| self.resolve(key))
    }

    /// Iterates over keys and entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (String, &LibraryEntry)> {
        self.entries.iter().map(|(id, entry)| (id.to_string(), entry))
    }

    /// Sources of all remembered images.
    pub fn sources(&self) -> impl Iterator<Item = &Path> {
        self.entries.values().map(|entry| entry.source.as_path())
    }
}
