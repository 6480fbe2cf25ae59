// Copyright 2026 the Richedit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Decoding a captured file into pixels.

use std::path::{Path, PathBuf};

use image::error::LimitErrorKind;
use image::imageops::FilterType;
use image::{ImageError, ImageReader, Limits, RgbaImage};

use crate::DecodeError;

/// A decoded capture, ready to be shown inline.
#[derive(Clone, Debug)]
pub struct CapturedImage {
    /// RGBA pixels, scaled down to the configured maximum dimension.
    pub pixels: RgbaImage,
    /// The file the user picked, when the image did not come from the camera.
    pub picked: Option<PathBuf>,
    /// The capture file, if the camera wrote one.
    pub file: Option<PathBuf>,
}

impl CapturedImage {
    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    /// Where the image came from: the picked file, or else the capture file.
    pub fn source(&self) -> Option<&Path> {
        self.picked.as_deref().or(self.file.as_deref())
    }
}

/// Outcome of one background decode.
pub type DecodeResult = Result<CapturedImage, DecodeError>;

/// Decodes `path` under an allocation limit, scaling the result to fit `max_dimension`.
pub(crate) fn decode_file(
    path: &Path,
    max_alloc: u64,
    max_dimension: u32,
) -> Result<RgbaImage, DecodeError> {
    let mut reader = ImageReader::open(path)
        .and_then(ImageReader::with_guessed_format)
        .map_err(|e| classify(path, ImageError::IoError(e)))?;
    let mut limits = Limits::default();
    limits.max_alloc = Some(max_alloc);
    reader.limits(limits);

    let image = reader.decode().map_err(|e| classify(path, e))?;
    let max_dimension = max_dimension.max(1);
    let image = if image.width() > max_dimension || image.height() > max_dimension {
        log::debug!(
            "scaling {}x{} capture down to fit {max_dimension}",
            image.width(),
            image.height()
        );
        image.resize(max_dimension, max_dimension, FilterType::Triangle)
    } else {
        image
    };
    Ok(image.into_rgba8())
}

fn classify(path: &Path, source: ImageError) -> DecodeError {
    let path = path.to_path_buf();
    let out_of_memory = matches!(
        &source,
        ImageError::Limits(limit) if matches!(limit.kind(), LimitErrorKind::InsufficientMemory)
    );
    if out_of_memory {
        DecodeError::OutOfMemory { path, source }
    } else {
        DecodeError::Io { path, source }
    }
}
