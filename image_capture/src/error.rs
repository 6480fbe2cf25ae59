// Copyright 2026 the Richedit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::io;
use std::path::PathBuf;
use std::thread::ThreadId;

use thiserror::Error;

/// Misuse of an [`ImageCapturer`](crate::ImageCapturer), or a failure setting up a capture.
#[derive(Error, Debug)]
pub enum CaptureError {
    /// Called from a thread other than the one that created the capturer.
    #[error("image capturer belongs to thread {owner:?}, called from {current:?}")]
    WrongThread {
        /// The creating thread.
        owner: ThreadId,
        /// The calling thread.
        current: ThreadId,
    },

    /// Request codes start at 1.
    #[error("request code must be greater than zero: {0}")]
    InvalidRequestCode(i32),

    /// A capture is already waiting for its result.
    #[error("can only capture one file at a time, previous file: {}", .0.display())]
    AlreadyAwaiting(PathBuf),

    /// The previous capture is still being decoded.
    #[error("previous image is still being decoded")]
    DecodeInFlight,

    /// A result arrived while no capture was pending.
    #[error("no capture is pending")]
    NotAwaiting,

    /// The capture directory could not be created.
    #[error("couldn't create capture directory {}", path.display())]
    CreateDir {
        /// The directory.
        path: PathBuf,
        /// The underlying failure.
        #[source]
        source: io::Error,
    },

    /// The decode thread could not be started.
    #[error("couldn't start decode thread")]
    Spawn(#[source] io::Error),
}

/// Failure decoding a captured image.
#[derive(Error, Debug)]
pub enum DecodeError {
    /// The file could not be read or is not a supported image.
    #[error("decoding {} failed", path.display())]
    Io {
        /// The file being decoded.
        path: PathBuf,
        /// The underlying failure.
        #[source]
        source: image::ImageError,
    },

    /// Decoding needed more memory than allowed.
    #[error("not enough memory to decode {}", path.display())]
    OutOfMemory {
        /// The file being decoded.
        path: PathBuf,
        /// The underlying failure.
        #[source]
        source: image::ImageError,
    },
}

impl DecodeError {
    /// The file that failed to decode.
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::Io { path, .. } | Self::OutOfMemory { path, .. } => path,
        }
    }
}

/// Result of capturer operations.
pub type Result<T> = std::result::Result<T, CaptureError>;
