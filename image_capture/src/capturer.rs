// Copyright 2026 the Richedit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::sync::Arc;
use std::thread::{self, JoinHandle, ThreadId};

use uuid::Uuid;

use crate::decode::{decode_file, CapturedImage, DecodeResult};
use crate::{CaptureError, CaptureOptions, Result};

/// How a capture request came back.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CaptureResult {
    /// The user backed out.
    Cancelled,
    /// The camera wrote the capture file returned by [`ImageCapturer::await_capture`].
    Camera,
    /// The user picked an existing image instead.
    Picked(PathBuf),
}

/// What [`ImageCapturer::on_capture_result`] did with a result.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CaptureStatus {
    /// The capture was cancelled; nothing will be delivered.
    Cancelled,
    /// A decode was started; collect it with [`ImageCapturer::poll`] or [`ImageCapturer::wait`].
    Decoding,
}

#[derive(Debug)]
struct Pending {
    request_code: i32,
    file: PathBuf,
}

#[derive(Debug)]
struct DecodeTask {
    results: Receiver<DecodeResult>,
    cancel: Arc<AtomicBool>,
    handle: JoinHandle<()>,
}

/// Coordinates capturing one image at a time and decoding it off the owning thread.
///
/// The capturer belongs to the thread that created it; every method checks this and fails with
/// [`CaptureError::WrongThread`] elsewhere. A capture goes through three steps:
///
/// 1. [`await_capture`](Self::await_capture) reserves a fresh file for a camera to write into.
/// 2. [`on_capture_result`](Self::on_capture_result) reports how the request came back and, if
///    an image is available, starts decoding it on a worker thread.
/// 3. [`poll`](Self::poll) or [`wait`](Self::wait) deliver the decoded image on the owning
///    thread.
///
/// Only one capture may be pending and only one decode may be in flight.
#[derive(Debug)]
pub struct ImageCapturer {
    owner: ThreadId,
    options: CaptureOptions,
    pending: Option<Pending>,
    decode: Option<DecodeTask>,
}

impl ImageCapturer {
    /// Creates a capturer owned by the current thread.
    pub fn new(options: CaptureOptions) -> Self {
        Self {
            owner: thread::current().id(),
            options,
            pending: None,
            decode: None,
        }
    }

    /// The options this capturer was created with.
    pub fn options(&self) -> &CaptureOptions {
        &self.options
    }

    /// The file reserved for the pending capture, if any.
    pub fn pending_file(&self) -> Option<&Path> {
        self.pending.as_ref().map(|p| p.file.as_path())
    }

    /// Returns `true` while a decode is in flight.
    pub fn is_decoding(&self) -> bool {
        self.decode.is_some()
    }

    /// Starts waiting for a capture identified by `request_code`, which must be at least 1.
    ///
    /// Creates the capture directory if needed and returns a fresh path for the camera to write
    /// the image to.
    pub fn await_capture(&mut self, request_code: i32) -> Result<PathBuf> {
        self.check_thread()?;
        if request_code < 1 {
            return Err(CaptureError::InvalidRequestCode(request_code));
        }
        if let Some(pending) = &self.pending {
            return Err(CaptureError::AlreadyAwaiting(pending.file.clone()));
        }
        if self.decode.is_some() {
            return Err(CaptureError::DecodeInFlight);
        }

        let directory = &self.options.directory;
        std::fs::create_dir_all(directory).map_err(|source| CaptureError::CreateDir {
            path: directory.clone(),
            source,
        })?;
        let file = directory.join(format!(
            "{}{}.jpg",
            self.options.file_prefix,
            Uuid::new_v4()
        ));
        log::debug!("awaiting capture {request_code} into {}", file.display());
        self.pending = Some(Pending {
            request_code,
            file: file.clone(),
        });
        Ok(file)
    }

    /// Reports how the capture request `request_code` came back.
    ///
    /// Returns `Ok(None)` if `request_code` is not the pending request, which is left waiting.
    /// Otherwise the pending capture is consumed, and a decode is started for a camera or picked
    /// image.
    pub fn on_capture_result(
        &mut self,
        request_code: i32,
        result: CaptureResult,
    ) -> Result<Option<CaptureStatus>> {
        self.check_thread()?;
        let Some(pending) = &self.pending else {
            return Err(CaptureError::NotAwaiting);
        };
        if pending.request_code != request_code {
            log::debug!(
                "ignoring result for request {request_code}, awaiting {}",
                pending.request_code
            );
            return Ok(None);
        }
        let Some(Pending { file, .. }) = self.pending.take() else {
            return Err(CaptureError::NotAwaiting);
        };

        let picked = match result {
            CaptureResult::Cancelled => {
                log::debug!("capture {request_code} cancelled");
                return Ok(Some(CaptureStatus::Cancelled));
            }
            CaptureResult::Camera => None,
            CaptureResult::Picked(path) => Some(path),
        };
        self.spawn_decode(file, picked)?;
        Ok(Some(CaptureStatus::Decoding))
    }

    /// Forgets the pending capture, if any. A result arriving later is rejected.
    pub fn cancel_await_capture(&mut self) -> Result<()> {
        self.check_thread()?;
        if let Some(pending) = self.pending.take() {
            log::debug!("stopped awaiting capture {}", pending.request_code);
        }
        Ok(())
    }

    /// Cancels the decode in flight, if any. Its result is discarded.
    ///
    /// Returns whether a decode was cancelled.
    pub fn cancel_background_processing(&mut self) -> Result<bool> {
        self.check_thread()?;
        let Some(task) = self.decode.take() else {
            return Ok(false);
        };
        task.cancel.store(true, Ordering::Relaxed);
        log::debug!("cancelled decode on {:?}", task.handle.thread().id());
        Ok(true)
    }

    /// Collects the decoded image without blocking.
    ///
    /// Returns `Ok(None)` while the decode is running or when none was started.
    pub fn poll(&mut self) -> Result<Option<DecodeResult>> {
        self.check_thread()?;
        let Some(task) = &self.decode else {
            return Ok(None);
        };
        match task.results.try_recv() {
            Ok(result) => Ok(self.finish(Some(result))),
            Err(TryRecvError::Empty) => Ok(None),
            Err(TryRecvError::Disconnected) => Ok(self.finish(None)),
        }
    }

    /// Blocks until the decode in flight completes.
    ///
    /// Returns `Ok(None)` when no decode was started.
    pub fn wait(&mut self) -> Result<Option<DecodeResult>> {
        self.check_thread()?;
        let Some(task) = &self.decode else {
            return Ok(None);
        };
        let result = task.results.recv().ok();
        Ok(self.finish(result))
    }

    fn finish(&mut self, result: Option<DecodeResult>) -> Option<DecodeResult> {
        let task = self.decode.take()?;
        if task.handle.join().is_err() {
            log::warn!("decode thread panicked");
        }
        match &result {
            Some(Ok(image)) => log::debug!("decoded {}x{} capture", image.width(), image.height()),
            Some(Err(err)) => log::warn!("capture decode failed: {err}"),
            None => {}
        }
        result
    }

    fn spawn_decode(&mut self, file: PathBuf, picked: Option<PathBuf>) -> Result<()> {
        let (sender, results) = mpsc::channel();
        let cancel = Arc::new(AtomicBool::new(false));
        let max_alloc = self.options.max_decode_alloc;
        let max_dimension = self.options.max_dimension;

        let worker_cancel = cancel.clone();
        let handle = thread::Builder::new()
            .name(String::from("image-capture-decode"))
            .spawn(move || {
                let source = picked.as_deref().unwrap_or(&file);
                let result = decode_file(source, max_alloc, max_dimension).map(|pixels| {
                    CapturedImage {
                        pixels,
                        file: file.exists().then(|| file.clone()),
                        picked: picked.clone(),
                    }
                });
                if worker_cancel.load(Ordering::Relaxed) {
                    log::warn!("discarding decode of {}: cancelled", source.display());
                    return;
                }
                // The receiver is gone if the decode was cancelled meanwhile.
                let _ = sender.send(result);
            })
            .map_err(CaptureError::Spawn)?;

        self.decode = Some(DecodeTask {
            results,
            cancel,
            handle,
        });
        Ok(())
    }

    fn check_thread(&self) -> Result<()> {
        let current = thread::current().id();
        if current == self.owner {
            Ok(())
        } else {
            Err(CaptureError::WrongThread {
                owner: self.owner,
                current,
            })
        }
    }
}
