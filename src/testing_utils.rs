//! Test utilities for capturing and inspecting spinner output.

use std::io::{self, Write};
use std::sync::{Arc, Mutex, PoisonError};

/// Thread-safe in-memory sink for spinner output.
///
/// Clones share one buffer, so a test can hand a clone to
/// `SpinnerBuilder::writer` and keep another to read back what the redraw
/// loop wrote.
#[derive(Clone, Debug, Default)]
pub struct CaptureWriter {
    buf: Arc<Mutex<Vec<u8>>>,
}

impl CaptureWriter {
    /// Creates an empty capture buffer
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of every byte written so far
    pub fn contents(&self) -> Vec<u8> {
        self.buf
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Returns the captured bytes decoded as UTF-8
    pub fn as_string(&self) -> String {
        String::from_utf8_lossy(&self.contents()).into_owned()
    }

    /// Number of bytes captured so far
    pub fn len(&self) -> usize {
        self.buf
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// True when nothing has been written yet
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Write for CaptureWriter {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        self.buf
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Extracts the frame payload of every redraw from a captured stream.
///
/// A redraw is a carriage return, an optional color escape, the frame glyphs
/// and the reset escape. The trailing `\r \r` erase and the cursor hide/show
/// escapes do not count as redraws.
pub fn drawn_frames(output: &str) -> Vec<String> {
    output
        .split('\r')
        .filter_map(|chunk| chunk.strip_suffix("\x1b[0m"))
        .map(|chunk| strip_color_prefix(chunk).to_owned())
        .collect()
}

/// Extracts the 256-color index of every redraw that carried a color prefix.
pub fn drawn_color_indices(output: &str) -> Vec<i32> {
    output
        .split('\r')
        .filter_map(|chunk| chunk.strip_suffix("\x1b[0m"))
        .filter_map(|chunk| {
            let rest = chunk.strip_prefix("\x1b[38;5;")?;
            let end = rest.find('m')?;
            rest[..end].parse().ok()
        })
        .collect()
}

fn strip_color_prefix(chunk: &str) -> &str {
    if let Some(rest) = chunk.strip_prefix("\x1b[") {
        if let Some(end) = rest.find('m') {
            return &rest[end + 1..];
        }
    }
    chunk
}
