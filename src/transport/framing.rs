use crate::protocol::ProtocolError;

/// Longest reply line accepted by default, terminator excluded.
pub const DEFAULT_MAX_FRAME_BYTES: usize = 64 * 1024;

/// Accumulates received bytes and hands out complete `\n`-terminated frames.
///
/// A single socket read may hold part of a frame or several frames; bytes
/// after the last terminator stay buffered for the next call. A line longer
/// than the frame limit is reported once and then skipped up to its
/// terminator, so the buffer never holds more than one limit plus one read.
pub struct LineBuffer {
    buffer: Vec<u8>,
    max_frame_bytes: usize,
    discarding: bool,
}

impl Default for LineBuffer {
    fn default() -> Self {
        Self::with_limit(DEFAULT_MAX_FRAME_BYTES)
    }
}

impl LineBuffer {
    pub fn with_limit(max_frame_bytes: usize) -> Self {
        Self {
            buffer: Vec::new(),
            max_frame_bytes,
            discarding: false,
        }
    }

    pub fn push(&mut self, chunk: &[u8]) {
        if !self.discarding {
            self.buffer.extend_from_slice(chunk);
            return;
        }
        // Still inside an oversized line: drop through its terminator.
        if let Some(newline_index) = memchr::memchr(b'\n', chunk) {
            self.discarding = false;
            self.buffer.extend_from_slice(&chunk[newline_index + 1..]);
        }
    }

    /// Removes and returns the next complete frame without its terminator.
    /// A trailing `\r` is stripped as well.
    pub fn next_frame(&mut self) -> Result<Option<Vec<u8>>, ProtocolError> {
        let limit = self.max_frame_bytes;
        let Some(newline_index) = memchr::memchr(b'\n', &self.buffer) else {
            if self.buffer.len() > limit {
                self.buffer.clear();
                self.discarding = true;
                return Err(ProtocolError::FrameTooLong { limit });
            }
            return Ok(None);
        };

        let mut line_end = newline_index;
        if line_end > 0 && self.buffer[line_end - 1] == b'\r' {
            line_end -= 1;
        }
        if line_end > limit {
            self.buffer.drain(..=newline_index);
            return Err(ProtocolError::FrameTooLong { limit });
        }

        let frame = self.buffer[..line_end].to_vec();
        self.buffer.drain(..=newline_index);
        Ok(Some(frame))
    }

    /// Bytes received after the last complete frame.
    pub fn pending(&self) -> usize {
        self.buffer.len()
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
        self.discarding = false;
    }
}
