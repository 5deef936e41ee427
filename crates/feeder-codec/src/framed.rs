//! Newline-framed codec for feeder-settings traffic.
//!
//! Splits a serial or socket stream on `\n` so it can be turned into a
//! `Framed` stream of [`FeederConfig`] values. A line that fails to decode,
//! including one that is not valid UTF-8, is yielded as `Some(Err(..))`
//! rather than ending the stream; controllers interleave `ok`
//! acknowledgements, echoes and line noise with `M620` replies.

use tokio_util::bytes::{Bytes, BytesMut};
use tokio_util::codec::{AnyDelimiterCodec, AnyDelimiterCodecError, Decoder, Encoder};

use crate::error::{DecodeError, FrameError};
use crate::settings::FeederConfig;

const NEWLINE: &[u8] = b"\n";

/// Codec that frames `M620` lines on newlines and decodes each one.
///
/// Only I/O failures and over-long lines are stream errors.
#[derive(Debug, Clone)]
pub struct FeederLineCodec {
    lines: AnyDelimiterCodec,
}

impl Default for FeederLineCodec {
    fn default() -> Self {
        Self::new()
    }
}

impl FeederLineCodec {
    pub fn new() -> Self {
        Self {
            lines: AnyDelimiterCodec::new(NEWLINE.to_vec(), NEWLINE.to_vec()),
        }
    }

    /// Reject lines longer than `max_length` bytes (excluding the newline).
    pub fn new_with_max_length(max_length: usize) -> Self {
        Self {
            lines: AnyDelimiterCodec::new_with_max_length(
                NEWLINE.to_vec(),
                NEWLINE.to_vec(),
                max_length,
            ),
        }
    }

    pub fn max_length(&self) -> usize {
        self.lines.max_length()
    }

    fn frame_error(&self, err: AnyDelimiterCodecError) -> FrameError {
        match err {
            AnyDelimiterCodecError::MaxChunkLengthExceeded => FrameError::LineTooLong {
                max: self.lines.max_length(),
            },
            AnyDelimiterCodecError::Io(e) => FrameError::Io(e),
        }
    }

    fn parse_line(raw: Bytes) -> Option<Result<FeederConfig, DecodeError>> {
        let line = match std::str::from_utf8(&raw) {
            Ok(line) => line,
            Err(e) => {
                tracing::debug!(line_len = raw.len(), error = %e, "Line is not valid UTF-8");
                return Some(Err(DecodeError::MalformedLine));
            }
        };
        if line.trim().is_empty() {
            return None;
        }
        tracing::trace!(line_len = line.len(), "Decoding frame");
        Some(line.parse())
    }
}

impl Decoder for FeederLineCodec {
    type Item = Result<FeederConfig, DecodeError>;
    type Error = FrameError;

    fn decode(&mut self, src: &mut BytesMut) -> Result<Option<Self::Item>, Self::Error> {
        loop {
            match self.lines.decode(src) {
                Ok(Some(raw)) => {
                    if let Some(item) = Self::parse_line(raw) {
                        return Ok(Some(item));
                    }
                }
                Ok(None) => return Ok(None),
                Err(e) => return Err(self.frame_error(e)),
            }
        }
    }

    fn decode_eof(&mut self, src: &mut BytesMut) -> Result<Option<Self::Item>, Self::Error> {
        loop {
            match self.lines.decode_eof(src) {
                Ok(Some(raw)) => {
                    if let Some(item) = Self::parse_line(raw) {
                        return Ok(Some(item));
                    }
                }
                Ok(None) => return Ok(None),
                Err(e) => return Err(self.frame_error(e)),
            }
        }
    }
}

impl Encoder<FeederConfig> for FeederLineCodec {
    type Error = FrameError;

    fn encode(&mut self, item: FeederConfig, dst: &mut BytesMut) -> Result<(), Self::Error> {
        let line = item.to_string();
        self.lines.encode(line, dst).map_err(|e| self.frame_error(e))
    }
}
