//! Frame encoding and decoding for Unicorn HD panels.
//!
//! Frame format:
//! - HEADER (1 byte): `SOF` for a lone panel, `SOF + 1 + address` in a chain
//! - PAYLOAD: pixel bytes, R, G, B per pixel, in x-major order
//!
//! A panel always consumes 768 payload bytes. Single-panel frames built from
//! a buffer that is not 16x16 carry `width * height * 3` bytes; the panel
//! behaviour for such frames is undefined, and [`FrameParser`] only accepts
//! panel-sized frames.

use alloc::vec::Vec;

use crate::header::{Header, PanelAddress};

/// Panel width in pixels
pub const PANEL_WIDTH: usize = 16;

/// Panel height in pixels
pub const PANEL_HEIGHT: usize = 16;

/// Payload bytes consumed by one panel
pub const PANEL_PAYLOAD_SIZE: usize = PANEL_WIDTH * PANEL_HEIGHT * 3;

/// Complete panel frame size (HEADER + PAYLOAD)
pub const PANEL_FRAME_SIZE: usize = 1 + PANEL_PAYLOAD_SIZE;

/// Minimum delay between frames on the bus (1/120 s)
pub const FRAME_DELAY_US: u32 = 1_000_000 / 120;

/// Errors that can occur during frame parsing or encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FrameError {
    /// Addressed frame payload is not exactly one panel
    InvalidPayloadLength,
    /// Buffer too small for encoding
    BufferTooSmall,
    /// First byte of a transaction is not a header
    InvalidHeader,
    /// Frame is incomplete (need more bytes)
    Incomplete,
    /// Bytes remain after a complete frame
    TrailingBytes,
}

/// A parsed or constructed frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// Frame header
    pub header: Header,
    /// Pixel bytes
    pub payload: Vec<u8>,
}

impl Frame {
    /// Create a frame, checking the payload length for addressed frames
    pub fn new(header: Header, payload: Vec<u8>) -> Result<Self, FrameError> {
        if matches!(header, Header::Addressed(_)) && payload.len() != PANEL_PAYLOAD_SIZE {
            return Err(FrameError::InvalidPayloadLength);
        }
        Ok(Self { header, payload })
    }

    /// Create a single-panel frame
    pub fn single(payload: Vec<u8>) -> Self {
        Self {
            header: Header::Single,
            payload,
        }
    }

    /// Create a frame for the panel at `address`
    pub fn addressed(address: PanelAddress, payload: Vec<u8>) -> Result<Self, FrameError> {
        Self::new(Header::Addressed(address), payload)
    }

    /// Number of bytes this frame occupies on the wire
    pub fn encoded_len(&self) -> usize {
        1 + self.payload.len()
    }

    /// Encode this frame into a byte buffer
    ///
    /// Returns the number of bytes written
    pub fn encode(&self, buffer: &mut [u8]) -> Result<usize, FrameError> {
        let frame_len = self.encoded_len();
        if buffer.len() < frame_len {
            return Err(FrameError::BufferTooSmall);
        }

        buffer[0] = self.header.to_byte();
        buffer[1..frame_len].copy_from_slice(&self.payload);

        Ok(frame_len)
    }

    /// Encode this frame into a newly allocated Vec
    pub fn encode_to_vec(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.encoded_len());
        bytes.push(self.header.to_byte());
        bytes.extend_from_slice(&self.payload);
        bytes
    }

    /// Decode exactly one panel-sized frame from a complete transaction
    pub fn decode(bytes: &[u8]) -> Result<Self, FrameError> {
        let mut parser = FrameParser::new();
        for (i, &byte) in bytes.iter().enumerate() {
            if let Some(frame) = parser.feed(byte)? {
                if i + 1 != bytes.len() {
                    return Err(FrameError::TrailingBytes);
                }
                return Ok(frame);
            }
        }
        Err(FrameError::Incomplete)
    }
}

/// State machine for parsing incoming panel frames
///
/// Models the receive side of a panel: the first byte selects the frame
/// type, then exactly [`PANEL_PAYLOAD_SIZE`] bytes follow. Call
/// [`end_transaction`](FrameParser::end_transaction) when chip select is
/// released.
#[derive(Debug, Clone)]
pub struct FrameParser {
    state: ParseState,
    buffer: Vec<u8>,
    header: Header,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParseState {
    /// Waiting for HEADER byte
    WaitingForHeader,
    /// Reading payload bytes
    ReadingPayload,
}

impl Default for FrameParser {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameParser {
    /// Create a new frame parser
    pub fn new() -> Self {
        Self {
            state: ParseState::WaitingForHeader,
            buffer: Vec::new(),
            header: Header::Single,
        }
    }

    /// Reset the parser state
    pub fn reset(&mut self) {
        self.state = ParseState::WaitingForHeader;
        self.buffer.clear();
        self.header = Header::Single;
    }

    /// Whether the parser is between frames
    pub fn is_idle(&self) -> bool {
        self.state == ParseState::WaitingForHeader
    }

    /// Feed a single byte to the parser
    ///
    /// Returns `Ok(Some(frame))` when a complete frame is parsed,
    /// `Ok(None)` when more bytes are needed, or `Err` if a frame does not
    /// start with a valid header byte. The rejected byte is dropped and the
    /// parser keeps waiting for a header.
    pub fn feed(&mut self, byte: u8) -> Result<Option<Frame>, FrameError> {
        match self.state {
            ParseState::WaitingForHeader => {
                let header = Header::from_byte(byte).ok_or(FrameError::InvalidHeader)?;
                self.header = header;
                self.buffer.clear();
                self.buffer.reserve(PANEL_PAYLOAD_SIZE);
                self.state = ParseState::ReadingPayload;
                Ok(None)
            }
            ParseState::ReadingPayload => {
                self.buffer.push(byte);
                if self.buffer.len() < PANEL_PAYLOAD_SIZE {
                    return Ok(None);
                }

                let frame = Frame {
                    header: self.header,
                    payload: core::mem::take(&mut self.buffer),
                };
                self.reset();
                Ok(Some(frame))
            }
        }
    }

    /// Feed multiple bytes to the parser
    ///
    /// Returns the first complete frame found, if any.
    /// Remaining bytes after a complete frame are not consumed.
    pub fn feed_bytes(&mut self, bytes: &[u8]) -> Result<Option<Frame>, FrameError> {
        for &byte in bytes {
            if let Some(frame) = self.feed(byte)? {
                return Ok(Some(frame));
            }
        }
        Ok(None)
    }

    /// Signal the end of a bus transaction
    ///
    /// A partially received frame is discarded and reported as
    /// [`FrameError::Incomplete`].
    pub fn end_transaction(&mut self) -> Result<(), FrameError> {
        let idle = self.is_idle();
        self.reset();
        if idle {
            Ok(())
        } else {
            Err(FrameError::Incomplete)
        }
    }
}
