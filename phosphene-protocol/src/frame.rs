//! Frame encoding and decoding for the radio link.
//!
//! Frame format:
//! - SYNC (1 byte): 0xC3 synchronization byte
//! - LENGTH (1 byte): payload length (0-32)
//! - KIND (1 byte): message kind identifier
//! - PAYLOAD (0-32 bytes): kind-specific data
//! - CHECKSUM (1 byte): XOR of LENGTH, KIND, and all PAYLOAD bytes
//!
//! The link is expected to be noisy around power cycles of either side, so
//! the parser resynchronizes on the next SYNC byte after any error.

use heapless::Vec;

/// Frame synchronization byte
pub const FRAME_SYNC: u8 = 0xC3;

/// Maximum payload size in bytes. The largest real payload is the relayed
/// Current Time characteristic value (10 bytes); 32 leaves headroom.
pub const MAX_PAYLOAD_LEN: usize = 32;

/// Maximum complete frame size (SYNC + LENGTH + KIND + payload + CHECKSUM)
pub const MAX_FRAME_LEN: usize = 4 + MAX_PAYLOAD_LEN;

/// Errors that can occur during frame parsing or encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FrameError {
    /// Payload exceeds maximum allowed size
    PayloadTooLarge,
    /// Checksum mismatch
    BadChecksum,
    /// Declared length exceeds the payload maximum
    BadLength,
    /// Frame kind is not one this side understands
    UnknownKind,
    /// Buffer too small for encoding
    BufferTooSmall,
}

/// A parsed or constructed frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// Message kind identifier
    pub kind: u8,
    /// Payload data
    pub payload: Vec<u8, MAX_PAYLOAD_LEN>,
}

impl Frame {
    /// Create a new frame with the given kind and payload
    pub fn new(kind: u8, payload: &[u8]) -> Result<Self, FrameError> {
        let payload = Vec::from_slice(payload).map_err(|_| FrameError::PayloadTooLarge)?;
        Ok(Self { kind, payload })
    }

    /// Create a frame with no payload
    pub fn empty(kind: u8) -> Self {
        Self {
            kind,
            payload: Vec::new(),
        }
    }

    /// XOR checksum over LENGTH, KIND and payload
    fn checksum(length: u8, kind: u8, payload: &[u8]) -> u8 {
        payload.iter().fold(length ^ kind, |acc, b| acc ^ b)
    }

    /// Encode this frame into a byte buffer
    ///
    /// Returns the number of bytes written.
    pub fn encode(&self, buf: &mut [u8]) -> Result<usize, FrameError> {
        let total = 4 + self.payload.len();
        if buf.len() < total {
            return Err(FrameError::BufferTooSmall);
        }

        let length = self.payload.len() as u8;
        buf[0] = FRAME_SYNC;
        buf[1] = length;
        buf[2] = self.kind;
        buf[3..3 + self.payload.len()].copy_from_slice(&self.payload);
        buf[3 + self.payload.len()] = Self::checksum(length, self.kind, &self.payload);

        Ok(total)
    }

    /// Encode this frame into a heapless Vec
    pub fn encode_to_vec(&self) -> Result<Vec<u8, MAX_FRAME_LEN>, FrameError> {
        let mut buf = [0u8; MAX_FRAME_LEN];
        let len = self.encode(&mut buf)?;
        Vec::from_slice(&buf[..len]).map_err(|_| FrameError::BufferTooSmall)
    }
}

/// Incremental parser for incoming frames.
///
/// Fed one byte at a time from the UART RX path. Anything that is not a
/// well-formed frame is dropped and the parser hunts for the next SYNC byte.
#[derive(Debug, Clone)]
pub struct FrameParser {
    state: ParseState,
    payload: Vec<u8, MAX_PAYLOAD_LEN>,
    expected_len: u8,
    kind: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParseState {
    /// Hunting for the SYNC byte
    Sync,
    /// Got SYNC, expecting LENGTH
    Length,
    /// Got LENGTH, expecting KIND
    Kind,
    /// Collecting payload bytes
    Payload,
    /// Expecting CHECKSUM
    Checksum,
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
            state: ParseState::Sync,
            payload: Vec::new(),
            expected_len: 0,
            kind: 0,
        }
    }

    /// Reset the parser to hunt for the next SYNC byte
    pub fn reset(&mut self) {
        self.state = ParseState::Sync;
        self.payload.clear();
        self.expected_len = 0;
        self.kind = 0;
    }

    /// Feed a single byte to the parser.
    ///
    /// Returns `Ok(Some(frame))` when a complete valid frame is parsed,
    /// `Ok(None)` when more bytes are needed, or `Err` on a framing error
    /// (after which the parser has already reset itself).
    pub fn feed(&mut self, byte: u8) -> Result<Option<Frame>, FrameError> {
        match self.state {
            ParseState::Sync => {
                if byte == FRAME_SYNC {
                    self.state = ParseState::Length;
                }
                // Non-SYNC bytes are line noise; swallow them
                Ok(None)
            }
            ParseState::Length => {
                if byte as usize > MAX_PAYLOAD_LEN {
                    self.reset();
                    return Err(FrameError::BadLength);
                }
                self.expected_len = byte;
                self.state = ParseState::Kind;
                Ok(None)
            }
            ParseState::Kind => {
                self.kind = byte;
                self.payload.clear();
                self.state = if self.expected_len == 0 {
                    ParseState::Checksum
                } else {
                    ParseState::Payload
                };
                Ok(None)
            }
            ParseState::Payload => {
                // Cannot overflow: expected_len was bounds-checked
                let _ = self.payload.push(byte);
                if self.payload.len() == self.expected_len as usize {
                    self.state = ParseState::Checksum;
                }
                Ok(None)
            }
            ParseState::Checksum => {
                let expected = Frame::checksum(self.expected_len, self.kind, &self.payload);
                if byte != expected {
                    self.reset();
                    return Err(FrameError::BadChecksum);
                }

                let frame = Frame {
                    kind: self.kind,
                    payload: self.payload.clone(),
                };
                self.reset();
                Ok(Some(frame))
            }
        }
    }

    /// Feed a slice of bytes, returning the first complete frame found.
    ///
    /// Remaining bytes after a complete frame are not consumed.
    pub fn feed_slice(&mut self, bytes: &[u8]) -> Result<Option<Frame>, FrameError> {
        for &byte in bytes {
            if let Some(frame) = self.feed(byte)? {
                return Ok(Some(frame));
            }
        }
        Ok(None)
    }
}
