//! Message types for the radio link
//!
//! Message kinds are divided into two directions:
//! - Radio → Clock: link lifecycle and relayed time payloads
//! - Clock → Radio: pairing request, heartbeat

use crate::frame::{Frame, FrameError};
use heapless::Vec;

// Message kind IDs: Radio → Clock
pub const MSG_LINK_UP: u8 = 0x10;
pub const MSG_LINK_DOWN: u8 = 0x11;
pub const MSG_CURRENT_TIME: u8 = 0x12;

// Message kind IDs: Clock → Radio
pub const MSG_REQUEST_PAIRING: u8 = 0x30;
pub const MSG_PING: u8 = 0x31;

/// Maximum relayed time payload we keep (the characteristic itself is 10 bytes)
pub const MAX_TIME_PAYLOAD: usize = 16;

/// Messages from the radio co-processor to the clock
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RadioMessage {
    /// A host connected; an on-connect time read will follow shortly
    LinkUp,
    /// The host disconnected (the radio resumes advertising on its own)
    LinkDown,
    /// Raw Current Time characteristic bytes, relayed verbatim
    CurrentTime(Vec<u8, MAX_TIME_PAYLOAD>),
}

impl RadioMessage {
    /// Parse a message from a received frame
    pub fn from_frame(frame: &Frame) -> Result<Self, FrameError> {
        match frame.kind {
            MSG_LINK_UP => Ok(RadioMessage::LinkUp),
            MSG_LINK_DOWN => Ok(RadioMessage::LinkDown),
            MSG_CURRENT_TIME => {
                // Oversized relays are truncated rather than dropped; the
                // decoder only looks at the leading bytes anyway
                let take = frame.payload.len().min(MAX_TIME_PAYLOAD);
                let bytes = Vec::from_slice(&frame.payload[..take])
                    .map_err(|_| FrameError::PayloadTooLarge)?;
                Ok(RadioMessage::CurrentTime(bytes))
            }
            _ => Err(FrameError::UnknownKind),
        }
    }

    /// Encode this message into a frame (used by tests and link simulation)
    pub fn to_frame(&self) -> Result<Frame, FrameError> {
        match self {
            RadioMessage::LinkUp => Ok(Frame::empty(MSG_LINK_UP)),
            RadioMessage::LinkDown => Ok(Frame::empty(MSG_LINK_DOWN)),
            RadioMessage::CurrentTime(bytes) => Frame::new(MSG_CURRENT_TIME, bytes),
        }
    }
}

/// Messages from the clock to the radio co-processor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ClockMessage {
    /// Ask the radio to initiate pairing with the connected host.
    /// Fire-and-forget; there is no reply and no retry.
    RequestPairing,
    /// Link liveness probe
    Ping,
}

impl ClockMessage {
    /// Encode this message into a frame
    pub fn to_frame(&self) -> Frame {
        match self {
            ClockMessage::RequestPairing => Frame::empty(MSG_REQUEST_PAIRING),
            ClockMessage::Ping => Frame::empty(MSG_PING),
        }
    }

    /// Parse a message from a frame (radio side / tests)
    pub fn from_frame(frame: &Frame) -> Result<Self, FrameError> {
        match frame.kind {
            MSG_REQUEST_PAIRING => Ok(ClockMessage::RequestPairing),
            MSG_PING => Ok(ClockMessage::Ping),
            _ => Err(FrameError::UnknownKind),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn link_up_roundtrip() {
        let frame = RadioMessage::LinkUp.to_frame().unwrap();
        assert_eq!(frame.kind, MSG_LINK_UP);
        assert!(frame.payload.is_empty());
        assert_eq!(RadioMessage::from_frame(&frame).unwrap(), RadioMessage::LinkUp);
    }

    #[test]
    fn current_time_roundtrip() {
        let payload = [0xE8, 0x07, 1, 1, 13, 45, 30, 1, 0, 0];
        let original = RadioMessage::CurrentTime(Vec::from_slice(&payload).unwrap());
        let frame = original.to_frame().unwrap();
        assert_eq!(frame.kind, MSG_CURRENT_TIME);
        assert_eq!(RadioMessage::from_frame(&frame).unwrap(), original);
    }

    #[test]
    fn oversized_time_relay_truncated() {
        let frame = Frame::new(MSG_CURRENT_TIME, &[0u8; 20]).unwrap();
        match RadioMessage::from_frame(&frame).unwrap() {
            RadioMessage::CurrentTime(bytes) => assert_eq!(bytes.len(), MAX_TIME_PAYLOAD),
            other => panic!("unexpected message: {other:?}"),
        }
    }

    #[test]
    fn unknown_kind_rejected() {
        let frame = Frame::empty(0x7F);
        assert_eq!(RadioMessage::from_frame(&frame), Err(FrameError::UnknownKind));
        assert_eq!(ClockMessage::from_frame(&frame), Err(FrameError::UnknownKind));
    }

    #[test]
    fn pairing_request_roundtrip() {
        let frame = ClockMessage::RequestPairing.to_frame();
        assert_eq!(frame.kind, MSG_REQUEST_PAIRING);
        assert_eq!(
            ClockMessage::from_frame(&frame).unwrap(),
            ClockMessage::RequestPairing
        );
    }
}
