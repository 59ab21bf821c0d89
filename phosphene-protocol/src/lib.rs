//! Radio-Link Protocol for the Phosphene Clock
//!
//! This crate defines the UART protocol between the render MCU (nRF52840,
//! drives the OLED) and the radio co-processor (owns BLE advertising,
//! connections and pairing), plus the decoder for the Current Time payload
//! the co-processor relays verbatim from the host.
//!
//! # Protocol Overview
//!
//! All messages use a simple binary frame format:
//! ```text
//! ┌──────┬────────┬──────┬─────────────┬──────────┐
//! │ SYNC │ LENGTH │ KIND │ PAYLOAD     │ CHECKSUM │
//! │ 1B   │ 1B     │ 1B   │ 0–32B       │ 1B       │
//! └──────┴────────┴──────┴─────────────┴──────────┘
//! ```
//!
//! The co-processor is the only party that knows anything about BLE. The
//! render MCU sees link state changes and raw time payloads, and may send
//! back a fire-and-forget pairing request.

#![no_std]
#![deny(unsafe_code)]

// Host-side tests (proptest) need the standard library
#[cfg(test)]
extern crate std;

pub mod cts;
pub mod frame;
pub mod messages;

pub use cts::{CtsError, CtsTime, CTS_MIN_LEN};
pub use frame::{Frame, FrameError, FrameParser, FRAME_SYNC, MAX_FRAME_LEN, MAX_PAYLOAD_LEN};
pub use messages::{ClockMessage, RadioMessage};
