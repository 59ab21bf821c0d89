//! Board-agnostic core logic for the Phosphene clock
//!
//! This crate contains everything the firmware renders with that does not
//! depend on specific hardware:
//!
//! - Wall-clock model (internal tick + wholesale overwrite from a sync)
//! - Scrolling waveform ring buffer
//! - Glitch state machine (ambient corruption + second-transition bursts)
//! - Per-frame scene composition
//! - The `Canvas` trait the renderer draws through
//!
//! Randomness is injected as [`rand_core::RngCore`] everywhere it is used,
//! so every visual effect is reproducible under test.

#![no_std]
#![deny(unsafe_code)]

pub mod canvas;
pub mod clock;
pub mod glitch;
pub mod rand;
pub mod render;
pub mod waveform;

#[cfg(test)]
pub(crate) mod test_canvas;

pub use canvas::{Canvas, FontRole, PaintMode};
pub use clock::WallClock;
pub use glitch::GlitchController;
pub use render::{LinkState, RenderEngine};
pub use waveform::Waveform;
