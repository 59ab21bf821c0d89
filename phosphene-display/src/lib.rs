//! Framebuffer canvas for the Phosphene clock
//!
//! Provides [`FrameBuffer`], a 128x64 1-bpp page-organized buffer that
//! implements the core `Canvas` trait. Geometry and glyphs come from
//! `embedded-graphics`; the buffer routes every On pixel through the active
//! paint mode, which is what makes XOR flashes and erasure effects work for
//! arbitrary primitives and text alike.
//!
//! The page layout matches what SSD13xx controllers consume, so the
//! firmware's flush path is a straight copy.

#![no_std]
#![deny(unsafe_code)]

pub mod framebuffer;

pub use framebuffer::{FrameBuffer, HEIGHT, PAGES, WIDTH};
