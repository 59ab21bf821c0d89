//! Glitch state machine
//!
//! Two independent triggers feed the glitchy look:
//!
//! - **Ambient corruption**: a small per-frame Bernoulli trial that picks
//!   exactly one of three effects with fresh random parameters. Nothing
//!   persists across frames.
//! - **Second-transition burst**: armed whenever the observed second value
//!   changes; for the next four frames the seconds digits jitter and may
//!   flash inverted. The countdown guarantees the digits settle clean
//!   between ticks.
//!
//! The same second transition toggles the alternating separator marker.

use rand_core::RngCore;

use crate::rand;

/// Frames a burst stays active after a second transition
pub const BURST_FRAMES: u8 = 4;

/// Per-frame probability of ambient corruption, in percent
const AMBIENT_PERCENT: u32 = 5;

/// One frame's ambient corruption, parameters freshly rolled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Corruption {
    /// Re-draw the current text at a fixed offset (horizontal smear)
    Ghost,
    /// XOR a band over the time region
    InvertBand { x: i32, width: i32 },
    /// Erase a thin sliver (dead-pixel / occlusion look)
    Dropout { x: i32, y: i32 },
}

/// Per-frame burst output while the countdown is live.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BurstFrame {
    /// Seconds-digit jitter, both in -2..=2
    pub dx: i32,
    pub dy: i32,
    /// Whether to flash an inverted box behind the digits this frame
    pub flash: bool,
}

/// Frame-scoped corruption state.
#[derive(Debug, Clone)]
pub struct GlitchController {
    burst: u8,
    marker_on: bool,
    last_second: Option<u8>,
}

impl Default for GlitchController {
    fn default() -> Self {
        Self::new()
    }
}

impl GlitchController {
    pub const fn new() -> Self {
        Self {
            burst: 0,
            marker_on: false,
            last_second: None,
        }
    }

    /// Note the second value this frame renders.
    ///
    /// On a change: toggles the marker and arms a fresh burst. The first
    /// frame after power-on counts as a change, so the display wakes up
    /// already glitching. Returns whether a transition happened.
    pub fn observe_second(&mut self, second: u8) -> bool {
        if self.last_second == Some(second) {
            return false;
        }
        self.last_second = Some(second);
        self.marker_on = !self.marker_on;
        self.burst = BURST_FRAMES;
        true
    }

    /// Roll this frame's ambient corruption, if any.
    pub fn ambient(&self, rng: &mut impl RngCore) -> Option<Corruption> {
        if !rand::chance(rng, AMBIENT_PERCENT) {
            return None;
        }
        Some(match rand::range(rng, 0, 3) {
            0 => Corruption::Ghost,
            1 => Corruption::InvertBand {
                x: rand::range(rng, 0, 128),
                width: rand::range(rng, 10, 50),
            },
            _ => Corruption::Dropout {
                x: rand::range(rng, 0, 128),
                y: rand::range(rng, 0, 40),
            },
        })
    }

    /// Consume one burst frame, if the countdown is live.
    ///
    /// Decrements exactly once per call and never goes below zero.
    pub fn burst(&mut self, rng: &mut impl RngCore) -> Option<BurstFrame> {
        if self.burst == 0 {
            return None;
        }
        self.burst -= 1;
        Some(BurstFrame {
            dx: rand::range(rng, -2, 3),
            dy: rand::range(rng, -2, 3),
            flash: rand::range(rng, 0, 2) == 0,
        })
    }

    /// Whether the alternating separator marker is visible this second
    pub fn marker_visible(&self) -> bool {
        self.marker_on
    }

    /// Frames left in the current burst
    pub fn burst_remaining(&self) -> u8 {
        self.burst
    }
}
