//! Per-frame scene composition
//!
//! One `render_frame` call composes the whole display: border, big
//! hour/minute digits, ambient corruption, waveform strip, separator
//! marker, seconds digits with burst jitter, link caption and the
//! decorative hex stream, then presents.
//!
//! Nothing in this path can fail and nothing blocks. A dead or silent time
//! source changes what the frame shows, never whether a frame is shown.

use core::fmt::Write;

use heapless::String;
use rand_core::RngCore;

use crate::canvas::{Canvas, FontRole, PaintMode};
use crate::clock::WallClock;
use crate::glitch::{Corruption, GlitchController};
use crate::rand;
use crate::waveform::Waveform;

pub const DISPLAY_WIDTH: i32 = 128;
pub const DISPLAY_HEIGHT: i32 = 64;

// Layout, tuned on hardware. Text coordinates are baselines.
const DIGITS_BASELINE: i32 = 39;
const HOUR_X: i32 = 4;
const MINUTE_X: i32 = 66;
const GHOST_X: i32 = 6;
const GHOST_BASELINE: i32 = 35;

// Ambient corruption geometry
const BAND_Y: i32 = 5;
const BAND_H: i32 = 30;
const DROPOUT_W: i32 = 20;
const DROPOUT_H: i32 = 2;

// Waveform strip under the minutes
const WAVE_X: i32 = 50;
const WAVE_Y: i32 = 46;
const WAVE_W: i32 = 78;
pub const WAVE_H: i32 = 16;

// Separator marker and seconds digits
const MARKER_X: i32 = 58;
const SECONDS_X: i32 = 11;
const SECONDS_Y: i32 = 62;
const FLASH_W: i32 = 30;
const FLASH_H: i32 = 26;

// Link caption
const CAPTION_X: i32 = 2;
const CAPTION_Y: i32 = 8;
const LINKED_CAPTION: &str = "[LINK_OK]";
const SCANNING_CAPTION: &str = "[SCANNING]";
const BLINK_HALF_PERIOD_MS: u64 = 500;

// Decorative hex stream: drawn only in a short window of every period
const HEX_PERIOD_MS: u64 = 200;
const HEX_WINDOW_MS: u64 = 50;

/// Whether the radio currently holds a host connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LinkState {
    Linked,
    Unlinked,
}

/// Owns the per-frame animation state and composes frames.
#[derive(Debug)]
pub struct RenderEngine {
    waveform: Waveform,
    glitch: GlitchController,
}

impl Default for RenderEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderEngine {
    pub fn new() -> Self {
        Self {
            waveform: Waveform::new(WAVE_H),
            glitch: GlitchController::new(),
        }
    }

    /// Compose and present one frame.
    ///
    /// `now_ms` is monotonic uptime; the caption blink and the hex stream
    /// rate limit both run on wall-clock-modulo arithmetic so neither needs
    /// a timer of its own.
    pub fn render_frame<C: Canvas, R: RngCore>(
        &mut self,
        canvas: &mut C,
        clock: &WallClock,
        link: LinkState,
        now_ms: u64,
        rng: &mut R,
    ) {
        canvas.clear();
        canvas.set_paint_mode(PaintMode::Normal);
        canvas.draw_rect(0, 0, DISPLAY_WIDTH, DISPLAY_HEIGHT);

        let hours = two_digits(clock.hour());
        let minutes = two_digits(clock.minute());
        canvas.draw_text(HOUR_X, DIGITS_BASELINE, &hours, FontRole::Digits);
        canvas.draw_text(MINUTE_X, DIGITS_BASELINE, &minutes, FontRole::Digits);

        match self.glitch.ambient(rng) {
            Some(Corruption::Ghost) => {
                canvas.draw_text(GHOST_X, GHOST_BASELINE, &minutes, FontRole::Digits);
            }
            Some(Corruption::InvertBand { x, width }) => {
                canvas.set_paint_mode(PaintMode::Invert);
                canvas.fill_rect(x, BAND_Y, width, BAND_H);
                canvas.set_paint_mode(PaintMode::Normal);
            }
            Some(Corruption::Dropout { x, y }) => {
                canvas.set_paint_mode(PaintMode::Erase);
                canvas.fill_rect(x, y, DROPOUT_W, DROPOUT_H);
                canvas.set_paint_mode(PaintMode::Normal);
            }
            None => {}
        }

        self.waveform.push(clock.second(), rng);
        self.waveform.render(canvas, WAVE_X, WAVE_Y, WAVE_W);

        self.glitch.observe_second(clock.second());
        if self.glitch.marker_visible() {
            draw_marker(canvas);
        }

        let mut sec_x = SECONDS_X;
        let mut sec_y = SECONDS_Y;
        if let Some(burst) = self.glitch.burst(rng) {
            sec_x += burst.dx;
            sec_y += burst.dy;
            if burst.flash {
                canvas.set_paint_mode(PaintMode::Invert);
                canvas.fill_rect(sec_x - 2, sec_y - 24, FLASH_W, FLASH_H);
                canvas.set_paint_mode(PaintMode::Normal);
            }
        }
        canvas.draw_text(sec_x, sec_y, &two_digits(clock.second()), FontRole::Seconds);

        match link {
            LinkState::Linked => {
                canvas.draw_text(CAPTION_X, CAPTION_Y, LINKED_CAPTION, FontRole::Caption);
            }
            LinkState::Unlinked => {
                if (now_ms / BLINK_HALF_PERIOD_MS) % 2 == 0 {
                    canvas.draw_text(CAPTION_X, CAPTION_Y, SCANNING_CAPTION, FontRole::Caption);
                }
            }
        }

        if now_ms % HEX_PERIOD_MS < HEX_WINDOW_MS {
            draw_hex_token(canvas, 100, 8, rng);
            draw_hex_token(canvas, 100, 16, rng);
            for _ in 0..2 {
                let x = rand::range(rng, 0, DISPLAY_WIDTH - 1);
                let y = rand::range(rng, 0, DISPLAY_HEIGHT - 1);
                draw_hex_token(canvas, x, y, rng);
            }
        }

        canvas.present();
    }

    pub fn glitch(&self) -> &GlitchController {
        &self.glitch
    }

    pub fn waveform(&self) -> &Waveform {
        &self.waveform
    }
}

/// Two skewed diamonds between the digit groups, each built from a pair of
/// filled triangles. Visibility alternates once per second.
fn draw_marker<C: Canvas>(canvas: &mut C) {
    let x = MARKER_X;

    canvas.fill_triangle(x, 15, x + 5, 15, x - 2, 21);
    canvas.fill_triangle(x + 5, 15, x + 3, 21, x - 2, 21);

    canvas.fill_triangle(x, 27, x + 2, 27, x - 5, 33);
    canvas.fill_triangle(x + 5, 27, x, 33, x - 5, 33);
}

/// One `0xNN` token of data-stream set dressing. No semantic content.
fn draw_hex_token<C: Canvas>(canvas: &mut C, x: i32, y: i32, rng: &mut impl RngCore) {
    let mut token: String<6> = String::new();
    let _ = write!(token, "0x{:02X}", rng.next_u32() as u8);
    canvas.draw_text(x, y, &token, FontRole::Micro);
}

fn two_digits(value: u8) -> String<4> {
    let mut text = String::new();
    let _ = write!(text, "{:02}", value);
    text
}
