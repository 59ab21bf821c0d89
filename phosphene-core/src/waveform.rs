//! Scrolling waveform ring buffer
//!
//! A fixed 32-sample history of the seconds value, drawn as an
//! oscilloscope-style trace. Index space is decoupled from pixel space: the
//! 32 logical samples are stretched across whatever width the layout gives
//! the strip, so neither side constrains the other.

use rand_core::RngCore;

use crate::canvas::Canvas;
use crate::rand;

/// Number of samples kept
pub const WAVE_DEPTH: usize = 32;

/// Margin kept above and below the trace inside the strip
const MARGIN: i32 = 2;

/// Ring buffer of recent samples plus a write cursor.
///
/// The cursor always points at the next slot to overwrite, which doubles as
/// the oldest sample; reads walk oldest-to-newest starting there.
#[derive(Debug, Clone)]
pub struct Waveform {
    samples: [i32; WAVE_DEPTH],
    cursor: usize,
    height: i32,
}

impl Waveform {
    /// Create a waveform for a strip of the given pixel height.
    ///
    /// Samples start at a mid-ish resting value so the first second of
    /// display shows a flat trace instead of a cliff.
    pub fn new(height: i32) -> Self {
        Self {
            samples: [10; WAVE_DEPTH],
            cursor: 0,
            height,
        }
    }

    /// Record the current seconds value.
    ///
    /// Maps [0, 59] into [MARGIN, height - MARGIN], then roughly 4 frames in
    /// 10 smears the fresh sample by -2..=+2 for analog-looking noise.
    pub fn push(&mut self, second: u8, rng: &mut impl RngCore) {
        self.samples[self.cursor] = scale(second as i32, 0, 59, MARGIN, self.height - MARGIN);
        if rand::range(rng, 0, 10) >= 6 {
            self.samples[self.cursor] += rand::range(rng, -2, 3);
        }
        self.cursor = (self.cursor + 1) % WAVE_DEPTH;
    }

    /// Draw the trace into `canvas` at (x, y), stretched to `width`.
    ///
    /// Consecutive samples are joined by line segments; every 4th segment
    /// also drops a vertical stroke to the baseline for a technical,
    /// graticule-like look. Ends with a frame around the strip.
    pub fn render<C: Canvas>(&self, canvas: &mut C, x: i32, y: i32, width: i32) {
        let last = (WAVE_DEPTH - 1) as i32;

        for i in 0..WAVE_DEPTH - 1 {
            let idx = (self.cursor + i) % WAVE_DEPTH;
            let next = (self.cursor + i + 1) % WAVE_DEPTH;

            let x0 = x + scale(i as i32, 0, last, 0, width);
            let x1 = x + scale(i as i32 + 1, 0, last, 0, width);
            let y0 = y + self.height - self.samples[idx];
            let y1 = y + self.height - self.samples[next];

            canvas.draw_line(x0, y0, x1, y1);
            if i % 4 == 0 {
                canvas.draw_vline(x0, y0, self.samples[idx]);
            }
        }

        canvas.draw_rect(x, y, width, self.height + 1);
    }

    /// Strip height this waveform was built for
    pub fn height(&self) -> i32 {
        self.height
    }

    #[cfg(test)]
    pub(crate) fn cursor(&self) -> usize {
        self.cursor
    }

    #[cfg(test)]
    pub(crate) fn samples(&self) -> &[i32; WAVE_DEPTH] {
        &self.samples
    }
}

/// Arduino-style linear remap of `v` from [in_lo, in_hi] to [out_lo, out_hi].
pub(crate) fn scale(v: i32, in_lo: i32, in_hi: i32, out_lo: i32, out_hi: i32) -> i32 {
    (v - in_lo) * (out_hi - out_lo) / (in_hi - in_lo) + out_lo
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_canvas::{Op, RecordingCanvas};
    use rand_core::SeedableRng;
    use rand_xoshiro::Xoroshiro128StarStar;

    /// RNG whose every draw is the same value; `42 % 10 = 2 < 6` means the
    /// noise branch never fires.
    struct Quiet;
    impl RngCore for Quiet {
        fn next_u32(&mut self) -> u32 {
            42
        }
        fn next_u64(&mut self) -> u64 {
            42
        }
        fn fill_bytes(&mut self, dest: &mut [u8]) {
            dest.fill(42);
        }
    }

    #[test]
    fn push_scales_into_strip() {
        let mut wave = Waveform::new(16);
        wave.push(0, &mut Quiet);
        wave.push(59, &mut Quiet);
        assert_eq!(wave.samples()[0], 2);
        assert_eq!(wave.samples()[1], 14);
    }

    #[test]
    fn cursor_wraps() {
        let mut wave = Waveform::new(16);
        for _ in 0..WAVE_DEPTH {
            wave.push(30, &mut Quiet);
        }
        assert_eq!(wave.cursor(), 0);
    }

    #[test]
    fn noise_stays_bounded() {
        let mut rng = Xoroshiro128StarStar::seed_from_u64(99);
        let mut wave = Waveform::new(16);
        for second in 0..60u8 {
            wave.push(second, &mut rng);
        }
        for &sample in wave.samples() {
            // scale() lands in [2, 14]; noise adds at most +-2
            assert!((0..=16).contains(&sample));
        }
    }

    #[test]
    fn render_emits_depth_minus_one_segments() {
        let mut wave = Waveform::new(16);
        for second in 0..WAVE_DEPTH as u8 {
            wave.push(second, &mut Quiet);
        }

        let mut canvas = RecordingCanvas::new();
        wave.render(&mut canvas, 50, 46, 78);

        let segments = canvas
            .ops
            .iter()
            .filter(|op| matches!(op, Op::Line { .. }))
            .count();
        assert_eq!(segments, WAVE_DEPTH - 1);
    }

    #[test]
    fn render_spans_exactly_the_given_width() {
        let mut wave = Waveform::new(16);
        let mut canvas = RecordingCanvas::new();
        wave.render(&mut canvas, 50, 46, 78);

        let xs: heapless::Vec<(i32, i32), 64> = canvas
            .ops
            .iter()
            .filter_map(|op| match op {
                Op::Line { x0, x1, .. } => Some((*x0, *x1)),
                _ => None,
            })
            .collect();

        // First segment starts at x, last segment ends at x + width
        assert_eq!(xs.first().unwrap().0, 50);
        assert_eq!(xs.last().unwrap().1, 50 + 78);

        // Independently of the depth, the endpoints are exact
        wave.push(0, &mut Quiet);
        let mut canvas = RecordingCanvas::new();
        wave.render(&mut canvas, 0, 0, 127);
        let first = canvas.ops.iter().find_map(|op| match op {
            Op::Line { x0, .. } => Some(*x0),
            _ => None,
        });
        assert_eq!(first, Some(0));
    }

    #[test]
    fn render_frames_the_strip() {
        let wave = Waveform::new(16);
        let mut canvas = RecordingCanvas::new();
        wave.render(&mut canvas, 50, 46, 78);

        assert!(canvas.ops.contains(&Op::Rect {
            x: 50,
            y: 46,
            w: 78,
            h: 17,
        }));
    }

    #[test]
    fn baseline_strokes_every_fourth_segment() {
        let wave = Waveform::new(16);
        let mut canvas = RecordingCanvas::new();
        wave.render(&mut canvas, 0, 0, 62);

        let strokes = canvas
            .ops
            .iter()
            .filter(|op| matches!(op, Op::VLine { .. }))
            .count();
        // i = 0, 4, 8, ... 28
        assert_eq!(strokes, 8);
    }
}
