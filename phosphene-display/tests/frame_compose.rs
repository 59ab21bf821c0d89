//! Whole-frame composition through the real framebuffer
//!
//! Drives the render engine against `FrameBuffer` the way the firmware
//! render task does, and checks regions of the resulting pixel grid.

use phosphene_core::render::{LinkState, RenderEngine};
use phosphene_core::WallClock;
use phosphene_display::FrameBuffer;
use phosphene_protocol::CtsTime;
use rand_core::{RngCore, SeedableRng};
use rand_xoshiro::Xoroshiro128StarStar;

/// RNG that repeats one value forever. 41 keeps every probabilistic effect
/// quiet: no ambient corruption, no waveform noise, no seconds flash, and a
/// fixed (-1, -1) burst jitter.
struct ConstRng(u32);

impl RngCore for ConstRng {
    fn next_u32(&mut self) -> u32 {
        self.0
    }
    fn next_u64(&mut self) -> u64 {
        self.0 as u64
    }
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        dest.fill(self.0 as u8);
    }
}

fn lit_in(fb: &FrameBuffer, x0: i32, y0: i32, x1: i32, y1: i32) -> usize {
    (x0..x1)
        .flat_map(|x| (y0..y1).map(move |y| (x, y)))
        .filter(|&(x, y)| fb.pixel(x, y))
        .count()
}

fn synced_clock() -> WallClock {
    let mut clock = WallClock::new();
    clock.sync(CtsTime {
        year: 2024,
        month: 1,
        day: 1,
        hour: 13,
        minute: 45,
        second: 30,
        day_of_week: Some(1),
    });
    clock
}

#[test]
fn synced_frame_lights_the_expected_regions() {
    let mut fb = FrameBuffer::new();
    let mut engine = RenderEngine::new();
    let clock = synced_clock();

    engine.render_frame(&mut fb, &clock, LinkState::Linked, 100, &mut ConstRng(41));

    // Border corners
    assert!(fb.pixel(0, 0));
    assert!(fb.pixel(127, 0));
    assert!(fb.pixel(0, 63));
    assert!(fb.pixel(127, 63));

    // Hour digits "13" around baseline (4, 39), minute digits at (66, 39)
    assert!(lit_in(&fb, 4, 20, 24, 39) > 10);
    assert!(lit_in(&fb, 66, 20, 86, 39) > 10);

    // Seconds digits "30" near (11, 62)
    assert!(lit_in(&fb, 7, 42, 33, 62) > 10);

    // Waveform strip frame plus trace
    assert!(lit_in(&fb, 50, 46, 128, 63) > 30);

    // The frame was presented
    assert!(fb.take_dirty());
    assert!(!fb.take_dirty());
}

#[test]
fn scanning_caption_blinks_in_pixels() {
    let mut fb = FrameBuffer::new();
    let mut engine = RenderEngine::new();
    let clock = WallClock::new();

    // Strictly inside the caption glyph body: below the border row, above
    // the descender line, left of anything else that draws up there
    let caption_body = |fb: &FrameBuffer| lit_in(fb, 2, 2, 52, 7);

    engine.render_frame(&mut fb, &clock, LinkState::Unlinked, 100, &mut ConstRng(41));
    assert!(caption_body(&fb) > 10);

    engine.render_frame(&mut fb, &clock, LinkState::Unlinked, 600, &mut ConstRng(41));
    assert_eq!(caption_body(&fb), 0);

    engine.render_frame(&mut fb, &clock, LinkState::Unlinked, 1100, &mut ConstRng(41));
    assert!(caption_body(&fb) > 10);
}

#[test]
fn linked_caption_is_steady_in_pixels() {
    let mut fb = FrameBuffer::new();
    let mut engine = RenderEngine::new();
    let clock = synced_clock();

    for now_ms in [100u64, 600, 1100] {
        engine.render_frame(&mut fb, &clock, LinkState::Linked, now_ms, &mut ConstRng(41));
        assert!(lit_in(&fb, 2, 2, 52, 7) > 10);
    }
}

#[test]
fn many_frames_with_real_rng_never_go_dark() {
    let mut fb = FrameBuffer::new();
    let mut engine = RenderEngine::new();
    let mut clock = synced_clock();
    let mut rng = Xoroshiro128StarStar::seed_from_u64(0xC10C);

    // ~4 seconds of display at 30 fps
    for frame in 0..120u64 {
        if frame % 30 == 29 {
            clock.tick_second();
        }
        let link = if frame < 60 {
            LinkState::Unlinked
        } else {
            LinkState::Linked
        };
        engine.render_frame(&mut fb, &clock, link, frame * 33, &mut rng);

        // Whatever the glitches did, the clock is still on screen
        assert!(lit_in(&fb, 0, 0, 128, 64) > 100, "frame {frame} went dark");
    }
}
