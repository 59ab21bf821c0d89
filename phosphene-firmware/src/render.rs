//! Render task
//!
//! The unbounded frame loop. Owns every piece of mutable render state -
//! clock model, animation controllers, framebuffer, PRNG, display driver -
//! so each frame is composed without locks and nothing in the path blocks
//! on the radio.

use defmt::*;
use embassy_nrf::peripherals::TWISPI0;
use embassy_nrf::twim::Twim;
use embassy_time::{Duration, Instant, Ticker};
use portable_atomic::Ordering;
use rand_core::SeedableRng;
use rand_xoshiro::Xoroshiro128StarStar;

use phosphene_core::render::{LinkState, RenderEngine};
use phosphene_core::WallClock;
use phosphene_display::FrameBuffer;

use crate::channels::{LINK_UP, SECOND_TICK, TIME_SYNC};
use crate::ssd1306::Ssd1306;

/// Frame interval (~30 fps keeps the noise effects fluid)
pub const FRAME_INTERVAL_MS: u64 = 33;

/// Render task - composes and flushes one frame per tick
#[embassy_executor::task]
pub async fn render_task(mut display: Ssd1306<Twim<'static, TWISPI0>>, seed: u64) {
    info!("Render task started");

    let mut frame_buffer = FrameBuffer::new();
    let mut engine = RenderEngine::new();
    let mut clock = WallClock::new();
    let mut rng = Xoroshiro128StarStar::seed_from_u64(seed);

    let started = Instant::now();
    let mut frames = Ticker::every(Duration::from_millis(FRAME_INTERVAL_MS));

    loop {
        frames.next().await;

        // At most one pending sync per frame, applied before the tick, so
        // the clock model only ever mutates here
        if let Some(time) = TIME_SYNC.try_take() {
            info!("Time synced from host");
            clock.sync(time);
        }
        if SECOND_TICK.try_take().is_some() {
            clock.tick_second();
        }

        let link = if LINK_UP.load(Ordering::Relaxed) {
            LinkState::Linked
        } else {
            LinkState::Unlinked
        };

        engine.render_frame(
            &mut frame_buffer,
            &clock,
            link,
            started.elapsed().as_millis(),
            &mut rng,
        );

        // An I2C hiccup loses one frame, never the loop
        if frame_buffer.take_dirty() {
            display.flush(frame_buffer.pages()).await.ok();
        }
    }
}
