//! Second tick task
//!
//! The internal periodic time source. When the host never syncs us (or the
//! link is down), this is what keeps the displayed time advancing.

use defmt::*;
use embassy_time::{Duration, Ticker};

use crate::channels::SECOND_TICK;

/// Tick interval in milliseconds
pub const TICK_INTERVAL_MS: u64 = 1000;

/// Tick task - signals the render task once per second
#[embassy_executor::task]
pub async fn tick_task() {
    info!("Tick task started");

    let mut ticker = Ticker::every(Duration::from_millis(TICK_INTERVAL_MS));

    loop {
        ticker.next().await;
        SECOND_TICK.signal(());
    }
}
