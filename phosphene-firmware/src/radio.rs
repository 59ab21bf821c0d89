//! Radio co-processor link tasks
//!
//! RX: parses the UART byte stream into frames and dispatches them into the
//! channels. TX: drains the outbound queue. Pairing: one delayed
//! fire-and-forget request per connection.
//!
//! Everything about BLE itself - advertising as "Phosphene", reconnect
//! policy, the Current Time Service client - lives on the co-processor.

use defmt::*;
use embassy_nrf::peripherals::UARTE0;
use embassy_nrf::uarte::{UarteRx, UarteTx};
use embassy_time::{Duration, Timer};
use portable_atomic::Ordering;

use phosphene_protocol::{
    ClockMessage, CtsTime, Frame, FrameParser, RadioMessage, MAX_FRAME_LEN,
};

use crate::channels::{LINK_CAME_UP, LINK_UP, OUTBOUND, TIME_SYNC};

/// Delay between connection establishment and the pairing request
pub const PAIR_DELAY_MS: u64 = 2000;

/// Radio receive task - parses frames from the co-processor
#[embassy_executor::task]
pub async fn radio_rx_task(mut rx: UarteRx<'static, UARTE0>) {
    info!("Radio RX task started");

    let mut parser = FrameParser::new();
    let mut buf = [0u8; 1];

    loop {
        match rx.read(&mut buf).await {
            Ok(()) => match parser.feed(buf[0]) {
                Ok(Some(frame)) => dispatch(&frame),
                Ok(None) => {}
                Err(e) => warn!("Radio framing error: {:?}", e),
            },
            Err(e) => {
                warn!("Radio UART error: {:?}", e);
                Timer::after(Duration::from_millis(10)).await;
            }
        }
    }
}

/// Route one received frame into the channels
fn dispatch(frame: &Frame) {
    match RadioMessage::from_frame(frame) {
        Ok(RadioMessage::LinkUp) => {
            info!("Link up");
            LINK_UP.store(true, Ordering::Relaxed);
            LINK_CAME_UP.signal(());
        }
        Ok(RadioMessage::LinkDown) => {
            info!("Link down");
            LINK_UP.store(false, Ordering::Relaxed);
        }
        Ok(RadioMessage::CurrentTime(payload)) => match CtsTime::decode(&payload) {
            Ok(time) => TIME_SYNC.signal(time),
            // Bad host payloads are dropped; the internal tick carries on
            Err(e) => warn!("Time payload rejected: {:?}", e),
        },
        Err(e) => warn!("Unhandled radio frame: {:?}", e),
    }
}

/// Radio transmit task - drains the outbound message queue
#[embassy_executor::task]
pub async fn radio_tx_task(mut tx: UarteTx<'static, UARTE0>) {
    info!("Radio TX task started");

    let mut buf = [0u8; MAX_FRAME_LEN];

    loop {
        let message = OUTBOUND.receive().await;
        if let Ok(len) = message.to_frame().encode(&mut buf) {
            tx.write(&buf[..len]).await.ok();
            trace!("Sent {:?}", message);
        }
    }
}

/// Pairing timer task.
///
/// A fixed delay after each connection, if the link survived, nudge the
/// radio to initiate pairing. Fire-and-forget: no retry, no response.
#[embassy_executor::task]
pub async fn pair_task() {
    loop {
        LINK_CAME_UP.wait().await;
        Timer::after(Duration::from_millis(PAIR_DELAY_MS)).await;

        if LINK_UP.load(Ordering::Relaxed) {
            OUTBOUND.send(ClockMessage::RequestPairing).await;
            debug!("Pairing requested");
        }
    }
}
