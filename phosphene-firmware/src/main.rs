//! Phosphene Clock Firmware
//!
//! Firmware for the nRF52840 render MCU. Drives the 128x64 SSD1306 OLED
//! over I2C and talks to the radio co-processor (BLE, pairing, Current
//! Time Service) over UART.

#![no_std]
#![no_main]

mod channels;
mod radio;
mod render;
mod ssd1306;
mod tick;

use defmt::*;
use embassy_executor::Spawner;
use embassy_nrf::bind_interrupts;
use embassy_nrf::peripherals::{RNG, TWISPI0, UARTE0};
use embassy_nrf::rng::{self, Rng};
use embassy_nrf::twim::{self, Twim};
use embassy_nrf::uarte::{self, Uarte};
use {defmt_rtt as _, panic_probe as _};

use crate::ssd1306::Ssd1306;

bind_interrupts!(struct Irqs {
    SPIM0_SPIS0_TWIM0_TWIS0_SPI0_TWI0 => twim::InterruptHandler<TWISPI0>;
    UARTE0_UART0 => uarte::InterruptHandler<UARTE0>;
    RNG => rng::InterruptHandler<RNG>;
});

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Phosphene firmware starting...");

    let p = embassy_nrf::init(Default::default());

    // Hardware RNG seeds the cosmetic PRNG; after this the peripheral is
    // never touched again
    let mut hw_rng = Rng::new(p.RNG, Irqs);
    let mut seed = [0u8; 8];
    hw_rng.blocking_fill_bytes(&mut seed);
    let seed = u64::from_le_bytes(seed);

    // I2C for the OLED (P0.12 = SDA, P0.11 = SCL)
    let mut twim_config = twim::Config::default();
    twim_config.frequency = twim::Frequency::K400;
    let twim = Twim::new(p.TWISPI0, Irqs, p.P0_12, p.P0_11, twim_config);

    let mut display = Ssd1306::new(twim);
    if let Err(e) = display.init().await {
        error!("Failed to initialize display: {:?}", e);
    } else {
        info!("OLED initialized");
    }

    // UART to the radio co-processor (P0.08 = RX, P0.06 = TX)
    let mut uart_config = uarte::Config::default();
    uart_config.baudrate = uarte::Baudrate::BAUD115200;
    let uart = Uarte::new(p.UARTE0, Irqs, p.P0_08, p.P0_06, uart_config);
    let (tx, rx) = uart.split();

    // Spawn tasks
    spawner.spawn(radio::radio_rx_task(rx)).unwrap();
    spawner.spawn(radio::radio_tx_task(tx)).unwrap();
    spawner.spawn(radio::pair_task()).unwrap();
    spawner.spawn(tick::tick_task()).unwrap();
    spawner.spawn(render::render_task(display, seed)).unwrap();

    info!("All tasks spawned");
}
