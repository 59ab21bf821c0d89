//! Inter-task communication channels
//!
//! The render task is the only mutator of the clock model; everything the
//! radio side learns crosses over through these statics. `TIME_SYNC` is a
//! latest-wins mailbox: the render task takes at most one pending value per
//! frame, so a burst of host notifications collapses to the newest.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use embassy_sync::signal::Signal;
use portable_atomic::AtomicBool;

use phosphene_protocol::{ClockMessage, CtsTime};

/// Queue capacity for outbound messages to the radio
const OUTBOUND_CHANNEL_SIZE: usize = 4;

/// Latest accepted time payload, pending pickup by the render task
pub static TIME_SYNC: Signal<CriticalSectionRawMutex, CtsTime> = Signal::new();

/// One-second heartbeat for the internal clock tick
pub static SECOND_TICK: Signal<CriticalSectionRawMutex, ()> = Signal::new();

/// Whether the radio currently holds a host connection
pub static LINK_UP: AtomicBool = AtomicBool::new(false);

/// Edge event: a connection was just established (arms the pairing timer)
pub static LINK_CAME_UP: Signal<CriticalSectionRawMutex, ()> = Signal::new();

/// Outbound messages to the radio co-processor
pub static OUTBOUND: Channel<CriticalSectionRawMutex, ClockMessage, OUTBOUND_CHANNEL_SIZE> =
    Channel::new();
