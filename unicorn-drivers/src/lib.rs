//! Transport implementations
//!
//! Concrete [`BusTransport`](unicorn_hal::BusTransport) implementations
//! for Unicorn HD panels:
//!
//! - SPI bus with a software chip select, one transaction per frame
//! - Panel emulator that decodes frames in memory (host testing)

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

extern crate alloc;

pub mod emulator;
pub mod spi;

pub use emulator::PanelEmulator;
pub use spi::{SpiTransport, SpiTransportError};
