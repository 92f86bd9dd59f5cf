//! Unicorn HD Wire Protocol
//!
//! This crate defines the SPI framing used by Unicorn HD panels, both the
//! single-panel HAT and chained "Ubercorn" panels that share one bus.
//!
//! # Protocol Overview
//!
//! Every bus transaction carries exactly one frame:
//! ```text
//! ┌────────┬────────────────────────────────────┐
//! │ HEADER │ PAYLOAD                            │
//! │ 1B     │ 16 × 16 × 3 = 768B (R, G, B ...)   │
//! └────────┴────────────────────────────────────┘
//! ```
//!
//! The header is `0x72` for a lone panel, or `0x72 + 1 + address` for the
//! panel at `address` (0-7) in a chain. There is no length field or
//! checksum; the chip-select boundary delimits frames.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

extern crate alloc;

pub mod frame;
pub mod header;

pub use frame::{
    Frame, FrameError, FrameParser, FRAME_DELAY_US, PANEL_FRAME_SIZE, PANEL_HEIGHT,
    PANEL_PAYLOAD_SIZE, PANEL_WIDTH,
};
pub use header::{Header, InvalidAddress, PanelAddress, MAX_PANELS, SOF};
