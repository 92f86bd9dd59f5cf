//! Unicorn HD Hardware Abstraction Layer
//!
//! This crate defines the bus traits the panel pipeline writes frames to.
//! Concrete transports (SPI peripherals, emulators) live in
//! `unicorn-drivers`; the render pipeline in `unicorn-core` only ever sees
//! the traits defined here.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Session / render pipeline (core)       │
//! └─────────────────────────────────────────┘
//!                     │  frames
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  unicorn-hal (this crate - traits)      │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │ SpiTransport  │       │ PanelEmulator │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`transport::BusTransport`] - Frame-oriented bus writes
//! - [`spi::SpiConfig`] - SPI bus settings used when opening the bus

#![no_std]
#![deny(unsafe_code)]

pub mod spi;
pub mod transport;

// Re-export key types at crate root for convenience
pub use spi::{Mode, Phase, Polarity, SpiConfig};
pub use transport::BusTransport;
