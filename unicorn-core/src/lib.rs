//! Board-agnostic core logic for Unicorn HD panels
//!
//! This crate contains everything between "pixels in memory" and "bytes on
//! the bus", without depending on a particular bus implementation:
//!
//! - Pixel buffer model (resizable RGB grid, scrolling, rotation)
//! - Panel windows and the eight-slot panel chain
//! - Render pipeline (rotation, brightness scaling, wire frames)
//! - [`Session`], the handle that owns all display state for one bus
//! - Configuration type definitions and TOML loading

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

extern crate alloc;

pub mod buffer;
pub mod chain;
pub mod color;
pub mod config;
pub mod error;
pub mod panel;
pub mod render;
pub mod rotation;
pub mod session;

pub use buffer::PixelBuffer;
pub use chain::PanelChain;
pub use color::Rgb;
pub use error::Error;
pub use panel::PanelMapping;
pub use render::{render_chain_frames, render_single_frame, RenderState};
pub use rotation::Rotation;
pub use session::Session;
