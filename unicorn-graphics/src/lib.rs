//! Colours and drawing for Unicorn HD pixel buffers
//!
//! This crate provides:
//! - [`NamedColor`] and [`Color`]: named, RGB and HSV colour input
//! - [`Draw`]: lines, circles, rectangles and per-pixel helpers on
//!   [`PixelBuffer`](unicorn_core::PixelBuffer)
//!
//! Everything here only writes into the buffer; nothing reaches the panels
//! until the session's `show` is called.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod color;
pub mod draw;

pub use color::{hsv_to_rgb, Color, ColorError, NamedColor};
pub use draw::Draw;
