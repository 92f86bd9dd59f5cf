//! Render pipeline
//!
//! Turns the pixel buffer into wire frames:
//!
//! 1. rotate the whole buffer by the global rotation
//! 2. single mode: serialize the whole rotated buffer;
//!    chained mode: cut each enabled panel's window out of it
//! 3. scale every channel by the brightness, saturating into a byte
//! 4. prepend the header byte
//!
//! Payload bytes follow the buffer's storage order (x-major), R, G, B per
//! pixel. Rendering never fails: every [`PixelBuffer`] is well-formed by
//! construction and panel windows are always 16x16.

use alloc::vec::Vec;

use unicorn_protocol::{Frame, Header, PANEL_PAYLOAD_SIZE};

use crate::buffer::PixelBuffer;
use crate::chain::PanelChain;
use crate::rotation::Rotation;

/// Brightness applied until the caller sets one
pub const DEFAULT_BRIGHTNESS: f32 = 0.5;

/// Global render settings, read once per output call
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RenderState {
    rotation: Rotation,
    brightness: f32,
    addressing: bool,
}

impl Default for RenderState {
    fn default() -> Self {
        Self {
            rotation: Rotation::Deg0,
            brightness: DEFAULT_BRIGHTNESS,
            addressing: false,
        }
    }
}

impl RenderState {
    /// Set the global rotation from degrees, snapped to a quarter turn
    pub fn set_rotation(&mut self, degrees: i32) {
        self.rotation = Rotation::from_degrees(degrees);
    }

    /// Set the global rotation from a fractional angle
    pub fn set_rotation_angle(&mut self, degrees: f32) {
        self.rotation = Rotation::from_angle(degrees);
    }

    pub fn set_rotation_steps(&mut self, rotation: Rotation) {
        self.rotation = rotation;
    }

    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    /// Set the brightness; out-of-range values are kept and clamped per
    /// channel at render time
    pub fn set_brightness(&mut self, brightness: f32) {
        self.brightness = brightness;
    }

    pub fn brightness(&self) -> f32 {
        self.brightness
    }

    /// Switch between single-panel and chained output
    pub fn set_addressing(&mut self, enabled: bool) {
        self.addressing = enabled;
    }

    pub fn is_addressing_enabled(&self) -> bool {
        self.addressing
    }
}

/// Serialize a buffer in storage order with brightness scaling
pub fn encode_payload(buffer: &PixelBuffer, brightness: f32) -> Vec<u8> {
    let mut payload = Vec::with_capacity(buffer.pixels().len() * 3);
    for pixel in buffer.pixels() {
        payload.extend_from_slice(&pixel.scaled(brightness));
    }
    payload
}

/// Frame for a lone panel: the whole rotated buffer under header `SOF`
///
/// The payload is `width * height * 3` bytes; a panel expects 768.
pub fn render_single_frame(buffer: &PixelBuffer, rotation: Rotation, brightness: f32) -> Frame {
    let rotated = buffer.rotated(rotation);
    Frame::single(encode_payload(&rotated, brightness))
}

/// One frame per enabled panel, in ascending address order
pub fn render_chain_frames(
    buffer: &PixelBuffer,
    chain: &PanelChain,
    rotation: Rotation,
    brightness: f32,
) -> Vec<Frame> {
    let rotated = buffer.rotated(rotation);
    chain
        .iter_enabled()
        .map(|(address, panel)| {
            let payload = encode_payload(&panel.window(&rotated), brightness);
            debug_assert_eq!(payload.len(), PANEL_PAYLOAD_SIZE);
            Frame {
                header: Header::Addressed(address),
                payload,
            }
        })
        .collect()
}

/// Render according to the addressing mode in `state`
pub fn render(state: &RenderState, buffer: &PixelBuffer, chain: &PanelChain) -> Vec<Frame> {
    if state.is_addressing_enabled() {
        render_chain_frames(buffer, chain, state.rotation(), state.brightness())
    } else {
        let mut frames = Vec::with_capacity(1);
        frames.push(render_single_frame(buffer, state.rotation(), state.brightness()));
        frames
    }
}
