//! Panel windows
//!
//! Each physical panel shows a fixed 16x16 window of the (globally rotated)
//! pixel buffer, turned by its own rotation plus one extra quarter turn for
//! the panel's mounting orientation.

use unicorn_protocol::{PANEL_HEIGHT, PANEL_WIDTH};

use crate::buffer::PixelBuffer;
use crate::rotation::Rotation;

/// Quarter turns added to every panel's own rotation
///
/// Orientation correction for the panel hardware; part of the protocol.
pub const PANEL_ROTATION_OFFSET: i32 = 1;

/// Where one panel's window sits in the buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PanelMapping {
    enabled: bool,
    x: i32,
    y: i32,
    rotation: Rotation,
}

impl PanelMapping {
    /// Create a mapping
    pub const fn new(enabled: bool, x: i32, y: i32, rotation_step: i32) -> Self {
        Self {
            enabled,
            x,
            y,
            rotation: Rotation::from_steps(rotation_step),
        }
    }

    /// Move the window and set the panel rotation; `enabled` is unchanged
    pub fn configure(&mut self, x: i32, y: i32, rotation_step: i32) {
        self.x = x;
        self.y = y;
        self.rotation = Rotation::from_steps(rotation_step);
    }

    /// Include this panel in chained output
    pub fn enable(&mut self) {
        self.enabled = true;
    }

    /// Exclude this panel from chained output
    pub fn disable(&mut self) {
        self.enabled = false;
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Window offset along the first axis
    pub fn x(&self) -> i32 {
        self.x
    }

    /// Window offset along the second axis
    pub fn y(&self) -> i32 {
        self.y
    }

    /// The panel's own rotation (without the mounting offset)
    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    /// Slice this panel's window out of an already rotated buffer
    ///
    /// Returns a 16x16 buffer; parts of the window outside `rotated_source`
    /// are black.
    pub fn window(&self, rotated_source: &PixelBuffer) -> PixelBuffer {
        rotated_source
            .window(self.x, self.y, PANEL_WIDTH, PANEL_HEIGHT)
            .rotated(self.rotation.plus_steps(PANEL_ROTATION_OFFSET))
    }

    /// Apply the global rotation to `source`, then slice and rotate the window
    pub fn extract_window(&self, source: &PixelBuffer, global_rotation: Rotation) -> PixelBuffer {
        self.window(&source.rotated(global_rotation))
    }
}
