//! Configuration type definitions
//!
//! These types describe the panel layout: buffer shape, global render
//! settings and the placement of each chained panel.

use heapless::Vec;
use unicorn_protocol::{PanelAddress, MAX_PANELS};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::buffer::{DEFAULT_HEIGHT, DEFAULT_WIDTH};
use crate::error::Error;
use crate::render::DEFAULT_BRIGHTNESS;

/// Pixel buffer shape
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BufferConfig {
    /// Width in pixels, ideally a multiple of 16
    pub width: i32,
    /// Height in pixels, ideally a multiple of 16
    pub height: i32,
}

impl Default for BufferConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH as i32,
            height: DEFAULT_HEIGHT as i32,
        }
    }
}

/// Global render settings
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RenderConfig {
    /// Rotation in degrees, snapped to a quarter turn
    pub rotation: i32,
    /// Brightness, nominally 0.0-1.0
    pub brightness: f32,
    /// Chained (addressed) output
    pub addressing: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            rotation: 0,
            brightness: DEFAULT_BRIGHTNESS,
            addressing: false,
        }
    }
}

/// Placement of one chained panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PanelConfig {
    /// Panel address (0-7)
    pub address: i32,
    /// Window offset along the first axis
    #[cfg_attr(feature = "serde", serde(default))]
    pub x: i32,
    /// Window offset along the second axis
    #[cfg_attr(feature = "serde", serde(default))]
    pub y: i32,
    /// Panel rotation in quarter turns
    #[cfg_attr(feature = "serde", serde(default))]
    pub rotation: i32,
}

/// Complete panel layout
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DisplayConfig {
    /// Buffer shape
    pub buffer: BufferConfig,
    /// Global render settings
    pub render: RenderConfig,
    /// Chained panels, written as `[[panel]]` tables
    #[cfg_attr(feature = "serde", serde(rename = "panel"))]
    pub panels: Vec<PanelConfig, MAX_PANELS>,
}

impl DisplayConfig {
    /// Check dimensions and panel addresses
    pub fn validate(&self) -> Result<(), Error> {
        if self.buffer.width < 0 || self.buffer.height < 0 {
            return Err(Error::InvalidDimension);
        }
        for panel in &self.panels {
            PanelAddress::try_from(panel.address)?;
        }
        Ok(())
    }

    /// Find the entry for a panel address
    pub fn find_panel(&self, address: i32) -> Option<&PanelConfig> {
        self.panels.iter().find(|p| p.address == address)
    }
}
