//! Display session
//!
//! A [`Session`] owns everything one bus needs: the pixel buffer, the
//! global render state, the panel chain, the transport and the delay source
//! used for pacing. Create one per physical bus and pass it explicitly.
//!
//! All operations run to completion. [`Session::show`] blocks in the pacing
//! delay; if several tasks draw or render, guard the whole session with one
//! lock.

use alloc::vec::Vec;

use embedded_hal::delay::DelayNs;
use unicorn_hal::BusTransport;
use unicorn_protocol::{Frame, FRAME_DELAY_US};

use crate::buffer::PixelBuffer;
use crate::chain::PanelChain;
use crate::color::Rgb;
use crate::config::DisplayConfig;
use crate::error::Error;
use crate::render::{self, RenderState};

/// Display state and bus for one chain of panels
pub struct Session<T, D> {
    transport: T,
    delay: D,
    buffer: PixelBuffer,
    state: RenderState,
    chain: PanelChain,
}

impl<T, D> Session<T, D>
where
    T: BusTransport,
    D: DelayNs,
{
    /// Create a session with a 16x16 black buffer, brightness 0.5, no
    /// rotation, addressing off and every panel slot disabled
    pub fn new(transport: T, delay: D) -> Self {
        Self {
            transport,
            delay,
            buffer: PixelBuffer::default(),
            state: RenderState::default(),
            chain: PanelChain::new(),
        }
    }

    /// Release the transport and delay
    pub fn into_parts(self) -> (T, D) {
        (self.transport, self.delay)
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    // -- buffer shape ---------------------------------------------------

    /// `(width, height)` of the pixel buffer
    pub fn shape(&self) -> (usize, usize) {
        self.buffer.shape()
    }

    /// Resize the pixel buffer; all pixels become black
    pub fn setup_buffer(&mut self, width: i32, height: i32) -> Result<(), Error> {
        self.buffer.resize(width, height)
    }

    // -- render state ---------------------------------------------------

    /// Set the global rotation; any angle is snapped to a quarter turn
    pub fn set_rotation(&mut self, degrees: i32) {
        self.state.set_rotation(degrees);
    }

    /// Set the global rotation from a fractional angle, e.g. `44.9`
    pub fn set_rotation_angle(&mut self, degrees: f32) {
        self.state.set_rotation_angle(degrees);
    }

    /// Global rotation in degrees (0, 90, 180 or 270)
    pub fn rotation(&self) -> i32 {
        self.state.rotation().degrees()
    }

    /// Set the brightness; values outside 0.0-1.0 are accepted
    pub fn set_brightness(&mut self, brightness: f32) {
        self.state.set_brightness(brightness);
    }

    pub fn brightness(&self) -> f32 {
        self.state.brightness()
    }

    /// Switch chained multi-panel output on or off
    pub fn enable_addressing(&mut self, enabled: bool) {
        self.state.set_addressing(enabled);
    }

    pub fn is_addressing_enabled(&self) -> bool {
        self.state.is_addressing_enabled()
    }

    pub fn state(&self) -> &RenderState {
        &self.state
    }

    // -- panel chain ----------------------------------------------------

    /// Place the panel at `address` and enable it
    pub fn setup_display(&mut self, address: i32, x: i32, y: i32, rotation_step: i32) -> Result<(), Error> {
        self.chain.configure(address, x, y, rotation_step)
    }

    /// Enable or disable the panel at `address`
    pub fn enable_display(&mut self, address: i32, enabled: bool) -> Result<(), Error> {
        self.chain.enable(address, enabled)
    }

    pub fn chain(&self) -> &PanelChain {
        &self.chain
    }

    // -- pixels -----------------------------------------------------------

    pub fn buffer(&self) -> &PixelBuffer {
        &self.buffer
    }

    pub fn buffer_mut(&mut self) -> &mut PixelBuffer {
        &mut self.buffer
    }

    /// Raw pixel data in storage order (x-major)
    pub fn pixels(&self) -> &[Rgb] {
        self.buffer.pixels()
    }

    /// Replace the whole buffer; the shape follows the new buffer
    pub fn set_pixels(&mut self, buffer: PixelBuffer) {
        self.buffer = buffer;
    }

    pub fn set_pixel(&mut self, x: i32, y: i32, rgb: Rgb) -> Result<(), Error> {
        self.buffer.set(x, y, rgb)
    }

    /// Set a pixel, ignoring coordinates outside the buffer
    pub fn set_pixel_safe(&mut self, x: i32, y: i32, rgb: Rgb) {
        self.buffer.set_safe(x, y, rgb);
    }

    pub fn get_pixel(&self, x: i32, y: i32) -> Result<Rgb, Error> {
        self.buffer.get(x, y)
    }

    pub fn set_all(&mut self, rgb: Rgb) {
        self.buffer.fill(rgb);
    }

    /// Clear the buffer without touching the panels
    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Scroll the buffer horizontally, wrapping around
    pub fn hscroll(&mut self, dx: i32) {
        self.buffer.roll_horizontal(dx);
    }

    /// Scroll the buffer vertically, wrapping around
    pub fn vscroll(&mut self, dy: i32) {
        self.buffer.roll_vertical(dy);
    }

    // -- output -----------------------------------------------------------

    /// Frames the next [`show`](Session::show) would send
    pub fn frames(&self) -> Vec<Frame> {
        render::render(&self.state, &self.buffer, &self.chain)
    }

    /// Render the buffer and send it to the panels
    ///
    /// In chained mode every frame is followed by the inter-frame delay;
    /// in both modes one more delay follows the last frame. A transport
    /// error aborts the call and is returned unchanged.
    pub fn show(&mut self) -> Result<(), T::Error> {
        let frames = self.frames();
        let addressed = self.state.is_addressing_enabled();

        for frame in &frames {
            let bytes = frame.encode_to_vec();
            self.transport.send_frame(&bytes)?;

            #[cfg(feature = "defmt")]
            defmt::trace!(
                "frame sent: header={=u8:#x} len={=usize}",
                frame.header.to_byte(),
                bytes.len()
            );

            if addressed {
                self.delay.delay_us(FRAME_DELAY_US);
            }
        }
        self.delay.delay_us(FRAME_DELAY_US);

        #[cfg(feature = "defmt")]
        defmt::debug!("show: {=usize} frame(s)", frames.len());

        Ok(())
    }

    /// Clear the buffer and push it out, turning every pixel off
    pub fn off(&mut self) -> Result<(), T::Error> {
        self.clear();
        self.show()
    }

    /// Apply a panel layout
    ///
    /// The config is validated first; on error nothing changes. On success
    /// the buffer is reallocated (black), the render state replaced and the
    /// chain reset to exactly the listed panels, each enabled.
    pub fn apply_config(&mut self, config: &DisplayConfig) -> Result<(), Error> {
        config.validate()?;

        self.setup_buffer(config.buffer.width, config.buffer.height)?;
        self.set_rotation(config.render.rotation);
        self.set_brightness(config.render.brightness);
        self.enable_addressing(config.render.addressing);

        self.chain.reset();
        for panel in &config.panels {
            self.chain
                .configure(panel.address, panel.x, panel.y, panel.rotation)?;
        }

        #[cfg(feature = "defmt")]
        defmt::info!(
            "layout applied: {=usize}x{=usize}, {=usize} panel(s), addressing={=bool}",
            self.buffer.width(),
            self.buffer.height(),
            self.chain.enabled_count(),
            self.state.is_addressing_enabled()
        );

        Ok(())
    }
}
