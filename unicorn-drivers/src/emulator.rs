//! In-memory panel emulator
//!
//! Stands in for real panels on the host: every frame handed to it is
//! decoded and kept, so tests and demos can inspect exactly what a panel
//! would show.

use alloc::vec::Vec;

use unicorn_core::{PixelBuffer, Rgb};
use unicorn_hal::BusTransport;
use unicorn_protocol::{
    Frame, FrameError, Header, PanelAddress, MAX_PANELS, PANEL_HEIGHT, PANEL_WIDTH,
};

/// Decodes frames as a chain of panels would receive them
#[derive(Debug, Clone, Default)]
pub struct PanelEmulator {
    single: Option<Vec<u8>>,
    panels: [Option<Vec<u8>>; MAX_PANELS],
    frame_count: usize,
}

impl PanelEmulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of frames accepted so far
    pub fn frame_count(&self) -> usize {
        self.frame_count
    }

    /// Payload of the last single-panel frame
    pub fn single_payload(&self) -> Option<&[u8]> {
        self.single.as_deref()
    }

    /// Payload of the last frame sent to `address`
    pub fn panel_payload(&self, address: PanelAddress) -> Option<&[u8]> {
        self.panels[address.index()].as_deref()
    }

    /// Image last sent to `address`, as the panel would display it
    pub fn panel_image(&self, address: PanelAddress) -> Option<PixelBuffer> {
        self.panel_payload(address).map(decode_image)
    }

    /// Pixel `(x, y)` on the panel at `address`
    ///
    /// `None` if nothing was sent to that panel or the coordinates are off
    /// the panel.
    pub fn pixel(&self, address: PanelAddress, x: usize, y: usize) -> Option<Rgb> {
        if x >= PANEL_WIDTH || y >= PANEL_HEIGHT {
            return None;
        }
        let payload = self.panel_payload(address)?;
        let offset = (x * PANEL_HEIGHT + y) * 3;
        Some(Rgb::new(
            payload[offset],
            payload[offset + 1],
            payload[offset + 2],
        ))
    }

    /// Forget everything received
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

fn decode_image(payload: &[u8]) -> PixelBuffer {
    PixelBuffer::from_fn(PANEL_WIDTH, PANEL_HEIGHT, |x, y| {
        let offset = (x * PANEL_HEIGHT + y) * 3;
        Rgb::new(payload[offset], payload[offset + 1], payload[offset + 2])
    })
}

impl BusTransport for PanelEmulator {
    type Error = FrameError;

    fn send_frame(&mut self, frame: &[u8]) -> Result<(), Self::Error> {
        let frame = Frame::decode(frame)?;
        match frame.header {
            Header::Single => self.single = Some(frame.payload),
            Header::Addressed(address) => self.panels[address.index()] = Some(frame.payload),
        }
        self.frame_count += 1;

        #[cfg(feature = "defmt")]
        defmt::trace!("emulator: frame {=usize}", self.frame_count);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use unicorn_core::Session;
    use unicorn_protocol::PANEL_PAYLOAD_SIZE;

    struct NoDelay;

    impl embedded_hal::delay::DelayNs for NoDelay {
        fn delay_ns(&mut self, _ns: u32) {}
    }

    fn address(value: u8) -> PanelAddress {
        PanelAddress::new(value).unwrap()
    }

    #[test]
    fn test_rejects_malformed_frames() {
        let mut emulator = PanelEmulator::new();
        assert_eq!(emulator.send_frame(&[0x00; 769]), Err(FrameError::InvalidHeader));
        assert_eq!(emulator.send_frame(&[0x73; 10]), Err(FrameError::Incomplete));
        assert_eq!(emulator.frame_count(), 0);
    }

    #[test]
    fn test_addressed_frame_lands_on_panel() {
        let mut emulator = PanelEmulator::new();
        let mut bytes = vec![0x72 + 1 + 4];
        bytes.extend(core::iter::repeat(9).take(PANEL_PAYLOAD_SIZE));
        emulator.send_frame(&bytes).unwrap();

        assert_eq!(emulator.frame_count(), 1);
        assert_eq!(emulator.pixel(address(4), 15, 15), Some(Rgb::new(9, 9, 9)));
        assert_eq!(emulator.pixel(address(4), 16, 0), None);
        assert!(emulator.panel_payload(address(3)).is_none());
        assert!(emulator.single_payload().is_none());
    }

    #[test]
    fn test_single_session_output() {
        let mut session = Session::new(PanelEmulator::new(), NoDelay);
        session.set_brightness(1.0);
        session.set_pixel(3, 5, Rgb::new(10, 20, 30)).unwrap();
        session.show().unwrap();

        let payload = session.transport().single_payload().unwrap();
        let offset = (3 * 16 + 5) * 3;
        assert_eq!(&payload[offset..offset + 3], &[10, 20, 30]);
    }

    #[test]
    fn test_chained_session_output() {
        // Two panels side by side along x, the second one turned a half
        let mut session = Session::new(PanelEmulator::new(), NoDelay);
        session.setup_buffer(32, 16).unwrap();
        session.set_brightness(1.0);
        session.enable_addressing(true);
        session.setup_display(0, 0, 0, 3).unwrap();
        session.setup_display(1, 16, 0, 1).unwrap();

        session.set_pixel(0, 0, Rgb::new(1, 1, 1)).unwrap();
        session.set_pixel(16, 0, Rgb::new(2, 2, 2)).unwrap();
        session.show().unwrap();

        let emulator = session.transport();
        assert_eq!(emulator.frame_count(), 2);

        // rotation step 3 plus the fixed offset is a full turn
        assert_eq!(emulator.pixel(address(0), 0, 0), Some(Rgb::new(1, 1, 1)));
        // step 1 plus the offset is a half turn
        assert_eq!(emulator.pixel(address(1), 15, 15), Some(Rgb::new(2, 2, 2)));

        let image = emulator.panel_image(address(1)).unwrap();
        let lit = image.iter().filter(|(_, _, p)| *p != Rgb::BLACK).count();
        assert_eq!(lit, 1);
    }

    #[test]
    fn test_off_blanks_panels() {
        let mut session = Session::new(PanelEmulator::new(), NoDelay);
        session.enable_addressing(true);
        session.setup_display(2, 0, 0, 0).unwrap();
        session.set_all(Rgb::WHITE);
        session.show().unwrap();
        session.off().unwrap();

        let payload = session.transport().panel_payload(address(2)).unwrap();
        assert!(payload.iter().all(|&b| b == 0));
        assert_eq!(session.transport().frame_count(), 2);
    }
}
