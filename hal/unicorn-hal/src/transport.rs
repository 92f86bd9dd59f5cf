//! Frame transport abstraction
//!
//! A transport moves one complete, already-encoded frame onto the bus.
//! Pacing between frames is the caller's job; a transport may add delay of
//! its own but must never reorder or merge frames.

/// Frame-oriented bus writer
///
/// Every call to [`send_frame`](BusTransport::send_frame) carries exactly one
/// frame: the header byte followed by the payload. Implementations must
/// deliver the bytes as a single bus transaction (one chip-select assertion
/// on SPI), since the panel uses the transaction boundary to reset its
/// receive state.
pub trait BusTransport {
    /// Error type for bus operations
    type Error;

    /// Send one frame
    fn send_frame(&mut self, frame: &[u8]) -> Result<(), Self::Error>;
}

impl<T: BusTransport + ?Sized> BusTransport for &mut T {
    type Error = T::Error;

    fn send_frame(&mut self, frame: &[u8]) -> Result<(), Self::Error> {
        (**self).send_frame(frame)
    }
}
