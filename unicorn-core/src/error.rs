//! Error types shared by the buffer, chain and session APIs

use unicorn_protocol::InvalidAddress;

/// Caller errors; none of these are retried or recovered internally
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// Negative buffer width or height
    InvalidDimension,
    /// Checked pixel access outside the buffer
    IndexOutOfRange,
    /// Panel address outside 0-7
    InvalidAddress,
    /// Pixel data does not match the declared buffer shape
    ShapeMismatch,
}

impl From<InvalidAddress> for Error {
    fn from(_: InvalidAddress) -> Self {
        Error::InvalidAddress
    }
}
