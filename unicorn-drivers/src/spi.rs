//! SPI transport
//!
//! Each frame is one chip-select transaction: CS low, write all bytes,
//! flush, CS high. The bus must already be configured for mode 0 at the
//! panel frequency (see [`SpiConfig`](unicorn_hal::SpiConfig)).

use embedded_hal::digital::OutputPin;
use embedded_hal::spi::SpiBus;
use unicorn_hal::BusTransport;

/// SPI transport error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SpiTransportError<S, P> {
    /// Bus write or flush failed
    Spi(S),
    /// Chip-select pin could not be driven
    ChipSelect(P),
}

/// Frame transport over an SPI bus with a manual chip select
pub struct SpiTransport<SPI, CS> {
    spi: SPI,
    cs: CS,
}

impl<SPI, CS> SpiTransport<SPI, CS>
where
    SPI: SpiBus,
    CS: OutputPin,
{
    /// Wrap a bus and its chip-select pin
    ///
    /// CS is driven high so the panels ignore the bus until the first frame.
    pub fn new(spi: SPI, mut cs: CS) -> Result<Self, SpiTransportError<SPI::Error, CS::Error>> {
        cs.set_high().map_err(SpiTransportError::ChipSelect)?;
        Ok(Self { spi, cs })
    }

    /// Release the bus and pin
    pub fn release(self) -> (SPI, CS) {
        (self.spi, self.cs)
    }
}

impl<SPI, CS> BusTransport for SpiTransport<SPI, CS>
where
    SPI: SpiBus,
    CS: OutputPin,
{
    type Error = SpiTransportError<SPI::Error, CS::Error>;

    fn send_frame(&mut self, frame: &[u8]) -> Result<(), Self::Error> {
        self.cs.set_low().map_err(SpiTransportError::ChipSelect)?;

        let result = self.spi.write(frame).and_then(|()| self.spi.flush());

        // Release CS even if the write failed
        let released = self.cs.set_high();

        result.map_err(SpiTransportError::Spi)?;
        released.map_err(SpiTransportError::ChipSelect)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::convert::Infallible;
    use embedded_hal::digital::ErrorType as PinErrorType;
    use embedded_hal::spi::{ErrorKind, ErrorType};
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Event {
        CsLow,
        CsHigh,
        Write(Vec<u8>),
        Flush,
    }

    type Log = Rc<RefCell<Vec<Event>>>;

    /// Mock SPI bus sharing an event log with the pin
    struct MockSpi {
        log: Log,
        fail_writes: bool,
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    struct MockSpiError;

    impl embedded_hal::spi::Error for MockSpiError {
        fn kind(&self) -> ErrorKind {
            ErrorKind::Other
        }
    }

    impl ErrorType for MockSpi {
        type Error = MockSpiError;
    }

    impl SpiBus for MockSpi {
        fn read(&mut self, _words: &mut [u8]) -> Result<(), Self::Error> {
            Ok(())
        }

        fn write(&mut self, words: &[u8]) -> Result<(), Self::Error> {
            if self.fail_writes {
                return Err(MockSpiError);
            }
            self.log.borrow_mut().push(Event::Write(words.to_vec()));
            Ok(())
        }

        fn transfer(&mut self, _read: &mut [u8], write: &[u8]) -> Result<(), Self::Error> {
            self.write(write)
        }

        fn transfer_in_place(&mut self, _words: &mut [u8]) -> Result<(), Self::Error> {
            Ok(())
        }

        fn flush(&mut self) -> Result<(), Self::Error> {
            self.log.borrow_mut().push(Event::Flush);
            Ok(())
        }
    }

    struct MockPin {
        log: Log,
    }

    impl PinErrorType for MockPin {
        type Error = Infallible;
    }

    impl OutputPin for MockPin {
        fn set_low(&mut self) -> Result<(), Self::Error> {
            self.log.borrow_mut().push(Event::CsLow);
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Self::Error> {
            self.log.borrow_mut().push(Event::CsHigh);
            Ok(())
        }
    }

    fn transport(fail_writes: bool) -> (SpiTransport<MockSpi, MockPin>, Log) {
        let log: Log = Rc::default();
        let spi = MockSpi {
            log: log.clone(),
            fail_writes,
        };
        let cs = MockPin { log: log.clone() };
        let transport = SpiTransport::new(spi, cs).unwrap();
        log.borrow_mut().clear();
        (transport, log)
    }

    #[test]
    fn test_new_deselects() {
        let log: Log = Rc::default();
        let spi = MockSpi {
            log: log.clone(),
            fail_writes: false,
        };
        let _transport = SpiTransport::new(spi, MockPin { log: log.clone() }).unwrap();
        assert_eq!(*log.borrow(), [Event::CsHigh]);
    }

    #[test]
    fn test_frame_is_one_transaction() {
        let (mut transport, log) = transport(false);
        transport.send_frame(&[0x72, 1, 2, 3]).unwrap();

        assert_eq!(
            *log.borrow(),
            [
                Event::CsLow,
                Event::Write(vec![0x72, 1, 2, 3]),
                Event::Flush,
                Event::CsHigh,
            ]
        );
    }

    #[test]
    fn test_consecutive_frames_are_separate_transactions() {
        let (mut transport, log) = transport(false);
        transport.send_frame(&[0x73]).unwrap();
        transport.send_frame(&[0x74]).unwrap();

        let selects = log.borrow().iter().filter(|e| **e == Event::CsLow).count();
        let releases = log.borrow().iter().filter(|e| **e == Event::CsHigh).count();
        assert_eq!(selects, 2);
        assert_eq!(releases, 2);
    }

    #[test]
    fn test_write_error_releases_cs() {
        let (mut transport, log) = transport(true);
        let result = transport.send_frame(&[0x72, 0, 0, 0]);

        assert_eq!(result, Err(SpiTransportError::Spi(MockSpiError)));
        assert_eq!(*log.borrow(), [Event::CsLow, Event::CsHigh]);
    }
}
