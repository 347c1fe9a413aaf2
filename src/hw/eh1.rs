//! embedded-hal 1.0 hardware backend
//!
//! Uses `embedded_hal::spi::SpiDevice` (chip select handled by the
//! device) with an interrupt input pin and an optional reset pin.

use embedded_hal::{
    delay::DelayNs,
    digital::{InputPin, OutputPin},
    spi::SpiDevice,
};

use super::HwInterface;
use crate::error::Error;

/// embedded-hal 1.0 backend
///
/// * `SPI` – SPI device (chip-select handled by SpiDevice)
/// * `RST` – Optional reset pin (active low)
/// * `INT` – Interrupt pin (active low)
/// * `D`   – Delay provider
pub struct Eh1Interface<SPI, RST, INT, D> {
    spi: SPI,
    reset: Option<RST>,
    irq: INT,
    delay: D,
}

impl<SPI, RST, INT, D> Eh1Interface<SPI, RST, INT, D>
where
    SPI: SpiDevice,
    RST: OutputPin,
    INT: InputPin,
    D: DelayNs,
{
    /// Create a new eh1 backend
    pub fn new(spi: SPI, reset: Option<RST>, irq: INT, delay: D) -> Self {
        Self {
            spi,
            reset,
            irq,
            delay,
        }
    }

    /// Control reset pin (active low)
    fn set_reset(&mut self, asserted: bool) -> Result<(), Error> {
        if let Some(pin) = self.reset.as_mut() {
            if asserted {
                pin.set_low().map_err(|_| Error::Gpio)?;
            } else {
                pin.set_high().map_err(|_| Error::Gpio)?;
            }
        }
        Ok(())
    }
}

impl<SPI, RST, INT, D> HwInterface for Eh1Interface<SPI, RST, INT, D>
where
    SPI: SpiDevice,
    RST: OutputPin,
    INT: InputPin,
    D: DelayNs,
{
    fn reset(&mut self) -> Result<(), Error> {
        self.set_reset(true)?;
        self.delay.delay_ns(10_000_000); // 10 ms
        self.set_reset(false)?;
        self.delay.delay_ns(10_000_000);
        Ok(())
    }

    fn interrupt_active(&mut self) -> bool {
        // IRQ_N is active low
        self.irq.is_low().unwrap_or(false)
    }

    fn spi_transfer(&mut self, tx: &[u8], rx: &mut [u8]) -> Result<(), Error> {
        self.spi.transfer(rx, tx).map_err(|_| Error::Spi)
    }
}
