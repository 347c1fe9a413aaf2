//! Hardware interface abstraction and backends.
//!
//! The driver needs three things from the board: a full-duplex SPI
//! channel, the level of the MAC-PHY's interrupt line, and control of its
//! reset pin. [`HwInterface`] captures exactly that, so the same driver
//! runs against embedded-hal peripherals on an MCU or an FTDI MPSSE
//! adapter on a host machine.

use crate::error::Error;

pub mod eh1;

#[cfg(feature = "ftdi")]
pub mod ftdi;

pub use eh1::Eh1Interface;

#[cfg(feature = "ftdi")]
pub use ftdi::FtdiInterface;

/// Board-level interface to the LAN865x.
pub trait HwInterface {
    /// Pulse the chip's hardware reset line.
    fn reset(&mut self) -> Result<(), Error>;

    /// Level of the interrupt line (active low at the pin; `true` means
    /// the MAC-PHY requests service).
    fn interrupt_active(&mut self) -> bool;

    /// Execute one full-duplex SPI transaction. `tx` and `rx` have equal
    /// length.
    fn spi_transfer(&mut self, tx: &[u8], rx: &mut [u8]) -> Result<(), Error>;
}
