//! FTDI hardware backend using libftd2xx
//!
//! Drives a LAN865x evaluation board from a host machine through an
//! FT4232H in MPSSE mode. The TC6 interface needs full-duplex exchanges,
//! so data is clocked out and in simultaneously (SPI mode 0, MSB first).

use std::thread::sleep;
use std::time::Duration;

use bitflags::bitflags;
use libftd2xx::{ClockData, Ft4232h, FtdiCommon, FtdiMpsse, MpsseCmdBuilder, MpsseCmdExecutor};

use super::HwInterface;
use crate::error::Error;

/*
Pin assignments on FTDI FT4232H:
SPI_CLK:   AD0
SPI_MOSI:  AD1
SPI_MISO:  AD2
SPI_SS_N:  AD3
IRQ_N:     AD6
RST_N:     AD7
*/

bitflags! {
    #[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
    pub struct SpiPin: u8 {
        const CLK =    1;          // Mask 0x01, AD0
        const MOSI =   1 << 1;     // Mask 0x02, AD1
        const MISO =   1 << 2;     // Mask 0x04, AD2
        const SS_N =   1 << 3;     // Mask 0x08, AD3
        const UNUSED4 = 1 << 4;    // Mask 0x10, AD4
        const UNUSED5 = 1 << 5;    // Mask 0x20, AD5
        const IRQ_N =  1 << 6;     // Mask 0x40, AD6
        const RST_N =  1 << 7;     // Mask 0x80, AD7
    }
}

/// FTDI MPSSE backend
pub struct FtdiInterface {
    dev: Ft4232h,
}

impl FtdiInterface {
    /// Create a new FTDI backend with the specified device
    pub fn new(dev: Ft4232h) -> Self {
        Self { dev }
    }

    /// Open FTDI device by description
    pub fn open(description: &str) -> Result<Self, Error> {
        let dev = Ft4232h::with_description(description)?;
        let mut intf = Self::new(dev);
        intf.initialize()?;
        Ok(intf)
    }

    /// Get pin direction configuration (which pins are outputs)
    fn pin_directions() -> SpiPin {
        SpiPin::CLK | SpiPin::MOSI | SpiPin::SS_N | SpiPin::RST_N
    }

    /// Read current GPIO state
    fn get_data_bits(&mut self) -> Result<SpiPin, Error> {
        let bits = self.dev.gpio_lower()?;
        SpiPin::from_bits(bits).ok_or(Error::InvalidGpioState)
    }

    /// Set GPIO pins to specific absolute state
    fn set_data_bits_absolute(&mut self, state: SpiPin) -> Result<(), Error> {
        self.dev
            .set_gpio_lower(state.bits(), Self::pin_directions().bits())?;
        Ok(())
    }

    /// Helper to set/clear specific bits
    fn set_data_bits_single(
        current_bits: SpiPin,
        target_bits: SpiPin,
        high: bool,
    ) -> Result<SpiPin, Error> {
        if target_bits.bits().count_ones() != 1 {
            return Err(Error::InvalidPinMask);
        }

        let bits_set = if high {
            current_bits | target_bits
        } else {
            current_bits & !target_bits
        };

        Ok(bits_set)
    }

    /// Set a single pin high or low
    fn set_single_pin(&mut self, target_pin: SpiPin, high: bool) -> Result<(), Error> {
        let current = self.get_data_bits()?;
        let updated = Self::set_data_bits_single(current, target_pin, high)?;
        self.dev
            .set_gpio_lower(updated.bits(), Self::pin_directions().bits())?;
        Ok(())
    }

    fn initialize(&mut self) -> Result<(), Error> {
        // Set MPSSE mode
        self.dev.set_bit_mode(0x0, libftd2xx::BitMode::Mpsse)?;

        // Set latency timer
        self.dev.set_latency_timer(Duration::from_millis(2))?;

        // Initial GPIO state: SS_N=HIGH, RST_N=HIGH
        self.set_data_bits_absolute(SpiPin::SS_N | SpiPin::RST_N)?;

        // SPI clock
        self.dev.set_clock(5_000)?;

        Ok(())
    }
}

impl HwInterface for FtdiInterface {
    fn reset(&mut self) -> Result<(), Error> {
        // RST_N is active low
        self.set_single_pin(SpiPin::RST_N, false)?;
        sleep(Duration::from_millis(10));
        self.set_single_pin(SpiPin::RST_N, true)?;
        sleep(Duration::from_millis(10));
        Ok(())
    }

    fn interrupt_active(&mut self) -> bool {
        match self.get_data_bits() {
            Ok(bits) => !bits.contains(SpiPin::IRQ_N),
            Err(_) => false,
        }
    }

    fn spi_transfer(&mut self, tx: &[u8], rx: &mut [u8]) -> Result<(), Error> {
        let bits = self.get_data_bits()?;

        let builder = MpsseCmdBuilder::new()
            // Assert ChipSelect
            .set_gpio_lower((bits & !SpiPin::SS_N).bits(), Self::pin_directions().bits())
            // Full-duplex exchange, SPI mode 0, MSB first
            .clock_data(ClockData::MsbPosIn, tx)
            // Release ChipSelect
            .set_gpio_lower((bits | SpiPin::SS_N).bits(), Self::pin_directions().bits())
            .send_immediate();

        self.dev.send(builder.as_slice())?;
        self.dev.recv(rx)?;

        Ok(())
    }
}
