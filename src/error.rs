use thiserror::Error as DeriveError;

#[cfg(feature = "ftdi")]
use libftd2xx::{DeviceTypeError, FtStatus, TimeoutError as FtdiTimeout};

use crate::tc6::Tc6Error;

#[derive(DeriveError, Debug)]
pub enum Error {
    #[error("driver initialization failed")]
    InitializationFailed,

    #[error("TC6 register access failed")]
    RegsFailure,

    #[error("TC6 send failed")]
    SendFailure,

    #[error("transmit path busy")]
    TxBusy,

    #[error("frame exceeds transmit buffer")]
    FrameTooLarge,

    #[error("upper layer rejected the operation")]
    UpperLayer,

    #[error("SPI transfer failed")]
    Spi,

    #[error("GPIO access failed")]
    Gpio,

    #[error("TC6 protocol error: {0}")]
    Protocol(#[from] Tc6Error),

    #[cfg(feature = "ftdi")]
    #[error("FTDI Timeout")]
    DeviceTimeout(#[from] FtdiTimeout),

    #[cfg(feature = "ftdi")]
    #[error("FTDI Status: {0}")]
    FtStatus(#[from] FtStatus),

    #[cfg(feature = "ftdi")]
    #[error("FTDI Device Type Error: {0}")]
    DeviceTypeError(#[from] DeviceTypeError),

    #[cfg(feature = "ftdi")]
    #[error("Invalid GPIO state")]
    InvalidGpioState,

    #[cfg(feature = "ftdi")]
    #[error("Invalid pin mask (must be single bit)")]
    InvalidPinMask,
}
