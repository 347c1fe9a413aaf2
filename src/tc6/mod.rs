//! Seam towards the OPEN Alliance TC6 protocol engine.
//!
//! The engine implements the TC6 data/control plane (chunk framing, control
//! transactions, register init and monitoring); this crate only drives it.
//! [`Tc6Engine`] captures the entry points the driver invokes, and
//! [`Tc6Callbacks`] the hooks the engine requires from its host. Engine
//! entry points keep the library's boolean success convention; the driver
//! converts them to `Result` at its public surface.

pub mod callbacks;

pub use callbacks::Tc6Callbacks;

use thiserror::Error as DeriveError;

use crate::config::{MacConfig, PlcaConfig};

/// Error enumeration of the TC6 engine, surfaced to the host unchanged.
#[derive(DeriveError, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tc6Error {
    #[error("no hardware response")]
    NoHardware,

    #[error("unexpected sync bit in receive chunk")]
    UnexpectedSync,

    #[error("unexpected data valid / end valid flags")]
    UnexpectedDataValid,

    #[error("footer checksum mismatch")]
    BadChecksum,

    #[error("unexpected control transaction response")]
    UnexpectedControl,

    #[error("malformed transmit data")]
    BadTxData,

    #[error("configuration sync lost")]
    SyncLost,

    #[error("SPI transfer failed")]
    SpiError,

    #[error("control transmission failed")]
    ControlTxFail,
}

/// Events reported by the engine's register layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegsEvent {
    UnknownError,
    TxProtocolError,
    TxBufferOverflow,
    TxBufferUnderflow,
    RxBufferOverflow,
    LossOfFraming,
    HeaderError,
    ResetComplete,
    PhyInterrupt,
    TxTimestampAvailableA,
    TxTimestampAvailableB,
    TxTimestampAvailableC,
    TxFrameCheckSequenceError,
    ControlDataProtectionError,
    RxNonRecoverableError,
    TxNonRecoverableError,
    FsmStateError,
    SramEccError,
    Undervoltage,
    InternalBusError,
    ChipError,
    UnsupportedHardware,
}

impl RegsEvent {
    /// Whether the register layer must be reinitialized after this event.
    pub fn needs_reinit(self) -> bool {
        matches!(
            self,
            Self::LossOfFraming | Self::RxNonRecoverableError | Self::TxNonRecoverableError
        )
    }
}

/// Transmit timestamp capture selector of the raw send call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimestampCapture {
    #[default]
    Disabled,
    RegisterA,
    RegisterB,
    RegisterC,
}

impl TimestampCapture {
    /// Raw selector value as passed on the wire interface.
    pub fn id(self) -> u8 {
        match self {
            Self::Disabled => 0,
            Self::RegisterA => 1,
            Self::RegisterB => 2,
            Self::RegisterC => 3,
        }
    }
}

/// Entry points of the wrapped TC6 engine.
///
/// Every entry point may re-enter the host through [`Tc6Callbacks`], most
/// prominently via `spi_transaction`; callers therefore pass the callback
/// sink explicitly. After any entry point returns, the caller must report
/// SPI completions back through [`spi_buffer_done`](Self::spi_buffer_done)
/// until none are pending.
pub trait Tc6Engine {
    /// Initialize the register layer with MAC and optional PLCA settings.
    /// `None` selects CSMA/CD operation.
    fn init_regs(
        &mut self,
        cb: &mut dyn Tc6Callbacks,
        mac: &MacConfig,
        plca: Option<&PlcaConfig>,
    ) -> bool;

    /// Whether the register init sequence has completed.
    fn init_done(&self) -> bool;

    /// Run the protocol state machine. Returns `true` when no work is left.
    fn service(&mut self, cb: &mut dyn Tc6Callbacks, interrupt_level: bool) -> bool;

    /// Drive the register layer's software timers.
    fn check_timers(&mut self, cb: &mut dyn Tc6Callbacks);

    /// Rerun the register init sequence after a fatal event.
    fn reinit(&mut self, cb: &mut dyn Tc6Callbacks);

    /// Reconfigure PLCA at runtime.
    fn set_plca(
        &mut self,
        cb: &mut dyn Tc6Callbacks,
        enable: bool,
        node_id: u8,
        node_count: u8,
    ) -> bool;

    /// Queue one raw Ethernet frame for transmission. The engine reports
    /// completion through [`Tc6Callbacks::on_tx_done`].
    fn send_raw_ethernet_packet(
        &mut self,
        cb: &mut dyn Tc6Callbacks,
        frame: &[u8],
        tsc: TimestampCapture,
    ) -> bool;

    /// Report completion of an SPI transaction previously requested
    /// through [`Tc6Callbacks::spi_transaction`].
    fn spi_buffer_done(&mut self, cb: &mut dyn Tc6Callbacks, instance: u8, success: bool);
}
