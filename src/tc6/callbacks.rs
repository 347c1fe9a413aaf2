//! Callback hooks required by the TC6 engine.

use super::{RegsEvent, Tc6Error};

/// Host-side hooks invoked by the engine while it runs.
///
/// The engine invokes these synchronously from within its entry points.
/// Implementations must not call back into the engine; completions and
/// reinit requests are recorded and replayed by the driver afterwards.
pub trait Tc6Callbacks {
    /// The engine has pending work; the host should call its service entry
    /// point again soon.
    fn on_need_service(&mut self);

    /// A protocol error occurred. The enumeration is forwarded unchanged.
    fn on_error(&mut self, error: Tc6Error);

    /// A slice of a received Ethernet frame arrived. `offset` is the
    /// slice's position within the frame being reassembled.
    fn on_rx_slice(&mut self, slice: &[u8], offset: u16);

    /// The frame currently being reassembled is complete. `success` is
    /// `false` if the engine discarded it; `len` is the total frame length
    /// and `timestamp` the RX capture, when available.
    fn on_rx_packet(&mut self, success: bool, len: u16, timestamp: Option<u64>);

    /// The register layer reported an event.
    fn on_event(&mut self, event: RegsEvent);

    /// A previously queued raw transmit finished; the transmit buffer may
    /// be reused.
    fn on_tx_done(&mut self);

    /// Execute one full-duplex SPI transaction. `tx` and `rx` have equal
    /// length. Returns `false` if the transfer could not be performed.
    fn spi_transaction(&mut self, instance: u8, tx: &[u8], rx: &mut [u8]) -> bool;

    /// Millisecond tick for the engine's software timers.
    fn ticks_ms(&mut self) -> u32;
}
