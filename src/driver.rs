//! LAN865x driver instance.
//!
//! [`Lan865x`] owns the TC6 engine and the host-side pieces (hardware
//! interface, upper protocol, tick source) and adapts between them. The
//! driver state the engine re-enters through callbacks lives in a separate
//! [`Core`] struct, so the engine and the callback sink can be borrowed at
//! the same time.

use log::{debug, trace, warn};

use crate::config::{MacConfig, PlcaConfig};
use crate::error::Error;
use crate::eth::{MIN_FRAME_LEN, MTU};
use crate::hw::HwInterface;
use crate::tc6::{RegsEvent, Tc6Callbacks, Tc6Engine, Tc6Error, TimestampCapture};
use crate::ticks::TicksProvider;
use crate::upper::UpperProto;

/// One LAN865x driver instance.
///
/// `E` is the TC6 engine, `HW` the board interface, `UP` the upper
/// protocol layer and `TK` the millisecond tick source. After
/// construction, [`init`](Self::init) must complete before the service
/// loop is entered.
pub struct Lan865x<E, HW, UP, TK> {
    engine: E,
    core: Core<HW, UP, TK>,
    mac: MacConfig,
    plca: Option<PlcaConfig>,
    tx_buf: [u8; MTU],
}

/// Driver state reachable from the engine's callback hooks.
struct Core<HW, UP, TK> {
    hw: HW,
    upper: UP,
    ticks: TK,

    rx_buf: [u8; MTU],
    rx_len: usize,
    rx_invalid: bool,

    tx_busy: bool,
    need_service: bool,
    needs_reinit: bool,

    // Completion recorded by spi_transaction, reported to the engine
    // once it has returned control to the driver.
    pending_spi_done: Option<(u8, bool)>,

    last_error: Option<Tc6Error>,
}

impl<E, HW, UP, TK> Lan865x<E, HW, UP, TK>
where
    E: Tc6Engine,
    HW: HwInterface,
    UP: UpperProto,
    TK: TicksProvider,
{
    pub fn new(
        engine: E,
        hw: HW,
        upper: UP,
        ticks: TK,
        mac: MacConfig,
        plca: Option<PlcaConfig>,
    ) -> Self {
        Self {
            engine,
            core: Core {
                hw,
                upper,
                ticks,
                rx_buf: [0; MTU],
                rx_len: 0,
                rx_invalid: false,
                tx_busy: false,
                need_service: false,
                needs_reinit: false,
                pending_spi_done: None,
                last_error: None,
            },
            mac,
            plca,
            tx_buf: [0; MTU],
        }
    }

    /// Initialize the register layer and service the engine until the
    /// init sequence has completed.
    pub fn init(&mut self) -> Result<(), Error> {
        if !self
            .engine
            .init_regs(&mut self.core, &self.mac, self.plca.as_ref())
        {
            return Err(Error::InitializationFailed);
        }
        self.flush_spi_completions();

        while !self.engine.init_done() {
            self.engine.service(&mut self.core, true);
            self.flush_spi_completions();
        }
        Ok(())
    }

    /// One pass of the service loop.
    ///
    /// Runs the engine when the interrupt line is active or a
    /// need-service notification is pending, performs a deferred
    /// register-layer reinit after a fatal event, polls the upper layer
    /// for an outbound frame when the transmit path is idle, and drives
    /// the engine's timers. Returns `true` when the engine reported all
    /// pending work done.
    pub fn service(&mut self) -> bool {
        let mut all_done = true;

        let intr_active = self.core.hw.interrupt_active();
        if intr_active || self.core.need_service {
            all_done = self.engine.service(&mut self.core, !intr_active);
            self.flush_spi_completions();
            if all_done {
                self.core.need_service = false;
            }
        }

        if self.core.needs_reinit {
            self.core.needs_reinit = false;
            self.engine.reinit(&mut self.core);
            self.flush_spi_completions();
        }

        if !self.core.tx_busy {
            match self.core.upper.poll_for_eth(&mut self.tx_buf) {
                Ok(0) | Err(_) => {}
                Ok(n) => {
                    // tx_busy is set here and reset by on_tx_done once
                    // the engine finished the transmission.
                    let _ = self.transmit(n, TimestampCapture::Disabled);
                }
            }
        }

        self.engine.check_timers(&mut self.core);
        self.flush_spi_completions();

        all_done
    }

    /// Hand one raw Ethernet frame to the engine for transmission.
    pub fn send_eth_down(&mut self, frame: &[u8]) -> Result<(), Error> {
        if self.core.tx_busy {
            return Err(Error::TxBusy);
        }
        if frame.len() > MTU {
            return Err(Error::FrameTooLarge);
        }
        self.tx_buf[..frame.len()].copy_from_slice(frame);
        self.transmit(frame.len(), TimestampCapture::Disabled)
    }

    fn transmit(&mut self, len: usize, tsc: TimestampCapture) -> Result<(), Error> {
        self.core.tx_busy = true;
        let ok = self
            .engine
            .send_raw_ethernet_packet(&mut self.core, &self.tx_buf[..len], tsc);
        self.flush_spi_completions();
        if !ok {
            self.core.tx_busy = false;
            return Err(Error::SendFailure);
        }
        trace!("tx queued: len={len}");
        Ok(())
    }

    /// Reconfigure PLCA at runtime.
    pub fn set_plca(&mut self, enable: bool, node_id: u8, node_count: u8) -> Result<(), Error> {
        let ok = self
            .engine
            .set_plca(&mut self.core, enable, node_id, node_count);
        self.flush_spi_completions();
        if !ok {
            return Err(Error::RegsFailure);
        }
        Ok(())
    }

    /// Report recorded SPI completions to the engine. A completion may
    /// make the engine request a follow-up transaction, hence the loop.
    fn flush_spi_completions(&mut self) {
        while let Some((instance, success)) = self.core.pending_spi_done.take() {
            self.engine
                .spi_buffer_done(&mut self.core, instance, success);
        }
    }

    /// Whether a transmit handed to the engine is still in flight.
    pub fn tx_busy(&self) -> bool {
        self.core.tx_busy
    }

    /// Most recent engine error, cleared on read.
    pub fn take_last_error(&mut self) -> Option<Tc6Error> {
        self.core.last_error.take()
    }

    pub fn mac(&self) -> &MacConfig {
        &self.mac
    }

    pub fn hw_mut(&mut self) -> &mut HW {
        &mut self.core.hw
    }

    pub fn upper_mut(&mut self) -> &mut UP {
        &mut self.core.upper
    }
}

impl<HW, UP, TK> Tc6Callbacks for Core<HW, UP, TK>
where
    HW: HwInterface,
    UP: UpperProto,
    TK: TicksProvider,
{
    fn on_need_service(&mut self) {
        self.need_service = true;
    }

    fn on_error(&mut self, error: Tc6Error) {
        warn!("tc6 error: {error}");
        self.last_error = Some(error);
    }

    fn on_rx_slice(&mut self, slice: &[u8], offset: u16) {
        if self.rx_invalid {
            return;
        }
        let offset = offset as usize;
        let end = offset + slice.len();
        if end > MTU {
            self.rx_invalid = true;
            return;
        }
        if offset != 0 {
            if self.rx_len == 0 {
                // Continuation without a packet in progress.
                self.rx_invalid = true;
                return;
            }
        } else if self.rx_len != 0 {
            // New packet started while one was in progress.
            self.rx_invalid = true;
            return;
        }
        self.rx_buf[offset..end].copy_from_slice(slice);
        self.rx_len = end;
    }

    fn on_rx_packet(&mut self, success: bool, len: u16, _timestamp: Option<u64>) {
        let rx_len = self.rx_len;
        self.rx_len = 0;
        let rx_invalid = self.rx_invalid;
        self.rx_invalid = false;

        let status = if !success {
            "bad"
        } else if rx_invalid || rx_len == 0 {
            "invalid"
        } else if rx_len != len as usize {
            "wrong length"
        } else if rx_len < MIN_FRAME_LEN {
            "too short"
        } else if self.upper.send_eth_up(&self.rx_buf[..rx_len]).is_err() {
            "dropped"
        } else {
            "ok"
        };
        debug!("rx packet: len={len} status={status}");
    }

    fn on_event(&mut self, event: RegsEvent) {
        let reinit = event.needs_reinit();
        if reinit {
            self.needs_reinit = true;
        }
        warn!("tc6 event: {event:?} reinit={reinit}");
    }

    fn on_tx_done(&mut self) {
        self.tx_busy = false;
    }

    fn spi_transaction(&mut self, instance: u8, tx: &[u8], rx: &mut [u8]) -> bool {
        let ok = self.hw.spi_transfer(tx, rx).is_ok();
        self.pending_spi_done = Some((instance, ok));
        ok
    }

    fn ticks_ms(&mut self) -> u32 {
        self.ticks.milliseconds()
    }
}
