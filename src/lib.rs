//! Driver for the Microchip LAN8650/1 10BASE-T1S MAC-PHY.
//!
//! The LAN865x talks to its host over SPI using the OPEN Alliance TC6
//! protocol. This crate does not reimplement the TC6 engine (SPI chunk
//! framing, register scripts, state machine); it adapts an engine, provided
//! behind the [`tc6::Tc6Engine`] trait, to the host side:
//!
//! * [`hw::HwInterface`] — SPI bus, interrupt line and reset pin, with an
//!   embedded-hal 1.0 backend and an optional FTDI MPSSE backend.
//! * [`upper::UpperProto`] — the network stack above the Ethernet layer.
//! * [`ticks::TicksProvider`] — millisecond tick source for engine timers.
//!
//! [`Lan865x`] wires those together: it implements the callback hooks the
//! engine requires ([`tc6::Tc6Callbacks`]), reassembles receive slices into
//! frames, and runs the service loop.

#![cfg_attr(not(feature = "std"), no_std)]

pub mod config;
pub mod driver;
pub mod error;
pub mod eth;
pub mod hw;
pub mod tc6;
pub mod ticks;
pub mod upper;

pub use config::{MacConfig, PlcaConfig};
pub use driver::Lan865x;
pub use error::Error;
pub use eth::MTU;
pub use hw::HwInterface;
pub use ticks::TicksProvider;
pub use upper::UpperProto;

pub use embedded_hal::digital as eh_digital;
pub use embedded_hal::spi as eh_spi;
