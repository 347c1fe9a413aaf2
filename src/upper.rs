//! Seam towards the protocol layer above the Ethernet layer.

use crate::error::Error;

/// Interface to the network stack sitting on top of the driver.
pub trait UpperProto {
    /// Deliver a received Ethernet frame to the stack.
    fn send_eth_up(&mut self, frame: &[u8]) -> Result<(), Error>;

    /// Ask the stack for an Ethernet frame to transmit. If one is
    /// available it is copied into `buf` and its length returned; 0 means
    /// nothing is pending. `buf` has the driver's MTU as capacity.
    fn poll_for_eth(&mut self, buf: &mut [u8]) -> Result<usize, Error>;
}
