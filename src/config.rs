//! MAC and PLCA configuration for a LAN865x instance.

/// MAC-level settings applied during register initialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MacConfig {
    /// Station MAC address.
    pub addr: [u8; 6],

    /// Forward all frames to the host, not only those matching `addr`.
    pub copy_all_frames: bool,

    /// Start transmitting a frame before it has been fully buffered.
    pub tx_cut_through: bool,

    /// Forward a received frame before it has been fully buffered.
    pub rx_cut_through: bool,
}

impl MacConfig {
    /// Configuration with the given address and store-and-forward defaults.
    pub fn new(addr: [u8; 6]) -> Self {
        Self {
            addr,
            ..Self::default()
        }
    }
}

/// Physical Layer Collision Avoidance settings.
///
/// A driver configured without a `PlcaConfig` runs plain CSMA/CD.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlcaConfig {
    /// This node's PLCA ID. Node 0 is the coordinator generating beacons.
    pub node_id: u8,

    /// Number of transmit opportunities per PLCA cycle.
    pub node_count: u8,

    /// Additional packets a node may send within one transmit opportunity.
    pub burst_count: u8,

    /// Bit times to wait for a follow-up burst packet.
    pub burst_timer: u8,
}

impl Default for PlcaConfig {
    fn default() -> Self {
        Self {
            node_id: 0,
            node_count: 8,
            burst_count: 0,
            burst_timer: 0x80,
        }
    }
}

impl PlcaConfig {
    /// Settings for the coordinator node (ID 0).
    pub fn coordinator(node_count: u8) -> Self {
        Self {
            node_id: 0,
            node_count,
            ..Self::default()
        }
    }

    /// Settings for a follower node.
    pub fn follower(node_id: u8, node_count: u8) -> Self {
        Self {
            node_id,
            node_count,
            ..Self::default()
        }
    }
}
