//! IEEE 802.3 frame-size constants used by the receive path.

/// Largest frame the driver buffers in either direction.
pub const MTU: usize = 1536;

pub const MAC_DEST_LEN: usize = 6;
pub const MAC_SRC_LEN: usize = 6;
pub const LENGTH_FIELD_LEN: usize = 2;
pub const IP_HEADER_MIN_LEN: usize = 20;
pub const FCS_LEN: usize = 4;

/// Shortest frame the receive path considers plausible.
pub const MIN_FRAME_LEN: usize =
    MAC_DEST_LEN + MAC_SRC_LEN + LENGTH_FIELD_LEN + IP_HEADER_MIN_LEN + FCS_LEN;
