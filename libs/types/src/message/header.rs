//! Message Header Implementation
//!
//! The header precedes every payload on the wire and is identical for all
//! messages. It carries the fixed-width fields the server reads before
//! touching the payload.

use serde::{Deserialize, Serialize};

/// Message header (56 bytes on the wire)
///
/// Field order matches the wire layout exactly; all multi-byte fields are
/// little-endian when encoded. The struct itself is a plain value object,
/// the `codec` crate owns the byte-level transform.
///
/// ```text
/// ┌──────────────────┬──────────────┬─────────────────────┐
/// │ MessageHeader    │ user headers │ payload             │
/// │ (56 bytes)       │ (variable)   │ (variable)          │
/// └──────────────────┴──────────────┴─────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MessageHeader {
    /// Payload checksum, caller-defined (bytes 0-7)
    pub checksum: u64,
    /// Unique message identifier (bytes 8-23)
    pub id: u128,
    /// Offset assigned by the server, 0 before publish (bytes 24-31)
    pub offset: u64,
    /// Server receive time, microseconds since epoch (bytes 32-39)
    pub timestamp: u64,
    /// Client send time, microseconds since epoch (bytes 40-47)
    pub origin_timestamp: u64,
    /// Encoded length of the user headers section (bytes 48-51)
    pub user_headers_length: u32,
    /// Payload length in bytes (bytes 52-55)
    pub payload_length: u32,
}

impl MessageHeader {
    /// Encoded header size in bytes
    pub const SIZE: usize = 56;

    /// Header for a bare payload with no user headers.
    ///
    /// Checksum and timestamps start at zero; the publish path fills them
    /// in before encoding.
    pub fn for_payload(id: u128, payload_length: u32) -> Self {
        Self {
            id,
            payload_length,
            ..Self::default()
        }
    }

    /// Total encoded message size this header declares, including itself.
    pub fn declared_message_size(&self) -> usize {
        Self::SIZE + self.user_headers_length as usize + self.payload_length as usize
    }
}
