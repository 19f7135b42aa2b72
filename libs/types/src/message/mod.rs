//! Message value types.
//!
//! A [`Message`] is the unit carried on the wire: a fixed 56-byte header,
//! an opaque payload, and an optional typed user header mapping.

pub mod header;
pub mod user_headers;

pub use header::MessageHeader;
pub use user_headers::{HeaderKind, HeaderValue, UserHeaders};

use serde::{Deserialize, Serialize};

/// A single message as sent to or received from the server.
///
/// Invariants (enforced by the codec, maintained by the builder):
/// - `header.payload_length == payload.len()`
/// - `header.user_headers_length` equals the encoded length of
///   `user_headers` (0 when `None`)
///
/// An empty user header map is represented as `None`; the wire cannot
/// distinguish the two.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub header: MessageHeader,
    pub payload: Vec<u8>,
    pub user_headers: Option<UserHeaders>,
}

impl Message {
    pub fn new(header: MessageHeader, payload: Vec<u8>, user_headers: Option<UserHeaders>) -> Self {
        Self {
            header,
            payload,
            user_headers,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_round_trip_equality() {
        let header = MessageHeader::for_payload(42, 3);
        let a = Message::new(header, vec![1, 2, 3], None);
        let b = Message::new(header, vec![1, 2, 3], None);
        assert_eq!(a, b);

        let c = Message::new(header, vec![1, 2, 4], None);
        assert_ne!(a, c);
    }
}
