//! Message construction for the publish path.
//!
//! The builder assembles a [`Message`] whose header length fields and
//! checksum are consistent with its content, which is exactly what the
//! message codec enforces on encode. Callers that construct headers by
//! hand remain free to do so; the codec treats any checksum value as
//! legal.

use std::time::{SystemTime, UNIX_EPOCH};

use types::{HeaderValue, Message, MessageHeader, UserHeaders};

use crate::error::CodecResult;
use crate::fixed;
use crate::user_headers;

/// Current time in microseconds since the Unix epoch.
fn now_micros() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("System time before Unix epoch")
        .as_micros() as u64
}

/// CRC32 of a message's encoded user headers followed by its payload,
/// widened to the header's u64 checksum field.
pub fn message_checksum(message: &Message) -> CodecResult<u64> {
    let mut hasher = crc32fast::Hasher::new();
    if let Some(headers) = &message.user_headers {
        let mut encoded = Vec::with_capacity(message.header.user_headers_length as usize);
        user_headers::encode_user_headers(headers, &mut encoded)?;
        hasher.update(&encoded);
    }
    hasher.update(&message.payload);
    Ok(hasher.finalize() as u64)
}

/// Recompute a message's checksum and compare against its header field.
pub fn verify_checksum(message: &Message) -> CodecResult<bool> {
    Ok(message_checksum(message)? == message.header.checksum)
}

/// Builder for consistent messages.
#[derive(Debug, Default)]
pub struct MessageBuilder {
    id: u128,
    offset: u64,
    timestamp: u64,
    origin_timestamp: u64,
    payload: Vec<u8>,
    user_headers: Option<UserHeaders>,
}

impl MessageBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the unique message identifier.
    pub fn with_id(mut self, id: u128) -> Self {
        self.id = id;
        self
    }

    /// Set the server-assigned offset (normally left at 0 before publish).
    pub fn with_offset(mut self, offset: u64) -> Self {
        self.offset = offset;
        self
    }

    /// Set a custom timestamp in microseconds (normally stamped at build).
    pub fn with_timestamp(mut self, timestamp_micros: u64) -> Self {
        self.timestamp = timestamp_micros;
        self
    }

    /// Set a custom origin timestamp (defaults to the timestamp).
    pub fn with_origin_timestamp(mut self, origin_timestamp_micros: u64) -> Self {
        self.origin_timestamp = origin_timestamp_micros;
        self
    }

    /// Set the payload bytes.
    pub fn with_payload(mut self, payload: Vec<u8>) -> Self {
        self.payload = payload;
        self
    }

    /// Add one user header, creating the map on first use.
    pub fn with_user_header(mut self, key: impl Into<String>, value: HeaderValue) -> Self {
        self.user_headers
            .get_or_insert_with(UserHeaders::new)
            .insert(key.into(), value);
        self
    }

    /// Replace the whole user header map.
    pub fn with_user_headers(mut self, headers: UserHeaders) -> Self {
        self.user_headers = Some(headers);
        self
    }

    /// Finalize into a consistent message.
    ///
    /// Computes both header length fields, stamps missing timestamps, and
    /// fills the checksum. An empty user header map is normalized to
    /// absent. Fails with `Overflow` when the payload or a user header
    /// cannot be described by its wire length field.
    pub fn build(self) -> CodecResult<Message> {
        let user_headers = self.user_headers.filter(|headers| !headers.is_empty());

        let user_headers_length = match &user_headers {
            Some(headers) => fixed::length_to_u32(
                user_headers::encoded_len(headers)?,
                "user headers length",
            )?,
            None => 0,
        };
        let payload_length = fixed::length_to_u32(self.payload.len(), "payload length")?;

        let timestamp = if self.timestamp == 0 {
            now_micros()
        } else {
            self.timestamp
        };
        let origin_timestamp = if self.origin_timestamp == 0 {
            timestamp
        } else {
            self.origin_timestamp
        };

        let header = MessageHeader {
            checksum: 0,
            id: self.id,
            offset: self.offset,
            timestamp,
            origin_timestamp,
            user_headers_length,
            payload_length,
        };

        let mut message = Message::new(header, self.payload, user_headers);
        message.header.checksum = message_checksum(&message)?;
        Ok(message)
    }
}
