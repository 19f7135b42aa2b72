//! Message header codec.
//!
//! Encodes and decodes the fixed 56-byte header that precedes every
//! payload. No field-level validation happens here beyond width: a zero
//! checksum or zero id is legal at this layer, checksum correctness is the
//! caller's responsibility.

use types::MessageHeader;

use crate::error::CodecResult;
use crate::fixed::{self, Reader};

/// Append the 56-byte wire form of a header to the output buffer.
///
/// Field order: checksum(8) | id(16) | offset(8) | timestamp(8) |
/// origin_timestamp(8) | user_headers_length(4) | payload_length(4).
pub fn encode_header(header: &MessageHeader, out: &mut Vec<u8>) {
    out.reserve(MessageHeader::SIZE);
    fixed::put_u64(out, header.checksum);
    fixed::put_u128(out, header.id);
    fixed::put_u64(out, header.offset);
    fixed::put_u64(out, header.timestamp);
    fixed::put_u64(out, header.origin_timestamp);
    fixed::put_u32(out, header.user_headers_length);
    fixed::put_u32(out, header.payload_length);
}

/// Decode a header, consuming exactly 56 bytes from the reader.
///
/// Fails with `TruncatedInput` if fewer than 56 bytes remain.
pub fn decode_header(reader: &mut Reader<'_>) -> CodecResult<MessageHeader> {
    Ok(MessageHeader {
        checksum: reader.get_u64("header checksum")?,
        id: reader.get_u128("header id")?,
        offset: reader.get_u64("header offset")?,
        timestamp: reader.get_u64("header timestamp")?,
        origin_timestamp: reader.get_u64("header origin timestamp")?,
        user_headers_length: reader.get_u32("header user headers length")?,
        payload_length: reader.get_u32("header payload length")?,
    })
}
