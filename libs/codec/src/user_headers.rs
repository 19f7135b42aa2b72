//! User header sub-codec.
//!
//! User headers are a self-describing sequence of records inside the region
//! the message header's `user_headers_length` field declares:
//!
//! ```text
//! [key length: u32 LE][key: UTF-8][kind: u8][value length: u32 LE][value bytes]
//! ```
//!
//! Scalar values encode little-endian at their natural width; `Raw` and
//! `String` copy their bytes verbatim. Decoding consumes the declared
//! region exactly, a record overrunning it is reported as truncation.

use std::collections::HashMap;

use types::{HeaderKind, HeaderValue, UserHeaders};

use crate::error::{CodecError, CodecResult};
use crate::fixed::{self, Reader};

/// Encoded length of a header map, without encoding it.
///
/// Used by the builder to fill the header's `user_headers_length` field.
/// Fails with `Overflow` when a key or value cannot be described by its
/// u32 length prefix.
pub fn encoded_len(headers: &UserHeaders) -> CodecResult<usize> {
    let mut total = 0usize;
    for (key, value) in headers {
        fixed::length_to_u32(key.len(), "user header key length")?;
        let value_len = value.encoded_value_len();
        fixed::length_to_u32(value_len, "user header value length")?;
        total += fixed::U32_SIZE + key.len() + 1 + fixed::U32_SIZE + value_len;
    }
    Ok(total)
}

/// Append the wire form of a header map to the output buffer.
pub fn encode_user_headers(headers: &UserHeaders, out: &mut Vec<u8>) -> CodecResult<()> {
    for (key, value) in headers {
        let key_len = fixed::length_to_u32(key.len(), "user header key length")?;
        fixed::put_u32(out, key_len);
        out.extend_from_slice(key.as_bytes());
        fixed::put_u8(out, value.kind().into());
        encode_value(value, out)?;
    }
    Ok(())
}

fn encode_value(value: &HeaderValue, out: &mut Vec<u8>) -> CodecResult<()> {
    let value_len = fixed::length_to_u32(value.encoded_value_len(), "user header value length")?;
    fixed::put_u32(out, value_len);
    match value {
        HeaderValue::Raw(bytes) => out.extend_from_slice(bytes),
        HeaderValue::String(s) => out.extend_from_slice(s.as_bytes()),
        HeaderValue::Bool(v) => fixed::put_u8(out, *v as u8),
        HeaderValue::Int8(v) => out.extend_from_slice(&v.to_le_bytes()),
        HeaderValue::Int16(v) => out.extend_from_slice(&v.to_le_bytes()),
        HeaderValue::Int32(v) => out.extend_from_slice(&v.to_le_bytes()),
        HeaderValue::Int64(v) => out.extend_from_slice(&v.to_le_bytes()),
        HeaderValue::Int128(v) => out.extend_from_slice(&v.to_le_bytes()),
        HeaderValue::Uint8(v) => fixed::put_u8(out, *v),
        HeaderValue::Uint16(v) => out.extend_from_slice(&v.to_le_bytes()),
        HeaderValue::Uint32(v) => fixed::put_u32(out, *v),
        HeaderValue::Uint64(v) => fixed::put_u64(out, *v),
        HeaderValue::Uint128(v) => fixed::put_u128(out, *v),
        HeaderValue::Float(v) => out.extend_from_slice(&v.to_le_bytes()),
        HeaderValue::Double(v) => out.extend_from_slice(&v.to_le_bytes()),
    }
    Ok(())
}

/// Decode the user header region into a map.
///
/// The input slice must contain exactly the region declared by the message
/// header; records are read until it is exhausted.
pub fn decode_user_headers(buf: &[u8]) -> CodecResult<UserHeaders> {
    let mut reader = Reader::new(buf);
    let mut headers = HashMap::new();

    while reader.remaining() > 0 {
        let key_len = reader.get_u32("user header key length")? as usize;
        let key_bytes = reader.get_bytes(key_len, "user header key")?;
        let key = std::str::from_utf8(key_bytes)
            .map_err(|_| CodecError::InvalidUtf8 {
                context: "user header key",
            })?
            .to_string();

        let kind_tag = reader.get_u8("user header kind")?;
        let kind = HeaderKind::try_from(kind_tag)
            .map_err(|_| CodecError::InvalidHeaderKind { kind: kind_tag })?;
        let value = decode_value(kind, &mut reader)?;

        headers.insert(key, value);
    }

    Ok(headers)
}

fn decode_value(kind: HeaderKind, reader: &mut Reader<'_>) -> CodecResult<HeaderValue> {
    let declared = reader.get_u32("user header value length")? as usize;
    if let Some(width) = kind.fixed_width() {
        if declared != width {
            return Err(CodecError::length_mismatch(
                "user header value",
                declared,
                width,
            ));
        }
    }

    let value = match kind {
        HeaderKind::Raw => HeaderValue::Raw(reader.get_bytes(declared, "raw value")?.to_vec()),
        HeaderKind::String => {
            let bytes = reader.get_bytes(declared, "string value")?;
            let s = std::str::from_utf8(bytes).map_err(|_| CodecError::InvalidUtf8 {
                context: "user header string value",
            })?;
            HeaderValue::String(s.to_string())
        }
        HeaderKind::Bool => HeaderValue::Bool(reader.get_u8("bool value")? != 0),
        HeaderKind::Int8 => HeaderValue::Int8(reader.get_u8("int8 value")? as i8),
        HeaderKind::Int16 => {
            let bytes = reader.get_bytes(2, "int16 value")?;
            HeaderValue::Int16(i16::from_le_bytes([bytes[0], bytes[1]]))
        }
        HeaderKind::Int32 => HeaderValue::Int32(reader.get_u32("int32 value")? as i32),
        HeaderKind::Int64 => HeaderValue::Int64(reader.get_u64("int64 value")? as i64),
        HeaderKind::Int128 => HeaderValue::Int128(reader.get_u128("int128 value")? as i128),
        HeaderKind::Uint8 => HeaderValue::Uint8(reader.get_u8("uint8 value")?),
        HeaderKind::Uint16 => {
            let bytes = reader.get_bytes(2, "uint16 value")?;
            HeaderValue::Uint16(u16::from_le_bytes([bytes[0], bytes[1]]))
        }
        HeaderKind::Uint32 => HeaderValue::Uint32(reader.get_u32("uint32 value")?),
        HeaderKind::Uint64 => HeaderValue::Uint64(reader.get_u64("uint64 value")?),
        HeaderKind::Uint128 => HeaderValue::Uint128(reader.get_u128("uint128 value")?),
        HeaderKind::Float => HeaderValue::Float(f32::from_le_bytes(
            reader.get_u32("float value")?.to_le_bytes(),
        )),
        HeaderKind::Double => HeaderValue::Double(f64::from_le_bytes(
            reader.get_u64("double value")?.to_le_bytes(),
        )),
    };

    Ok(value)
}
