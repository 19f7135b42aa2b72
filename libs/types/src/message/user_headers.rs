//! Typed per-message user headers.
//!
//! User headers are an optional name → value mapping attached to a message.
//! Values are typed on the wire via a one-byte kind tag so a consumer can
//! interpret them without out-of-band schema.

use std::collections::HashMap;
use std::fmt;

use num_enum::{IntoPrimitive, TryFromPrimitive};
use serde::{Deserialize, Serialize};

/// User header mapping carried by a message.
pub type UserHeaders = HashMap<String, HeaderValue>;

/// Wire tag for a user header value.
#[repr(u8)]
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, IntoPrimitive, TryFromPrimitive, Serialize, Deserialize,
)]
pub enum HeaderKind {
    Raw = 1,
    String = 2,
    Bool = 3,
    Int8 = 4,
    Int16 = 5,
    Int32 = 6,
    Int64 = 7,
    Int128 = 8,
    Uint8 = 9,
    Uint16 = 10,
    Uint32 = 11,
    Uint64 = 12,
    Uint128 = 13,
    Float = 14,
    Double = 15,
}

impl HeaderKind {
    /// Encoded value width for fixed-width kinds, `None` for variable ones.
    pub fn fixed_width(&self) -> Option<usize> {
        match self {
            HeaderKind::Raw | HeaderKind::String => None,
            HeaderKind::Bool | HeaderKind::Int8 | HeaderKind::Uint8 => Some(1),
            HeaderKind::Int16 | HeaderKind::Uint16 => Some(2),
            HeaderKind::Int32 | HeaderKind::Uint32 | HeaderKind::Float => Some(4),
            HeaderKind::Int64 | HeaderKind::Uint64 | HeaderKind::Double => Some(8),
            HeaderKind::Int128 | HeaderKind::Uint128 => Some(16),
        }
    }
}

/// A typed user header value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum HeaderValue {
    Raw(Vec<u8>),
    String(String),
    Bool(bool),
    Int8(i8),
    Int16(i16),
    Int32(i32),
    Int64(i64),
    Int128(i128),
    Uint8(u8),
    Uint16(u16),
    Uint32(u32),
    Uint64(u64),
    Uint128(u128),
    Float(f32),
    Double(f64),
}

impl HeaderValue {
    /// The wire tag for this value.
    pub fn kind(&self) -> HeaderKind {
        match self {
            HeaderValue::Raw(_) => HeaderKind::Raw,
            HeaderValue::String(_) => HeaderKind::String,
            HeaderValue::Bool(_) => HeaderKind::Bool,
            HeaderValue::Int8(_) => HeaderKind::Int8,
            HeaderValue::Int16(_) => HeaderKind::Int16,
            HeaderValue::Int32(_) => HeaderKind::Int32,
            HeaderValue::Int64(_) => HeaderKind::Int64,
            HeaderValue::Int128(_) => HeaderKind::Int128,
            HeaderValue::Uint8(_) => HeaderKind::Uint8,
            HeaderValue::Uint16(_) => HeaderKind::Uint16,
            HeaderValue::Uint32(_) => HeaderKind::Uint32,
            HeaderValue::Uint64(_) => HeaderKind::Uint64,
            HeaderValue::Uint128(_) => HeaderKind::Uint128,
            HeaderValue::Float(_) => HeaderKind::Float,
            HeaderValue::Double(_) => HeaderKind::Double,
        }
    }

    /// Encoded length of the value bytes (excluding key and tags).
    pub fn encoded_value_len(&self) -> usize {
        match self {
            HeaderValue::Raw(bytes) => bytes.len(),
            HeaderValue::String(s) => s.len(),
            other => other
                .kind()
                .fixed_width()
                .unwrap_or_default(),
        }
    }
}

impl fmt::Display for HeaderValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeaderValue::Raw(bytes) => write!(f, "0x{}", hex::encode(bytes)),
            HeaderValue::String(s) => write!(f, "{s}"),
            HeaderValue::Bool(v) => write!(f, "{v}"),
            HeaderValue::Int8(v) => write!(f, "{v}"),
            HeaderValue::Int16(v) => write!(f, "{v}"),
            HeaderValue::Int32(v) => write!(f, "{v}"),
            HeaderValue::Int64(v) => write!(f, "{v}"),
            HeaderValue::Int128(v) => write!(f, "{v}"),
            HeaderValue::Uint8(v) => write!(f, "{v}"),
            HeaderValue::Uint16(v) => write!(f, "{v}"),
            HeaderValue::Uint32(v) => write!(f, "{v}"),
            HeaderValue::Uint64(v) => write!(f, "{v}"),
            HeaderValue::Uint128(v) => write!(f, "{v}"),
            HeaderValue::Float(v) => write!(f, "{v}"),
            HeaderValue::Double(v) => write!(f, "{v}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_round_trip() {
        for kind in [
            HeaderKind::Raw,
            HeaderKind::String,
            HeaderKind::Bool,
            HeaderKind::Int64,
            HeaderKind::Uint128,
            HeaderKind::Double,
        ] {
            let tag: u8 = kind.into();
            assert_eq!(HeaderKind::try_from(tag).unwrap(), kind);
        }
    }

    #[test]
    fn test_unknown_kind_rejected() {
        assert!(HeaderKind::try_from(0).is_err());
        assert!(HeaderKind::try_from(16).is_err());
        assert!(HeaderKind::try_from(255).is_err());
    }

    #[test]
    fn test_fixed_width_matches_value_len() {
        assert_eq!(HeaderValue::Bool(true).encoded_value_len(), 1);
        assert_eq!(HeaderValue::Uint32(9).encoded_value_len(), 4);
        assert_eq!(HeaderValue::Uint64(9).encoded_value_len(), 8);
        assert_eq!(HeaderValue::Uint128(9).encoded_value_len(), 16);
        assert_eq!(HeaderValue::Double(0.5).encoded_value_len(), 8);
        assert_eq!(HeaderValue::Raw(vec![1, 2, 3]).encoded_value_len(), 3);
        assert_eq!(
            HeaderValue::String("four".to_string()).encoded_value_len(),
            4
        );
    }

    #[test]
    fn test_raw_display_is_hex() {
        let value = HeaderValue::Raw(vec![0xde, 0xad]);
        assert_eq!(value.to_string(), "0xdead");
    }
}
