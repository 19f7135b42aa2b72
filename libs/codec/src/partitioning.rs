//! Partitioning directive codec.
//!
//! Wire form is `[kind:1][length:1][value: length bytes]`. Balanced carries
//! no value bytes, a partition id is a fixed 8-byte little-endian u64, and
//! a messages key is copied verbatim.

use types::{Partitioning, PartitioningKind, MAX_MESSAGES_KEY_LENGTH};

use crate::error::{CodecError, CodecResult};
use crate::fixed::{self, Reader, U64_SIZE};

/// Append the wire form of a partitioning directive to the output buffer.
///
/// Fails with `KeyTooLong` when a messages key cannot be described by the
/// 1-byte length field.
pub fn encode_partitioning(partitioning: &Partitioning, out: &mut Vec<u8>) -> CodecResult<()> {
    match partitioning {
        Partitioning::Balanced => {
            fixed::put_u8(out, PartitioningKind::Balanced.into());
            fixed::put_u8(out, 0);
        }
        Partitioning::PartitionId(id) => {
            fixed::put_u8(out, PartitioningKind::PartitionId.into());
            fixed::put_u8(out, U64_SIZE as u8);
            fixed::put_u64(out, *id);
        }
        Partitioning::MessagesKey(key) => {
            if key.len() > MAX_MESSAGES_KEY_LENGTH {
                return Err(CodecError::KeyTooLong {
                    len: key.len(),
                    max: MAX_MESSAGES_KEY_LENGTH,
                });
            }
            fixed::put_u8(out, PartitioningKind::MessagesKey.into());
            fixed::put_u8(out, key.len() as u8);
            out.extend_from_slice(key);
        }
    }
    Ok(())
}

/// Decode a partitioning directive, returning it with the bytes consumed.
///
/// Fails with `InvalidPartitioningKind` on an unknown tag byte,
/// `LengthMismatch` when the length byte contradicts the kind, and
/// `TruncatedInput` when value bytes are missing.
pub fn decode_partitioning(buf: &[u8]) -> CodecResult<(Partitioning, usize)> {
    let mut reader = Reader::new(buf);

    let kind_tag = reader.get_u8("partitioning kind")?;
    let kind = PartitioningKind::try_from(kind_tag)
        .map_err(|_| CodecError::InvalidPartitioningKind { kind: kind_tag })?;
    let length = reader.get_u8("partitioning length")? as usize;

    // The 1-byte length field cannot describe more than 255 bytes; checked
    // anyway so corrupt input fails here instead of deeper in the decode.
    if length > MAX_MESSAGES_KEY_LENGTH {
        return Err(CodecError::KeyTooLong {
            len: length,
            max: MAX_MESSAGES_KEY_LENGTH,
        });
    }

    let partitioning = match kind {
        PartitioningKind::Balanced => {
            if length != 0 {
                return Err(CodecError::length_mismatch("balanced value", length, 0));
            }
            Partitioning::Balanced
        }
        PartitioningKind::PartitionId => {
            if length != U64_SIZE {
                return Err(CodecError::length_mismatch(
                    "partition id value",
                    length,
                    U64_SIZE,
                ));
            }
            Partitioning::PartitionId(reader.get_u64("partition id")?)
        }
        PartitioningKind::MessagesKey => {
            let key = reader.get_bytes(length, "messages key")?;
            Partitioning::MessagesKey(key.to_vec())
        }
    };

    Ok((partitioning, reader.position()))
}
