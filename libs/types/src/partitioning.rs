//! Partitioning directive for publish requests.
//!
//! Tells the server how to route a batch of messages among a topic's
//! partitions: round-robin, a fixed partition, or a hash of a caller key.

use std::fmt;

use num_enum::{IntoPrimitive, TryFromPrimitive};
use serde::{Deserialize, Serialize};

/// Upper bound on a messages key, fixed by the 1-byte wire length field.
pub const MAX_MESSAGES_KEY_LENGTH: usize = 255;

/// Wire tag for a partitioning directive.
#[repr(u8)]
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, IntoPrimitive, TryFromPrimitive, Serialize, Deserialize,
)]
pub enum PartitioningKind {
    Balanced = 0,
    PartitionId = 1,
    MessagesKey = 2,
}

/// How the server should choose a partition for a publish request.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Partitioning {
    /// Server picks the partition (round-robin).
    Balanced,
    /// Explicit partition.
    PartitionId(u64),
    /// Server hashes the key to a partition; same key, same partition.
    MessagesKey(Vec<u8>),
}

impl Partitioning {
    pub fn balanced() -> Self {
        Partitioning::Balanced
    }

    pub fn partition_id(id: u64) -> Self {
        Partitioning::PartitionId(id)
    }

    pub fn messages_key(key: impl Into<Vec<u8>>) -> Self {
        Partitioning::MessagesKey(key.into())
    }

    pub fn messages_key_str(key: &str) -> Self {
        Partitioning::MessagesKey(key.as_bytes().to_vec())
    }

    /// The wire tag for this directive.
    pub fn kind(&self) -> PartitioningKind {
        match self {
            Partitioning::Balanced => PartitioningKind::Balanced,
            Partitioning::PartitionId(_) => PartitioningKind::PartitionId,
            Partitioning::MessagesKey(_) => PartitioningKind::MessagesKey,
        }
    }
}

impl Default for Partitioning {
    fn default() -> Self {
        Partitioning::Balanced
    }
}

impl fmt::Display for Partitioning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Partitioning::Balanced => write!(f, "balanced"),
            Partitioning::PartitionId(id) => write!(f, "partition_id({id})"),
            Partitioning::MessagesKey(key) => write!(f, "messages_key(0x{})", hex::encode(key)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_tags() {
        assert_eq!(u8::from(Partitioning::balanced().kind()), 0);
        assert_eq!(u8::from(Partitioning::partition_id(1).kind()), 1);
        assert_eq!(u8::from(Partitioning::messages_key_str("k").kind()), 2);
    }

    #[test]
    fn test_unknown_kind_rejected() {
        assert!(PartitioningKind::try_from(3).is_err());
        assert!(PartitioningKind::try_from(255).is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Partitioning::balanced().to_string(), "balanced");
        assert_eq!(Partitioning::partition_id(123).to_string(), "partition_id(123)");
        assert_eq!(
            Partitioning::messages_key(vec![0xab, 0xcd]).to_string(),
            "messages_key(0xabcd)"
        );
    }
}
