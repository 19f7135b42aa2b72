//! # Streamwire Types Library
//!
//! Pure data definitions for the streamwire message protocol.
//!
//! ## Design Philosophy
//!
//! - **Plain fixed-width integers**: every numeric wire field is a native
//!   `u32`/`u64`/`u128`, never a variable-length big-number type
//! - **Immutable value objects**: a [`Message`] is constructed once per
//!   publish or decode and owned exclusively by its caller
//! - **No wire knowledge**: byte layout, endianness, and validation live in
//!   the `codec` crate; this crate only declares field widths
//!
//! ## What This Crate Contains
//! - [`Message`], [`MessageHeader`]: the unit carried on the wire
//! - [`HeaderValue`], [`HeaderKind`]: typed per-message user headers
//! - [`Partitioning`], [`PartitioningKind`]: routing directive for publishes
//!
//! ## What This Crate Does NOT Contain
//! - Encoding/decoding rules (belongs in `codec`)
//! - Network transport or framing logic

pub mod message;
pub mod partitioning;

pub use message::{HeaderKind, HeaderValue, Message, MessageHeader, UserHeaders};
pub use partitioning::{Partitioning, PartitioningKind, MAX_MESSAGES_KEY_LENGTH};
