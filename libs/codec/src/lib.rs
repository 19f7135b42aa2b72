//! # Streamwire Protocol Codec
//!
//! ## Purpose
//!
//! This crate contains the "Rules" layer of the streamwire system:
//! - Wire encoding/decoding for messages and partitioning directives
//! - Message construction with consistent length fields and checksums
//! - Shared buffer pool for allocation-free hot paths
//!
//! ## Architecture Role
//!
//! ```text
//! libs/types  →  [codec]          →  transport
//!     ↑             ↓                    ↓
//! Pure Data    Wire Rules            Framing,
//! Structures   Encoding/Decoding     Sockets
//! ```
//!
//! Every message sent to or received from the server crosses this crate
//! exactly once, so the encode/decode paths are written for the hot path:
//! fixed-width integer fields go straight between native `u64`/`u128`
//! values and the caller's buffer with no intermediate allocation, and
//! output buffers can be drawn from a shared [`BufferPool`].
//!
//! ## What This Crate Does NOT Contain
//! - Network transport, TCP framing, or retry logic
//! - Authentication or connection establishment
//! - Raw data structure definitions (belongs in `libs/types`)
//!
//! All encode/decode calls are pure synchronous functions of their inputs;
//! the codec holds no state between invocations and is safe to call from
//! any number of threads concurrently.

// Core modules
pub mod buffers;
pub mod builder;
pub mod error;
pub mod fixed;
pub mod header;
pub mod message;
pub mod partitioning;
pub mod user_headers;

// Re-export key types for convenience
pub use buffers::{BufferPool, PooledBuffer, DEFAULT_BUFFER_CAPACITY, DEFAULT_MAX_POOLED};
pub use builder::{message_checksum, verify_checksum, MessageBuilder};
pub use error::{CodecError, CodecResult};
pub use fixed::{
    decode_u128, decode_u64, encode_u128, encode_u64, Reader, U128_SIZE, U32_SIZE, U64_SIZE,
};
pub use header::{decode_header, encode_header};
pub use message::{decode_message, encode_message, encode_message_into, encoded_message_size};
pub use partitioning::{decode_partitioning, encode_partitioning};
pub use user_headers::{decode_user_headers, encode_user_headers, encoded_len};
