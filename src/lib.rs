//! Octet Buffer Library
//!
//! Cursor-based byte buffer for building and parsing binary device
//! protocol frames.
//!
//! # Architecture
//!
//! This library provides:
//! - **`OctetBuffer`**: a growable byte sequence with a shared
//!   read/write cursor, big-endian integer codecs for 8/16/24/32-bit
//!   widths, and upper-case hex serialization
//! - **Pattern Matching**: stateless predicates for matching hex-encoded
//!   frames against bit-flag masks and wildcard digit patterns
//!
//! # Example
//!
//! ```
//! use octet_buffer::OctetBuffer;
//!
//! let mut buffer = OctetBuffer::from_hex("deadbeef")?;
//! assert_eq!(buffer.read_u16()?, 0xDEAD);
//! assert_eq!(buffer.read_u16()?, 0xBEEF);
//! assert_eq!(buffer.remaining(), 0);
//! # Ok::<(), octet_buffer::OctetBufferError>(())
//! ```

pub mod buffer;
pub mod error;
pub mod matching;

// Re-export core types
pub use buffer::OctetBuffer;
pub use error::{OctetBufferError, Result};
pub use matching::{hex_matches_bitflags, hex_matches_bitpattern};
