//! Octet Buffer Error Types
//!
//! Core error types for cursor buffer operations.

use thiserror::Error;

/// Result type for octet-buffer operations
pub type Result<T> = std::result::Result<T, OctetBufferError>;

/// Cursor buffer errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum OctetBufferError {
    /// A read requested more bytes than the cursor has left
    #[error("Error reading <{kind}>: buffer is missing {missing} bytes")]
    InsufficientBytes {
        /// Decode target ("u8", "u16", "u24", "u32", "bytes")
        kind: &'static str,
        /// Shortfall in bytes, including any cursor overshoot past the end
        missing: usize,
    },

    /// A provided argument could not be interpreted (e.g. malformed hex)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl From<hex::FromHexError> for OctetBufferError {
    fn from(err: hex::FromHexError) -> Self {
        OctetBufferError::InvalidArgument(format!("hex decode failed: {}", err))
    }
}

// Helper methods for creating errors
impl OctetBufferError {
    pub fn insufficient(kind: &'static str, missing: usize) -> Self {
        OctetBufferError::InsufficientBytes { kind, missing }
    }

    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        OctetBufferError::InvalidArgument(msg.into())
    }

    /// Missing-byte count carried by an `InsufficientBytes` failure
    pub fn missing_bytes(&self) -> Option<usize> {
        match self {
            OctetBufferError::InsufficientBytes { missing, .. } => Some(*missing),
            OctetBufferError::InvalidArgument(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insufficient_display() {
        let err = OctetBufferError::insufficient("u16", 2);
        assert_eq!(
            err.to_string(),
            "Error reading <u16>: buffer is missing 2 bytes"
        );
        assert_eq!(err.missing_bytes(), Some(2));
    }

    #[test]
    fn test_hex_error_conversion() {
        let err: OctetBufferError = hex::decode("0").unwrap_err().into();
        assert!(matches!(err, OctetBufferError::InvalidArgument(_)));
        assert_eq!(err.missing_bytes(), None);
    }
}
