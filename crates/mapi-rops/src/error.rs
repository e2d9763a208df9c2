//! Marshaling error codes

use thiserror::Error;
use tracing::error;

/// ROP marshaling errors
///
/// This is a closed set: every fallible operation in the crate returns
/// exactly one of these codes, and composite operations propagate the first
/// failing sub-operation's code unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RopError {
    /// Destination region cannot hold the payload. Reserved for the
    /// protocol layer's terminal "buffer too small" condition; the codecs
    /// themselves grow the write arena instead of returning this.
    #[error("buffer too small")]
    BufferTooSmall,

    /// A read or write would exceed the buffer, or the required-size
    /// arithmetic overflowed.
    #[error("invalid buffer size: {requested} bytes requested, {available} available")]
    BufferSize { requested: usize, available: usize },

    /// No more memory left.
    #[error("out of memory")]
    NoMemory,

    /// Growing the write arena failed.
    #[error("allocation failure while expanding to {0} bytes")]
    Alloc(usize),

    /// Character-set conversion rejected its input.
    #[error("string transcoding failed")]
    Transcode,

    /// Flag combination the codec cannot resolve.
    #[error("invalid flag combination: {0:#04x}")]
    InvalidFlags(u8),

    /// A decoded or supplied value violates its documented range.
    #[error("invalid value: {0}")]
    InvalidValue(String),

    /// A status value outside the closed status enumeration.
    #[error("invalid status code: {0:#010x}")]
    InvalidStatus(u32),

    /// Catch-all for conditions not otherwise classified.
    #[error("generic failure")]
    Generic,
}

/// Result type for ROP marshaling operations
pub type Result<T> = std::result::Result<T, RopError>;

/// Log a marshaling failure and hand the code back unchanged, so call
/// sites can fail in one step: `return Err(raise(code, "site"))`.
pub(crate) fn raise(code: RopError, site: &'static str) -> RopError {
    error!(code = %code, site, "rop marshaling failed");
    code
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raise_returns_code_unchanged() {
        let code = RopError::BufferSize {
            requested: 16,
            available: 4,
        };
        assert_eq!(raise(code.clone(), "test"), code);
    }

    #[test]
    fn test_display_carries_cause() {
        let msg = RopError::BufferSize {
            requested: 16,
            available: 4,
        }
        .to_string();
        assert!(msg.contains("16"));
        assert!(msg.contains("4"));

        let msg = RopError::InvalidStatus(0x8004_0111).to_string();
        assert!(msg.contains("0x80040111"));
    }
}
