//! Recoverable errors: malformed serialized data and stream I/O.
//!
//! Kind-contract violations (setting a Float over an Int32, arithmetic
//! between mismatched kinds, out-of-range list indices) are programming
//! errors and panic at the point of use instead of appearing here.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CodecError {
    /// The buffer ended before a declared payload length was satisfied.
    #[error("serialized data truncated: needed {needed} more byte(s) at offset {offset}")]
    Truncated { offset: usize, needed: usize },

    /// A tag byte outside the closed kind set.
    #[error("unknown variant kind tag {0:#04x}")]
    UnknownKind(u8),

    /// Underlying stream failure during save/load, propagated unchanged.
    #[error("stream error: {0}")]
    Io(#[from] std::io::Error),
}

pub type CodecResult<T> = Result<T, CodecError>;
