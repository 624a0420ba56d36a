//! Header construction errors.
//!
//! None of these are transient. Each one means the caller handed us something
//! the wire format cannot carry, or that sizing and encoding disagreed, which
//! is a bug in this crate.

use thiserror::Error;

use crate::tag::Tag;

/// Result alias for header operations.
pub type Result<T> = std::result::Result<T, HeaderError>;

/// Errors raised while sizing or encoding a header.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HeaderError {
    /// A write would run past the end of the allocated buffer.
    #[error("buffer capacity exceeded: need {needed} bytes, {remaining} remaining")]
    CapacityExceeded {
        /// Bytes the write required
        needed: usize,
        /// Bytes left in the buffer
        remaining: usize,
    },

    /// The bytes written differ from the size computed for them.
    #[error("size mismatch: estimated {estimated} bytes, wrote {written}")]
    SizeMismatch {
        /// Size predicted by the estimator
        estimated: usize,
        /// Size actually produced
        written: usize,
    },

    /// A length does not fit in the fixed-width length field.
    #[error("length {len} does not fit the length field")]
    LengthOverflow {
        /// Offending length
        len: usize,
    },

    /// Size arithmetic overflowed.
    #[error("header size overflows usize")]
    SizeOverflow,

    /// A value is larger than the configured limit.
    #[error("{tag:?} value of {len} bytes exceeds limit of {max}")]
    ValueTooLarge {
        /// Field the value belongs to
        tag: Tag,
        /// Value length in bytes
        len: usize,
        /// Configured limit
        max: usize,
    },
}
