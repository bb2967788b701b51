//! Error types for wire encoding and decoding.

use snafu::Snafu;

/// Error during encoding, decoding or buffer management.
#[derive(Debug, Clone, PartialEq, Eq, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum WireError {
    /// Output region too small for the encoded value.
    #[snafu(display("buffer too small: needed {needed} bytes, only {available} available"))]
    BufferTooSmall {
        /// Bytes needed.
        needed: usize,
        /// Bytes available.
        available: usize,
    },

    /// Input ended before the value was complete.
    #[snafu(display("unexpected end of input: needed {needed} bytes, only {available} available"))]
    UnexpectedEof {
        /// Bytes needed.
        needed: usize,
        /// Bytes available.
        available: usize,
    },

    /// Bytes were present but do not describe a valid value.
    #[snafu(display("invalid data: {message}"))]
    InvalidData {
        /// Error description.
        message: &'static str,
    },

    /// A string or collection is too long for its 4-byte length prefix.
    #[snafu(display("length {len} does not fit in a 4-byte prefix"))]
    LengthOverflow {
        /// Offending length.
        len: usize,
    },

    /// The store is growable but the configured growth increment is zero.
    #[snafu(display("growth disabled: needed {needed} bytes, capacity is {capacity}"))]
    GrowthDisabled {
        /// Bytes needed past the start of the store.
        needed: usize,
        /// Current capacity.
        capacity: usize,
    },
}

/// Result type for wire operations.
pub type Result<T> = core::result::Result<T, WireError>;
