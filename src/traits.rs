//! Codec traits.
//!
//! Each operation takes the remaining region and returns how many bytes it
//! produced or consumed. Callers advance their own offsets; nothing holds a
//! shared cursor.

use alloc::vec::Vec;

use crate::descriptor::{Descriptor, Shape};
use crate::endian::ByteOrder;
use crate::error::{BufferTooSmallSnafu, LengthOverflowSnafu, Result, UnexpectedEofSnafu};

/// Width of every string and collection length prefix.
pub const PREFIX_LEN: usize = 4;

/// Most elements a sequence or map of zero-width values may hold.
///
/// Such elements occupy no bytes, so the count is capped to keep decoding
/// proportional to the input. Larger counts fail with `InvalidData` on both
/// encode and decode.
pub const MAX_ZERO_WIDTH_COUNT: usize = 1 << 16;

/// Static layout information for a type.
pub trait Schema {
    /// Category of this type.
    const SHAPE: Shape;

    /// Exact encoded size, if every value of the type encodes to the same
    /// number of bytes.
    const FIXED_SIZE: Option<usize> = None;

    /// Full layout tree.
    fn descriptor() -> Descriptor;
}

/// Serialize a value.
///
/// # Example
///
/// ```
/// use wirebuf::{ByteOrder, Encode};
///
/// let mut buf = [0u8; 6];
/// let written = "hi".encode(&mut buf, ByteOrder::Network).unwrap();
/// assert_eq!(written, 6);
/// assert_eq!(buf, [0, 0, 0, 2, b'h', b'i']);
/// ```
pub trait Encode: Schema {
    /// Exact number of bytes [`encode`](Self::encode) produces.
    fn encoded_len(&self) -> usize;

    /// Write into the front of `out`. Returns bytes written.
    ///
    /// Fails with `BufferTooSmall` if `out` runs out; bytes of members
    /// already written are left in place.
    fn encode(&self, out: &mut [u8], order: ByteOrder) -> Result<usize>;
}

/// Deserialize an owned value.
///
/// # Example
///
/// ```
/// use wirebuf::{ByteOrder, Decode};
///
/// let bytes = [0, 0, 0, 2, 7, 9];
/// let (value, consumed) = Vec::<u8>::decode(&bytes, ByteOrder::Network).unwrap();
/// assert_eq!(value, [7, 9]);
/// assert_eq!(consumed, 6);
/// ```
pub trait Decode: Schema + Sized {
    /// Read from the front of `input`. Returns the value and bytes consumed.
    fn decode(input: &[u8], order: ByteOrder) -> Result<(Self, usize)>;

    /// Encoded length of the value at the front of `input`, without
    /// building it.
    ///
    /// Reads each length prefix once and fails with `UnexpectedEof` if the
    /// value would run past `input`. The default covers fixed-size types and
    /// falls back to a full decode otherwise.
    fn scan(input: &[u8], order: ByteOrder) -> Result<usize> {
        match Self::FIXED_SIZE {
            Some(size) => {
                ensure_input(input, size)?;
                Ok(size)
            }
            None => Self::decode(input, order).map(|(_, consumed)| consumed),
        }
    }
}

/// Types that both encode and decode.
pub trait Wire: Encode + Decode {}

impl<T: Encode + Decode> Wire for T {}

/// Sum of member sizes, `None` if any member is variable.
///
/// Usable in `const` position, which is how tuples and composites compute
/// [`Schema::FIXED_SIZE`].
#[must_use]
pub const fn fixed_sum(parts: &[Option<usize>]) -> Option<usize> {
    let mut total = 0usize;
    let mut i = 0;
    while i < parts.len() {
        match parts[i] {
            Some(size) => total += size,
            None => return None,
        }
        i += 1;
    }
    Some(total)
}

/// Fail with `UnexpectedEof` unless `input` holds `needed` bytes.
#[inline]
pub(crate) fn ensure_input(input: &[u8], needed: usize) -> Result<()> {
    if input.len() < needed {
        return UnexpectedEofSnafu {
            needed,
            available: input.len(),
        }
        .fail();
    }
    Ok(())
}

/// Fail with `BufferTooSmall` unless `out` holds `needed` bytes.
#[inline]
pub(crate) fn ensure_output(out: &[u8], needed: usize) -> Result<()> {
    if out.len() < needed {
        return BufferTooSmallSnafu {
            needed,
            available: out.len(),
        }
        .fail();
    }
    Ok(())
}

/// Write a `u32` length prefix.
pub(crate) fn write_prefix(len: usize, out: &mut [u8], order: ByteOrder) -> Result<usize> {
    let Ok(len) = u32::try_from(len) else {
        return LengthOverflowSnafu { len }.fail();
    };
    len.encode(out, order)
}

/// Read a `u32` length prefix.
pub(crate) fn read_prefix(input: &[u8], order: ByteOrder) -> Result<(usize, usize)> {
    let (len, consumed) = u32::decode(input, order)?;
    Ok((len as usize, consumed))
}

/// Encode `value` into a freshly allocated, exactly sized vector.
///
/// # Example
///
/// ```
/// use wirebuf::{ByteOrder, encode_to_vec};
///
/// let bytes = encode_to_vec(&0x12345678u32, ByteOrder::Network).unwrap();
/// assert_eq!(bytes, [0x12, 0x34, 0x56, 0x78]);
/// ```
pub fn encode_to_vec<T: Encode + ?Sized>(value: &T, order: ByteOrder) -> Result<Vec<u8>> {
    let mut out = alloc::vec![0; value.encoded_len()];
    let written = value.encode(&mut out, order)?;
    out.truncate(written);
    Ok(out)
}

/// Decode a `T` from the front of `input`, returning it with the bytes consumed.
pub fn decode_from_slice<T: Decode>(input: &[u8], order: ByteOrder) -> Result<(T, usize)> {
    T::decode(input, order)
}
