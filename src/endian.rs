//! Byte order conversion for multi-byte primitives.

use zerocopy::byteorder::{F32, F64, I16, I32, I64, NativeEndian, NetworkEndian, U16, U32, U64};

/// Byte order used for multi-byte primitives and length prefixes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ByteOrder {
    /// Big-endian, the canonical wire order.
    #[default]
    Network,
    /// Whatever the host uses. Only portable between identical hosts.
    Native,
}

impl ByteOrder {
    /// `true` when multi-byte values are converted to network order.
    #[inline]
    #[must_use]
    pub const fn is_network(self) -> bool {
        matches!(self, ByteOrder::Network)
    }
}

/// Fixed-width value with a reversible wire representation.
///
/// `from_wire(to_wire(x, o), o) == x` holds for every `x` and order `o`.
/// One-byte types ignore the order. Widths other than 1, 2, 4 and 8 have
/// no implementation, so `u128` is rejected when the program is compiled.
///
/// # Example
///
/// ```
/// use wirebuf::{ByteOrder, Endian};
///
/// assert_eq!(0x1234u16.to_wire(ByteOrder::Network), [0x12, 0x34]);
/// assert_eq!(u16::from_wire([0x12, 0x34], ByteOrder::Network), 0x1234);
/// ```
pub trait Endian: Copy {
    /// Encoded width in bytes.
    const WIDTH: usize;

    /// Raw wire bytes, always `[u8; WIDTH]`.
    type Bytes: AsRef<[u8]> + AsMut<[u8]> + Default;

    /// Convert to wire bytes.
    fn to_wire(self, order: ByteOrder) -> Self::Bytes;

    /// Convert back from wire bytes.
    fn from_wire(bytes: Self::Bytes, order: ByteOrder) -> Self;
}

impl Endian for u8 {
    const WIDTH: usize = 1;
    type Bytes = [u8; 1];

    #[inline]
    fn to_wire(self, _order: ByteOrder) -> [u8; 1] {
        [self]
    }

    #[inline]
    fn from_wire(bytes: [u8; 1], _order: ByteOrder) -> Self {
        bytes[0]
    }
}

impl Endian for i8 {
    const WIDTH: usize = 1;
    type Bytes = [u8; 1];

    #[inline]
    fn to_wire(self, _order: ByteOrder) -> [u8; 1] {
        [self as u8]
    }

    #[inline]
    fn from_wire(bytes: [u8; 1], _order: ByteOrder) -> Self {
        bytes[0] as i8
    }
}

macro_rules! impl_endian {
    ($($ty:ty => $wire:ident),+ $(,)?) => {
        $(
            impl Endian for $ty {
                const WIDTH: usize = core::mem::size_of::<$ty>();
                type Bytes = [u8; core::mem::size_of::<$ty>()];

                #[inline]
                fn to_wire(self, order: ByteOrder) -> Self::Bytes {
                    match order {
                        ByteOrder::Network => $wire::<NetworkEndian>::new(self).to_bytes(),
                        ByteOrder::Native => $wire::<NativeEndian>::new(self).to_bytes(),
                    }
                }

                #[inline]
                fn from_wire(bytes: Self::Bytes, order: ByteOrder) -> Self {
                    match order {
                        ByteOrder::Network => $wire::<NetworkEndian>::from_bytes(bytes).get(),
                        ByteOrder::Native => $wire::<NativeEndian>::from_bytes(bytes).get(),
                    }
                }
            }
        )+
    };
}

impl_endian!(
    u16 => U16,
    u32 => U32,
    u64 => U64,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    f32 => F32,
    f64 => F64,
);
