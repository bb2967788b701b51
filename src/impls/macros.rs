use snafu::OptionExt;

use crate::descriptor::{Descriptor, NumericKind, Shape};
use crate::endian::{ByteOrder, Endian};
use crate::error::{InvalidDataSnafu, Result};
use crate::traits::{Decode, Encode, Schema, ensure_input, ensure_output};

// Every fixed-width number goes through its `Endian` conversion.
macro_rules! impl_wire_for_number {
    ($($ty:ty => $kind:ident),+ $(,)?) => {
        $(
            impl Schema for $ty {
                const SHAPE: Shape = Shape::Primitive;
                const FIXED_SIZE: Option<usize> = Some(<$ty as Endian>::WIDTH);

                fn descriptor() -> Descriptor {
                    Descriptor::primitive(<$ty as Endian>::WIDTH, NumericKind::$kind)
                }
            }

            impl Encode for $ty {
                #[inline]
                fn encoded_len(&self) -> usize {
                    <$ty as Endian>::WIDTH
                }

                #[inline]
                fn encode(&self, out: &mut [u8], order: ByteOrder) -> Result<usize> {
                    const SIZE: usize = <$ty as Endian>::WIDTH;
                    ensure_output(out, SIZE)?;
                    out[..SIZE].copy_from_slice(self.to_wire(order).as_ref());
                    Ok(SIZE)
                }
            }

            impl Decode for $ty {
                #[inline]
                fn decode(input: &[u8], order: ByteOrder) -> Result<(Self, usize)> {
                    const SIZE: usize = <$ty as Endian>::WIDTH;
                    ensure_input(input, SIZE)?;
                    let mut bytes = <<$ty as Endian>::Bytes as Default>::default();
                    bytes.as_mut().copy_from_slice(&input[..SIZE]);
                    Ok((<$ty as Endian>::from_wire(bytes, order), SIZE))
                }
            }
        )+
    };
}

impl_wire_for_number!(
    u8 => Unsigned,
    u16 => Unsigned,
    u32 => Unsigned,
    u64 => Unsigned,
    i8 => Signed,
    i16 => Signed,
    i32 => Signed,
    i64 => Signed,
    f32 => Float,
    f64 => Float,
);

// usize/isize travel as 8 bytes regardless of host width. Decoding narrows
// with a check, so a 64-bit value never wraps on a 32-bit host.
macro_rules! impl_wire_for_pointer_sized {
    ($($ty:ty => $wide:ty, $kind:ident),+ $(,)?) => {
        $(
            impl Schema for $ty {
                const SHAPE: Shape = Shape::Primitive;
                const FIXED_SIZE: Option<usize> = <$wide as Schema>::FIXED_SIZE;

                fn descriptor() -> Descriptor {
                    Descriptor::primitive(<$wide as Endian>::WIDTH, NumericKind::$kind)
                }
            }

            impl Encode for $ty {
                #[inline]
                fn encoded_len(&self) -> usize {
                    <$wide as Endian>::WIDTH
                }

                #[inline]
                fn encode(&self, out: &mut [u8], order: ByteOrder) -> Result<usize> {
                    (*self as $wide).encode(out, order)
                }
            }

            impl Decode for $ty {
                #[inline]
                fn decode(input: &[u8], order: ByteOrder) -> Result<(Self, usize)> {
                    let (wide, n) = <$wide as Decode>::decode(input, order)?;
                    Ok((narrow(wide)?, n))
                }
            }
        )+
    };
}

impl_wire_for_pointer_sized!(
    usize => u64, Unsigned,
    isize => i64, Signed,
);

/// Narrow a decoded value to the host type, failing instead of wrapping.
#[inline]
pub(crate) fn narrow<N: TryFrom<W>, W>(wide: W) -> Result<N> {
    N::try_from(wide).ok().context(InvalidDataSnafu {
        message: "value does not fit the host integer width",
    })
}
