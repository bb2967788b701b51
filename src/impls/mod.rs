mod array;
mod composite;
pub(crate) mod macros;
mod seq;
mod text;
mod tuple;

use snafu::OptionExt;

use crate::descriptor::{Descriptor, NumericKind, Shape};
use crate::endian::ByteOrder;
use crate::error::{InvalidDataSnafu, Result};
use crate::traits::{Decode, Encode, Schema};

// bool: one byte, 0 or 1
impl Schema for bool {
    const SHAPE: Shape = Shape::Primitive;
    const FIXED_SIZE: Option<usize> = Some(1);

    fn descriptor() -> Descriptor {
        Descriptor::primitive(1, NumericKind::Bool)
    }
}

impl Encode for bool {
    #[inline]
    fn encoded_len(&self) -> usize {
        1
    }

    #[inline]
    fn encode(&self, out: &mut [u8], order: ByteOrder) -> Result<usize> {
        u8::from(*self).encode(out, order)
    }
}

impl Decode for bool {
    #[inline]
    fn decode(input: &[u8], order: ByteOrder) -> Result<(Self, usize)> {
        match u8::decode(input, order)? {
            (0, n) => Ok((false, n)),
            (1, n) => Ok((true, n)),
            _ => InvalidDataSnafu {
                message: "bool must be 0 or 1",
            }
            .fail(),
        }
    }
}

// char: its scalar value as a u32
impl Schema for char {
    const SHAPE: Shape = Shape::Primitive;
    const FIXED_SIZE: Option<usize> = Some(4);

    fn descriptor() -> Descriptor {
        Descriptor::primitive(4, NumericKind::Char)
    }
}

impl Encode for char {
    #[inline]
    fn encoded_len(&self) -> usize {
        4
    }

    #[inline]
    fn encode(&self, out: &mut [u8], order: ByteOrder) -> Result<usize> {
        u32::from(*self).encode(out, order)
    }
}

impl Decode for char {
    #[inline]
    fn decode(input: &[u8], order: ByteOrder) -> Result<(Self, usize)> {
        let (code, n) = u32::decode(input, order)?;
        let c = char::from_u32(code).context(InvalidDataSnafu {
            message: "invalid char codepoint",
        })?;
        Ok((c, n))
    }
}
