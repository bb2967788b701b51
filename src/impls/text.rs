use alloc::string::String;

use crate::descriptor::{Descriptor, Shape};
use crate::endian::ByteOrder;
use crate::error::{InvalidDataSnafu, Result};
use crate::traits::{
    Decode, Encode, PREFIX_LEN, Schema, ensure_input, ensure_output, read_prefix, write_prefix,
};

impl Schema for str {
    const SHAPE: Shape = Shape::Text;

    fn descriptor() -> Descriptor {
        Descriptor::Text
    }
}

impl Encode for str {
    #[inline]
    fn encoded_len(&self) -> usize {
        PREFIX_LEN + self.len()
    }

    fn encode(&self, out: &mut [u8], order: ByteOrder) -> Result<usize> {
        let bytes = self.as_bytes();
        ensure_output(out, PREFIX_LEN + bytes.len())?;
        let offset = write_prefix(bytes.len(), out, order)?;
        out[offset..offset + bytes.len()].copy_from_slice(bytes);
        Ok(offset + bytes.len())
    }
}

impl Schema for String {
    const SHAPE: Shape = Shape::Text;

    fn descriptor() -> Descriptor {
        Descriptor::Text
    }
}

impl Encode for String {
    #[inline]
    fn encoded_len(&self) -> usize {
        self.as_str().encoded_len()
    }

    #[inline]
    fn encode(&self, out: &mut [u8], order: ByteOrder) -> Result<usize> {
        self.as_str().encode(out, order)
    }
}

impl Decode for String {
    fn decode(input: &[u8], order: ByteOrder) -> Result<(Self, usize)> {
        let end = Self::scan(input, order)?;
        let text = core::str::from_utf8(&input[PREFIX_LEN..end]).map_err(|_| {
            InvalidDataSnafu {
                message: "invalid UTF-8",
            }
            .build()
        })?;
        Ok((text.into(), end))
    }

    fn scan(input: &[u8], order: ByteOrder) -> Result<usize> {
        let (len, offset) = read_prefix(input, order)?;
        let end = offset.saturating_add(len);
        ensure_input(input, end)?;
        Ok(end)
    }
}
