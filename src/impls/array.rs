use alloc::vec::Vec;

use crate::descriptor::{Descriptor, Shape};
use crate::endian::ByteOrder;
use crate::error::{InvalidDataSnafu, Result};
use crate::traits::{Decode, Encode, Schema, ensure_input};

// [T; N]: elements positionally, no prefix
impl<T: Schema, const N: usize> Schema for [T; N] {
    const SHAPE: Shape = Shape::FixedArray;
    const FIXED_SIZE: Option<usize> = match T::FIXED_SIZE {
        _ if N == 0 => Some(0),
        Some(size) => Some(size * N),
        None => None,
    };

    fn descriptor() -> Descriptor {
        Descriptor::fixed_array(T::descriptor(), N)
    }
}

impl<T: Encode, const N: usize> Encode for [T; N] {
    fn encoded_len(&self) -> usize {
        match Self::FIXED_SIZE {
            Some(size) => size,
            None => self.iter().map(Encode::encoded_len).sum(),
        }
    }

    fn encode(&self, out: &mut [u8], order: ByteOrder) -> Result<usize> {
        let mut offset = 0;
        for item in self {
            offset += item.encode(&mut out[offset..], order)?;
        }
        Ok(offset)
    }
}

impl<T: Decode, const N: usize> Decode for [T; N] {
    fn decode(input: &[u8], order: ByteOrder) -> Result<(Self, usize)> {
        if let Some(size) = Self::FIXED_SIZE {
            ensure_input(input, size)?;
        }
        let mut items = Vec::with_capacity(N);
        let mut offset = 0;
        for _ in 0..N {
            let (item, n) = T::decode(&input[offset..], order)?;
            items.push(item);
            offset += n;
        }
        let Ok(array) = items.try_into() else {
            return InvalidDataSnafu {
                message: "fixed array length mismatch",
            }
            .fail();
        };
        Ok((array, offset))
    }

    fn scan(input: &[u8], order: ByteOrder) -> Result<usize> {
        if let Some(size) = Self::FIXED_SIZE {
            ensure_input(input, size)?;
            return Ok(size);
        }
        let mut offset = 0;
        for _ in 0..N {
            offset += T::scan(&input[offset..], order)?;
        }
        Ok(offset)
    }
}
