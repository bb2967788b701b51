use crate::descriptor::{Descriptor, Shape};
use crate::endian::ByteOrder;
use crate::error::Result;
use crate::traits::{Decode, Encode, Schema, ensure_input, fixed_sum};

// Members back to back in declared order. `()` is the empty tuple.
macro_rules! impl_wire_for_tuple {
    ($($name:ident: $idx:tt),*) => {
        impl<$($name: Schema),*> Schema for ($($name,)*) {
            const SHAPE: Shape = Shape::Tuple;
            const FIXED_SIZE: Option<usize> = fixed_sum(&[$($name::FIXED_SIZE),*]);

            fn descriptor() -> Descriptor {
                Descriptor::Tuple(alloc::vec![$($name::descriptor()),*])
            }
        }

        impl<$($name: Encode),*> Encode for ($($name,)*) {
            #[allow(unused_variables)]
            fn encoded_len(&self) -> usize {
                0 $(+ self.$idx.encoded_len())*
            }

            #[allow(unused_variables, unused_mut)]
            fn encode(&self, out: &mut [u8], order: ByteOrder) -> Result<usize> {
                let mut offset = 0;
                $(offset += self.$idx.encode(&mut out[offset..], order)?;)*
                Ok(offset)
            }
        }

        impl<$($name: Decode),*> Decode for ($($name,)*) {
            #[allow(unused_variables, unused_mut, non_snake_case)]
            fn decode(input: &[u8], order: ByteOrder) -> Result<(Self, usize)> {
                let mut offset = 0;
                $(
                    let ($name, n) = $name::decode(&input[offset..], order)?;
                    offset += n;
                )*
                Ok((($($name,)*), offset))
            }

            #[allow(unused_variables, unused_mut)]
            fn scan(input: &[u8], order: ByteOrder) -> Result<usize> {
                if let Some(size) = Self::FIXED_SIZE {
                    ensure_input(input, size)?;
                    return Ok(size);
                }
                let mut offset = 0;
                $(offset += $name::scan(&input[offset..], order)?;)*
                Ok(offset)
            }
        }
    };
}

impl_wire_for_tuple!();
impl_wire_for_tuple!(A: 0);
impl_wire_for_tuple!(A: 0, B: 1);
impl_wire_for_tuple!(A: 0, B: 1, C: 2);
impl_wire_for_tuple!(A: 0, B: 1, C: 2, D: 3);
impl_wire_for_tuple!(A: 0, B: 1, C: 2, D: 3, E: 4);
impl_wire_for_tuple!(A: 0, B: 1, C: 2, D: 3, E: 4, F: 5);
impl_wire_for_tuple!(A: 0, B: 1, C: 2, D: 3, E: 4, F: 5, G: 6);
impl_wire_for_tuple!(A: 0, B: 1, C: 2, D: 3, E: 4, F: 5, G: 6, H: 7);
impl_wire_for_tuple!(A: 0, B: 1, C: 2, D: 3, E: 4, F: 5, G: 6, H: 7, I: 8);
impl_wire_for_tuple!(A: 0, B: 1, C: 2, D: 3, E: 4, F: 5, G: 6, H: 7, I: 8, J: 9);
impl_wire_for_tuple!(A: 0, B: 1, C: 2, D: 3, E: 4, F: 5, G: 6, H: 7, I: 8, J: 9, K: 10);
impl_wire_for_tuple!(A: 0, B: 1, C: 2, D: 3, E: 4, F: 5, G: 6, H: 7, I: 8, J: 9, K: 10, L: 11);
