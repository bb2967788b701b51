//! Count-prefixed sequences and maps.

use alloc::collections::{BTreeMap, BTreeSet, VecDeque};
use alloc::vec::Vec;

use crate::descriptor::{Descriptor, Shape};
use crate::endian::ByteOrder;
use crate::error::{InvalidDataSnafu, Result};
use crate::traits::{
    Decode, Encode, MAX_ZERO_WIDTH_COUNT, PREFIX_LEN, Schema, ensure_input, ensure_output,
    read_prefix, write_prefix,
};

// =============================================================================
// Shared walkers
// =============================================================================

fn seq_len<'a, T: Encode + 'a>(items: impl IntoIterator<Item = &'a T>, count: usize) -> usize {
    match T::FIXED_SIZE {
        Some(size) => PREFIX_LEN + size * count,
        None => PREFIX_LEN + items.into_iter().map(Encode::encoded_len).sum::<usize>(),
    }
}

fn encode_seq<'a, T: Encode + 'a>(
    items: impl IntoIterator<Item = &'a T>,
    count: usize,
    out: &mut [u8],
    order: ByteOrder,
) -> Result<usize> {
    check_zero_width(count, T::FIXED_SIZE)?;
    if let Some(size) = T::FIXED_SIZE {
        ensure_output(out, PREFIX_LEN.saturating_add(size.saturating_mul(count)))?;
    }
    let mut offset = write_prefix(count, out, order)?;
    for item in items {
        offset += item.encode(&mut out[offset..], order)?;
    }
    Ok(offset)
}

/// Zero-width elements take no input, so only the count bounds the work.
fn check_zero_width(count: usize, fixed: Option<usize>) -> Result<()> {
    if fixed == Some(0) && count > MAX_ZERO_WIDTH_COUNT {
        return InvalidDataSnafu {
            message: "too many zero-width elements",
        }
        .fail();
    }
    Ok(())
}

/// Read the count and reject counts of fixed-size elements that cannot fit.
fn open_seq(input: &[u8], order: ByteOrder, fixed: Option<usize>) -> Result<(usize, usize)> {
    let (count, offset) = read_prefix(input, order)?;
    check_zero_width(count, fixed)?;
    if let Some(size) = fixed {
        ensure_input(input, offset.saturating_add(size.saturating_mul(count)))?;
    }
    Ok((count, offset))
}

/// Upper bound on preallocation: never more elements than bytes remain.
fn initial_capacity(count: usize, remaining: usize, fixed: Option<usize>) -> usize {
    match fixed {
        Some(0) => count,
        Some(size) => count.min(remaining / size),
        None => count.min(remaining),
    }
}

fn decode_seq<T: Decode>(
    input: &[u8],
    order: ByteOrder,
    mut push: impl FnMut(T),
) -> Result<usize> {
    let (count, mut offset) = open_seq(input, order, T::FIXED_SIZE)?;
    for _ in 0..count {
        let (item, n) = T::decode(&input[offset..], order)?;
        push(item);
        offset += n;
    }
    Ok(offset)
}

fn scan_seq<T: Decode>(input: &[u8], order: ByteOrder) -> Result<usize> {
    let (count, mut offset) = open_seq(input, order, T::FIXED_SIZE)?;
    if let Some(size) = T::FIXED_SIZE {
        return Ok(offset + size * count);
    }
    for _ in 0..count {
        offset += T::scan(&input[offset..], order)?;
    }
    Ok(offset)
}

fn map_len<'a, K: Encode + 'a, V: Encode + 'a>(
    entries: impl IntoIterator<Item = (&'a K, &'a V)>,
    count: usize,
) -> usize {
    match (K::FIXED_SIZE, V::FIXED_SIZE) {
        (Some(k), Some(v)) => PREFIX_LEN + (k + v) * count,
        _ => {
            PREFIX_LEN
                + entries
                    .into_iter()
                    .map(|(k, v)| k.encoded_len() + v.encoded_len())
                    .sum::<usize>()
        }
    }
}

fn encode_map<'a, K: Encode + 'a, V: Encode + 'a>(
    entries: impl IntoIterator<Item = (&'a K, &'a V)>,
    count: usize,
    out: &mut [u8],
    order: ByteOrder,
) -> Result<usize> {
    check_zero_width(count, pair_size::<K, V>())?;
    let mut offset = write_prefix(count, out, order)?;
    for (key, value) in entries {
        offset += key.encode(&mut out[offset..], order)?;
        offset += value.encode(&mut out[offset..], order)?;
    }
    Ok(offset)
}

fn pair_size<K: Schema, V: Schema>() -> Option<usize> {
    match (K::FIXED_SIZE, V::FIXED_SIZE) {
        (Some(k), Some(v)) => Some(k + v),
        _ => None,
    }
}

fn decode_map<K: Decode, V: Decode>(
    input: &[u8],
    order: ByteOrder,
    mut insert: impl FnMut(K, V),
) -> Result<usize> {
    let (count, mut offset) = open_seq(input, order, pair_size::<K, V>())?;
    for _ in 0..count {
        let (key, n) = K::decode(&input[offset..], order)?;
        offset += n;
        let (value, n) = V::decode(&input[offset..], order)?;
        offset += n;
        insert(key, value);
    }
    Ok(offset)
}

fn scan_map<K: Decode, V: Decode>(input: &[u8], order: ByteOrder) -> Result<usize> {
    let fixed = pair_size::<K, V>();
    let (count, mut offset) = open_seq(input, order, fixed)?;
    if let Some(size) = fixed {
        return Ok(offset + size * count);
    }
    for _ in 0..count {
        offset += K::scan(&input[offset..], order)?;
        offset += V::scan(&input[offset..], order)?;
    }
    Ok(offset)
}

// =============================================================================
// Sequences
// =============================================================================

impl<T: Schema> Schema for [T] {
    const SHAPE: Shape = Shape::Sequence;

    fn descriptor() -> Descriptor {
        Descriptor::sequence(T::descriptor())
    }
}

impl<T: Encode> Encode for [T] {
    fn encoded_len(&self) -> usize {
        seq_len(self, self.len())
    }

    fn encode(&self, out: &mut [u8], order: ByteOrder) -> Result<usize> {
        encode_seq(self, self.len(), out, order)
    }
}

macro_rules! impl_wire_for_seq {
    ($($seq:ident<T $(: $bound:path)?> => |$v:ident, $item:ident| $push:expr;)+) => {
        $(
            impl<T: Schema> Schema for $seq<T> {
                const SHAPE: Shape = Shape::Sequence;

                fn descriptor() -> Descriptor {
                    Descriptor::sequence(T::descriptor())
                }
            }

            impl<T: Encode> Encode for $seq<T> {
                fn encoded_len(&self) -> usize {
                    seq_len(self, self.len())
                }

                fn encode(&self, out: &mut [u8], order: ByteOrder) -> Result<usize> {
                    encode_seq(self, self.len(), out, order)
                }
            }

            impl<T: Decode $(+ $bound)?> Decode for $seq<T> {
                fn decode(input: &[u8], order: ByteOrder) -> Result<(Self, usize)> {
                    let mut $v = $seq::new();
                    let consumed = decode_seq(input, order, |$item: T| { $push; })?;
                    Ok(($v, consumed))
                }

                fn scan(input: &[u8], order: ByteOrder) -> Result<usize> {
                    scan_seq::<T>(input, order)
                }
            }
        )+
    };
}

impl_wire_for_seq! {
    VecDeque<T> => |v, item| v.push_back(item);
    BTreeSet<T: Ord> => |v, item| v.insert(item);
}

// Vec is kept apart so it can preallocate.
impl<T: Schema> Schema for Vec<T> {
    const SHAPE: Shape = Shape::Sequence;

    fn descriptor() -> Descriptor {
        Descriptor::sequence(T::descriptor())
    }
}

impl<T: Encode> Encode for Vec<T> {
    fn encoded_len(&self) -> usize {
        self.as_slice().encoded_len()
    }

    fn encode(&self, out: &mut [u8], order: ByteOrder) -> Result<usize> {
        self.as_slice().encode(out, order)
    }
}

impl<T: Decode> Decode for Vec<T> {
    fn decode(input: &[u8], order: ByteOrder) -> Result<(Self, usize)> {
        let (count, mut offset) = open_seq(input, order, T::FIXED_SIZE)?;
        let mut vec = Vec::with_capacity(initial_capacity(
            count,
            input.len() - offset,
            T::FIXED_SIZE,
        ));
        for _ in 0..count {
            let (item, n) = T::decode(&input[offset..], order)?;
            vec.push(item);
            offset += n;
        }
        Ok((vec, offset))
    }

    fn scan(input: &[u8], order: ByteOrder) -> Result<usize> {
        scan_seq::<T>(input, order)
    }
}

// =============================================================================
// Maps
// =============================================================================

impl<K: Schema, V: Schema> Schema for BTreeMap<K, V> {
    const SHAPE: Shape = Shape::AssociativeSequence;

    fn descriptor() -> Descriptor {
        Descriptor::associative(K::descriptor(), V::descriptor())
    }
}

impl<K: Encode, V: Encode> Encode for BTreeMap<K, V> {
    fn encoded_len(&self) -> usize {
        map_len(self, self.len())
    }

    fn encode(&self, out: &mut [u8], order: ByteOrder) -> Result<usize> {
        encode_map(self, self.len(), out, order)
    }
}

impl<K: Decode + Ord, V: Decode> Decode for BTreeMap<K, V> {
    fn decode(input: &[u8], order: ByteOrder) -> Result<(Self, usize)> {
        let mut map = BTreeMap::new();
        let consumed = decode_map(input, order, |k, v| {
            map.insert(k, v);
        })?;
        Ok((map, consumed))
    }

    fn scan(input: &[u8], order: ByteOrder) -> Result<usize> {
        scan_map::<K, V>(input, order)
    }
}

// =============================================================================
// Hashed collections
// =============================================================================

macro_rules! impl_wire_for_hashed {
    ($set:ident, $map:ident) => {
        impl<T: Schema, S> Schema for $set<T, S> {
            const SHAPE: Shape = Shape::Sequence;

            fn descriptor() -> Descriptor {
                Descriptor::sequence(T::descriptor())
            }
        }

        impl<T: Encode, S> Encode for $set<T, S> {
            fn encoded_len(&self) -> usize {
                seq_len(self, self.len())
            }

            fn encode(&self, out: &mut [u8], order: ByteOrder) -> Result<usize> {
                encode_seq(self, self.len(), out, order)
            }
        }

        impl<T, S> Decode for $set<T, S>
        where
            T: Decode + Eq + core::hash::Hash,
            S: core::hash::BuildHasher + Default,
        {
            fn decode(input: &[u8], order: ByteOrder) -> Result<(Self, usize)> {
                let mut set = $set::with_hasher(S::default());
                let consumed = decode_seq(input, order, |item| {
                    set.insert(item);
                })?;
                Ok((set, consumed))
            }

            fn scan(input: &[u8], order: ByteOrder) -> Result<usize> {
                scan_seq::<T>(input, order)
            }
        }

        impl<K: Schema, V: Schema, S> Schema for $map<K, V, S> {
            const SHAPE: Shape = Shape::AssociativeSequence;

            fn descriptor() -> Descriptor {
                Descriptor::associative(K::descriptor(), V::descriptor())
            }
        }

        impl<K: Encode, V: Encode, S> Encode for $map<K, V, S> {
            fn encoded_len(&self) -> usize {
                map_len(self, self.len())
            }

            fn encode(&self, out: &mut [u8], order: ByteOrder) -> Result<usize> {
                encode_map(self, self.len(), out, order)
            }
        }

        impl<K, V, S> Decode for $map<K, V, S>
        where
            K: Decode + Eq + core::hash::Hash,
            V: Decode,
            S: core::hash::BuildHasher + Default,
        {
            fn decode(input: &[u8], order: ByteOrder) -> Result<(Self, usize)> {
                let mut map = $map::with_hasher(S::default());
                let consumed = decode_map(input, order, |k, v| {
                    map.insert(k, v);
                })?;
                Ok((map, consumed))
            }

            fn scan(input: &[u8], order: ByteOrder) -> Result<usize> {
                scan_map::<K, V>(input, order)
            }
        }
    };
}

#[cfg(feature = "std")]
mod std_hashed {
    use super::*;
    use std::collections::{HashMap, HashSet};

    impl_wire_for_hashed!(HashSet, HashMap);
}

#[cfg(feature = "hashbrown")]
mod hashbrown_hashed {
    use super::*;
    use hashbrown::{HashMap, HashSet};

    impl_wire_for_hashed!(HashSet, HashMap);
}
