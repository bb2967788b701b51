//! Backing storage for a [`Buffer`](crate::Buffer).

use alloc::vec::Vec;

/// Contiguous byte region behind a buffer.
///
/// `Fixed` borrows caller memory and never grows. `Growable` owns a
/// `Vec<u8>` and can be resized; any slice obtained from [`data`](Self::data)
/// is invalidated by a resize, which the borrow checker enforces.
#[derive(Debug)]
pub enum ByteStore<'a> {
    /// Caller-owned region of fixed length.
    Fixed(&'a mut [u8]),
    /// Owned region that grows on demand.
    Growable(Vec<u8>),
}

impl<'a> ByteStore<'a> {
    /// Wrap caller memory.
    #[inline]
    pub fn fixed(region: &'a mut [u8]) -> Self {
        ByteStore::Fixed(region)
    }

    /// Owned, zero-filled store of `capacity` bytes.
    #[must_use]
    pub fn growable(capacity: usize) -> Self {
        ByteStore::Growable(alloc::vec![0; capacity])
    }

    /// Current capacity in bytes.
    #[inline]
    pub fn size(&self) -> usize {
        match self {
            ByteStore::Fixed(region) => region.len(),
            ByteStore::Growable(vec) => vec.len(),
        }
    }

    /// Whole region.
    #[inline]
    pub fn data(&self) -> &[u8] {
        match self {
            ByteStore::Fixed(region) => region,
            ByteStore::Growable(vec) => vec,
        }
    }

    /// Whole region, mutably.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [u8] {
        match self {
            ByteStore::Fixed(region) => region,
            ByteStore::Growable(vec) => vec,
        }
    }

    /// Resize to exactly `new_size` bytes, preserving the first
    /// `min(old, new_size)` bytes and zero-filling the rest.
    ///
    /// No-op for a fixed store.
    pub fn resize(&mut self, new_size: usize) {
        match self {
            ByteStore::Fixed(_) => {}
            ByteStore::Growable(vec) => vec.resize(new_size, 0),
        }
    }

    /// Whether [`resize`](Self::resize) has any effect.
    #[inline]
    pub fn resizable(&self) -> bool {
        matches!(self, ByteStore::Growable(_))
    }

    /// Copy out (fixed) or hand over (growable) the full region.
    #[must_use]
    pub fn into_vec(self) -> Vec<u8> {
        match self {
            ByteStore::Fixed(region) => region.to_vec(),
            ByteStore::Growable(vec) => vec,
        }
    }
}
