//! Cursor-tracking buffer over a [`ByteStore`].

use alloc::vec::Vec;

use tracing::{debug, trace};

use crate::config::BufferConfig;
use crate::endian::ByteOrder;
use crate::error::{BufferTooSmallSnafu, GrowthDisabledSnafu, Result, WireError};
use crate::store::ByteStore;
use crate::traits::{Decode, Encode};

/// Read/write cursor over a fixed or growable byte region.
///
/// `write` and `read` chain. The first failure marks the buffer invalid;
/// later calls are no-ops until [`reset`](Self::reset), so a whole chain
/// can be checked once with [`good`](Self::good). A failed call never moves
/// the cursor.
///
/// # Example
///
/// ```
/// use wirebuf::Buffer;
///
/// let mut buf = Buffer::new();
/// buf.write(&7u8).write("hi").write(&vec![1u16, 2]);
/// assert!(buf.good());
///
/// let mut reader = Buffer::from_vec(buf.written().to_vec());
/// let (mut kind, mut name, mut items) = (0u8, String::new(), Vec::<u16>::new());
/// reader.read(&mut kind).read(&mut name).read(&mut items);
/// assert!(reader.good());
/// assert_eq!((kind, name.as_str(), items), (7, "hi", vec![1, 2]));
/// ```
#[derive(Debug)]
pub struct Buffer<'a> {
    store: ByteStore<'a>,
    cursor: usize,
    error: Option<WireError>,
    config: BufferConfig,
}

impl Buffer<'static> {
    /// Growable buffer with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(BufferConfig::default())
    }

    /// Growable buffer starting at `config.growth` bytes.
    #[must_use]
    pub fn with_config(config: BufferConfig) -> Self {
        Self::from_store(ByteStore::growable(config.growth), config)
    }

    /// Growable buffer holding `bytes`, typically to decode them.
    #[must_use]
    pub fn from_vec(bytes: Vec<u8>) -> Self {
        Self::from_vec_with_config(bytes, BufferConfig::default())
    }

    /// [`from_vec`](Self::from_vec) with an explicit configuration.
    #[must_use]
    pub fn from_vec_with_config(bytes: Vec<u8>, config: BufferConfig) -> Self {
        Self::from_store(ByteStore::Growable(bytes), config)
    }
}

impl Default for Buffer<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> Buffer<'a> {
    /// Fixed buffer over caller memory with the default configuration.
    pub fn wrap(region: &'a mut [u8]) -> Self {
        Self::wrap_with_config(region, BufferConfig::default())
    }

    /// Fixed buffer over caller memory. `config.growth` is ignored.
    pub fn wrap_with_config(region: &'a mut [u8], config: BufferConfig) -> Self {
        Self::from_store(ByteStore::fixed(region), config)
    }

    /// Buffer over an existing store.
    pub fn from_store(store: ByteStore<'a>, config: BufferConfig) -> Self {
        Self {
            store,
            cursor: 0,
            error: None,
            config,
        }
    }

    /// Encode `value` at the cursor.
    #[inline]
    pub fn write<T: Encode + ?Sized>(&mut self, value: &T) -> &mut Self {
        let _ = self.try_write(value);
        self
    }

    /// Decode into `value` at the cursor. `value` is untouched on failure.
    #[inline]
    pub fn read<T: Decode>(&mut self, value: &mut T) -> &mut Self {
        if let Ok(decoded) = self.try_read::<T>() {
            *value = decoded;
        }
        self
    }

    /// Encode `value` at the cursor, returning bytes written.
    ///
    /// With size checking on, the full encoded size is computed first and
    /// the store grows (or the call fails) before any byte is written.
    pub fn try_write<T: Encode + ?Sized>(&mut self, value: &T) -> Result<usize> {
        self.check_valid()?;

        if self.config.check_size {
            let needed = value.encoded_len();
            if let Err(error) = self.reserve(needed) {
                return Err(self.fail(error));
            }
        }

        let cursor = self.cursor;
        let order = self.config.byte_order;
        match value.encode(&mut self.store.data_mut()[cursor..], order) {
            Ok(written) => {
                self.cursor += written;
                Ok(written)
            }
            Err(error) => Err(self.fail(error)),
        }
    }

    /// Decode a `T` at the cursor.
    ///
    /// With size checking on, the encoded length is scanned first, reading
    /// each length prefix without moving the cursor, so a value that would
    /// run past the end is rejected before decoding starts.
    pub fn try_read<T: Decode>(&mut self) -> Result<T> {
        self.check_valid()?;

        let order = self.config.byte_order;
        let input = &self.store.data()[self.cursor..];

        let scanned = if self.config.check_size {
            match T::scan(input, order) {
                Ok(len) => Some(len),
                Err(error) => return Err(self.fail(error)),
            }
        } else {
            None
        };

        match T::decode(input, order) {
            Ok((value, consumed)) => {
                debug_assert!(scanned.is_none_or(|len| len == consumed));
                self.cursor += consumed;
                Ok(value)
            }
            Err(error) => Err(self.fail(error)),
        }
    }

    /// `false` once any operation has failed since the last reset.
    #[inline]
    pub fn good(&self) -> bool {
        self.error.is_none()
    }

    /// The failure that invalidated the buffer.
    #[inline]
    pub fn last_error(&self) -> Option<&WireError> {
        self.error.as_ref()
    }

    /// Mark valid and rewind the cursor. Storage is neither cleared nor shrunk.
    pub fn reset(&mut self) {
        trace!(cursor = self.cursor, "buffer reset");
        self.error = None;
        self.cursor = 0;
    }

    /// The whole store, including bytes past the cursor.
    #[inline]
    pub fn data(&self) -> &[u8] {
        self.store.data()
    }

    /// Bytes before the cursor.
    #[inline]
    pub fn written(&self) -> &[u8] {
        &self.store.data()[..self.cursor]
    }

    /// Cursor position: bytes written or read so far.
    #[inline]
    pub fn size(&self) -> usize {
        self.cursor
    }

    /// Store capacity.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.store.size()
    }

    /// Bytes between the cursor and the end of the store.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.store.size() - self.cursor
    }

    /// Whether the store can grow.
    #[inline]
    pub fn resizable(&self) -> bool {
        self.store.resizable()
    }

    /// Order used for multi-byte values.
    #[inline]
    pub fn byte_order(&self) -> ByteOrder {
        self.config.byte_order
    }

    /// Configuration fixed at construction.
    #[inline]
    pub fn config(&self) -> &BufferConfig {
        &self.config
    }

    /// Bytes before the cursor, consuming the buffer.
    #[must_use]
    pub fn into_vec(self) -> Vec<u8> {
        let mut bytes = self.store.into_vec();
        bytes.truncate(self.cursor);
        bytes
    }

    fn check_valid(&self) -> Result<()> {
        match &self.error {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }

    /// Make room for `needed` bytes past the cursor, growing in whole
    /// increments of `config.growth`.
    fn reserve(&mut self, needed: usize) -> Result<()> {
        let capacity = self.store.size();
        let required = self.cursor.saturating_add(needed);
        if required <= capacity {
            return Ok(());
        }

        if !self.store.resizable() {
            return BufferTooSmallSnafu {
                needed,
                available: capacity - self.cursor,
            }
            .fail();
        }

        let growth = self.config.growth;
        if growth == 0 {
            return GrowthDisabledSnafu {
                needed: required,
                capacity,
            }
            .fail();
        }

        let steps = (required - capacity).div_ceil(growth);
        let new_capacity = capacity.saturating_add(steps.saturating_mul(growth));
        trace!(capacity, new_capacity, steps, "growing buffer");
        self.store.resize(new_capacity);
        Ok(())
    }

    fn fail(&mut self, error: WireError) -> WireError {
        debug!(
            %error,
            cursor = self.cursor,
            capacity = self.store.size(),
            "buffer invalidated"
        );
        self.error = Some(error.clone());
        error
    }
}
