//! Buffer configuration.

use crate::endian::ByteOrder;

/// Growth increment used when none is configured.
pub const DEFAULT_GROWTH: usize = 1024;

/// Settings fixed for the lifetime of a [`Buffer`](crate::Buffer).
///
/// # Example
///
/// ```
/// use wirebuf::{BufferConfig, ByteOrder};
///
/// let config = BufferConfig::new()
///     .with_growth(64)
///     .with_byte_order(ByteOrder::Native);
/// assert!(config.check_size);
/// assert_eq!(config.growth, 64);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BufferConfig {
    /// Compute sizes before each operation; required for growth.
    pub check_size: bool,
    /// Bytes added per growth step. Also the initial capacity of a growable
    /// buffer. Zero disables growth.
    pub growth: usize,
    /// Order for multi-byte primitives and length prefixes.
    pub byte_order: ByteOrder,
}

impl BufferConfig {
    /// Size checking on, 1024-byte growth, network order.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            check_size: true,
            growth: DEFAULT_GROWTH,
            byte_order: ByteOrder::Network,
        }
    }

    /// Set [`check_size`](Self::check_size).
    #[must_use]
    pub const fn with_check_size(mut self, check_size: bool) -> Self {
        self.check_size = check_size;
        self
    }

    /// Set [`growth`](Self::growth).
    #[must_use]
    pub const fn with_growth(mut self, growth: usize) -> Self {
        self.growth = growth;
        self
    }

    /// Set [`byte_order`](Self::byte_order).
    #[must_use]
    pub const fn with_byte_order(mut self, byte_order: ByteOrder) -> Self {
        self.byte_order = byte_order;
        self
    }
}

impl Default for BufferConfig {
    fn default() -> Self {
        Self::new()
    }
}
