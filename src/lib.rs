//! Schema-driven binary serialization into fixed or growable byte buffers.
//!
//! A type's wire layout follows from its [`Descriptor`]: primitives are raw
//! fixed-width bytes, text and collections carry a 4-byte length prefix,
//! and fixed arrays, tuples and composites are plain concatenations of
//! their members. No tags or field names are written, so reader and writer
//! must agree on the type.
//!
//! Multi-byte values use network order unless the buffer is configured
//! with [`ByteOrder::Native`].
//!
//! # Example
//!
//! ```
//! use wirebuf::Buffer;
//!
//! let mut region = [0u8; 3];
//! let mut buf = Buffer::wrap(&mut region);
//! buf.write(&0x12345678u32);
//! assert!(!buf.good());
//! assert_eq!(buf.size(), 0);
//!
//! let mut buf = Buffer::new();
//! buf.write(&0x12345678u32).write("hi");
//! assert_eq!(buf.written(), [0x12, 0x34, 0x56, 0x78, 0, 0, 0, 2, b'h', b'i']);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

extern crate alloc;

mod buffer;
mod config;
mod descriptor;
mod endian;
mod error;
mod impls;
mod store;
mod traits;

#[cfg(test)]
mod tests;

pub use buffer::Buffer;
pub use config::{BufferConfig, DEFAULT_GROWTH};
pub use descriptor::{Composite, Descriptor, FieldDescriptor, NumericKind, Shape};
pub use endian::{ByteOrder, Endian};
pub use error::{Result, WireError};
pub use store::ByteStore;
pub use traits::{
    Decode, Encode, MAX_ZERO_WIDTH_COUNT, PREFIX_LEN, Schema, Wire, decode_from_slice,
    encode_to_vec, fixed_sum,
};

#[cfg(feature = "derive")]
pub use wirebuf_macros::Wire;

#[doc(hidden)]
pub mod __private {
    pub use alloc::vec;
    pub use alloc::vec::Vec;
}
