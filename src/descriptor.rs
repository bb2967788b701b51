//! Structural description of how a type is laid out on the wire.
//!
//! Every serializable type maps to exactly one [`Shape`]. The full
//! [`Descriptor`] tree is built from the type alone, never from a value, so
//! two peers agree on a layout iff their descriptors are equal. Nothing in
//! the tree is written to the wire.

use alloc::{boxed::Box, vec::Vec};
use core::fmt;

use crate::traits::Schema;

/// Category tag, without children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    /// Fixed-width number, `bool` or `char`.
    Primitive,
    /// Length-prefixed UTF-8.
    Text,
    /// `N` elements, no prefix.
    FixedArray,
    /// Count-prefixed elements.
    Sequence,
    /// Count-prefixed key/value pairs.
    AssociativeSequence,
    /// Heterogeneous members, no prefix.
    Tuple,
    /// Named fields, no prefix.
    Composite,
}

/// Interpretation of a primitive's bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericKind {
    /// Unsigned integer.
    Unsigned,
    /// Two's complement integer.
    Signed,
    /// IEEE 754 float.
    Float,
    /// `0` or `1`.
    Bool,
    /// Unicode scalar value.
    Char,
}

/// Recursive layout description.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Descriptor {
    /// `width` raw bytes.
    Primitive {
        /// Encoded width: 1, 2, 4 or 8.
        width: usize,
        /// How the bytes are read.
        kind: NumericKind,
    },
    /// `[u32 len][len bytes]`.
    Text,
    /// `len` elements back to back.
    FixedArray {
        /// Element layout.
        element: Box<Descriptor>,
        /// Element count.
        len: usize,
    },
    /// `[u32 count][element]*count`.
    Sequence(Box<Descriptor>),
    /// `[u32 count]([key][value])*count`.
    AssociativeSequence {
        /// Key layout.
        key: Box<Descriptor>,
        /// Value layout.
        value: Box<Descriptor>,
    },
    /// Members in declared order.
    Tuple(Vec<Descriptor>),
    /// Fields in declared order.
    Composite {
        /// Type name, informational only.
        name: &'static str,
        /// Ordered fields.
        fields: Vec<FieldDescriptor>,
    },
}

/// One field of a composite.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldDescriptor {
    /// Field name, informational only.
    pub name: &'static str,
    /// Field layout.
    pub descriptor: Descriptor,
}

impl FieldDescriptor {
    /// Describe field `name` of type `T`.
    #[must_use]
    pub fn of<T: Schema + ?Sized>(name: &'static str) -> Self {
        Self {
            name,
            descriptor: T::descriptor(),
        }
    }
}

impl Descriptor {
    /// Primitive of `width` bytes.
    #[must_use]
    pub const fn primitive(width: usize, kind: NumericKind) -> Self {
        Descriptor::Primitive { width, kind }
    }

    /// `[E; len]`.
    #[must_use]
    pub fn fixed_array(element: Descriptor, len: usize) -> Self {
        Descriptor::FixedArray {
            element: Box::new(element),
            len,
        }
    }

    /// Sequence of `element`.
    #[must_use]
    pub fn sequence(element: Descriptor) -> Self {
        Descriptor::Sequence(Box::new(element))
    }

    /// Map from `key` to `value`.
    #[must_use]
    pub fn associative(key: Descriptor, value: Descriptor) -> Self {
        Descriptor::AssociativeSequence {
            key: Box::new(key),
            value: Box::new(value),
        }
    }

    /// Tuple of `members`.
    #[must_use]
    pub fn tuple(members: impl IntoIterator<Item = Descriptor>) -> Self {
        Descriptor::Tuple(members.into_iter().collect())
    }

    /// Composite named `name` with `fields` in order.
    #[must_use]
    pub fn composite(name: &'static str, fields: impl IntoIterator<Item = FieldDescriptor>) -> Self {
        Descriptor::Composite {
            name,
            fields: fields.into_iter().collect(),
        }
    }

    /// Category tag.
    #[must_use]
    pub fn shape(&self) -> Shape {
        match self {
            Descriptor::Primitive { .. } => Shape::Primitive,
            Descriptor::Text => Shape::Text,
            Descriptor::FixedArray { .. } => Shape::FixedArray,
            Descriptor::Sequence(_) => Shape::Sequence,
            Descriptor::AssociativeSequence { .. } => Shape::AssociativeSequence,
            Descriptor::Tuple(_) => Shape::Tuple,
            Descriptor::Composite { .. } => Shape::Composite,
        }
    }

    /// Exact encoded size when no length prefix appears anywhere in the tree.
    #[must_use]
    pub fn fixed_size(&self) -> Option<usize> {
        match self {
            Descriptor::Primitive { width, .. } => Some(*width),
            Descriptor::Text | Descriptor::Sequence(_) | Descriptor::AssociativeSequence { .. } => {
                None
            }
            Descriptor::FixedArray { len: 0, .. } => Some(0),
            Descriptor::FixedArray { element, len } => element.fixed_size()?.checked_mul(*len),
            Descriptor::Tuple(members) => members
                .iter()
                .try_fold(0usize, |acc, m| acc.checked_add(m.fixed_size()?)),
            Descriptor::Composite { fields, .. } => fields
                .iter()
                .try_fold(0usize, |acc, f| acc.checked_add(f.descriptor.fixed_size()?)),
        }
    }

    /// Number of nested levels, counting this one.
    #[must_use]
    pub fn depth(&self) -> usize {
        1 + match self {
            Descriptor::Primitive { .. } | Descriptor::Text => 0,
            Descriptor::FixedArray { element, .. } | Descriptor::Sequence(element) => {
                element.depth()
            }
            Descriptor::AssociativeSequence { key, value } => key.depth().max(value.depth()),
            Descriptor::Tuple(members) => members.iter().map(Descriptor::depth).max().unwrap_or(0),
            Descriptor::Composite { fields, .. } => fields
                .iter()
                .map(|f| f.descriptor.depth())
                .max()
                .unwrap_or(0),
        }
    }
}

impl fmt::Display for Descriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Descriptor::Primitive { width, kind } => {
                let prefix = match kind {
                    NumericKind::Unsigned => "u",
                    NumericKind::Signed => "i",
                    NumericKind::Float => "f",
                    NumericKind::Bool => return f.write_str("bool"),
                    NumericKind::Char => return f.write_str("char"),
                };
                write!(f, "{prefix}{}", width * 8)
            }
            Descriptor::Text => f.write_str("text"),
            Descriptor::FixedArray { element, len } => write!(f, "[{element}; {len}]"),
            Descriptor::Sequence(element) => write!(f, "seq<{element}>"),
            Descriptor::AssociativeSequence { key, value } => write!(f, "map<{key}, {value}>"),
            Descriptor::Tuple(members) => {
                f.write_str("(")?;
                for (i, m) in members.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{m}")?;
                }
                if members.len() == 1 {
                    f.write_str(",")?;
                }
                f.write_str(")")
            }
            Descriptor::Composite { name, fields } => {
                write!(f, "{name} {{")?;
                for (i, field) in fields.iter().enumerate() {
                    let sep = if i > 0 { "," } else { "" };
                    write!(f, "{sep} {}: {}", field.name, field.descriptor)?;
                }
                if fields.is_empty() {
                    f.write_str("}")
                } else {
                    f.write_str(" }")
                }
            }
        }
    }
}

/// Composite type with an ordered, build-time field list.
///
/// Implemented by `#[derive(Wire)]` or [`composite!`](crate::composite).
/// The codec walks fields in exactly this order.
pub trait Composite: Schema {
    /// Type name.
    const NAME: &'static str;

    /// Fields in wire order. Skipped fields are absent.
    fn fields() -> Vec<FieldDescriptor>;
}
