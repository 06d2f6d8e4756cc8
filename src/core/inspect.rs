// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Type inspection: how the encoder learns the shape of a value.
//!
//! Every encodable type implements [`Inspect`], which classifies a value as a
//! scalar, a sequence or a record and exposes its children in a stable order.
//! The set of encodable types is therefore closed at compile time. A handful
//! of common standard types that have no encoding (`bool`, `Option`, maps,
//! ...) still implement the trait but classify themselves as
//! [`Shape::Unsupported`], so that a tree containing them fails at run time
//! with a precise location instead of being silently skipped.
//!
//! User records implement the trait with [`inspect_record!`](crate::inspect_record)
//! or by hand:
//!
//! ```
//! use flatbytes::{inspect_record, Encoder};
//!
//! struct Person {
//!     name: String,
//!     age: u8,
//! }
//!
//! inspect_record!(Person { name, age });
//!
//! let person = Person { name: "Alex".to_string(), age: 32 };
//! let stream = Encoder::new().encode(&person).unwrap();
//! assert_eq!(stream.len(), 4 + 4 + 1);
//! ```

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::rc::Rc;
use std::sync::Arc;

use super::value::Scalar;

/// Classifies a value and exposes its children.
pub trait Inspect {
    /// Shape of this value.
    fn shape(&self) -> Shape<'_>;
}

/// Shape of a value as seen by the encoder.
pub enum Shape<'a> {
    /// A fixed-width numeric leaf
    Scalar(Scalar),
    /// Ordered, length-prefixed run of elements
    Sequence(Elements<'a>),
    /// Ordered fields, concatenated without a prefix
    Record(Fields<'a>),
    /// A value with no encoding, carrying its type name
    Unsupported(&'static str),
}

impl Shape<'_> {
    /// Short description of the shape, for logs.
    pub fn describe(&self) -> &'static str {
        match self {
            Shape::Scalar(scalar) => scalar.kind().name(),
            Shape::Sequence(_) => "sequence",
            Shape::Record(_) => "record",
            Shape::Unsupported(name) => *name,
        }
    }
}

/// Elements of a sequence, with the count known up front.
pub struct Elements<'a> {
    len: usize,
    iter: Box<dyn Iterator<Item = &'a dyn Inspect> + 'a>,
}

impl<'a> Elements<'a> {
    /// Create from an element count and an iterator yielding exactly that many elements.
    pub fn new<I>(len: usize, iter: I) -> Self
    where
        I: Iterator<Item = &'a dyn Inspect> + 'a,
    {
        Self {
            len,
            iter: Box::new(iter),
        }
    }

    /// Create from a slice.
    pub fn from_slice<T: Inspect>(items: &'a [T]) -> Self {
        Self::new(items.len(), items.iter().map(|item| item as &dyn Inspect))
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if the sequence is empty.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl<'a> Iterator for Elements<'a> {
    type Item = &'a dyn Inspect;

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next()
    }
}

/// Fields of a record in declaration order.
pub struct Fields<'a> {
    type_name: &'a str,
    fields: Vec<FieldRef<'a>>,
}

impl<'a> Fields<'a> {
    /// Create from a record type name and its fields.
    pub fn new(type_name: &'a str, fields: Vec<FieldRef<'a>>) -> Self {
        Self { type_name, fields }
    }

    /// Record type name.
    pub fn type_name(&self) -> &'a str {
        self.type_name
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Check if the record has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate over the fields in declaration order.
    pub fn iter(&self) -> std::slice::Iter<'_, FieldRef<'a>> {
        self.fields.iter()
    }
}

impl<'a> IntoIterator for Fields<'a> {
    type Item = FieldRef<'a>;
    type IntoIter = std::vec::IntoIter<FieldRef<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.into_iter()
    }
}

/// A borrowed record field.
#[derive(Clone, Copy)]
pub struct FieldRef<'a> {
    /// Field name
    pub name: &'a str,
    /// Field value
    pub value: &'a dyn Inspect,
}

impl<'a> FieldRef<'a> {
    /// Create a field reference.
    pub fn new(name: &'a str, value: &'a dyn Inspect) -> Self {
        Self { name, value }
    }
}

/// Implement [`Inspect`] for a struct as a record of the listed fields.
///
/// Fields are encoded in the order they are listed, which should match the
/// declaration order of the struct.
///
/// ```
/// use flatbytes::inspect_record;
///
/// struct Point {
///     x: f32,
///     y: f32,
/// }
///
/// inspect_record!(Point { x, y });
/// assert_eq!(flatbytes::size(&Point { x: 1.0, y: 2.0 }).unwrap(), 8);
/// ```
#[macro_export]
macro_rules! inspect_record {
    ($ty:ident { $($field:ident),* $(,)? }) => {
        impl $crate::Inspect for $ty {
            fn shape(&self) -> $crate::Shape<'_> {
                $crate::Shape::Record($crate::Fields::new(
                    stringify!($ty),
                    vec![$($crate::FieldRef::new(stringify!($field), &self.$field)),*],
                ))
            }
        }
    };
}

macro_rules! inspect_scalar {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl Inspect for $ty {
                fn shape(&self) -> Shape<'_> {
                    Shape::Scalar(Scalar::$variant(*self))
                }
            }
        )*
    };
}

inspect_scalar! {
    i8 => Int8,
    u8 => UInt8,
    i16 => Int16,
    u16 => UInt16,
    i32 => Int32,
    u32 => UInt32,
    i64 => Int64,
    u64 => UInt64,
    f32 => Float32,
    f64 => Float64,
}

// No encoding: booleans have no codec, platform-width integers have no fixed
// width, and optional or keyed containers have no representation on the wire.
macro_rules! inspect_unsupported {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Inspect for $ty {
                fn shape(&self) -> Shape<'_> {
                    Shape::Unsupported(stringify!($ty))
                }
            }
        )*
    };
}

inspect_unsupported!(bool, char, usize, isize, ());

impl<T> Inspect for Option<T> {
    fn shape(&self) -> Shape<'_> {
        Shape::Unsupported("Option")
    }
}

impl<K, V, S> Inspect for HashMap<K, V, S> {
    fn shape(&self) -> Shape<'_> {
        Shape::Unsupported("HashMap")
    }
}

impl<K, V> Inspect for BTreeMap<K, V> {
    fn shape(&self) -> Shape<'_> {
        Shape::Unsupported("BTreeMap")
    }
}

impl<T, S> Inspect for HashSet<T, S> {
    fn shape(&self) -> Shape<'_> {
        Shape::Unsupported("HashSet")
    }
}

impl<T> Inspect for BTreeSet<T> {
    fn shape(&self) -> Shape<'_> {
        Shape::Unsupported("BTreeSet")
    }
}

impl Inspect for str {
    fn shape(&self) -> Shape<'_> {
        Shape::Sequence(Elements::from_slice(self.as_bytes()))
    }
}

impl Inspect for String {
    fn shape(&self) -> Shape<'_> {
        self.as_str().shape()
    }
}

impl<T: Inspect> Inspect for [T] {
    fn shape(&self) -> Shape<'_> {
        Shape::Sequence(Elements::from_slice(self))
    }
}

impl<T: Inspect, const N: usize> Inspect for [T; N] {
    fn shape(&self) -> Shape<'_> {
        Shape::Sequence(Elements::from_slice(self.as_slice()))
    }
}

impl<T: Inspect> Inspect for Vec<T> {
    fn shape(&self) -> Shape<'_> {
        Shape::Sequence(Elements::from_slice(self.as_slice()))
    }
}

impl<T: Inspect> Inspect for VecDeque<T> {
    fn shape(&self) -> Shape<'_> {
        Shape::Sequence(Elements::new(
            self.len(),
            self.iter().map(|item| item as &dyn Inspect),
        ))
    }
}

// Ownership wrappers encode exactly like the value they point to.
impl<T: Inspect + ?Sized> Inspect for &T {
    fn shape(&self) -> Shape<'_> {
        (**self).shape()
    }
}

impl<T: Inspect + ?Sized> Inspect for &mut T {
    fn shape(&self) -> Shape<'_> {
        (**self).shape()
    }
}

impl<T: Inspect + ?Sized> Inspect for Box<T> {
    fn shape(&self) -> Shape<'_> {
        (**self).shape()
    }
}

impl<T: Inspect + ?Sized> Inspect for Rc<T> {
    fn shape(&self) -> Shape<'_> {
        (**self).shape()
    }
}

impl<T: Inspect + ?Sized> Inspect for Arc<T> {
    fn shape(&self) -> Shape<'_> {
        (**self).shape()
    }
}

/// Tuples are records whose fields are named by position.
macro_rules! inspect_tuple {
    ($name:literal; $($idx:tt $ty:ident),+) => {
        impl<$($ty: Inspect),+> Inspect for ($($ty,)+) {
            fn shape(&self) -> Shape<'_> {
                Shape::Record(Fields::new(
                    $name,
                    vec![$(FieldRef::new(stringify!($idx), &self.$idx)),+],
                ))
            }
        }
    };
}

inspect_tuple!("tuple1"; 0 A);
inspect_tuple!("tuple2"; 0 A, 1 B);
inspect_tuple!("tuple3"; 0 A, 1 B, 2 C);
inspect_tuple!("tuple4"; 0 A, 1 B, 2 C, 3 D);
inspect_tuple!("tuple5"; 0 A, 1 B, 2 C, 3 D, 4 E);
inspect_tuple!("tuple6"; 0 A, 1 B, 2 C, 3 D, 4 E, 5 F);
