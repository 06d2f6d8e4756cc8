// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Scalar kinds and the dynamic value tree.
//!
//! [`Scalar`] is the leaf every encodable tree bottoms out in. [`Value`] is a
//! runtime representation of a whole tree, for data whose shape is only known
//! at run time (for example a document read by the CLI). Statically typed
//! data does not need `Value` at all; it implements
//! [`Inspect`](crate::core::Inspect) directly.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::inspect::{Elements, FieldRef, Fields, Inspect, Shape};

/// The fixed set of encodable scalar kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarKind {
    /// 8-bit signed integer
    Int8,
    /// 8-bit unsigned integer
    UInt8,
    /// 16-bit signed integer
    Int16,
    /// 16-bit unsigned integer
    UInt16,
    /// 32-bit signed integer
    Int32,
    /// 32-bit unsigned integer
    UInt32,
    /// 64-bit signed integer
    Int64,
    /// 64-bit unsigned integer
    UInt64,
    /// 32-bit IEEE-754 float
    Float32,
    /// 64-bit IEEE-754 float
    Float64,
}

impl ScalarKind {
    /// Every supported kind, in declaration order.
    pub const ALL: [ScalarKind; 10] = [
        ScalarKind::Int8,
        ScalarKind::UInt8,
        ScalarKind::Int16,
        ScalarKind::UInt16,
        ScalarKind::Int32,
        ScalarKind::UInt32,
        ScalarKind::Int64,
        ScalarKind::UInt64,
        ScalarKind::Float32,
        ScalarKind::Float64,
    ];

    /// Encoded width in bytes.
    pub const fn width(self) -> usize {
        match self {
            ScalarKind::Int8 | ScalarKind::UInt8 => 1,
            ScalarKind::Int16 | ScalarKind::UInt16 => 2,
            ScalarKind::Int32 | ScalarKind::UInt32 | ScalarKind::Float32 => 4,
            ScalarKind::Int64 | ScalarKind::UInt64 | ScalarKind::Float64 => 8,
        }
    }

    /// Lowercase name, e.g. `uint16`.
    pub const fn name(self) -> &'static str {
        match self {
            ScalarKind::Int8 => "int8",
            ScalarKind::UInt8 => "uint8",
            ScalarKind::Int16 => "int16",
            ScalarKind::UInt16 => "uint16",
            ScalarKind::Int32 => "int32",
            ScalarKind::UInt32 => "uint32",
            ScalarKind::Int64 => "int64",
            ScalarKind::UInt64 => "uint64",
            ScalarKind::Float32 => "float32",
            ScalarKind::Float64 => "float64",
        }
    }

    /// Check if this kind is a floating-point type.
    pub const fn is_float(self) -> bool {
        matches!(self, ScalarKind::Float32 | ScalarKind::Float64)
    }
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A scalar value together with its kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Scalar {
    Int8(i8),
    UInt8(u8),
    Int16(i16),
    UInt16(u16),
    Int32(i32),
    UInt32(u32),
    Int64(i64),
    UInt64(u64),
    Float32(f32),
    Float64(f64),
}

impl Scalar {
    /// The kind of this scalar.
    pub const fn kind(&self) -> ScalarKind {
        match self {
            Scalar::Int8(_) => ScalarKind::Int8,
            Scalar::UInt8(_) => ScalarKind::UInt8,
            Scalar::Int16(_) => ScalarKind::Int16,
            Scalar::UInt16(_) => ScalarKind::UInt16,
            Scalar::Int32(_) => ScalarKind::Int32,
            Scalar::UInt32(_) => ScalarKind::UInt32,
            Scalar::Int64(_) => ScalarKind::Int64,
            Scalar::UInt64(_) => ScalarKind::UInt64,
            Scalar::Float32(_) => ScalarKind::Float32,
            Scalar::Float64(_) => ScalarKind::Float64,
        }
    }

    /// Encoded width in bytes.
    pub const fn width(&self) -> usize {
        self.kind().width()
    }
}

/// Dynamic value tree.
///
/// Serialized with serde's external tagging, so a JSON document reads like
/// `{"Record": {"name": "Person", "fields": [{"name": "age", "value": {"UInt8": 32}}]}}`.
///
/// `Bool` and `Null` exist so that documents from other systems can be
/// represented as-is. Neither has an encoding: encoding a tree containing
/// them fails with [`CodecError::UnsupportedType`](crate::CodecError).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    Int8(i8),
    UInt8(u8),
    Int16(i16),
    UInt16(u16),
    Int32(i32),
    UInt32(u32),
    Int64(i64),
    UInt64(u64),
    Float32(f32),
    Float64(f64),

    /// Text, encoded as a sequence of UTF-8 code units
    Text(String),

    /// Homogeneous sequence of values; an element whose shape differs from
    /// the first is rejected when encoded
    Sequence(Vec<Value>),

    /// Record with fields in declaration order
    Record(Record),

    /// Boolean (no encoding)
    Bool(bool),

    /// Absent value (no encoding)
    Null,
}

impl Value {
    /// Create a text value.
    pub fn text(s: impl Into<String>) -> Self {
        Value::Text(s.into())
    }

    /// Get the scalar for scalar variants.
    pub fn as_scalar(&self) -> Option<Scalar> {
        match *self {
            Value::Int8(v) => Some(Scalar::Int8(v)),
            Value::UInt8(v) => Some(Scalar::UInt8(v)),
            Value::Int16(v) => Some(Scalar::Int16(v)),
            Value::UInt16(v) => Some(Scalar::UInt16(v)),
            Value::Int32(v) => Some(Scalar::Int32(v)),
            Value::UInt32(v) => Some(Scalar::UInt32(v)),
            Value::Int64(v) => Some(Scalar::Int64(v)),
            Value::UInt64(v) => Some(Scalar::UInt64(v)),
            Value::Float32(v) => Some(Scalar::Float32(v)),
            Value::Float64(v) => Some(Scalar::Float64(v)),
            _ => None,
        }
    }

    /// Check if this value is a container (sequence, text or record).
    pub fn is_container(&self) -> bool {
        matches!(self, Value::Text(_) | Value::Sequence(_) | Value::Record(_))
    }

    /// Check if two values would be laid out the same way as sequence elements.
    ///
    /// Scalars must share a kind, records must have the same number of fields
    /// with pairwise matching shapes, and sequences compare their first
    /// elements. Values with no encoding match anything; they are rejected on
    /// their own when encoded.
    pub fn same_shape(&self, other: &Value) -> bool {
        if self.has_no_encoding() || other.has_no_encoding() {
            return true;
        }
        match (self, other) {
            (Value::Text(_), Value::Text(_)) => true,
            (Value::Sequence(a), Value::Sequence(b)) => match (a.first(), b.first()) {
                (Some(x), Some(y)) => x.same_shape(y),
                _ => true,
            },
            (Value::Record(a), Value::Record(b)) => {
                a.fields.len() == b.fields.len()
                    && a
                        .fields
                        .iter()
                        .zip(&b.fields)
                        .all(|(x, y)| x.value.same_shape(&y.value))
            }
            _ => match (self.as_scalar(), other.as_scalar()) {
                (Some(x), Some(y)) => x.kind() == y.kind(),
                _ => false,
            },
        }
    }

    fn has_no_encoding(&self) -> bool {
        matches!(self, Value::Bool(_) | Value::Null)
    }

    /// Short name of the variant, used in error reports.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Bool(_) => "bool",
            Value::Null => "null",
            Value::Text(_) => "text",
            Value::Sequence(_) => "sequence",
            Value::Record(_) => "record",
            other => match other.as_scalar() {
                Some(scalar) => scalar.kind().name(),
                None => "value",
            },
        }
    }
}

impl From<Scalar> for Value {
    fn from(scalar: Scalar) -> Self {
        match scalar {
            Scalar::Int8(v) => Value::Int8(v),
            Scalar::UInt8(v) => Value::UInt8(v),
            Scalar::Int16(v) => Value::Int16(v),
            Scalar::UInt16(v) => Value::UInt16(v),
            Scalar::Int32(v) => Value::Int32(v),
            Scalar::UInt32(v) => Value::UInt32(v),
            Scalar::Int64(v) => Value::Int64(v),
            Scalar::UInt64(v) => Value::UInt64(v),
            Scalar::Float32(v) => Value::Float32(v),
            Scalar::Float64(v) => Value::Float64(v),
        }
    }
}

macro_rules! value_from_primitive {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                fn from(v: $ty) -> Self {
                    Value::$variant(v)
                }
            }
        )*
    };
}

value_from_primitive! {
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
    String => Text,
    Record => Record,
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::Sequence(items.into_iter().map(Into::into).collect())
    }
}

impl Inspect for Value {
    fn shape(&self) -> Shape<'_> {
        if let Some(scalar) = self.as_scalar() {
            return Shape::Scalar(scalar);
        }
        match self {
            Value::Text(s) => Shape::Sequence(Elements::from_slice(s.as_bytes())),
            Value::Sequence(items) => {
                let first = items.first();
                Shape::Sequence(Elements::new(
                    items.len(),
                    items.iter().map(move |item| match first {
                        Some(first) if !item.same_shape(first) => {
                            &MISMATCHED_ELEMENT as &dyn Inspect
                        }
                        _ => item as &dyn Inspect,
                    }),
                ))
            }
            Value::Record(record) => record.shape(),
            other => Shape::Unsupported(other.type_name()),
        }
    }
}

/// Stands in for a sequence element whose shape differs from the first element.
struct MismatchedElement;

impl Inspect for MismatchedElement {
    fn shape(&self) -> Shape<'_> {
        Shape::Unsupported("heterogeneous sequence element")
    }
}

static MISMATCHED_ELEMENT: MismatchedElement = MismatchedElement;

/// A named record with ordered fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Record type name
    pub name: String,
    /// Fields in declaration order
    pub fields: Vec<Field>,
}

impl Record {
    /// Create an empty record.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    /// Append a field, keeping declaration order.
    #[must_use]
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.add_field(name, value);
        self
    }

    /// Append a field, keeping declaration order.
    pub fn add_field(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.fields.push(Field {
            name: name.into(),
            value: value.into(),
        });
    }

    /// Look up a field value by name.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.iter().find(|f| f.name == name).map(|f| &f.value)
    }
}

impl Inspect for Record {
    fn shape(&self) -> Shape<'_> {
        let fields = self
            .fields
            .iter()
            .map(|f| FieldRef::new(&f.name, &f.value))
            .collect();
        Shape::Record(Fields::new(&self.name, fields))
    }
}

/// A single named field of a [`Record`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    /// Field name
    pub name: String,
    /// Field value
    pub value: Value,
}
