use derive_more::Display;
use serde::Serialize;

///
/// Scalar
///
/// Built-in scalar types recognised by the classifier.
/// Membership is explicit; anything not listed here is not a built-in.
///

#[derive(Clone, Copy, Debug, Display, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[remain::sorted]
pub enum Scalar {
    Bool,
    Date,
    DateTime,
    Decimal,
    Duration,
    Float32,
    Float64,
    Int8,
    Int16,
    Int32,
    Int64,
    Int128,
    Text,
    Timestamp,
    Uint8,
    Uint16,
    Uint32,
    Uint64,
    Uint128,
    Ulid,
    Uuid,
}

/// Every built-in scalar, in declaration order.
pub const BUILTIN_SCALARS: &[Scalar] = &[
    Scalar::Bool,
    Scalar::Date,
    Scalar::DateTime,
    Scalar::Decimal,
    Scalar::Duration,
    Scalar::Float32,
    Scalar::Float64,
    Scalar::Int8,
    Scalar::Int16,
    Scalar::Int32,
    Scalar::Int64,
    Scalar::Int128,
    Scalar::Text,
    Scalar::Timestamp,
    Scalar::Uint8,
    Scalar::Uint16,
    Scalar::Uint32,
    Scalar::Uint64,
    Scalar::Uint128,
    Scalar::Ulid,
    Scalar::Uuid,
];

///
/// FieldKind
///
/// Declared type of a field, as supplied by the record author.
/// Nested kinds are borrowed statically so models can live in `const` items.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FieldKind {
    Scalar(Scalar),

    /// Enumeration with no payload semantics beyond its discriminant.
    Enum { path: &'static str },

    /// User-defined value type (copied by value, never persisted on its own).
    Value { path: &'static str },

    /// Nullable wrapper around another kind.
    Optional(&'static Self),

    // Collections
    List(&'static Self),
    Set(&'static Self),

    /// Reference to another user-defined record type.
    Record { path: &'static str },
}

impl FieldKind {
    /// Classify this kind. Single source of truth for both validators.
    #[must_use]
    pub const fn class(&self) -> TypeClass {
        match self {
            Self::Scalar(scalar) => TypeClass::BuiltinScalar(*scalar),
            Self::Enum { .. } | Self::Value { .. } => TypeClass::ScalarOrEnum,
            Self::Optional(inner) => match inner.class() {
                TypeClass::BuiltinScalar(_) | TypeClass::ScalarOrEnum => TypeClass::ScalarOrEnum,
                other => other,
            },
            Self::List(item) | Self::Set(item) => TypeClass::Collection(*item),
            Self::Record { .. } => TypeClass::Reference,
        }
    }
}

///
/// TypeClass
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TypeClass {
    BuiltinScalar(Scalar),
    ScalarOrEnum,
    Collection(&'static FieldKind),
    Reference,
}

impl TypeClass {
    /// Plain comparable value (built-in scalar, enum or value type).
    #[must_use]
    pub const fn is_value(self) -> bool {
        matches!(self, Self::BuiltinScalar(_) | Self::ScalarOrEnum)
    }

    #[must_use]
    pub const fn is_collection(self) -> bool {
        matches!(self, Self::Collection(_))
    }

    #[must_use]
    pub const fn is_reference(self) -> bool {
        matches!(self, Self::Reference)
    }
}

///
/// FieldModel
/// One declared field of a record type.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FieldModel {
    /// Field name, unique within the declaring record.
    pub name: &'static str,
    pub kind: FieldKind,
}

impl FieldModel {
    #[must_use]
    pub const fn new(name: &'static str, kind: FieldKind) -> Self {
        Self { name, kind }
    }

    #[must_use]
    pub const fn class(&self) -> TypeClass {
        self.kind.class()
    }
}

///
/// TESTS
///
