use crate::model::field::FieldModel;
use std::{
    any::TypeId,
    cmp::Ordering,
    fmt::{self, Display},
    hash::{Hash, Hasher},
};

///
/// RecordModel
/// Statically declared shape of one record type.
///

#[derive(Debug)]
pub struct RecordModel {
    /// Fully-qualified type path (for ordering and diagnostics).
    pub path: &'static str,
    /// Stable external name used in exports.
    pub name: &'static str,
    /// Ordered field list; names are unique within the record.
    pub fields: &'static [FieldModel],
}

impl RecordModel {
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&'static FieldModel> {
        self.fields.iter().find(|field| field.name == name)
    }

    /// First field name declared more than once, if any.
    /// Lookups by name only ever reach the first such field.
    #[must_use]
    pub fn duplicate_field(&self) -> Option<&'static str> {
        self.fields
            .iter()
            .enumerate()
            .find(|(i, field)| self.fields[..*i].iter().any(|prev| prev.name == field.name))
            .map(|(_, field)| field.name)
    }
}

///
/// RecordKind
///
/// Binds a Rust type to its declared record model.
///

pub trait RecordKind: 'static {
    const MODEL: &'static RecordModel;
}

///
/// SourceType
///
/// Identity of a record type inside the registry.
/// Equality and hashing use the `TypeId` only; ordering goes by path first
/// so enumeration is deterministic.
///

#[derive(Clone, Copy, Debug)]
pub struct SourceType {
    id: TypeId,
    model: &'static RecordModel,
}

impl SourceType {
    #[must_use]
    pub fn of<T: RecordKind>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            model: T::MODEL,
        }
    }

    #[must_use]
    pub const fn model(&self) -> &'static RecordModel {
        self.model
    }

    #[must_use]
    pub const fn path(&self) -> &'static str {
        self.model.path
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.model.name
    }
}

impl Display for SourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.model.path)
    }
}

impl PartialEq for SourceType {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for SourceType {}

impl Hash for SourceType {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl PartialOrd for SourceType {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SourceType {
    fn cmp(&self, other: &Self) -> Ordering {
        self.model
            .path
            .cmp(other.model.path)
            .then_with(|| self.id.cmp(&other.id))
    }
}

///
/// TESTS
///
